//! Raw byte views of plain values
//!
//! Lets callers insert and query values directly instead of building a byte
//! buffer first. Numbers use their native-endian in-memory representation.

/// A value that can be viewed as a filter element
pub trait ElementBytes {
    /// Call `f` with the raw bytes of this value
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R;
}

impl ElementBytes for [u8] {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self)
    }
}

impl<const N: usize> ElementBytes for [u8; N] {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_slice())
    }
}

impl ElementBytes for Vec<u8> {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_slice())
    }
}

impl ElementBytes for str {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_bytes())
    }
}

impl ElementBytes for String {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_bytes())
    }
}

impl<T: ElementBytes + ?Sized> ElementBytes for &T {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        (**self).with_element_bytes(f)
    }
}

macro_rules! impl_element_bytes_ne {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementBytes for $ty {
                fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
                    f(&self.to_ne_bytes())
                }
            }
        )*
    };
}

impl_element_bytes_ne!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl ElementBytes for bool {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&[u8::from(*self)])
    }
}

impl ElementBytes for char {
    fn with_element_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&u32::from(*self).to_ne_bytes())
    }
}
