//! The universal no-value marker and the "empty reference" notion
//!
//! [`Nil`] plays the part of an untyped null: it carries no type information
//! worth comparing, so the equality helpers refuse to compare against it.
//! [`IsNil`] covers typed emptiness: `None`, null raw pointers, dead `Weak`
//! references, and anything that points at one of those.

use std::any;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::render;

/// Universal no-value marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

/// True when `T` is [`Nil`] or a reference to it
pub fn is_nil_marker<T: ?Sized>() -> bool {
    render::strip_refs(any::type_name::<T>()) == any::type_name::<Nil>()
}

/// Values that can be empty references
pub trait IsNil {
    fn is_nil(&self) -> bool;
}

impl IsNil for Nil {
    fn is_nil(&self) -> bool {
        true
    }
}

impl<T> IsNil for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> IsNil for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> IsNil for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> IsNil for std::ptr::NonNull<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> IsNil for rc::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T> IsNil for sync::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: IsNil + ?Sized> IsNil for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: IsNil + ?Sized> IsNil for &mut T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: IsNil + ?Sized> IsNil for Box<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: IsNil + ?Sized> IsNil for Rc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: IsNil + ?Sized> IsNil for Arc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

// Nil compares equal only to itself. The equality helpers never get this
// far; these impls exist so `expect_eq(value, Nil)` type-checks.
impl<T: ?Sized> PartialEq<T> for Nil {
    fn eq(&self, _other: &T) -> bool {
        is_nil_marker::<T>()
    }
}

macro_rules! nil_comparable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<Nil> for $ty {
                fn eq(&self, _other: &Nil) -> bool {
                    false
                }
            }
        )*
    };
}

nil_comparable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    str, String,
);

impl PartialEq<Nil> for &str {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<T> PartialEq<Nil> for Vec<T> {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<T> PartialEq<Nil> for [T] {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<T> PartialEq<Nil> for &[T] {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<T> PartialEq<Nil> for Option<T> {
    fn eq(&self, _other: &Nil) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> PartialEq<Nil> for Rc<T> {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<T: ?Sized> PartialEq<Nil> for Arc<T> {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<T: ?Sized> PartialEq<Nil> for *const T {
    fn eq(&self, _other: &Nil) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> PartialEq<Nil> for *mut T {
    fn eq(&self, _other: &Nil) -> bool {
        self.is_null()
    }
}
