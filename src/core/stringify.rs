//! Conversion of logged values into text
//!
//! [`Stringify`] is the dispatch table keyed by type: each implementing type
//! defines how it is rendered into a message. Most types render through
//! their `Display` output, with a few deliberate special cases:
//!
//! - `u8` renders as its decimal value, so raw bytes stay readable
//! - `bool` renders as `true` / `false`
//! - C strings are copied up to their terminator
//!
//! User types take part by implementing the trait:
//!
//! ```
//! use chainlog::Stringify;
//!
//! struct Disk {
//!     id: u32,
//!     label: String,
//! }
//!
//! impl Stringify for Disk {
//!     fn stringify(&self) -> String {
//!         format!("[{},{}]", self.id, self.label)
//!     }
//! }
//!
//! let disk = Disk { id: 5, label: "foo".into() };
//! assert_eq!(chainlog::stringify(&disk), "[5,foo]");
//! ```
//!
//! Any other `Display` type can be logged through [`Shown`].

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

pub trait Stringify {
    fn stringify(&self) -> String;
}

/// Render any value through its type's conversion.
#[inline]
pub fn stringify<T: Stringify + ?Sized>(value: &T) -> String {
    value.stringify()
}

/// Generic fallback: renders the wrapped value with its `Display` output.
#[derive(Debug, Clone, Copy)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Stringify for Shown<T> {
    fn stringify(&self) -> String {
        self.0.to_string()
    }
}

macro_rules! stringify_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Stringify for $ty {
                #[inline]
                fn stringify(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

// u8 is included here: its Display output is already the decimal value.
stringify_via_display!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, char,
);

impl Stringify for bool {
    fn stringify(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl Stringify for str {
    fn stringify(&self) -> String {
        self.to_owned()
    }
}

impl Stringify for String {
    fn stringify(&self) -> String {
        self.clone()
    }
}

impl Stringify for Cow<'_, str> {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Stringify for CStr {
    fn stringify(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl Stringify for CString {
    fn stringify(&self) -> String {
        self.as_c_str().stringify()
    }
}

impl Stringify for crate::core::Severity {
    fn stringify(&self) -> String {
        self.to_str().to_string()
    }
}

impl<T: Stringify> Stringify for Option<T> {
    fn stringify(&self) -> String {
        match self {
            Some(value) => value.stringify(),
            None => "none".to_string(),
        }
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    #[inline]
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for &mut T {
    #[inline]
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Rc<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Arc<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}
