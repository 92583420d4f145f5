//! Allocation types from `std`, or from `alloc` without the `std` feature

#[cfg(not(feature = "std"))]
use alloc as sys;
#[cfg(feature = "std")]
use std as sys;

pub use sys::borrow::Cow;
pub use sys::format;
pub use sys::string::{String, ToString};
pub use sys::vec::Vec;

#[cfg(test)]
pub use sys::vec;
