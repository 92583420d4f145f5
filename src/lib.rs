#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod input;
mod options;
mod record;
mod scheme;
mod syntax;
mod types;
mod unicode;
mod url_reference;

// Public API
pub use error::{Error, ParseError};
pub use input::Input;
pub use options::{DriveDetection, Options};
pub use record::Port;
pub use url_reference::{PortValue, UrlReference};

pub type Result<T> = core::result::Result<T, Error>;
