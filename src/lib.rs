#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod modifiable_url;
mod parser;
mod percent_encode;

// Public API
pub use error::ParseError;
pub use modifiable_url::ModifiableUrl;

pub type Result<T> = core::result::Result<T, ParseError>;
