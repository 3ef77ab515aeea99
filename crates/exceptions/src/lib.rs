// crates/exceptions/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use ensure::Ensure;
pub use error::{ArgumentError, ArgumentResult};

pub mod ensure;
pub mod error;
