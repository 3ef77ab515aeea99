// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod ensure;
pub mod range;
pub mod ranges;

pub use platform_exceptions::{ArgumentError, ArgumentResult, Ensure};
pub use range::Range;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
