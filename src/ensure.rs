// src/ensure.rs
//! Range-aware precondition checks built on [`Ensure`].

use std::fmt;

use platform_exceptions::{ArgumentError, ArgumentResult, Ensure};

use crate::range::Range;

pub const MAXIMUM_BELOW_MINIMUM: &str = "Maximum argument must be greater or equal to minimum.";

/// Fails with `InvalidArgument` naming `parameter` when `maximum < minimum`.
///
/// Incomparable bounds (a `NaN` on either side) fail as well.
pub fn maximum_argument_is_greater_or_equal_to_minimum<T>(
    root: Ensure,
    minimum: &T,
    maximum: &T,
    parameter: &str,
) -> ArgumentResult<()>
where
    T: PartialOrd,
{
    root.argument_meets_criteria(maximum, |max| max >= minimum, parameter, MAXIMUM_BELOW_MINIMUM)
}

/// Fails with `OutOfRange` naming `parameter` when `argument` lies outside `range`.
pub fn argument_in_range<T>(root: Ensure, argument: &T, range: &Range<T>, parameter: &str) -> ArgumentResult<()>
where
    T: PartialOrd + fmt::Display,
{
    if !root.is_enabled() || range.contains(argument) {
        return Ok(());
    }
    let message = format!("Argument value [{argument}] is out of range {range}.");
    tracing::debug!(parameter, %message, "argument out of range");
    Err(ArgumentError::out_of_range(parameter, argument.to_string(), message))
}
