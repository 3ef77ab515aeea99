// crates/exceptions/src/ensure.rs
use crate::error::{ArgumentError, ArgumentResult};

/// Selects when a precondition check runs.
///
/// `Always` checks are part of every build. `OnDebug` checks follow
/// `debug_assertions` and vanish from optimized builds, so they must never
/// guard an invariant that later code relies on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ensure {
    #[default]
    Always,
    OnDebug,
}

impl Ensure {
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::OnDebug => cfg!(debug_assertions),
        }
    }

    /// Fails with [`ArgumentError::InvalidArgument`] when `predicate` rejects `argument`.
    pub fn argument_meets_criteria<T, F>(
        self,
        argument: &T,
        predicate: F,
        parameter: &str,
        message: impl Into<String>,
    ) -> ArgumentResult<()>
    where
        T: ?Sized,
        F: FnOnce(&T) -> bool,
    {
        if !self.is_enabled() || predicate(argument) {
            return Ok(());
        }
        let message = message.into();
        tracing::debug!(parameter, %message, "argument check failed");
        Err(ArgumentError::invalid(parameter, message))
    }
}
