// src/range.rs
use std::{
    any::Any,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use num_traits::{Bounded, CheckedSub};
use platform_exceptions::{ArgumentError, ArgumentResult, Ensure};

use crate::ensure;

/// Closed interval `[minimum, maximum]` with `minimum <= maximum`.
///
/// Bounds are private; every constructor that accepts two values goes through
/// [`Range::new`], so a reversed pair can never be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    minimum: T,
    maximum: T,
}

impl<T> Range<T> {
    /// Caller guarantees `minimum <= maximum`.
    pub(crate) const fn new_unchecked(minimum: T, maximum: T) -> Self {
        Self { minimum, maximum }
    }

    #[inline]
    pub const fn minimum(&self) -> &T {
        &self.minimum
    }

    #[inline]
    pub const fn maximum(&self) -> &T {
        &self.maximum
    }

    #[inline]
    pub const fn as_tuple(&self) -> (&T, &T) {
        (&self.minimum, &self.maximum)
    }

    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.minimum, self.maximum)
    }
}

impl<T: Clone> Range<T> {
    /// Range holding exactly one value.
    pub fn single(value: T) -> Self {
        Self::new_unchecked(value.clone(), value)
    }
}

impl<T: PartialOrd> Range<T> {
    /// Builds `[minimum, maximum]`.
    ///
    /// # Errors
    /// `ArgumentError::InvalidArgument` for parameter `"maximum"` when
    /// `maximum < minimum`. The check runs in every build profile.
    pub fn new(minimum: T, maximum: T) -> ArgumentResult<Self> {
        ensure::maximum_argument_is_greater_or_equal_to_minimum(Ensure::Always, &minimum, &maximum, "maximum")?;
        Ok(Self::new_unchecked(minimum, maximum))
    }

    /// # Errors
    /// Same as [`Range::new`], with the first element as minimum.
    pub fn from_pair(pair: (T, T)) -> ArgumentResult<Self> {
        Self::new(pair.0, pair.1)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.minimum <= *value && self.maximum >= *value
    }

    /// True when `other` lies inside `self`, touching bounds included.
    #[inline]
    pub fn contains_range(&self, other: &Self) -> bool {
        self.contains(&other.minimum) && self.contains(&other.maximum)
    }
}

impl<T: PartialEq> Range<T> {
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.minimum == self.maximum
    }
}

impl<T: PartialEq + 'static> Range<T> {
    /// Untyped equality: `false` unless `other` is a `Range<T>` equal to `self`.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }
}

impl<T: Hash> Range<T> {
    /// Hash of both bounds; equal ranges always produce the same value.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T: CheckedSub> Range<T> {
    /// `maximum - minimum`, or `None` when the width does not fit in `T`.
    pub fn difference(&self) -> Option<T> {
        self.maximum.checked_sub(&self.minimum)
    }
}

impl<T: Bounded> Range<T> {
    /// Every value representable by `T`.
    pub fn full() -> Self {
        Self::new_unchecked(T::min_value(), T::max_value())
    }
}

impl<T: Default + Clone> Default for Range<T> {
    fn default() -> Self {
        Self::single(T::default())
    }
}

impl<T> From<Range<T>> for (T, T) {
    fn from(range: Range<T>) -> Self {
        range.into_pair()
    }
}

impl<T: PartialOrd> TryFrom<(T, T)> for Range<T> {
    type Error = ArgumentError;

    fn try_from(pair: (T, T)) -> Result<Self, Self::Error> {
        Self::from_pair(pair)
    }
}

mod display {
    use std::fmt;

    use super::Range;

    impl<T: fmt::Display> fmt::Display for Range<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{}, {}]", self.minimum, self.maximum)
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Range;

    /// Serialized as a two-element sequence `[minimum, maximum]`.
    impl<T: Serialize> Serialize for Range<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            (&self.minimum, &self.maximum).serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Range<T>
    where
        T: Deserialize<'de> + PartialOrd,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let pair = <(T, T)>::deserialize(deserializer)?;
            Self::from_pair(pair).map_err(de::Error::custom)
        }
    }
}
