// src/ranges.rs
//! Full-width ranges of the primitive integer types.

use crate::range::Range;

macro_rules! full_ranges {
    ($($name:ident: $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("`[", stringify!($ty), "::MIN, ", stringify!($ty), "::MAX]`")]
            pub const $name: Range<$ty> = Range::new_unchecked(<$ty>::MIN, <$ty>::MAX);
        )+
    };
}

full_ranges!(
    U8: u8,
    U16: u16,
    U32: u32,
    U64: u64,
    U128: u128,
    USIZE: usize,
    I8: i8,
    I16: i16,
    I32: i32,
    I64: i64,
    I128: i128,
    ISIZE: isize,
);
