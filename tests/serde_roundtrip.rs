// tests/serde_roundtrip.rs
#![cfg(feature = "serde")]

use platform_ranges::Range;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    lines: Range<u32>,
    ratio: Range<f64>,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper { lines: Range::new(10, 200).unwrap(), ratio: Range::single(0.5) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"lines":[10,200],"ratio":[0.5,0.5]}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn reversed_pair_is_rejected() {
    let err = serde_json::from_str::<Range<i32>>("[9, 1]").unwrap_err();
    assert!(err.to_string().contains("Maximum argument must be greater or equal to minimum."));
}

#[test]
fn wrong_shape_is_rejected() {
    assert!(serde_json::from_str::<Range<i32>>("[1]").is_err());
    assert!(serde_json::from_str::<Range<i32>>(r#"{"minimum":1,"maximum":2}"#).is_err());
}
