// tests/range_display.rs
use platform_ranges::Range;

#[test]
fn display_uses_brackets() {
    assert_eq!(Range::new(1, 5).unwrap().to_string(), "[1, 5]");
    assert_eq!(Range::single(3).to_string(), "[3, 3]");
}

#[test]
fn display_uses_bound_display() {
    assert_eq!(Range::new(-1.5, 2.25).unwrap().to_string(), "[-1.5, 2.25]");
    assert_eq!(format!("{}", Range::new('a', 'z').unwrap()), "[a, z]");
}
