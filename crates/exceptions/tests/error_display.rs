// crates/exceptions/tests/error_display.rs
use platform_exceptions::ArgumentError;

#[test]
fn invalid_argument_names_parameter() {
    let err = ArgumentError::invalid("maximum", "Maximum argument must be greater or equal to minimum.");
    assert_eq!(
        err.to_string(),
        "Invalid argument 'maximum': Maximum argument must be greater or equal to minimum."
    );
}

#[test]
fn out_of_range_keeps_value() {
    let err = ArgumentError::out_of_range("index", "12", "Argument value [12] is out of range [0, 10].");
    assert_eq!(err.parameter(), "index");
    assert!(!err.is_invalid_argument());
    assert!(err.to_string().starts_with("Argument 'index' is out of range:"));
    match err {
        ArgumentError::OutOfRange { value, .. } => assert_eq!(value, "12"),
        other => panic!("unexpected variant: {other:?}"),
    }
}
