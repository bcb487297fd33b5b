//! Integration tests for entities_utilities crate
//!
//! These tests exercise BigNumber through the public re-exports only.

use entities_utilities::*;

#[test]
fn test_sample_constant_exceeds_machine_words() {
    let n = BigNumber::from_decimal_str(
        "123400000000000000000000000000050000000000000000000000000006789",
    )
    .unwrap();

    assert!(n > BigNumber::from_u128(u128::MAX));
    assert!(!n.is_negative());
    assert!(!n.is_zero());
}

#[test]
fn test_display_matches_parse_input() {
    let inputs = [
        "0",
        "1",
        "255",
        "18446744073709551616",
        "340282366920938463463374607431768211456",
    ];

    for input in inputs {
        let n: BigNumber = input.parse().unwrap();
        assert_eq!(format!("{}", n), input);
    }
}

#[test]
fn test_parse_error_is_reported() {
    let result: Result<BigNumber, ParseBigNumberError> = "twelve".parse();
    let err = result.unwrap_err();
    assert_eq!(err.input(), "twelve");
    assert!(err.to_string().contains("twelve"));
}

#[test]
fn test_equality_is_by_value() {
    let a = BigNumber::from_u64(1_000_000);
    let b: BigNumber = "1000000".parse().unwrap();
    let c = BigNumber::from(1_000_000i64);
    assert_eq!(a, b);
    assert_eq!(b, c);
}
