use expmaster_bot::error::ExpError;
use expmaster_bot::util::{normalize_name, parse_exp_amount, validate_exp_amount};

#[test]
fn accepts_whole_amounts_in_range() {
    assert_eq!(parse_exp_amount("1").unwrap(), 1);
    assert_eq!(parse_exp_amount(" 42 ").unwrap(), 42);
    assert_eq!(parse_exp_amount("1000").unwrap(), 1000);
}

#[test]
fn rejects_non_numbers() {
    let err = parse_exp_amount("lots").unwrap_err();
    assert!(matches!(err, ExpError::InvalidAmount(_)));
    assert_eq!(err.to_string(), "Must be a number.");
}

#[test]
fn rejects_decimals() {
    let err = parse_exp_amount("2.5").unwrap_err();
    assert_eq!(err.to_string(), "Cannot contain a decimal.");
}

#[test]
fn rejects_zero_and_negatives() {
    assert_eq!(
        parse_exp_amount("0").unwrap_err().to_string(),
        "Cannot be less than one EXP."
    );
    assert_eq!(
        parse_exp_amount("-5").unwrap_err().to_string(),
        "Cannot be less than one EXP."
    );
}

#[test]
fn rejects_amounts_over_the_cap() {
    assert!(parse_exp_amount("1001").is_err());
    assert!(validate_exp_amount(1001).is_err());
    assert!(validate_exp_amount(1000).is_ok());
    assert!(validate_exp_amount(0).is_err());
}

#[test]
fn normalization_folds_case_and_punctuation() {
    assert_eq!(normalize_name("Some User!"), "someuser");
    assert_eq!(normalize_name("  A-B_c9 "), "abc9");
    assert_eq!(normalize_name("!!!"), "");
}

#[test]
fn normalization_is_idempotent() {
    for raw in ["Volco", "Mixed Case 42", "ünïcödé", "plain"] {
        let once = normalize_name(raw);
        assert_eq!(normalize_name(&once), once);
    }
}
