use expmaster_bot::interactions::ids::{
    parse_reset_confirm_id, EXP_RESET_CANCEL, EXP_RESET_CONFIRM_PREFIX,
};

#[test]
fn parse_confirm_ok() {
    let id = format!("{}1234567890", EXP_RESET_CONFIRM_PREFIX);
    assert_eq!(parse_reset_confirm_id(&id), Some(1234567890));
}

#[test]
fn parse_confirm_bad() {
    assert!(parse_reset_confirm_id(EXP_RESET_CONFIRM_PREFIX).is_none());
    assert!(parse_reset_confirm_id("exp_reset_confirm_abc").is_none());
    assert!(parse_reset_confirm_id(EXP_RESET_CANCEL).is_none());
    assert!(parse_reset_confirm_id("something_else_5").is_none());
}
