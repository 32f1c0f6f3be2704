use expmaster_bot::constants::{LEVEL_THRESHOLDS, MAX_LEVEL};
use expmaster_bot::experience::leveling::{level_for_total, xp_to_next, NextLevel};

#[test]
fn zero_total_is_level_zero() {
    assert_eq!(level_for_total(0), 0);
}

#[test]
fn first_message_reaches_level_one() {
    assert_eq!(level_for_total(1), 1);
    assert_eq!(level_for_total(39), 1);
}

#[test]
fn meeting_a_threshold_exactly_holds_that_level() {
    assert_eq!(level_for_total(40), 2);
    assert_eq!(level_for_total(89), 2);
    assert_eq!(level_for_total(90), 3);
    assert_eq!(level_for_total(250), 5);
}

#[test]
fn final_threshold_is_the_cap() {
    assert_eq!(level_for_total(139_999), MAX_LEVEL - 1);
    assert_eq!(level_for_total(140_000), MAX_LEVEL);
    assert_eq!(level_for_total(10_000_000), MAX_LEVEL);
}

#[test]
fn level_is_monotonic_in_total() {
    let mut last = 0;
    for total in 0..200_000 {
        let level = level_for_total(total);
        assert!(level >= last, "level dropped at total {total}");
        last = level;
    }
    assert_eq!(last, MAX_LEVEL);
}

#[test]
fn thresholds_strictly_increase() {
    for pair in LEVEL_THRESHOLDS.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn a_single_grant_can_cross_several_levels() {
    // 39 exp is level 1; adding 56 lands on 95, which is level 3.
    assert_eq!(level_for_total(39), 1);
    assert_eq!(level_for_total(95), 3);
}

#[test]
fn next_level_gap_from_zero() {
    assert_eq!(xp_to_next(0), NextLevel::Remaining(1));
}

#[test]
fn exact_threshold_reports_gap_to_the_following_boundary() {
    // 40 exp already holds level 2, so the reported gap is to 90, never 0.
    assert_eq!(xp_to_next(40), NextLevel::Remaining(50));
    assert_eq!(xp_to_next(41), NextLevel::Remaining(49));
}

#[test]
fn next_level_at_the_cap_is_maxed() {
    assert_eq!(xp_to_next(139_999), NextLevel::Remaining(1));
    assert_eq!(xp_to_next(140_000), NextLevel::Maxed);
    assert_eq!(xp_to_next(500_000), NextLevel::Maxed);
}
