use std::collections::HashSet;

use expmaster_bot::experience::rewards::{reward_for_level, EntitlementKind, Reward};

#[test]
fn milestone_levels_carry_entitlements() {
    assert_eq!(
        reward_for_level(5),
        Reward::Entitlement(EntitlementKind::CustomSymbol)
    );
    assert_eq!(
        reward_for_level(10),
        Reward::Entitlement(EntitlementKind::CustomAvatar)
    );
    assert_eq!(
        reward_for_level(15),
        Reward::Entitlement(EntitlementKind::ProfileTitle)
    );
    assert_eq!(
        reward_for_level(20),
        Reward::Entitlement(EntitlementKind::CustomIcon)
    );
    assert_eq!(
        reward_for_level(25),
        Reward::Entitlement(EntitlementKind::CustomEmote)
    );
    assert_eq!(
        reward_for_level(30),
        Reward::Entitlement(EntitlementKind::CustomColor)
    );
    assert_eq!(
        reward_for_level(40),
        Reward::Entitlement(EntitlementKind::PrivateRoom)
    );
}

#[test]
fn level_35_pays_a_fixed_purse() {
    assert_eq!(reward_for_level(35), Reward::Coins(50));
}

#[test]
fn other_levels_pay_half_the_level_rounded_up() {
    assert_eq!(reward_for_level(1), Reward::Coins(1));
    assert_eq!(reward_for_level(2), Reward::Coins(1));
    assert_eq!(reward_for_level(3), Reward::Coins(2));
    assert_eq!(reward_for_level(7), Reward::Coins(4));
    assert_eq!(reward_for_level(33), Reward::Coins(17));
    assert_eq!(reward_for_level(39), Reward::Coins(20));
}

#[test]
fn storage_keys_are_distinct() {
    let kinds = [
        EntitlementKind::CustomSymbol,
        EntitlementKind::CustomAvatar,
        EntitlementKind::ProfileTitle,
        EntitlementKind::CustomIcon,
        EntitlementKind::CustomEmote,
        EntitlementKind::CustomColor,
        EntitlementKind::PrivateRoom,
    ];
    let keys: HashSet<&str> = kinds.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys.len(), kinds.len());
}

#[test]
fn descriptions_read_as_sentences() {
    assert_eq!(Reward::Coins(1).describe(), "1 coin");
    assert_eq!(Reward::Coins(50).describe(), "50 coins");
    let text = Reward::Entitlement(EntitlementKind::CustomAvatar).describe();
    assert!(text.contains("Custom Avatar"));
    assert!(text.contains("claim"));
}
