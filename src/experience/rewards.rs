//! Data-driven reward policy: what each level boundary pays out.

use crate::constants::coin_amount;

/// Entitlements granted at milestone level boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitlementKind {
    CustomSymbol,
    CustomAvatar,
    ProfileTitle,
    CustomIcon,
    CustomEmote,
    CustomColor,
    PrivateRoom,
}

impl EntitlementKind {
    /// Stable storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CustomSymbol => "custom_symbol",
            Self::CustomAvatar => "custom_avatar",
            Self::ProfileTitle => "profile_title",
            Self::CustomIcon => "custom_icon",
            Self::CustomEmote => "custom_emote",
            Self::CustomColor => "custom_color",
            Self::PrivateRoom => "private_room",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::CustomSymbol => "Custom Symbol",
            Self::CustomAvatar => "Custom Avatar",
            Self::ProfileTitle => "Profile Title",
            Self::CustomIcon => "Custom Icon",
            Self::CustomEmote => "Custom Emote",
            Self::CustomColor => "Custom Color",
            Self::PrivateRoom => "Private Room",
        }
    }

    /// How the holder claims the entitlement, for the level-up announcement.
    pub fn claim_instructions(self) -> &'static str {
        match self {
            Self::CustomSymbol => "use the `/customsymbol` command to claim it",
            Self::CustomAvatar => "contact a moderator to set your avatar",
            Self::ProfileTitle => "contact a moderator to set your profile title",
            Self::CustomIcon => "contact a moderator to set your icon",
            Self::CustomEmote => "contact a moderator to set your emote",
            Self::CustomColor => "contact a moderator to set your color",
            Self::PrivateRoom => "contact an administrator to claim your channel",
        }
    }
}

/// What a level boundary pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    Coins(i64),
    Entitlement(EntitlementKind),
}

/// Reward for reaching `level`. Milestone levels carry entitlements or a
/// fixed purse; every other level pays `ceil(level / 2)` coins.
pub fn reward_for_level(level: u32) -> Reward {
    match level {
        5 => Reward::Entitlement(EntitlementKind::CustomSymbol),
        10 => Reward::Entitlement(EntitlementKind::CustomAvatar),
        15 => Reward::Entitlement(EntitlementKind::ProfileTitle),
        20 => Reward::Entitlement(EntitlementKind::CustomIcon),
        25 => Reward::Entitlement(EntitlementKind::CustomEmote),
        30 => Reward::Entitlement(EntitlementKind::CustomColor),
        35 => Reward::Coins(50),
        40 => Reward::Entitlement(EntitlementKind::PrivateRoom),
        _ => Reward::Coins((i64::from(level) + 1) / 2),
    }
}

impl Reward {
    /// Sentence fragment for the level-up announcement.
    pub fn describe(self) -> String {
        match self {
            Reward::Coins(n) => coin_amount(n),
            Reward::Entitlement(kind) => format!(
                "a {}! To claim it, {}",
                kind.display_name(),
                kind.claim_instructions()
            ),
        }
    }
}
