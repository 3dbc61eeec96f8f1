//! Deck-construction violations.
//!
//! Violations are reported, never raised: a deck with violations still
//! gets full statistics. `Display` gives the message shown to players.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single deck-construction rule the deck breaks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    RoleRestriction { card: String, required: Vec<String> },
    TooManyClans { clans: Vec<String> },
    Banned { cards: Vec<String> },
    TooManyRestricted { cards: Vec<String> },
    NotInFormat { cards: Vec<String> },
    ClanNotAllowed { clan: String, cards: Vec<String> },
    DynastySize { size: u32, minimum: u32, maximum: u32 },
    ConflictSize { size: u32, minimum: u32, maximum: u32 },
    InfluenceExceeded { used: i32, maximum: i32 },
    TooManyRally { count: u32, cap: u32 },
    SplashBanned { cards: Vec<String> },
    ProvincesNotAllowed,
    StrongholdNotAllowed,
    RoleNotAllowed,
    ProvinceCount { count: u32, required: u32 },
    StrongholdCount { count: u32 },
    TooManyRoles { count: u32 },
    ElementCoverage,
    DeckLimit { card: String, quantity: u32, limit: u8 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RoleRestriction { card, required } => {
                write!(f, "{} requires a role with one of: {}", card, required.join(", "))
            }
            Violation::TooManyClans { clans } => write!(f, "Too many splash clans: {}", clans.join(", ")),
            Violation::Banned { cards } => write!(f, "Deck contains banned cards: {}", cards.join(", ")),
            Violation::TooManyRestricted { cards } => {
                write!(f, "Deck contains more than one restricted card: {}", cards.join(", "))
            }
            Violation::NotInFormat { cards } => {
                write!(f, "Deck contains cards that are not legal in this format: {}", cards.join(", "))
            }
            Violation::ClanNotAllowed { clan, cards } => {
                write!(f, "Deck contains cards that cannot be played by {}: {}", clan, cards.join(", "))
            }
            Violation::DynastySize { size, minimum, maximum } => write!(
                f,
                "Dynasty deck must contain between {} and {} cards (currently {})",
                minimum, maximum, size
            ),
            Violation::ConflictSize { size, minimum, maximum } => write!(
                f,
                "Conflict deck must contain between {} and {} cards (currently {})",
                minimum, maximum, size
            ),
            Violation::InfluenceExceeded { used, maximum } => {
                write!(f, "Deck uses {} influence but only {} is available", used, maximum)
            }
            Violation::TooManyRally { count, cap } => {
                write!(f, "Deck contains {} Rally cards (maximum {})", count, cap)
            }
            Violation::SplashBanned { cards } => {
                write!(f, "Splash-banned cards cannot be played out of clan: {}", cards.join(", "))
            }
            Violation::ProvincesNotAllowed => write!(f, "Provinces are not allowed in this format"),
            Violation::StrongholdNotAllowed => write!(f, "Strongholds are not allowed in this format"),
            Violation::RoleNotAllowed => write!(f, "Roles are not allowed in this format"),
            Violation::ProvinceCount { count, required } => {
                write!(f, "Deck must contain exactly {} provinces (currently {})", required, count)
            }
            Violation::StrongholdCount { count } => {
                write!(f, "Deck must contain exactly 1 stronghold (currently {})", count)
            }
            Violation::TooManyRoles { count } => {
                write!(f, "Deck cannot contain more than 1 role (currently {})", count)
            }
            Violation::ElementCoverage => write!(f, "Provinces must cover all five elements"),
            Violation::DeckLimit { card, quantity, limit } => {
                write!(f, "Deck contains {} copies of {} (limit {})", quantity, card, limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_messages() {
        let banned = Violation::Banned {
            cards: vec!["Policy Debate".to_string(), "Pathfinder's Blade".to_string()],
        };
        assert_eq!(
            banned.to_string(),
            "Deck contains banned cards: Policy Debate, Pathfinder's Blade"
        );
    }

    #[test]
    fn test_bounds_message() {
        let size = Violation::DynastySize { size: 29, minimum: 30, maximum: 35 };
        assert_eq!(
            size.to_string(),
            "Dynasty deck must contain between 30 and 35 cards (currently 29)"
        );
    }

    #[test]
    fn test_setup_messages() {
        assert_eq!(
            Violation::ProvinceCount { count: 4, required: 5 }.to_string(),
            "Deck must contain exactly 5 provinces (currently 4)"
        );
        assert_eq!(
            Violation::DeckLimit { card: "Kakita Yoshi".to_string(), quantity: 4, limit: 3 }.to_string(),
            "Deck contains 4 copies of Kakita Yoshi (limit 3)"
        );
        assert_eq!(
            Violation::ElementCoverage.to_string(),
            "Provinces must cover all five elements"
        );
    }

    #[test]
    fn test_role_restriction_message() {
        let violation = Violation::RoleRestriction {
            card: "Ethereal Dreamer".to_string(),
            required: vec!["air".to_string(), "keeper".to_string()],
        };
        assert_eq!(
            violation.to_string(),
            "Ethereal Dreamer requires a role with one of: air, keeper"
        );
    }
}
