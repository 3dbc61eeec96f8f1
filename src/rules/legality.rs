//! Legality filter: banned, restricted, rotated, and splash-banned cards.

use serde::{Deserialize, Serialize};

use crate::deck::DeckEntry;
use crate::formats::{Format, FormatId, FormatPolicy};

/// Selected cards that fall foul of the format's card lists.
///
/// The lists may overlap: a card can be both banned and rotated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalityReport {
    pub banned: Vec<DeckEntry>,
    pub restricted: Vec<DeckEntry>,
    /// Cards outside the legal packs (plus fully rotated cards when the
    /// policy merges them).
    pub rotated: Vec<DeckEntry>,
    pub splash_banned: Vec<DeckEntry>,
}

/// Check every selected card against the format.
///
/// `format` is `None` when the format id is not in the format list; every
/// pack is then legal.
#[must_use]
pub fn check_legality(
    cards: &[DeckEntry],
    format_id: &FormatId,
    format: Option<&Format>,
    policy: &FormatPolicy,
) -> LegalityReport {
    let legal_packs = format.map_or(&[][..], |f| f.legal_packs.as_slice());
    let mut report = LegalityReport::default();

    for entry in cards {
        let card = &entry.card;
        if card.is_banned_in(format_id) {
            report.banned.push(entry.clone());
        }
        if card.is_restricted_in(format_id) {
            report.restricted.push(entry.clone());
        }

        let illegal = !card.is_in_packs(legal_packs);
        if illegal || (policy.merge_rotated_with_illegal && card.is_rotated()) {
            report.rotated.push(entry.clone());
        }

        if card.is_splash_banned_in(format_id) {
            report.splash_banned.push(entry.clone());
        }
    }

    report
}
