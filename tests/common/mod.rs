//! Shared fixtures: a small Crab/Crane card pool and a legal Crab deck.

#![allow(dead_code)]

use l5r_deckcheck::cards::{Card, CardRegistry, CardType, Element, Printing, Side};
use l5r_deckcheck::deck::DeckSelection;
use l5r_deckcheck::formats::Format;

pub const DYNASTY_CARDS: usize = 14;
pub const CONFLICT_CARDS: usize = 14;

fn printed(card: Card) -> Card {
    card.with_printing(Printing::new("core"))
}

pub fn dynasty_id(i: usize) -> String {
    format!("crab-dynasty-{i:02}")
}

pub fn conflict_id(i: usize) -> String {
    format!("crab-conflict-{i:02}")
}

/// Catalog with every card printed in `core`.
pub fn catalog_cards() -> Vec<Card> {
    let mut cards = vec![
        printed(
            Card::new("crab-castle", "Crab Castle", Side::Province, CardType::Stronghold, "crab")
                .with_influence_pool(10)
                .with_deck_limit(1),
        ),
        printed(
            Card::new("crane-castle", "Crane Castle", Side::Province, CardType::Stronghold, "crane")
                .with_influence_pool(10)
                .with_deck_limit(1),
        ),
        printed(
            Card::new("keeper-of-air", "Keeper of Air", Side::Role, CardType::Role, "neutral")
                .with_traits(["keeper", "air"])
                .with_deck_limit(1),
        ),
        printed(
            Card::new("seeker-of-air", "Seeker of Air", Side::Role, CardType::Role, "neutral")
                .with_traits(["seeker", "air"])
                .with_deck_limit(1),
        ),
        printed(
            Card::new("support-of-the-crane", "Support of the Crane", Side::Role, CardType::Role, "neutral")
                .with_deck_limit(1),
        ),
        printed(
            Card::new("crane-splash", "Crane Splash", Side::Conflict, CardType::Event, "crane")
                .with_cost(1)
                .with_influence_cost(2),
        ),
        printed(
            Card::new("lion-splash", "Lion Splash", Side::Conflict, CardType::Event, "lion")
                .with_cost(0)
                .with_influence_cost(3),
        ),
        printed(
            Card::new("neutral-attachment", "Fine Katana", Side::Conflict, CardType::Attachment, "neutral")
                .with_cost(0),
        ),
        printed(
            Card::new("storehouse", "Storehouse", Side::Dynasty, CardType::Holding, "neutral")
                .with_text("Rally. Reaction: gain 1 fate."),
        ),
    ];

    for (element, name) in Element::ALL.iter().zip(["air", "earth", "fire", "water", "void"]) {
        cards.push(printed(
            Card::new(format!("province-{name}"), format!("Province of {name}"), Side::Province, CardType::Province, "neutral")
                .with_elements([*element])
                .with_deck_limit(1),
        ));
        cards.push(printed(
            Card::new(format!("second-province-{name}"), format!("Second Province of {name}"), Side::Province, CardType::Province, "neutral")
                .with_elements([*element])
                .with_deck_limit(1),
        ));
    }

    for i in 0..DYNASTY_CARDS {
        cards.push(printed(
            Card::new(dynasty_id(i), format!("Crab Character {i}"), Side::Dynasty, CardType::Character, "crab")
                .with_cost((i % 5) as i32 + 1)
                .with_skills(Some(2), Some(1))
                .with_traits(["bushi"]),
        ));
    }
    for i in 0..CONFLICT_CARDS {
        cards.push(printed(
            Card::new(conflict_id(i), format!("Crab Event {i}"), Side::Conflict, CardType::Event, "crab")
                .with_cost((i % 3) as i32)
                .with_influence_cost(2),
        ));
    }

    cards
}

/// The catalog, ingested (so Rally is tagged from text).
pub fn catalog() -> CardRegistry {
    l5r_deckcheck::cards::catalog_from_cards(catalog_cards()).expect("fixture ids are unique")
}

/// Formats with every fixture card legal.
pub fn formats() -> Vec<Format> {
    vec![
        Format::new("emerald", "Emerald Legacy").with_legal_packs(["core"]),
        Format::new("obsidian", "Obsidian Heresy"),
        Format::new("skirmish", "Skirmish"),
        Format::new("stronghold", "Stronghold"),
    ]
}

/// 40 dynasty cards: 13 × 3 + 1.
pub fn dynasty_forty() -> DeckSelection {
    let mut deck = DeckSelection::new();
    for i in 0..13 {
        deck.set(dynasty_id(i), 3);
    }
    deck.set(dynasty_id(13), 1);
    deck
}

/// A Crab deck legal in every standard format.
///
/// Keeper of Air (13 influence), 4 influence spent on Crane Splash.
pub fn legal_crab_deck() -> DeckSelection {
    let mut deck = dynasty_forty();
    deck.set("crab-castle", 1);
    deck.set("keeper-of-air", 1);
    for name in ["air", "earth", "fire", "water", "void"] {
        deck.set(format!("province-{name}"), 1);
    }
    for i in 0..12 {
        deck.set(conflict_id(i), 3);
    }
    deck.set(conflict_id(12), 2);
    deck.set("crane-splash", 2);
    deck
}

/// A skirmish deck: `dynasty` dynasty copies and 30 conflict copies.
pub fn skirmish_deck(dynasty: u32) -> DeckSelection {
    let mut deck = DeckSelection::new();
    let mut left = dynasty;
    let mut i = 0;
    while left > 0 {
        let n = left.min(3);
        deck.set(dynasty_id(i), n);
        left -= n;
        i += 1;
    }
    for i in 0..10 {
        deck.set(conflict_id(i), 3);
    }
    deck
}
