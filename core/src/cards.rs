//! Statically compiled card catalog from /cards/cards.json.
//! Generated at build time by build.rs; no runtime JSON parsing needed.

include!(concat!(env!("OUT_DIR"), "/cards_generated.rs"));

/// Every catalog card of one category, in catalog order
pub fn cards_of(catalog: &[CardDefinition], category: CardCategory) -> Vec<CardDefinition> {
    catalog
        .iter()
        .filter(|card| card.category() == category)
        .cloned()
        .collect()
}

/// Look a card up by name
pub fn find_by_name<'a>(catalog: &'a [CardDefinition], name: &str) -> Option<&'a CardDefinition> {
    catalog.iter().find(|card| card.name() == name)
}
