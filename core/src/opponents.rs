//! CPU field selection
//!
//! The CPU places one random noun and one or two modifier cards with distinct
//! names, in random order.

use crate::log;
use crate::rng::BattleRng;
use crate::types::CardDefinition;

/// Most modifiers the CPU puts next to its noun
pub const MAX_CPU_MODIFIERS: usize = 2;

/// Pick hand indices for the CPU's monster, modifiers first, noun last.
///
/// Returns `None` when the hand holds no noun.
pub fn choose_field_cards<R: BattleRng>(
    hand: &[CardDefinition],
    rng: &mut R,
) -> Option<Vec<usize>> {
    let nouns: Vec<usize> = hand
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_noun())
        .map(|(index, _)| index)
        .collect();
    if nouns.is_empty() {
        log::debug("cpu", "no noun in hand");
        return None;
    }
    let noun = nouns[rng.gen_range(nouns.len())];

    let mut modifiers: Vec<usize> = hand
        .iter()
        .enumerate()
        .filter(|(_, card)| !card.is_noun())
        .map(|(index, _)| index)
        .collect();
    rng.shuffle(&mut modifiers);

    let mut seen: Vec<&str> = Vec::new();
    modifiers.retain(|&index| {
        let name = hand[index].name();
        if seen.contains(&name) {
            false
        } else {
            seen.push(name);
            true
        }
    });

    let wanted = 1 + rng.gen_range(MAX_CPU_MODIFIERS);
    modifiers.truncate(wanted);
    modifiers.push(noun);
    Some(modifiers)
}
