//! Dealing cards from the catalog into hands

use crate::cards::cards_of;
use crate::rng::BattleRng;
use crate::types::{CardCategory, CardDefinition};

fn draw_from<R: BattleRng>(pool: &[CardDefinition], rng: &mut R) -> Option<CardDefinition> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(pool.len())].clone())
}

/// Opening hand: `per_category` nouns, then verbs, then adjectives.
///
/// Draws are with replacement. A category missing from the catalog is skipped.
pub fn deal_initial<R: BattleRng>(
    catalog: &[CardDefinition],
    per_category: usize,
    rng: &mut R,
) -> Vec<CardDefinition> {
    let mut hand = Vec::with_capacity(per_category * 3);
    for category in [CardCategory::Noun, CardCategory::Verb, CardCategory::Adjective] {
        let pool = cards_of(catalog, category);
        for _ in 0..per_category {
            if let Some(card) = draw_from(&pool, rng) {
                hand.push(card);
            }
        }
    }
    hand
}

/// Top a hand up to `hand_size`. A hand without a noun gets one first.
///
/// Returns how many cards were dealt.
pub fn redeal<R: BattleRng>(
    hand: &mut Vec<CardDefinition>,
    catalog: &[CardDefinition],
    hand_size: usize,
    rng: &mut R,
) -> usize {
    let before = hand.len();
    if hand.len() < hand_size && !hand.iter().any(CardDefinition::is_noun) {
        let nouns = cards_of(catalog, CardCategory::Noun);
        if let Some(noun) = draw_from(&nouns, rng) {
            hand.push(noun);
        }
    }
    while hand.len() < hand_size {
        match draw_from(catalog, rng) {
            Some(card) => hand.push(card),
            None => break,
        }
    }
    hand.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::get_all_cards;
    use crate::rng::XorShiftRng;

    #[test]
    fn test_initial_deal_is_two_of_each() {
        let catalog = get_all_cards();
        let mut rng = XorShiftRng::seed_from_u64(3);
        let hand = deal_initial(&catalog, 2, &mut rng);
        assert_eq!(hand.len(), 6);
        let categories: Vec<CardCategory> = hand.iter().map(|c| c.category()).collect();
        assert_eq!(
            categories,
            vec![
                CardCategory::Noun,
                CardCategory::Noun,
                CardCategory::Verb,
                CardCategory::Verb,
                CardCategory::Adjective,
                CardCategory::Adjective,
            ]
        );
    }

    #[test]
    fn test_redeal_adds_noun_when_missing() {
        let catalog = get_all_cards();
        let mut rng = XorShiftRng::seed_from_u64(11);
        let mut hand = cards_of(&catalog, CardCategory::Verb);
        hand.truncate(2);
        let dealt = redeal(&mut hand, &catalog, 6, &mut rng);
        assert_eq!(dealt, 4);
        assert_eq!(hand.len(), 6);
        assert!(hand[2].is_noun(), "first dealt card must be a noun");
    }

    #[test]
    fn test_redeal_full_hand_is_untouched() {
        let catalog = get_all_cards();
        let mut rng = XorShiftRng::seed_from_u64(5);
        let mut hand = deal_initial(&catalog, 3, &mut rng);
        let before = hand.clone();
        assert_eq!(redeal(&mut hand, &catalog, 6, &mut rng), 0);
        assert_eq!(hand, before);
    }
}
