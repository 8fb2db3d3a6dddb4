//! Card fracture: the defeated side's monsters break back into cards
//!
//! This is the only way cards move between rounds. Both draws come from the
//! same pool without removal, so both sides may receive the same card.

use serde::{Deserialize, Serialize};

use crate::limits::Side;
use crate::log;
use crate::record::RoundResult;
use crate::registry::Participants;
use crate::rng::BattleRng;
use crate::types::CardDefinition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractureOutcome {
    pub winner: Side,
    pub to_winner: CardDefinition,
    pub to_loser: CardDefinition,
}

/// Every source card of every monster on `side`, duplicates included
pub fn fracture_pool(participants: &Participants, side: Side) -> Vec<CardDefinition> {
    participants
        .side(side)
        .monsters
        .iter()
        .flat_map(|monster| monster.definition.source_cards.iter().cloned())
        .collect()
}

/// Draw the two fracture cards, then clear both sides of the field.
///
/// Draws and unknown results hand out nothing.
pub fn fracture<R: BattleRng>(
    result: RoundResult,
    participants: &mut Participants,
    rng: &mut R,
) -> Option<FractureOutcome> {
    let outcome = result.winner().and_then(|winner| {
        let pool = fracture_pool(participants, winner.opponent());
        if pool.is_empty() {
            log::warn("fracture: losing side has no source cards");
            return None;
        }
        let to_winner = pool[rng.gen_range(pool.len())].clone();
        let to_loser = pool[rng.gen_range(pool.len())].clone();
        log::debug(
            "fracture",
            &format!(
                "{winner} gets {}, {} gets {}",
                to_winner.name(),
                winner.opponent(),
                to_loser.name()
            ),
        );
        Some(FractureOutcome {
            winner,
            to_winner,
            to_loser,
        })
    });
    participants.clear();
    outcome
}
