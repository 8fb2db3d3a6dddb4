//! Round and match bookkeeping

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::limits::Side;
use crate::types::MonsterDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundResult {
    #[strum(serialize = "PLAYER WIN")]
    PlayerWin,
    #[strum(serialize = "CPU WIN")]
    CpuWin,
    #[strum(serialize = "DRAW")]
    Draw,
    /// The round was abandoned before either side was wiped
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl RoundResult {
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundResult::PlayerWin => Some(Side::Player),
            RoundResult::CpuWin => Some(Side::Cpu),
            RoundResult::Draw | RoundResult::Unknown => None,
        }
    }
}

/// Overall result of a match, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchOutcome {
    #[strum(serialize = "WIN")]
    Win,
    #[strum(serialize = "LOSE")]
    Lose,
    #[strum(serialize = "DRAW")]
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// 1-indexed
    pub round: u32,
    pub player_monster: MonsterDefinition,
    pub cpu_monster: MonsterDefinition,
    pub result: RoundResult,
}

/// Append-only history of one match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub player_wins: u32,
    pub cpu_wins: u32,
    pub draws: u32,
    pub rounds: Vec<RoundRecord>,
}

impl MatchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round. Unknown results are kept but counted nowhere.
    pub fn push(&mut self, record: RoundRecord) {
        match record.result {
            RoundResult::PlayerWin => self.player_wins += 1,
            RoundResult::CpuWin => self.cpu_wins += 1,
            RoundResult::Draw => self.draws += 1,
            RoundResult::Unknown => {}
        }
        self.rounds.push(record);
    }

    pub fn overall(&self) -> MatchOutcome {
        use core::cmp::Ordering;
        match self.player_wins.cmp(&self.cpu_wins) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Less => MatchOutcome::Lose,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
