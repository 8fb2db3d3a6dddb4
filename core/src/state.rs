use serde::{Deserialize, Serialize};

use crate::limits::Side;
use crate::record::MatchRecord;
use crate::types::{CardDefinition, MonsterDefinition};

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPhase {
    Initialize,
    WaitingForReady,
    InBattle,
    BattleEnd,
    Finished,
}

/// Everything the controller keeps between rounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub phase: MatchPhase,
    /// Current round number (1-indexed)
    pub round: u32,
    pub player_hand: Vec<CardDefinition>,
    pub cpu_hand: Vec<CardDefinition>,
    /// Monsters composed for the coming battle
    pub player_field: Vec<MonsterDefinition>,
    pub cpu_field: Vec<MonsterDefinition>,
    pub record: MatchRecord,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Initialize,
            round: 1,
            player_hand: Vec::new(),
            cpu_hand: Vec::new(),
            player_field: Vec::new(),
            cpu_field: Vec::new(),
            record: MatchRecord::new(),
        }
    }

    pub fn hand(&self, side: Side) -> &Vec<CardDefinition> {
        match side {
            Side::Player => &self.player_hand,
            Side::Cpu => &self.cpu_hand,
        }
    }

    pub fn hand_mut(&mut self, side: Side) -> &mut Vec<CardDefinition> {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Cpu => &mut self.cpu_hand,
        }
    }

    pub fn field(&self, side: Side) -> &Vec<MonsterDefinition> {
        match side {
            Side::Player => &self.player_field,
            Side::Cpu => &self.cpu_field,
        }
    }

    pub fn field_mut(&mut self, side: Side) -> &mut Vec<MonsterDefinition> {
        match side {
            Side::Player => &mut self.player_field,
            Side::Cpu => &mut self.cpu_field,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
