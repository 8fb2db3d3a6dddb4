//! Serializable snapshots for presentation layers

use serde::{Deserialize, Serialize};

use crate::limits::MonsterId;
use crate::record::MatchRecord;
use crate::registry::Roster;
use crate::state::{MatchPhase, MatchState};
use crate::status::{MonsterCondition, MonsterStatus, PresentationHandle};
use crate::types::{CardDefinition, StatChange};

/// A monster as presentation sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterView {
    pub id: MonsterId,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: f32,
    pub defense: f32,
    pub evasion: f32,
    pub attack_interval_ms: u32,
    pub cooldown_ms: u32,
    pub conditions: MonsterCondition,
    pub stat_changes: Vec<StatChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<PresentationHandle>,
}

impl From<&MonsterStatus> for MonsterView {
    fn from(monster: &MonsterStatus) -> Self {
        let stats = monster.effective_stats();
        Self {
            id: monster.id,
            name: monster.definition.name.clone(),
            hp: monster.current_hp,
            max_hp: monster.max_hp(),
            attack: stats.attack,
            defense: stats.defense,
            evasion: stats.evasion,
            attack_interval_ms: monster.definition.attack_interval_ms,
            cooldown_ms: monster.cooldown_ms,
            conditions: monster.conditions,
            stat_changes: monster.stat_changes.clone(),
            handle: monster.handle,
        }
    }
}

/// Views of every monster in a roster, in roster order
pub fn roster_views(roster: &Roster) -> Vec<MonsterView> {
    roster.monsters.iter().map(MonsterView::from).collect()
}

/// The match as the player is allowed to see it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub phase: MatchPhase,
    pub round: u32,
    pub rounds_per_match: u32,
    pub hand: Vec<CardDefinition>,
    pub cpu_hand_size: usize,
    pub player_field: Vec<String>,
    pub cpu_field: Vec<String>,
    pub player_monsters: Vec<MonsterView>,
    pub cpu_monsters: Vec<MonsterView>,
    pub record: MatchRecord,
}

impl MatchView {
    pub fn from_state(
        state: &MatchState,
        rounds_per_match: u32,
        player_monsters: Vec<MonsterView>,
        cpu_monsters: Vec<MonsterView>,
    ) -> Self {
        Self {
            phase: state.phase,
            round: state.round,
            rounds_per_match,
            hand: state.player_hand.clone(),
            cpu_hand_size: state.cpu_hand.len(),
            player_field: state.player_field.iter().map(|m| m.name.clone()).collect(),
            cpu_field: state.cpu_field.iter().map(|m| m.name.clone()).collect(),
            player_monsters,
            cpu_monsters,
            record: state.record.clone(),
        }
    }
}
