//! Tunable battle and match parameters

use serde::{Deserialize, Serialize};

/// Which change list a hit applies to its target.
///
/// The shipped game applied the skill's self changes to targets as well;
/// `TargetChanges` applies the target list instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetEffectSource {
    #[default]
    SelfChanges,
    TargetChanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BattleConfig {
    /// Logical time added per tick
    pub tick_interval_ms: u32,
    /// Fatigue is applied each time this much battle time has elapsed
    pub slip_damage_interval_ms: u32,
    pub fatigue_damage: i32,
    pub paralyze_fail_chance: f32,
    pub freeze_fail_chance: f32,
    /// Chance to double raw damage while a Critical change is active
    pub critical_chance: f32,
    pub critical_multiplier: f32,
    /// Minimum share of raw damage that always goes through defense
    pub damage_floor_ratio: f32,
    pub rounds_per_match: u32,
    pub target_effect_source: TargetEffectSource,
    /// Redeal tops hands up to this many cards
    pub hand_size: usize,
    /// Nouns, verbs and adjectives each dealt at match start
    pub initial_per_category: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            slip_damage_interval_ms: 10_000,
            fatigue_damage: 10,
            paralyze_fail_chance: 0.2,
            freeze_fail_chance: 0.4,
            critical_chance: 0.25,
            critical_multiplier: 2.0,
            damage_floor_ratio: 0.1,
            rounds_per_match: 4,
            target_effect_source: TargetEffectSource::default(),
            hand_size: 6,
            initial_per_category: 2,
        }
    }
}

impl BattleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks between fatigue applications, at least one
    pub fn ticks_per_slip(&self) -> u32 {
        (self.slip_damage_interval_ms / self.tick_interval_ms.max(1)).max(1)
    }
}
