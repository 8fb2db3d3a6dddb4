mod conditions;
mod round;
mod slip;

use crate::battle::{BattleEngine, BattleEvent};
use crate::config::BattleConfig;
use crate::limits::Side;
use crate::rng::XorShiftRng;
use crate::status::MonsterStatus;
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// Acts on every tick with the default 100 ms tick
const FAST: u32 = 100;
/// Never acts within a test
const IDLE: u32 = 100_000_000;

fn tackle() -> Command {
    Command::new("Tackle", 1, 0)
}

fn noun(id: u32, name: &str, hp: i32, attack: i32, defense: i32) -> CardDefinition {
    CardDefinition::Noun(NounCard {
        id: CardId(id),
        name: name.to_string(),
        hp,
        attack,
        defense,
        evasion: 0.0,
        skills: vec![tackle()],
        attack_interval_ms: 1000,
    })
}

fn verb(id: u32, name: &str, skill: Command) -> CardDefinition {
    CardDefinition::Verb(VerbCard {
        id: CardId(id),
        name: name.to_string(),
        skill,
        favor_skill: false,
    })
}

fn adjective(id: u32, name: &str, hp: i32, attack: i32, defense: i32) -> CardDefinition {
    CardDefinition::Adjective(AdjectiveCard {
        id: CardId(id),
        name: name.to_string(),
        hp_bonus: hp,
        attack_bonus: attack,
        defense_bonus: defense,
        evasion_bonus: 0.0,
        special_target: None,
    })
}

/// A bare monster with a single one-target Tackle
fn monster(name: &str, hp: i32, attack: i32, defense: i32, interval_ms: u32) -> MonsterDefinition {
    MonsterDefinition {
        name: name.to_string(),
        hp,
        attack,
        defense,
        evasion: 0.0,
        skills: vec![tackle()],
        attack_interval_ms: interval_ms,
        special_target: None,
        source_cards: vec![noun(1, name, hp, attack, defense)],
    }
}

/// Every roll that can cancel or amplify is switched off
fn quiet_config() -> BattleConfig {
    BattleConfig {
        paralyze_fail_chance: 0.0,
        freeze_fail_chance: 0.0,
        critical_chance: 0.0,
        ..BattleConfig::default()
    }
}

fn seeded(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

fn duel(config: BattleConfig, player: MonsterDefinition, cpu: MonsterDefinition) -> BattleEngine {
    let mut engine = BattleEngine::new(config);
    engine.deploy(Side::Player, player);
    engine.deploy(Side::Cpu, cpu);
    engine
}

fn first(engine: &mut BattleEngine, side: Side) -> &mut MonsterStatus {
    &mut engine.participants_mut().side_mut(side).monsters[0]
}

fn hits(events: &[BattleEvent]) -> Vec<i32> {
    events
        .iter()
        .filter_map(|e| match e {
            BattleEvent::Hit { damage, .. } => Some(*damage),
            _ => None,
        })
        .collect()
}
