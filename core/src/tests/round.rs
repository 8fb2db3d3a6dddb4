use super::*;
use crate::battle::TickOutcome;
use crate::fracture::{fracture, fracture_pool};
use crate::limits::{MonsterId, MAX_TICKS_PER_ROUND};
use crate::record::RoundResult;
use crate::registry::Participants;
use crate::status::PresentationHandle;
use crate::view::{roster_views, MonsterView};

#[test]
fn test_player_wins_when_cpu_is_wiped() {
    let mut engine = duel(
        quiet_config(),
        monster("Brute", 50, 20, 0, FAST),
        monster("Minnow", 30, 1, 0, 1000),
    );
    let result = engine.run_to_end(&mut seeded(1));
    assert_eq!(result, RoundResult::PlayerWin);
    assert!(matches!(
        engine.events().last(),
        Some(BattleEvent::RoundEnd {
            result: RoundResult::PlayerWin,
            ..
        })
    ));
    // Ended rounds stay ended
    assert_eq!(
        engine.tick(&mut seeded(1)),
        TickOutcome::Ended(RoundResult::PlayerWin)
    );
}

#[test]
fn test_cpu_wins_when_player_is_wiped() {
    let mut engine = duel(
        quiet_config(),
        monster("Minnow", 30, 1, 0, 1000),
        monster("Brute", 50, 20, 0, FAST),
    );
    assert_eq!(engine.run_to_end(&mut seeded(2)), RoundResult::CpuWin);
}

#[test]
fn test_player_side_acts_first_within_a_tick() {
    // SCENARIO: both one-shot each other on the same tick; the player's
    // attack lands first so the CPU never swings
    let mut engine = duel(
        quiet_config(),
        monster("Quick", 10, 50, 0, FAST),
        monster("Also Quick", 10, 50, 0, FAST),
    );
    assert_eq!(engine.run_to_end(&mut seeded(3)), RoundResult::PlayerWin);
    assert_eq!(hits(engine.events()), vec![50]);
}

#[test]
fn test_slow_motion_fires_once() {
    let mut engine = BattleEngine::new(quiet_config());
    let mut sweeper = monster("Sweeper", 100, 50, 0, FAST);
    sweeper.skills = vec![Command::new("Sweep", 3, 0)];
    engine.deploy(Side::Player, sweeper);
    for _ in 0..3 {
        engine.deploy(Side::Cpu, monster("Minnow", 10, 0, 0, IDLE));
    }
    engine.run_to_end(&mut seeded(4));

    let defeated = engine
        .events()
        .iter()
        .filter(|e| matches!(e, BattleEvent::MonsterDefeated { .. }))
        .count();
    let cues: Vec<&BattleEvent> = engine
        .events()
        .iter()
        .filter(|e| matches!(e, BattleEvent::SlowMotion { .. }))
        .collect();
    assert_eq!(defeated, 3);
    assert_eq!(cues, vec![&BattleEvent::SlowMotion { wiped: Side::Cpu }]);
}

#[test]
fn test_targets_are_drawn_without_replacement() {
    let mut rng = seeded(5);
    for _ in 0..20 {
        let mut engine = BattleEngine::new(quiet_config());
        let mut archer = monster("Archer", 100, 1, 0, FAST);
        archer.skills = vec![Command::new("Volley", 2, 0)];
        engine.deploy(Side::Player, archer);
        for _ in 0..3 {
            engine.deploy(Side::Cpu, monster("Target", 100, 0, 0, IDLE));
        }
        engine.tick(&mut rng);

        let targets = engine
            .events()
            .iter()
            .find_map(|e| match e {
                BattleEvent::SkillUsed { targets, .. } => Some(targets.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(targets.len(), 2);
        assert_ne!(targets[0], targets[1]);
        assert_eq!(hits(engine.events()).len(), 2);
    }
}

#[test]
fn test_tick_limit_ends_round_as_unknown() {
    let config = BattleConfig {
        fatigue_damage: 0,
        ..quiet_config()
    };
    let mut engine = duel(
        config,
        monster("Pacifist A", 10, 0, 0, FAST),
        monster("Pacifist B", 10, 0, 0, FAST),
    );
    assert_eq!(engine.run_to_end(&mut seeded(6)), RoundResult::Unknown);
    assert_eq!(engine.ticks(), MAX_TICKS_PER_ROUND + 1);
    assert!(engine
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::LimitExceeded { .. })));
}

fn fused(id: u32, name: &str) -> MonsterDefinition {
    let mut definition = monster(name, 10, 1, 0, FAST);
    definition.source_cards = vec![
        noun(id, name, 10, 1, 0),
        adjective(id + 100, "Giant", 5, 0, 0),
    ];
    definition
}

#[test]
fn test_fracture_draws_from_loser_pool() {
    for seed in 0..30 {
        let mut participants = Participants::new();
        participants
            .player
            .deploy(MonsterStatus::new(MonsterId::player(1), fused(1, "Wolf")));
        participants
            .cpu
            .deploy(MonsterStatus::new(MonsterId::cpu(1), fused(2, "Golem")));
        participants
            .cpu
            .deploy(MonsterStatus::new(MonsterId::cpu(2), fused(3, "Slime")));
        let pool = fracture_pool(&participants, Side::Cpu);
        assert_eq!(pool.len(), 4);

        let outcome =
            fracture(RoundResult::PlayerWin, &mut participants, &mut seeded(seed)).unwrap();
        assert_eq!(outcome.winner, Side::Player);
        assert!(pool.contains(&outcome.to_winner));
        assert!(pool.contains(&outcome.to_loser));
        assert!(participants.player.monsters.is_empty());
        assert!(participants.cpu.monsters.is_empty());
    }
}

#[test]
fn test_draw_fractures_nothing() {
    let mut participants = Participants::new();
    participants
        .player
        .deploy(MonsterStatus::new(MonsterId::player(1), fused(1, "Wolf")));
    participants
        .cpu
        .deploy(MonsterStatus::new(MonsterId::cpu(1), fused(2, "Golem")));
    assert!(fracture(RoundResult::Draw, &mut participants, &mut seeded(7)).is_none());
    assert!(fracture(RoundResult::Unknown, &mut participants, &mut seeded(7)).is_none());
    assert!(participants.player.monsters.is_empty());
}

#[test]
fn test_presentation_handles_show_in_views() {
    let mut engine = BattleEngine::new(quiet_config());
    let wolf = engine.deploy(Side::Player, monster("Wolf", 30, 5, 0, FAST));
    engine.deploy(Side::Cpu, monster("Golem", 30, 5, 0, FAST));

    assert!(engine.attach_handle(wolf, PresentationHandle(7)));
    assert!(!engine.attach_handle(MonsterId::cpu(9), PresentationHandle(8)));

    let views = roster_views(&engine.participants().player);
    assert_eq!(views[0].id, wolf);
    assert_eq!(views[0].handle, Some(PresentationHandle(7)));
    let json = serde_json::to_value(&views[0]).unwrap();
    assert_eq!(json["handle"], 7);

    let golem = MonsterView::from(&engine.participants().cpu.monsters[0]);
    assert_eq!(golem.handle, None);
    assert!(serde_json::to_value(&golem).unwrap().get("handle").is_none());
}
