use super::*;
use crate::battle::TickOutcome;
use crate::limits::MonsterId;
use crate::record::RoundResult;

fn fatigue_hits(events: &[BattleEvent], id: MonsterId) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, BattleEvent::FatigueDamage { monster_id, .. } if *monster_id == id))
        .count()
}

#[test]
fn test_one_fatigue_per_hundred_ticks() {
    let mut engine = duel(
        quiet_config(),
        monster("Idle A", 1000, 0, 0, IDLE),
        monster("Idle B", 1000, 0, 0, IDLE),
    );
    let mut rng = seeded(1);

    for _ in 0..99 {
        engine.tick(&mut rng);
    }
    assert_eq!(fatigue_hits(engine.events(), MonsterId::player(1)), 0);

    engine.tick(&mut rng);
    assert_eq!(fatigue_hits(engine.events(), MonsterId::player(1)), 1);
    assert_eq!(fatigue_hits(engine.events(), MonsterId::cpu(1)), 1);

    for _ in 0..200 {
        engine.tick(&mut rng);
    }
    assert_eq!(engine.elapsed_ms(), 30_000);
    assert_eq!(fatigue_hits(engine.events(), MonsterId::player(1)), 3);
    assert_eq!(fatigue_hits(engine.events(), MonsterId::cpu(1)), 3);
    assert_eq!(first(&mut engine, Side::Player).current_hp, 970);
    assert_eq!(first(&mut engine, Side::Cpu).current_hp, 970);
}

#[test]
fn test_custom_fatigue_amount_and_interval() {
    let config = BattleConfig {
        slip_damage_interval_ms: 1_000,
        fatigue_damage: 3,
        ..quiet_config()
    };
    let mut engine = duel(
        config,
        monster("Idle A", 100, 0, 0, IDLE),
        monster("Idle B", 100, 0, 0, IDLE),
    );
    let mut rng = seeded(2);
    for _ in 0..50 {
        engine.tick(&mut rng);
    }
    assert_eq!(first(&mut engine, Side::Player).current_hp, 85);
}

#[test]
fn test_fatigue_wiping_both_sides_is_a_draw() {
    let mut engine = duel(
        quiet_config(),
        monster("Frail A", 10, 0, 0, IDLE),
        monster("Frail B", 7, 0, 0, IDLE),
    );
    let mut rng = seeded(3);
    for _ in 0..99 {
        assert_eq!(engine.tick(&mut rng), TickOutcome::Continue);
    }
    assert_eq!(engine.tick(&mut rng), TickOutcome::Ended(RoundResult::Draw));
    assert_eq!(first(&mut engine, Side::Cpu).current_hp, 0, "clamped at zero");
}
