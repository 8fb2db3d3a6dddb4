use super::*;
use crate::battle::CancelReason;
use crate::status::MonsterCondition;

fn cancels(events: &[BattleEvent]) -> Vec<CancelReason> {
    events
        .iter()
        .filter_map(|e| match e {
            BattleEvent::ActionCancelled { reason, .. } => Some(*reason),
            _ => None,
        })
        .collect()
}

fn afflicted(config: BattleConfig, changes: &[StatChange]) -> BattleEngine {
    let mut engine = duel(
        config,
        monster("Victim", 50, 5, 0, FAST),
        monster("Dummy", 500, 0, 0, IDLE),
    );
    for change in changes {
        first(&mut engine, Side::Player).apply_stat_change(change);
    }
    engine
}

#[test]
fn test_certain_paralysis_blocks_every_action() {
    let config = BattleConfig {
        paralyze_fail_chance: 1.0,
        ..quiet_config()
    };
    let mut engine = afflicted(config, &[StatChange::permanent(StatKind::Paralyze, 1.0)]);
    let mut rng = seeded(1);
    for _ in 0..3 {
        engine.tick(&mut rng);
    }
    assert_eq!(cancels(engine.events()), vec![CancelReason::Paralyzed; 3]);
    assert!(hits(engine.events()).is_empty());
    assert!(first(&mut engine, Side::Player).has(MonsterCondition::PARALYZE));
}

#[test]
fn test_paralysis_that_never_fires_still_lingers() {
    let mut engine = afflicted(quiet_config(), &[StatChange::permanent(StatKind::Paralyze, 1.0)]);
    engine.tick(&mut seeded(2));
    assert_eq!(hits(engine.events()), vec![5]);
    assert!(first(&mut engine, Side::Player).has(MonsterCondition::PARALYZE));
}

#[test]
fn test_counted_paralysis_wears_off() {
    let mut engine = afflicted(
        quiet_config(),
        &[StatChange::for_actions(StatKind::Paralyze, 1.0, 1)],
    );
    let mut rng = seeded(3);
    engine.tick(&mut rng);
    assert!(first(&mut engine, Side::Player).has(MonsterCondition::PARALYZE));
    engine.tick(&mut rng);
    assert!(!first(&mut engine, Side::Player).has(MonsterCondition::PARALYZE));
}

#[test]
fn test_freeze_cancels_once_then_clears() {
    let config = BattleConfig {
        freeze_fail_chance: 1.0,
        ..quiet_config()
    };
    let mut engine = afflicted(config, &[StatChange::until_next_attack(StatKind::Freeze, 1.0)]);
    let mut rng = seeded(4);

    engine.tick(&mut rng);
    assert_eq!(cancels(engine.events()), vec![CancelReason::Frozen]);
    assert!(!first(&mut engine, Side::Player).has(MonsterCondition::FREEZE));

    engine.tick(&mut rng);
    assert_eq!(hits(engine.events()), vec![5]);
}

#[test]
fn test_freeze_that_does_not_fire_is_still_cleared() {
    let mut engine = afflicted(quiet_config(), &[StatChange::permanent(StatKind::Freeze, 1.0)]);
    engine.tick(&mut seeded(5));
    assert!(cancels(engine.events()).is_empty());
    assert_eq!(hits(engine.events()), vec![5]);
    assert!(!first(&mut engine, Side::Player).has(MonsterCondition::FREEZE));
}

#[test]
fn test_sleep_always_costs_one_action() {
    let mut engine = afflicted(quiet_config(), &[StatChange::permanent(StatKind::Sleep, 1.0)]);
    let mut rng = seeded(6);

    engine.tick(&mut rng);
    assert_eq!(cancels(engine.events()), vec![CancelReason::Asleep]);
    assert!(!first(&mut engine, Side::Player).has(MonsterCondition::SLEEP));

    engine.tick(&mut rng);
    assert_eq!(hits(engine.events()), vec![5]);
}

#[test]
fn test_gating_order_freeze_before_sleep() {
    // SCENARIO: Freeze fires first, so Sleep is never looked at this action
    let config = BattleConfig {
        freeze_fail_chance: 1.0,
        ..quiet_config()
    };
    let mut engine = afflicted(
        config,
        &[
            StatChange::permanent(StatKind::Sleep, 1.0),
            StatChange::permanent(StatKind::Freeze, 1.0),
        ],
    );
    let mut rng = seeded(7);

    engine.tick(&mut rng);
    assert_eq!(cancels(engine.events()), vec![CancelReason::Frozen]);
    assert!(first(&mut engine, Side::Player).has(MonsterCondition::SLEEP));

    engine.tick(&mut rng);
    assert_eq!(
        cancels(engine.events()),
        vec![CancelReason::Frozen, CancelReason::Asleep]
    );
}

#[test]
fn test_cancelled_action_does_not_age_changes() {
    let mut engine = afflicted(
        quiet_config(),
        &[
            StatChange::permanent(StatKind::Sleep, 1.0),
            StatChange::until_next_attack(StatKind::Attack, 5.0),
        ],
    );
    let mut rng = seeded(8);

    engine.tick(&mut rng);
    let victim = first(&mut engine, Side::Player);
    assert!(victim
        .stat_changes
        .iter()
        .any(|c| c.stat == StatKind::Attack));

    // The boosted attack lands, then the boost expires
    engine.tick(&mut rng);
    assert_eq!(hits(engine.events()), vec![10]);
    let victim = first(&mut engine, Side::Player);
    assert!(!victim
        .stat_changes
        .iter()
        .any(|c| c.stat == StatKind::Attack));
}

#[test]
fn test_burn_and_poison_are_inert() {
    let mut engine = afflicted(
        quiet_config(),
        &[
            StatChange::permanent(StatKind::Burn, 1.0),
            StatChange::permanent(StatKind::Poison, 1.0),
        ],
    );
    let mut rng = seeded(9);
    for _ in 0..10 {
        engine.tick(&mut rng);
    }
    let victim = first(&mut engine, Side::Player);
    assert_eq!(victim.current_hp, 50);
    assert!(victim.has(MonsterCondition::BURN | MonsterCondition::POISON));
}
