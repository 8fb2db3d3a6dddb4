//! Resolution of a single monster action

use crate::battle::{BattleEvent, CancelReason};
use crate::config::{BattleConfig, TargetEffectSource};
use crate::limits::{BattleLimits, Side};
use crate::log;
use crate::registry::{Participants, Roster};
use crate::rng::BattleRng;
use crate::status::{AgingStep, MonsterCondition, MonsterStatus};
use crate::types::{Command, StatChange};

/// Skills with this name are stripped from duplicates
pub const DUPLICATE_SKILL_NAME: &str = "Duplicate";

/// Engine state an action may touch besides the two rosters
pub struct ActionScope<'a> {
    pub config: &'a BattleConfig,
    pub limits: &'a mut BattleLimits,
    pub events: &'a mut Vec<BattleEvent>,
    pub slow_motion_fired: &'a mut bool,
}

// ==========================================
// ACTION ENTRY POINT
// ==========================================

/// Resolve one action of `side`'s monster at `index` against the other side.
///
/// The caller resets the cooldown afterwards whatever happened here.
pub fn resolve_action<R: BattleRng>(
    participants: &mut Participants,
    side: Side,
    index: usize,
    scope: &mut ActionScope,
    rng: &mut R,
) {
    let (actors, opponents) = participants.split_mut(side);
    let Some(actor) = actors.monsters.get_mut(index) else {
        log::warn(&format!("resolve_action: no {side} monster at {index}"));
        return;
    };
    let actor_id = actor.id;

    if actor.has(MonsterCondition::DUPLICATE) {
        actor.conditions.remove(MonsterCondition::DUPLICATE);
        duplicate(actors, index, scope);
        return;
    }
    if let Some(reason) = gate_action(actor, scope.config, rng) {
        log::action("cancelled", &format!("{actor_id} {reason:?}"));
        scope.events.push(BattleEvent::ActionCancelled {
            monster_id: actor_id,
            reason,
        });
        return;
    }

    let stats = actor.effective_stats();
    if actor.definition.skills.is_empty() {
        log::warn(&format!("{} has no skills, skipping", actor.definition.name));
        scope.events.push(BattleEvent::NoSkill {
            monster_id: actor_id,
        });
        return;
    }
    let pick = rng.gen_range(actor.definition.skills.len());
    let skill = actor.definition.skills[pick].clone();

    if skill.is_self {
        apply_to_self(actor, &skill, scope);
        return;
    }

    let targets = select_targets(opponents, &skill, rng);
    log::action(
        &skill.name,
        &format!("{} -> {} target(s)", actor.definition.name, targets.len()),
    );
    scope.events.push(BattleEvent::SkillUsed {
        monster_id: actor_id,
        skill: skill.name.clone(),
        targets: targets.iter().map(|&t| opponents.monsters[t].id).collect(),
    });

    for target_index in targets {
        strike_target(actors, index, opponents, target_index, &skill, stats.attack, scope, rng);
    }

    let actor = &mut actors.monsters[index];
    for step in actor.age_stat_changes() {
        scope.events.push(match step {
            AgingStep::HpAdjusted { amount } => BattleEvent::HpAdjusted {
                monster_id: actor_id,
                amount,
                remaining_hp: actor.current_hp,
            },
            AgingStep::Expired { change } => BattleEvent::StatChangeExpired {
                monster_id: actor_id,
                change,
            },
        });
    }
}

// ==========================================
// GATING
// ==========================================

/// Paralyze, Freeze and Sleep checks, in that order
fn gate_action<R: BattleRng>(
    actor: &mut MonsterStatus,
    config: &BattleConfig,
    rng: &mut R,
) -> Option<CancelReason> {
    if actor.has(MonsterCondition::PARALYZE) && rng.chance(config.paralyze_fail_chance) {
        return Some(CancelReason::Paralyzed);
    }
    if actor.has(MonsterCondition::FREEZE) {
        actor.conditions.remove(MonsterCondition::FREEZE);
        if rng.chance(config.freeze_fail_chance) {
            return Some(CancelReason::Frozen);
        }
    }
    if actor.has(MonsterCondition::SLEEP) {
        actor.conditions.remove(MonsterCondition::SLEEP);
        return Some(CancelReason::Asleep);
    }
    None
}

// ==========================================
// TARGETING AND DAMAGE
// ==========================================

fn select_targets<R: BattleRng>(opponents: &Roster, skill: &Command, rng: &mut R) -> Vec<usize> {
    let living = opponents.living_indices();
    let count = skill.target_count as usize;
    if count >= living.len() {
        return living;
    }
    rng.sample_indices(living.len(), count)
        .into_iter()
        .map(|i| living[i])
        .collect()
}

/// `max(raw * floor, raw - max(defense, 0))`, never negative
pub fn compute_damage(raw: f32, defense: f32, floor_ratio: f32) -> i32 {
    let damage = (raw * floor_ratio).max(raw - defense.max(0.0));
    damage.max(0.0).round() as i32
}

#[allow(clippy::too_many_arguments)]
fn strike_target<R: BattleRng>(
    actors: &mut Roster,
    actor_index: usize,
    opponents: &mut Roster,
    target_index: usize,
    skill: &Command,
    attack: f32,
    scope: &mut ActionScope,
    rng: &mut R,
) {
    let actor = &mut actors.monsters[actor_index];
    let target = &mut opponents.monsters[target_index];
    let (actor_id, target_id) = (actor.id, target.id);
    let target_stats = target.effective_stats();

    if actor.has(MonsterCondition::STRIKE) {
        actor.conditions.remove(MonsterCondition::STRIKE);
    } else if rng.chance(target_stats.evasion.clamp(0.0, 1.0)) {
        scope.events.push(BattleEvent::Evaded {
            attacker_id: actor_id,
            target_id,
        });
        return;
    }

    let special = actor.definition.special_multiplier_against(&target.definition);
    let mut raw = (attack + skill.power as f32) * special.unwrap_or(1.0);
    let critical = actor.has_critical() && rng.chance(scope.config.critical_chance);
    if critical {
        raw *= scope.config.critical_multiplier;
    }
    let damage = compute_damage(raw, target_stats.defense, scope.config.damage_floor_ratio);
    target.take_damage(damage);
    scope.events.push(BattleEvent::Hit {
        attacker_id: actor_id,
        target_id,
        damage,
        critical,
        special: special.is_some(),
        remaining_hp: target.current_hp,
    });

    if let Some(effect) = &skill.effect {
        for change in &effect.self_changes {
            apply_change(actor, change, scope.events);
        }
        if target.is_alive() {
            let target_changes = match scope.config.target_effect_source {
                TargetEffectSource::SelfChanges => &effect.self_changes,
                TargetEffectSource::TargetChanges => &effect.target_changes,
            };
            for change in target_changes {
                apply_change(target, change, scope.events);
            }
        }
    }

    if !target.is_alive() {
        log::action("defeated", &target.definition.name);
        scope.events.push(BattleEvent::MonsterDefeated {
            monster_id: target_id,
        });
        if !*scope.slow_motion_fired {
            let wiped = if opponents.all_defeated() {
                Some(actor_id.side.opponent())
            } else if actors.all_defeated() {
                Some(actor_id.side)
            } else {
                None
            };
            if let Some(wiped) = wiped {
                *scope.slow_motion_fired = true;
                scope.events.push(BattleEvent::SlowMotion { wiped });
            }
        }
    }
}

// ==========================================
// EFFECTS
// ==========================================

fn apply_change(monster: &mut MonsterStatus, change: &StatChange, events: &mut Vec<BattleEvent>) {
    monster.apply_stat_change(change);
    events.push(BattleEvent::StatChangeApplied {
        monster_id: monster.id,
        change: change.clone(),
    });
}

/// Self-targeted skills put both change lists on the caster and end the action
fn apply_to_self(actor: &mut MonsterStatus, skill: &Command, scope: &mut ActionScope) {
    log::action(&skill.name, &format!("{} on itself", actor.definition.name));
    scope.events.push(BattleEvent::SelfEffectApplied {
        monster_id: actor.id,
        skill: skill.name.clone(),
    });
    if let Some(effect) = &skill.effect {
        for change in effect.self_changes.iter().chain(&effect.target_changes) {
            apply_change(actor, change, scope.events);
        }
    }
}

// ==========================================
// DUPLICATION
// ==========================================

/// Queue a full-HP copy of the monster for the next tick
fn duplicate(actors: &mut Roster, index: usize, scope: &mut ActionScope) {
    let source = &actors.monsters[index];
    if scope.limits.record_duplicate().is_err() {
        log::warn(&format!(
            "duplicate limit reached, {} does not split",
            source.definition.name
        ));
        scope.events.push(BattleEvent::DuplicateSkipped {
            monster_id: source.id,
        });
        return;
    }

    let mut definition = source.definition.clone();
    definition
        .skills
        .retain(|skill| skill.name != DUPLICATE_SKILL_NAME);
    let clone_id = scope.limits.generate_id(source.side());
    scope.events.push(BattleEvent::Duplicated {
        source_id: source.id,
        clone_id,
        name: definition.name.clone(),
    });
    log::action("duplicate", &format!("{} -> {}", source.id, clone_id));
    actors.queue(MonsterStatus::new(clone_id, definition));
}
