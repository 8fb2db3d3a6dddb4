//! Tick-driven battle engine
//!
//! A round advances one fixed logical tick at a time. Each tick applies
//! fatigue when due, checks for a wiped side, lets every player monster whose
//! cooldown has elapsed act, then every CPU monster, and finally admits the
//! monsters duplicated during the tick. Nothing here waits on presentation:
//! everything observable is appended to the event list.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::attack::{resolve_action, ActionScope};
use crate::config::BattleConfig;
use crate::limits::{BattleLimits, MonsterId, Side};
use crate::log;
use crate::record::RoundResult;
use crate::registry::Participants;
use crate::rng::BattleRng;
use crate::status::{MonsterStatus, PresentationHandle};
use crate::types::{MonsterDefinition, StatChange};

/// Why a monster lost its action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CancelReason {
    Paralyzed,
    Frozen,
    Asleep,
}

/// Events generated during a round for presentation playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum BattleEvent {
    #[serde(rename_all = "camelCase")]
    FatigueDamage {
        monster_id: MonsterId,
        damage: i32,
        remaining_hp: i32,
    },
    #[serde(rename_all = "camelCase")]
    ActionCancelled {
        monster_id: MonsterId,
        reason: CancelReason,
    },
    #[serde(rename_all = "camelCase")]
    Duplicated {
        source_id: MonsterId,
        clone_id: MonsterId,
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    DuplicateSkipped { monster_id: MonsterId },
    #[serde(rename_all = "camelCase")]
    NoSkill { monster_id: MonsterId },
    #[serde(rename_all = "camelCase")]
    SkillUsed {
        monster_id: MonsterId,
        skill: String,
        targets: Vec<MonsterId>,
    },
    #[serde(rename_all = "camelCase")]
    SelfEffectApplied { monster_id: MonsterId, skill: String },
    #[serde(rename_all = "camelCase")]
    Evaded {
        attacker_id: MonsterId,
        target_id: MonsterId,
    },
    #[serde(rename_all = "camelCase")]
    Hit {
        attacker_id: MonsterId,
        target_id: MonsterId,
        damage: i32,
        critical: bool,
        special: bool,
        remaining_hp: i32,
    },
    #[serde(rename_all = "camelCase")]
    StatChangeApplied {
        monster_id: MonsterId,
        change: StatChange,
    },
    #[serde(rename_all = "camelCase")]
    StatChangeExpired {
        monster_id: MonsterId,
        change: StatChange,
    },
    #[serde(rename_all = "camelCase")]
    HpAdjusted {
        monster_id: MonsterId,
        amount: i32,
        remaining_hp: i32,
    },
    #[serde(rename_all = "camelCase")]
    MonsterDefeated { monster_id: MonsterId },
    /// Presentation cue, fired once per round when a side is wiped by an attack
    #[serde(rename_all = "camelCase")]
    SlowMotion { wiped: Side },
    #[serde(rename_all = "camelCase")]
    LimitExceeded { reason: String },
    #[serde(rename_all = "camelCase")]
    RoundEnd { result: RoundResult, ticks: u32 },
}

/// What a single tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Ended(RoundResult),
}

/// Runs one round between the monsters deployed on each side
#[derive(Debug, Clone)]
pub struct BattleEngine {
    config: BattleConfig,
    participants: Participants,
    limits: BattleLimits,
    events: Vec<BattleEvent>,
    elapsed_ms: u64,
    slip_accumulator_ms: u32,
    slow_motion_fired: bool,
    result: Option<RoundResult>,
}

impl BattleEngine {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            participants: Participants::new(),
            limits: BattleLimits::new(),
            events: Vec::new(),
            elapsed_ms: 0,
            slip_accumulator_ms: 0,
            slow_motion_fired: false,
            result: None,
        }
    }

    /// Put a monster on the field at full HP
    pub fn deploy(&mut self, side: Side, definition: MonsterDefinition) -> MonsterId {
        let id = self.limits.generate_id(side);
        log::debug("deploy", &format!("{} as {}", definition.name, id));
        self.participants
            .side_mut(side)
            .deploy(MonsterStatus::new(id, definition));
        id
    }

    /// Link a presentation object to a monster. False if the id is unknown.
    pub fn attach_handle(&mut self, id: MonsterId, handle: PresentationHandle) -> bool {
        match self.participants.find_mut(id) {
            Some(monster) => {
                monster.handle = Some(handle);
                true
            }
            None => {
                log::warn(&format!("attach_handle: no monster {id}"));
                false
            }
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    pub fn participants_mut(&mut self) -> &mut Participants {
        &mut self.participants
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn ticks(&self) -> u32 {
        self.limits.ticks
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Advance the round by one tick. Once ended, keeps returning the result.
    pub fn tick<R: BattleRng>(&mut self, rng: &mut R) -> TickOutcome {
        if let Some(result) = self.result {
            return TickOutcome::Ended(result);
        }

        if self.limits.record_tick().is_err() {
            let reason = self
                .limits
                .limit_exceeded_reason
                .clone()
                .unwrap_or_default();
            log::warn(&format!("round abandoned: {reason}"));
            self.events.push(BattleEvent::LimitExceeded { reason });
            return self.finish(RoundResult::Unknown);
        }

        let tick_ms = self.config.tick_interval_ms;
        self.elapsed_ms += u64::from(tick_ms);
        self.slip_accumulator_ms += tick_ms;
        if self.slip_accumulator_ms >= self.config.slip_damage_interval_ms {
            self.slip_accumulator_ms -= self.config.slip_damage_interval_ms;
            self.apply_fatigue();
        }

        if self.participants.any_side_defeated() {
            let result = self.outcome();
            return self.finish(result);
        }

        for side in Side::iter() {
            self.run_side(side, rng);
        }

        let joined =
            self.participants.player.flush_pending() + self.participants.cpu.flush_pending();
        if joined > 0 {
            log::debug("tick", &format!("{joined} duplicate(s) joined the field"));
        }

        TickOutcome::Continue
    }

    /// Tick until the round ends
    pub fn run_to_end<R: BattleRng>(&mut self, rng: &mut R) -> RoundResult {
        loop {
            if let TickOutcome::Ended(result) = self.tick(rng) {
                return result;
            }
        }
    }

    fn run_side<R: BattleRng>(&mut self, side: Side, rng: &mut R) {
        let tick_ms = self.config.tick_interval_ms;
        let order = self.participants.side(side).living_indices();

        for index in order {
            if self.participants.side(side.opponent()).all_defeated() {
                break;
            }
            let monster = &mut self.participants.side_mut(side).monsters[index];
            if !monster.is_alive() {
                continue;
            }
            monster.cooldown_ms += tick_ms;
            if monster.cooldown_ms < monster.definition.attack_interval_ms {
                continue;
            }

            let mut scope = ActionScope {
                config: &self.config,
                limits: &mut self.limits,
                events: &mut self.events,
                slow_motion_fired: &mut self.slow_motion_fired,
            };
            resolve_action(&mut self.participants, side, index, &mut scope, rng);
            self.participants.side_mut(side).monsters[index].cooldown_ms = 0;
        }
    }

    fn apply_fatigue(&mut self) {
        let damage = self.config.fatigue_damage;
        log::debug("fatigue", &format!("{damage} to every living monster"));
        for side in Side::iter() {
            for monster in self.participants.side_mut(side).monsters.iter_mut() {
                if !monster.is_alive() {
                    continue;
                }
                monster.take_damage(damage);
                self.events.push(BattleEvent::FatigueDamage {
                    monster_id: monster.id,
                    damage,
                    remaining_hp: monster.current_hp,
                });
                if !monster.is_alive() {
                    self.events.push(BattleEvent::MonsterDefeated {
                        monster_id: monster.id,
                    });
                }
            }
        }
    }

    fn outcome(&self) -> RoundResult {
        match (
            self.participants.player.all_defeated(),
            self.participants.cpu.all_defeated(),
        ) {
            (true, true) => RoundResult::Draw,
            (false, true) => RoundResult::PlayerWin,
            (true, false) => RoundResult::CpuWin,
            (false, false) => RoundResult::Unknown,
        }
    }

    fn finish(&mut self, result: RoundResult) -> TickOutcome {
        self.result = Some(result);
        self.events.push(BattleEvent::RoundEnd {
            result,
            ticks: self.limits.ticks,
        });
        log::info(&format!(
            "round over after {} ticks ({} ms): {}",
            self.limits.ticks, self.elapsed_ms, result
        ));
        TickOutcome::Ended(result)
    }
}
