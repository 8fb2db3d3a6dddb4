//! Runtime state of one monster on the field

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::limits::{MonsterId, Side};
use crate::types::{DurationKind, MonsterDefinition, StatChange, StatKind};

bitflags! {
    /// Battle-status flags a monster can carry
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MonsterCondition: u8 {
        const PARALYZE = 1 << 0;
        const BURN = 1 << 1;
        const POISON = 1 << 2;
        const SLEEP = 1 << 3;
        const FREEZE = 1 << 4;
        const CONFUSE = 1 << 5;
        const STRIKE = 1 << 6;
        const DUPLICATE = 1 << 7;
    }
}

impl MonsterCondition {
    /// The flag a stat kind raises, if it is a condition kind
    pub fn from_stat(stat: StatKind) -> Option<Self> {
        match stat {
            StatKind::Paralyze => Some(Self::PARALYZE),
            StatKind::Burn => Some(Self::BURN),
            StatKind::Poison => Some(Self::POISON),
            StatKind::Sleep => Some(Self::SLEEP),
            StatKind::Freeze => Some(Self::FREEZE),
            StatKind::Confuse => Some(Self::CONFUSE),
            StatKind::Strike => Some(Self::STRIKE),
            StatKind::Duplicate => Some(Self::DUPLICATE),
            StatKind::Attack
            | StatKind::Defense
            | StatKind::Evasion
            | StatKind::Hp
            | StatKind::Critical => None,
        }
    }

    /// Flags that last as long as a change of their kind is held
    fn lingering() -> Self {
        Self::PARALYZE | Self::BURN | Self::POISON | Self::CONFUSE
    }
}

/// Opaque reference to the presentation object standing for a monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationHandle(pub u64);

/// Attack, defense and evasion after active changes, for one action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub attack: f32,
    pub defense: f32,
    pub evasion: f32,
}

/// Something observable that happened while aging a change list
#[derive(Debug, Clone, PartialEq)]
pub enum AgingStep {
    /// HP moved by `amount` as a per-action or final HP change
    HpAdjusted { amount: i32 },
    /// The change left the active list
    Expired { change: StatChange },
}

#[derive(Debug, Clone)]
pub struct MonsterStatus {
    pub id: MonsterId,
    pub definition: MonsterDefinition,
    /// Always within [0, definition.hp]
    pub current_hp: i32,
    /// Time accumulated since the last action
    pub cooldown_ms: u32,
    /// In application order
    pub stat_changes: Vec<StatChange>,
    pub conditions: MonsterCondition,
    pub handle: Option<PresentationHandle>,
}

impl MonsterStatus {
    pub fn new(id: MonsterId, definition: MonsterDefinition) -> Self {
        Self {
            id,
            current_hp: definition.hp.max(0),
            definition,
            cooldown_ms: 0,
            stat_changes: Vec::new(),
            conditions: MonsterCondition::empty(),
            handle: None,
        }
    }

    pub fn side(&self) -> Side {
        self.id.side
    }

    pub fn max_hp(&self) -> i32 {
        self.definition.hp.max(0)
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn has(&self, condition: MonsterCondition) -> bool {
        self.conditions.contains(condition)
    }

    pub fn has_critical(&self) -> bool {
        self.stat_changes
            .iter()
            .any(|change| change.stat == StatKind::Critical)
    }

    /// Definition stats plus every active Attack/Defense/Evasion change
    pub fn effective_stats(&self) -> EffectiveStats {
        let mut stats = EffectiveStats {
            attack: self.definition.attack as f32,
            defense: self.definition.defense as f32,
            evasion: self.definition.evasion,
        };
        for change in &self.stat_changes {
            match change.stat {
                StatKind::Attack => stats.attack += change.amount,
                StatKind::Defense => stats.defense += change.amount,
                StatKind::Evasion => stats.evasion += change.amount,
                _ => {}
            }
        }
        stats
    }

    /// Subtract damage, clamping at zero
    pub fn take_damage(&mut self, damage: i32) {
        self.current_hp = (self.current_hp - damage.max(0)).max(0);
    }

    /// Heal or hurt by a fractional amount. Returns the HP actually moved.
    pub fn adjust_hp(&mut self, amount: f32) -> i32 {
        let before = self.current_hp;
        let target = (self.current_hp as f32 + amount).round() as i32;
        self.current_hp = target.clamp(0, self.max_hp());
        self.current_hp - before
    }

    /// Take a copy of a change into the active list.
    ///
    /// Condition kinds raise their flag at once, except a counted Duplicate
    /// which raises it when the count runs out. HP only moves while a counted
    /// HP change ages.
    pub fn apply_stat_change(&mut self, change: &StatChange) {
        let counted = change.duration == DurationKind::ActionCount;
        if !(counted && change.stat == StatKind::Duplicate) {
            if let Some(flag) = MonsterCondition::from_stat(change.stat) {
                self.conditions.insert(flag);
            }
        }
        self.stat_changes.push(change.clone());
    }

    /// Run once after each completed action of this monster
    pub fn age_stat_changes(&mut self) -> Vec<AgingStep> {
        let mut steps = Vec::new();
        let mut kept = Vec::with_capacity(self.stat_changes.len());

        for mut change in core::mem::take(&mut self.stat_changes) {
            match change.duration {
                DurationKind::Permanent => kept.push(change),
                DurationKind::UntilNextAttack => steps.push(AgingStep::Expired { change }),
                DurationKind::ActionCount if change.remaining <= 0 => {
                    match change.stat {
                        StatKind::Hp => {
                            let amount = self.adjust_hp(change.amount);
                            steps.push(AgingStep::HpAdjusted { amount });
                        }
                        StatKind::Duplicate => self.conditions.insert(MonsterCondition::DUPLICATE),
                        _ => {}
                    }
                    steps.push(AgingStep::Expired { change });
                }
                DurationKind::ActionCount => {
                    if change.stat == StatKind::Hp {
                        let amount = self.adjust_hp(change.amount);
                        steps.push(AgingStep::HpAdjusted { amount });
                    }
                    change.remaining -= 1;
                    kept.push(change);
                }
            }
        }

        self.stat_changes = kept;
        self.release_expired_conditions();
        self.refresh_conditions();
        steps
    }

    /// Drop lingering flags no active change backs any more
    fn release_expired_conditions(&mut self) {
        for flag in MonsterCondition::lingering().iter() {
            let backed = self
                .stat_changes
                .iter()
                .any(|change| MonsterCondition::from_stat(change.stat) == Some(flag));
            if self.conditions.contains(flag) && !backed {
                self.conditions.remove(flag);
            }
        }
    }

    /// Burn and Poison hook. Damage over time is not implemented yet, the
    /// flags are carried through unchanged.
    fn refresh_conditions(&mut self) {
        let burn = self.has(MonsterCondition::BURN);
        self.conditions.set(MonsterCondition::BURN, burn);
        let poison = self.has(MonsterCondition::POISON);
        self.conditions.set(MonsterCondition::POISON, poison);
    }
}
