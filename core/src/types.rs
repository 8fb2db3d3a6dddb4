use serde::{Deserialize, Serialize};

/// Unique identifier for catalog cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

/// Which kind of catalog card this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardCategory {
    Noun,
    Verb,
    Adjective,
}

/// What a stat change modifies.
///
/// Attack, Defense and Evasion feed the effective stat snapshot. HP heals or
/// hurts. The remaining kinds raise a condition flag on the holder, and
/// Critical arms the critical-hit roll while it stays in the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Attack,
    Defense,
    Evasion,
    #[serde(rename = "HP")]
    Hp,
    Duplicate,
    Paralyze,
    Burn,
    Poison,
    Sleep,
    Freeze,
    Confuse,
    Strike,
    Critical,
}

impl StatKind {
    /// True for the kinds summed into the effective stat snapshot
    pub fn is_combat_stat(self) -> bool {
        matches!(self, StatKind::Attack | StatKind::Defense | StatKind::Evasion)
    }
}

/// How long a stat change stays in the holder's active list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    /// Never removed automatically
    Permanent,
    /// Removed once the holder completes its next attack
    UntilNextAttack,
    /// Counts down once per attack, resolved and removed after reaching zero
    ActionCount,
}

/// One timed modifier. Copied by value into whichever monster receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatChange {
    pub stat: StatKind,
    pub amount: f32,
    pub duration: DurationKind,
    /// Remaining actions for `DurationKind::ActionCount`, ignored otherwise
    #[serde(default)]
    pub remaining: i32,
}

impl StatChange {
    pub fn permanent(stat: StatKind, amount: f32) -> Self {
        Self {
            stat,
            amount,
            duration: DurationKind::Permanent,
            remaining: 0,
        }
    }

    pub fn until_next_attack(stat: StatKind, amount: f32) -> Self {
        Self {
            stat,
            amount,
            duration: DurationKind::UntilNextAttack,
            remaining: 0,
        }
    }

    pub fn for_actions(stat: StatKind, amount: f32, actions: i32) -> Self {
        Self {
            stat,
            amount,
            duration: DurationKind::ActionCount,
            remaining: actions,
        }
    }
}

/// Secondary changes attached to a skill
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEffect {
    /// Applied to the caster
    #[serde(default)]
    pub self_changes: Vec<StatChange>,
    /// Applied to each resolved target
    #[serde(default)]
    pub target_changes: Vec<StatChange>,
}

/// A skill a monster can pick when its attack comes up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub name: String,
    pub target_count: u32,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub power: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<CommandEffect>,
}

impl Command {
    pub fn new(name: &str, target_count: u32, power: i32) -> Self {
        Self {
            name: name.to_string(),
            target_count,
            is_self: false,
            power,
            effect: None,
        }
    }

    pub fn self_targeted(name: &str) -> Self {
        Self {
            name: name.to_string(),
            target_count: 0,
            is_self: true,
            power: 0,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: CommandEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Bonus damage against one particular card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialTarget {
    pub card_id: CardId,
    pub card_name: String,
    pub multiplier: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NounCard {
    pub id: CardId,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub evasion: f32,
    pub skills: Vec<Command>,
    /// Milliseconds between attacks
    pub attack_interval_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbCard {
    pub id: CardId,
    pub name: String,
    pub skill: Command,
    /// Presentation hint only
    #[serde(default)]
    pub favor_skill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjectiveCard {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub hp_bonus: i32,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub defense_bonus: i32,
    #[serde(default)]
    pub evasion_bonus: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_target: Option<SpecialTarget>,
}

/// An immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum CardDefinition {
    Noun(NounCard),
    Verb(VerbCard),
    Adjective(AdjectiveCard),
}

impl CardDefinition {
    pub fn id(&self) -> CardId {
        match self {
            CardDefinition::Noun(card) => card.id,
            CardDefinition::Verb(card) => card.id,
            CardDefinition::Adjective(card) => card.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CardDefinition::Noun(card) => &card.name,
            CardDefinition::Verb(card) => &card.name,
            CardDefinition::Adjective(card) => &card.name,
        }
    }

    pub fn category(&self) -> CardCategory {
        match self {
            CardDefinition::Noun(_) => CardCategory::Noun,
            CardDefinition::Verb(_) => CardCategory::Verb,
            CardDefinition::Adjective(_) => CardCategory::Adjective,
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, CardDefinition::Noun(_))
    }
}

/// A composed combatant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterDefinition {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    /// Summed as-is; only clamped when an evasion roll is made
    pub evasion: f32,
    pub skills: Vec<Command>,
    pub attack_interval_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_target: Option<SpecialTarget>,
    /// The exact cards this monster was composed from
    pub source_cards: Vec<CardDefinition>,
}

impl MonsterDefinition {
    /// Bonus multiplier when `other` is named exactly like the special target
    pub fn special_multiplier_against(&self, other: &MonsterDefinition) -> Option<f32> {
        let target = self.special_target.as_ref()?;
        (other.name == target.card_name).then_some(target.multiplier)
    }
}
