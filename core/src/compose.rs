//! Monster composition
//!
//! Folds a field slot's cards into one [`MonsterDefinition`]. The caller keeps
//! ownership of the cards; nothing is consumed here.

use crate::error::CompositionError;
use crate::types::{CardDefinition, MonsterDefinition};

/// Combine a noun with its modifier cards.
///
/// Stats are summed over every card. Skills are the noun skills followed by
/// each verb skill in input order. The name is every modifier name in input
/// order followed by the noun name. With several nouns the last one supplies
/// the name and attack interval.
pub fn compose_monster(cards: &[CardDefinition]) -> Result<MonsterDefinition, CompositionError> {
    if cards.is_empty() {
        return Err(CompositionError::NoCards);
    }
    if !cards.iter().any(CardDefinition::is_noun) {
        return Err(CompositionError::NoNounCard);
    }

    let mut prefix = String::new();
    let mut noun_name = "";
    let mut definition = MonsterDefinition {
        name: String::new(),
        hp: 0,
        attack: 0,
        defense: 0,
        evasion: 0.0,
        skills: Vec::new(),
        attack_interval_ms: 0,
        special_target: None,
        source_cards: cards.to_vec(),
    };
    let mut verb_skills = Vec::new();

    for card in cards {
        match card {
            CardDefinition::Noun(noun) => {
                definition.hp += noun.hp;
                definition.attack += noun.attack;
                definition.defense += noun.defense;
                definition.evasion += noun.evasion;
                definition.skills.extend(noun.skills.iter().cloned());
                definition.attack_interval_ms = noun.attack_interval_ms;
                noun_name = &noun.name;
            }
            CardDefinition::Verb(verb) => {
                prefix.push_str(&verb.name);
                verb_skills.push(verb.skill.clone());
            }
            CardDefinition::Adjective(adjective) => {
                prefix.push_str(&adjective.name);
                definition.hp += adjective.hp_bonus;
                definition.attack += adjective.attack_bonus;
                definition.defense += adjective.defense_bonus;
                definition.evasion += adjective.evasion_bonus;
                if adjective.special_target.is_some() {
                    definition.special_target = adjective.special_target.clone();
                }
            }
        }
    }

    definition.skills.extend(verb_skills);
    definition.name = prefix + noun_name;
    Ok(definition)
}
