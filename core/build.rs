//! Build script: reads /cards/cards.json and generates Rust source code that
//! statically constructs the noun, verb and adjective catalog.
//! The core crate embeds card data without any runtime JSON parsing.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

// ── JSON schema types (build-time only) ──────────────────────────────────────

#[derive(Deserialize)]
struct JsonCatalog {
    nouns: Vec<JsonNoun>,
    verbs: Vec<JsonVerb>,
    adjectives: Vec<JsonAdjective>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonNoun {
    id: u32,
    name: String,
    hp: i32,
    attack: i32,
    defense: i32,
    evasion: f32,
    /// Seconds between attacks
    attack_interval: f32,
    #[serde(default)]
    skills: Vec<JsonSkill>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonVerb {
    id: u32,
    name: String,
    skill: JsonSkill,
    #[serde(default)]
    favor_skill: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdjective {
    id: u32,
    name: String,
    #[serde(default)]
    hp: i32,
    #[serde(default)]
    attack: i32,
    #[serde(default)]
    defense: i32,
    #[serde(default)]
    evasion: f32,
    special_target: Option<JsonSpecialTarget>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSpecialTarget {
    card_id: u32,
    multiplier: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSkill {
    name: String,
    target_count: u32,
    #[serde(default)]
    is_self: bool,
    #[serde(default)]
    power: i32,
    effect: Option<JsonEffect>,
}

#[derive(Deserialize)]
struct JsonEffect {
    #[serde(default, rename = "self")]
    self_changes: Vec<JsonChange>,
    #[serde(default, rename = "target")]
    target_changes: Vec<JsonChange>,
}

#[derive(Deserialize)]
struct JsonChange {
    stat: String,
    amount: f32,
    duration: String,
    #[serde(default)]
    count: i32,
}

// ── Code generation helpers ──────────────────────────────────────────────────

fn gen_stat(stat: &str) -> String {
    match stat {
        "HP" => "StatKind::Hp".to_string(),
        "Attack" | "Defense" | "Evasion" | "Duplicate" | "Paralyze" | "Burn" | "Poison"
        | "Sleep" | "Freeze" | "Confuse" | "Strike" | "Critical" => format!("StatKind::{stat}"),
        other => panic!("Unknown stat kind: {other}"),
    }
}

fn gen_change(change: &JsonChange) -> String {
    let stat = gen_stat(&change.stat);
    let amount = change.amount;
    match change.duration.as_str() {
        "Permanent" => format!("StatChange::permanent({stat}, {amount:?})"),
        "UntilNextAttack" => format!("StatChange::until_next_attack({stat}, {amount:?})"),
        "ActionCount" => {
            let count = change.count;
            format!("StatChange::for_actions({stat}, {amount:?}, {count})")
        }
        other => panic!("Unknown duration kind: {other}"),
    }
}

fn gen_changes(changes: &[JsonChange]) -> String {
    let entries: Vec<String> = changes.iter().map(gen_change).collect();
    format!("vec![{}]", entries.join(", "))
}

fn gen_skill(skill: &JsonSkill) -> String {
    let name = &skill.name;
    let target_count = skill.target_count;
    let is_self = skill.is_self;
    let power = skill.power;
    let effect = match &skill.effect {
        Some(effect) => format!(
            "Some(CommandEffect {{ self_changes: {}, target_changes: {} }})",
            gen_changes(&effect.self_changes),
            gen_changes(&effect.target_changes)
        ),
        None => "None".to_string(),
    };

    format!(
        r#"Command {{
                    name: String::from({name:?}),
                    target_count: {target_count},
                    is_self: {is_self},
                    power: {power},
                    effect: {effect},
                }}"#
    )
}

fn gen_noun(noun: &JsonNoun) -> String {
    assert!(noun.skills.len() <= 3, "Noun '{}' has more than 3 skills", noun.name);
    let id = noun.id;
    let name = &noun.name;
    let hp = noun.hp;
    let attack = noun.attack;
    let defense = noun.defense;
    let evasion = noun.evasion;
    let interval_ms = (noun.attack_interval * 1000.0).round() as u32;
    let skills: Vec<String> = noun.skills.iter().map(gen_skill).collect();

    format!(
        r#"        CardDefinition::Noun(NounCard {{
            id: CardId({id}),
            name: String::from({name:?}),
            hp: {hp},
            attack: {attack},
            defense: {defense},
            evasion: {evasion:?},
            skills: vec![{skills}],
            attack_interval_ms: {interval_ms},
        }})"#,
        skills = skills.join(", ")
    )
}

fn gen_verb(verb: &JsonVerb) -> String {
    let id = verb.id;
    let name = &verb.name;
    let skill = gen_skill(&verb.skill);
    let favor = verb.favor_skill;

    format!(
        r#"        CardDefinition::Verb(VerbCard {{
            id: CardId({id}),
            name: String::from({name:?}),
            skill: {skill},
            favor_skill: {favor},
        }})"#
    )
}

fn gen_adjective(adjective: &JsonAdjective, names: &BTreeMap<u32, String>) -> String {
    let id = adjective.id;
    let name = &adjective.name;
    let hp = adjective.hp;
    let attack = adjective.attack;
    let defense = adjective.defense;
    let evasion = adjective.evasion;
    let special = match &adjective.special_target {
        Some(target) => {
            let card_id = target.card_id;
            let card_name = names
                .get(&card_id)
                .unwrap_or_else(|| panic!("Special target {card_id} of '{name}' not found"));
            let multiplier = target.multiplier;
            format!(
                "Some(SpecialTarget {{ card_id: CardId({card_id}), card_name: String::from({card_name:?}), multiplier: {multiplier:?} }})"
            )
        }
        None => "None".to_string(),
    };

    format!(
        r#"        CardDefinition::Adjective(AdjectiveCard {{
            id: CardId({id}),
            name: String::from({name:?}),
            hp_bonus: {hp},
            attack_bonus: {attack},
            defense_bonus: {defense},
            evasion_bonus: {evasion:?},
            special_target: {special},
        }})"#
    )
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cards_path = Path::new(&manifest_dir).join("../cards/cards.json");

    // Tell Cargo to re-run if the JSON changes
    println!("cargo:rerun-if-changed={}", cards_path.display());

    let cards_json = fs::read_to_string(&cards_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", cards_path.display()));
    let catalog: JsonCatalog =
        serde_json::from_str(&cards_json).expect("Failed to parse cards.json");

    let mut names = BTreeMap::new();
    let all_ids = catalog
        .nouns
        .iter()
        .map(|c| (c.id, &c.name))
        .chain(catalog.verbs.iter().map(|c| (c.id, &c.name)))
        .chain(catalog.adjectives.iter().map(|c| (c.id, &c.name)));
    for (id, name) in all_ids {
        if names.insert(id, name.clone()).is_some() {
            panic!("Duplicate card id {id} in cards.json");
        }
    }

    // ── Generate cards ───────────────────────────────────────────────────────
    let mut entries: Vec<String> = catalog.nouns.iter().map(gen_noun).collect();
    entries.extend(catalog.verbs.iter().map(gen_verb));
    entries.extend(
        catalog
            .adjectives
            .iter()
            .map(|adjective| gen_adjective(adjective, &names)),
    );

    // ── Write output ─────────────────────────────────────────────────────────
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("cards_generated.rs");

    let generated = format!(
        r#"// Auto-generated from cards.json — DO NOT EDIT
use std::collections::BTreeMap;
use crate::types::*;

/// Returns every card defined in cards.json, nouns first, then verbs, then adjectives.
pub fn get_all_cards() -> Vec<CardDefinition> {{
    vec![
{}
    ]
}}

/// Build a CardId → CardDefinition lookup map from the static card data.
pub fn build_card_pool() -> BTreeMap<CardId, CardDefinition> {{
    get_all_cards().into_iter().map(|c| (c.id(), c)).collect()
}}
"#,
        entries.join(",\n"),
    );

    fs::write(&dest, generated).expect("Failed to write generated cards file");
}
