//! Match controller
//!
//! Owns the battle engine, both hands and the match record, and walks the
//! match through its phases: `Initialize`, then `WaitingForReady` and
//! `InBattle` for each round, `BattleEnd` between rounds and `Finished` once
//! the round limit is reached.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::battle::{BattleEngine, BattleEvent, TickOutcome};
use crate::cards::get_all_cards;
use crate::compose::compose_monster;
use crate::config::BattleConfig;
use crate::deal::{deal_initial, redeal};
use crate::error::{CompositionError, GameError, GameResult};
use crate::fracture::{fracture, FractureOutcome};
use crate::limits::Side;
use crate::log;
use crate::opponents::choose_field_cards;
use crate::record::{MatchOutcome, MatchRecord, RoundRecord, RoundResult};
use crate::rng::{BattleRng, XorShiftRng};
use crate::state::{MatchPhase, MatchState};
use crate::types::{CardDefinition, MonsterDefinition};
use crate::view::{roster_views, MatchView, MonsterView};

/// Everything one round produced, for playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutput {
    pub record: RoundRecord,
    pub events: Vec<BattleEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fracture: Option<FractureOutcome>,
    pub initial_player_monsters: Vec<MonsterView>,
    pub initial_cpu_monsters: Vec<MonsterView>,
}

pub struct MatchController<R: BattleRng = XorShiftRng> {
    config: BattleConfig,
    catalog: Vec<CardDefinition>,
    state: MatchState,
    battle: Option<BattleEngine>,
    initial_views: (Vec<MonsterView>, Vec<MonsterView>),
    last_round: Option<RoundOutput>,
    rng: R,
}

impl MatchController<XorShiftRng> {
    /// Controller over the built-in catalog with a seeded RNG
    pub fn with_seed(config: BattleConfig, seed: u64) -> Self {
        Self::new(config, XorShiftRng::seed_from_u64(seed))
    }
}

impl<R: BattleRng> MatchController<R> {
    pub fn new(config: BattleConfig, rng: R) -> Self {
        Self::with_catalog(config, get_all_cards(), rng)
    }

    pub fn with_catalog(config: BattleConfig, catalog: Vec<CardDefinition>, rng: R) -> Self {
        Self {
            config,
            catalog,
            state: MatchState::new(),
            battle: None,
            initial_views: (Vec::new(), Vec::new()),
            last_round: None,
            rng,
        }
    }

    // ==========================================
    // ACCESSORS
    // ==========================================

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn record(&self) -> &MatchRecord {
        &self.state.record
    }

    pub fn hand(&self, side: Side) -> &[CardDefinition] {
        self.state.hand(side)
    }

    pub fn field(&self, side: Side) -> &[MonsterDefinition] {
        self.state.field(side)
    }

    pub fn battle(&self) -> Option<&BattleEngine> {
        self.battle.as_ref()
    }

    pub fn last_round(&self) -> Option<&RoundOutput> {
        self.last_round.as_ref()
    }

    /// Overall result, once every round has been played
    pub fn outcome(&self) -> Option<MatchOutcome> {
        (self.state.phase == MatchPhase::Finished).then(|| self.state.record.overall())
    }

    pub fn view(&self) -> MatchView {
        let (player, cpu) = match &self.battle {
            Some(battle) => (
                roster_views(&battle.participants().player),
                roster_views(&battle.participants().cpu),
            ),
            None => (Vec::new(), Vec::new()),
        };
        MatchView::from_state(&self.state, self.config.rounds_per_match, player, cpu)
    }

    fn expect_phase(&self, expected: MatchPhase) -> GameResult<()> {
        let actual = self.state.phase;
        if actual == expected {
            Ok(())
        } else if actual == MatchPhase::Finished {
            Err(GameError::MatchFinished)
        } else {
            Err(GameError::WrongPhase { expected, actual })
        }
    }

    // ==========================================
    // SETUP
    // ==========================================

    /// Deal opening hands and wait for the first round
    pub fn initialize(&mut self) -> GameResult<()> {
        self.expect_phase(MatchPhase::Initialize)?;
        let per_category = self.config.initial_per_category;
        self.state.player_hand = deal_initial(&self.catalog, per_category, &mut self.rng);
        self.state.cpu_hand = deal_initial(&self.catalog, per_category, &mut self.rng);
        self.state.round = 1;
        self.state.phase = MatchPhase::WaitingForReady;
        log::info("=== MATCH INITIALIZED ===");
        Ok(())
    }

    /// Start over with an empty record
    pub fn new_match(&mut self) {
        self.state = MatchState::new();
        self.battle = None;
        self.last_round = None;
    }

    /// Compose a monster from hand cards and place it on `side`'s field.
    ///
    /// The cards leave the hand only when composition succeeds.
    pub fn compose(&mut self, side: Side, indices: &[usize]) -> GameResult<MonsterDefinition> {
        self.expect_phase(MatchPhase::WaitingForReady)?;
        let hand = self.state.hand(side);

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(GameError::DuplicateHandIndex { index: pair[0] });
            }
        }
        if let Some(&index) = sorted.iter().find(|&&index| index >= hand.len()) {
            return Err(GameError::InvalidHandIndex { index });
        }

        let cards: Vec<CardDefinition> = indices.iter().map(|&i| hand[i].clone()).collect();
        let definition = compose_monster(&cards).inspect_err(|e| {
            log::result(false, &format!("{side} composition rejected: {e}"));
        })?;

        let hand = self.state.hand_mut(side);
        for &index in sorted.iter().rev() {
            hand.remove(index);
        }
        log::result(true, &format!("{side} composed {}", definition.name));
        self.state.field_mut(side).push(definition.clone());
        Ok(definition)
    }

    /// Let the CPU logic pick and compose cards for `side`
    pub fn auto_compose(&mut self, side: Side) -> GameResult<MonsterDefinition> {
        self.expect_phase(MatchPhase::WaitingForReady)?;
        let indices = choose_field_cards(self.state.hand(side), &mut self.rng)
            .ok_or(GameError::Composition(CompositionError::NoNounCard))?;
        self.compose(side, &indices)
    }

    // ==========================================
    // BATTLE
    // ==========================================

    /// Deploy both fields and start ticking
    pub fn begin_battle(&mut self) -> GameResult<()> {
        self.expect_phase(MatchPhase::WaitingForReady)?;
        for side in Side::iter() {
            if self.state.field(side).is_empty() {
                return Err(GameError::EmptyField { side });
            }
        }

        let mut battle = BattleEngine::new(self.config.clone());
        for side in Side::iter() {
            for definition in self.state.field(side) {
                battle.deploy(side, definition.clone());
            }
        }
        self.initial_views = (
            roster_views(&battle.participants().player),
            roster_views(&battle.participants().cpu),
        );
        self.battle = Some(battle);
        self.state.phase = MatchPhase::InBattle;
        log::info(&format!("=== ROUND {} START ===", self.state.round));
        Ok(())
    }

    /// Advance the running battle by one tick
    pub fn advance(&mut self) -> GameResult<TickOutcome> {
        self.expect_phase(MatchPhase::InBattle)?;
        let Some(battle) = self.battle.as_mut() else {
            return Err(GameError::WrongPhase {
                expected: MatchPhase::InBattle,
                actual: self.state.phase,
            });
        };
        let outcome = battle.tick(&mut self.rng);
        if let TickOutcome::Ended(result) = outcome {
            self.end_round(result);
        }
        Ok(outcome)
    }

    /// Play the current round to its end and move on to the next one
    pub fn run_battle(&mut self) -> GameResult<RoundOutput> {
        if self.state.phase == MatchPhase::WaitingForReady {
            self.begin_battle()?;
        }
        while let TickOutcome::Continue = self.advance()? {}
        let output = self
            .last_round
            .clone()
            .ok_or(GameError::WrongPhase {
                expected: MatchPhase::BattleEnd,
                actual: self.state.phase,
            })?;
        self.next_round()?;
        Ok(output)
    }

    fn end_round(&mut self, result: RoundResult) {
        let Some(mut battle) = self.battle.take() else {
            return;
        };
        let events = battle.take_events();
        let fracture = fracture(result, battle.participants_mut(), &mut self.rng);

        let player_monster = self.state.player_field.first().cloned();
        let cpu_monster = self.state.cpu_field.first().cloned();
        let (Some(player_monster), Some(cpu_monster)) = (player_monster, cpu_monster) else {
            log::error("round ended without a monster on each side");
            return;
        };
        let record = RoundRecord {
            round: self.state.round,
            player_monster,
            cpu_monster,
            result,
        };
        self.state.record.push(record.clone());

        if let Some(fracture) = &fracture {
            self.state
                .hand_mut(fracture.winner)
                .push(fracture.to_winner.clone());
            self.state
                .hand_mut(fracture.winner.opponent())
                .push(fracture.to_loser.clone());
        }
        self.state.player_field.clear();
        self.state.cpu_field.clear();

        let record_so_far = &self.state.record;
        log::round_summary(
            self.state.round,
            &result.to_string(),
            record_so_far.player_wins,
            record_so_far.cpu_wins,
            record_so_far.draws,
            self.state.player_hand.len(),
            self.state.cpu_hand.len(),
        );

        let (initial_player_monsters, initial_cpu_monsters) =
            core::mem::take(&mut self.initial_views);
        self.last_round = Some(RoundOutput {
            record,
            events,
            fracture,
            initial_player_monsters,
            initial_cpu_monsters,
        });
        self.state.phase = MatchPhase::BattleEnd;
    }

    /// Leave `BattleEnd`: finish the match or redeal for the next round
    pub fn next_round(&mut self) -> GameResult<MatchPhase> {
        self.expect_phase(MatchPhase::BattleEnd)?;
        self.state.round += 1;
        if self.state.round > self.config.rounds_per_match {
            self.state.phase = MatchPhase::Finished;
            log::info(&format!(
                "=== MATCH FINISHED: {} ===",
                self.state.record.overall()
            ));
        } else {
            for side in Side::iter() {
                let hand = self.state.hand_mut(side);
                redeal(hand, &self.catalog, self.config.hand_size, &mut self.rng);
            }
            self.state.phase = MatchPhase::WaitingForReady;
        }
        Ok(self.state.phase)
    }

    /// Compose for both sides with the CPU logic and play the round
    pub fn play_auto_round(&mut self) -> GameResult<RoundOutput> {
        for side in Side::iter() {
            if self.state.field(side).is_empty() {
                self.auto_compose(side)?;
            }
        }
        self.run_battle()
    }
}
