//! Chimera core: card composition and the tick-driven battle engine.
//!
//! Players fuse noun, verb and adjective cards into monsters, which then
//! fight autonomously over a fixed number of rounds. Everything here is
//! deterministic given a [`BattleRng`]; presentation layers consume the
//! emitted [`BattleEvent`]s and views.

pub mod attack;
pub mod battle;
pub mod cards;
pub mod compose;
pub mod config;
pub mod deal;
pub mod engine;
pub mod error;
pub mod fracture;
pub mod limits;
pub mod log;
pub mod opponents;
pub mod record;
pub mod registry;
pub mod rng;
pub mod state;
pub mod status;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use battle::{BattleEngine, BattleEvent, CancelReason, TickOutcome};
pub use compose::compose_monster;
pub use config::{BattleConfig, TargetEffectSource};
pub use engine::{MatchController, RoundOutput};
pub use error::{CompositionError, GameError, GameResult};
pub use fracture::FractureOutcome;
pub use limits::{MonsterId, Side};
pub use record::{MatchOutcome, MatchRecord, RoundRecord, RoundResult};
pub use rng::{BattleRng, XorShiftRng};
pub use state::{MatchPhase, MatchState};
pub use status::{MonsterCondition, MonsterStatus, PresentationHandle};
pub use types::*;
pub use view::{MatchView, MonsterView};
