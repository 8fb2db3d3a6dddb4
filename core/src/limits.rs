//! Battle limits to prevent runaway rounds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Ticks after which a round is abandoned with an `Unknown` result
pub const MAX_TICKS_PER_ROUND: u32 = 100_000;
/// Duplications allowed per round across both sides
pub const MAX_DUPLICATES_PER_ROUND: u32 = 32;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    #[strum(serialize = "PLAYER")]
    Player,
    #[strum(serialize = "CPU")]
    Cpu,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

/// Identity of one monster instance within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterId {
    pub side: Side,
    pub serial: u32,
}

impl MonsterId {
    pub fn player(serial: u32) -> Self {
        Self {
            side: Side::Player,
            serial,
        }
    }

    pub fn cpu(serial: u32) -> Self {
        Self {
            side: Side::Cpu,
            serial,
        }
    }
}

impl core::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.side, self.serial)
    }
}

/// Tracks per-round counters and hands out monster ids
#[derive(Debug, Clone, Default)]
pub struct BattleLimits {
    pub ticks: u32,
    pub duplicates: u32,
    pub limit_exceeded_reason: Option<String>,
    next_player_serial: u32,
    next_cpu_serial: u32,
}

impl BattleLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_id(&mut self, side: Side) -> MonsterId {
        let counter = match side {
            Side::Player => &mut self.next_player_serial,
            Side::Cpu => &mut self.next_cpu_serial,
        };
        *counter += 1;
        MonsterId {
            side,
            serial: *counter,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.limit_exceeded_reason.is_some()
    }

    /// Count one tick. Errs once the round has run too long.
    pub fn record_tick(&mut self) -> Result<(), ()> {
        self.ticks += 1;
        if self.ticks > MAX_TICKS_PER_ROUND {
            self.limit_exceeded_reason = Some(format!(
                "Tick limit exceeded (max {})",
                MAX_TICKS_PER_ROUND
            ));
            return Err(());
        }
        Ok(())
    }

    /// Reserve one duplication. Errs when the round budget is spent.
    pub fn record_duplicate(&mut self) -> Result<(), ()> {
        if self.duplicates >= MAX_DUPLICATES_PER_ROUND {
            return Err(());
        }
        self.duplicates += 1;
        Ok(())
    }
}
