//! Logging utilities
//!
//! Thin helpers over the `log` facade so engine code reads the same whatever
//! logger the host installs.

#![allow(unused)]

/// Log an info message
#[inline(always)]
pub fn info(msg: &str) {
    ::log::info!("{msg}");
}

/// Log a warning message
#[inline(always)]
pub fn warn(msg: &str) {
    ::log::warn!("{msg}");
}

/// Log an error message
#[inline(always)]
pub fn error(msg: &str) {
    ::log::error!("{msg}");
}

/// Log a debug message with a label
#[inline(always)]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!("[{label}] {msg}");
}

/// Log match progress after a round
#[inline(always)]
pub fn round_summary(
    round: u32,
    result: &str,
    player_wins: u32,
    cpu_wins: u32,
    draws: u32,
    player_hand: usize,
    cpu_hand: usize,
) {
    ::log::info!(
        "round {round}: {result} | record {player_wins}-{cpu_wins}-{draws} | hands player={player_hand} cpu={cpu_hand}"
    );
}

/// Log an action being performed
#[inline(always)]
pub fn action(name: &str, details: &str) {
    ::log::debug!(">> {name}: {details}");
}

/// Log action result
#[inline(always)]
pub fn result(success: bool, msg: &str) {
    if success {
        ::log::debug!("<< ok: {msg}");
    } else {
        ::log::warn!("<< failed: {msg}");
    }
}
