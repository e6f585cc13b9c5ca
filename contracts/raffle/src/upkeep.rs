//! # Upkeep trigger
//!
//! Decides whether a round is ready for winner selection. The check is a pure
//! function of the stored round, the config and the ledger clock, so
//! automation agents can poll it as often as they like.

use crate::types::{RaffleConfig, RoundState};

/// All four conditions must hold:
///
/// 1. the round is open;
/// 2. at least `interval` seconds have passed since the round started;
/// 3. there is at least one entrant;
/// 4. the pool holds a positive balance.
pub fn upkeep_needed(config: &RaffleConfig, round: &RoundState, now: u64) -> bool {
    let interval_elapsed = now.saturating_sub(round.last_timestamp) >= config.interval;
    round.is_open() && interval_elapsed && round.entrant_count > 0 && round.pool_balance > 0
}
