//! # Entry ledger
//!
//! Records paid entries for the current round. Entrant `i` of round `r` is
//! stored under `Entrant(r, i)`; `RoundState::entrant_count` is the length of
//! the sequence. Clearing is O(1): [`reset`] moves to a new round index, so
//! the previous round's entries are never read again.

use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::types::{RaffleConfig, RoundState};
use crate::{events, storage, Error};

/// Admit `player` into the current round for `amount`.
///
/// Fee is checked before state so an underpaying call is reported as such
/// regardless of the round's status. The token transfer happens before any
/// ledger write; a failed transfer aborts the whole invocation.
pub fn record_entry(
    env: &Env,
    config: &RaffleConfig,
    round: &mut RoundState,
    player: &Address,
    amount: i128,
) {
    if amount < config.entrance_fee {
        panic_with_error!(env, Error::InsufficientFee);
    }
    if !round.is_open() {
        panic_with_error!(env, Error::RaffleNotOpen);
    }

    let pool_balance = round
        .pool_balance
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    let next_count = round
        .entrant_count
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));

    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(player, &env.current_contract_address(), &amount);

    storage::save_entrant(env, round.round, round.entrant_count, player);
    round.entrant_count = next_count;
    round.pool_balance = pool_balance;

    log!(env, "entry recorded", round.round, round.entrant_count);
    events::emit_entry_recorded(env, round.round, player.clone(), amount, round.last_timestamp);
}

/// Entrant at `index` in the current round.
/// Panics with `Error::EntrantNotFound` when `index` is out of range.
pub fn entrant(env: &Env, round: &RoundState, index: u32) -> Address {
    if index >= round.entrant_count {
        panic_with_error!(env, Error::EntrantNotFound);
    }
    storage::load_entrant(env, round.round, index)
}

/// Drop all entries and the pool. Only called from settlement, after the
/// payout transfer has succeeded. Panics with `Error::Overflow` once the
/// round index is exhausted.
pub(crate) fn reset(env: &Env, round: &mut RoundState) {
    round.round = round
        .round
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    round.entrant_count = 0;
    round.pool_balance = 0;
}
