//! # Payout settlement
//!
//! Handles the coordinator callback: validates the request id, picks the
//! winner, pays out the whole pool and re-opens the raffle. The ledger is
//! only reset after the transfer succeeds; a rejected transfer aborts the
//! call with `PayoutFailed` and leaves the round exactly as it was.

use soroban_sdk::{log, panic_with_error, token, Env, Vec};

use crate::types::{RaffleConfig, RaffleState, RequestSlot, RoundState};
use crate::{events, ledger, oracle, Error};

/// Map a random word onto an entrant index.
///
/// Plain modulo reduction. With 64-bit words the bias towards low indices is
/// below `entrant_count / 2^64`.
pub fn winner_index(random_word: u64, entrant_count: u32) -> u32 {
    (random_word % u64::from(entrant_count)) as u32
}

/// Settle the current round with the randomness delivered for `request_id`.
pub fn settle(
    env: &Env,
    config: &RaffleConfig,
    round: &mut RoundState,
    request_id: u64,
    random_words: &Vec<u64>,
) {
    let is_pending = round
        .pending
        .get()
        .is_some_and(|pending| pending.request_id == request_id);
    if round.state != RaffleState::Calculating || !is_pending {
        panic_with_error!(env, Error::UnknownRequest);
    }
    if round.entrant_count == 0 {
        panic_with_error!(env, Error::NoEntrants);
    }

    let word = oracle::first_word(env, random_words);
    let index = winner_index(word, round.entrant_count);
    let winner = ledger::entrant(env, round, index);
    let amount = round.pool_balance;

    let token_client = token::Client::new(env, &config.token);
    let paid = matches!(
        token_client.try_transfer(&env.current_contract_address(), &winner, &amount),
        Ok(Ok(()))
    );
    if !paid {
        panic_with_error!(env, Error::PayoutFailed);
    }

    let settled_round = round.round;
    ledger::reset(env, round);
    round.pending = RequestSlot::Empty;
    round.last_timestamp = env.ledger().timestamp();
    round.state = RaffleState::Open;
    round.recent_winner = Some(winner.clone());

    log!(env, "round settled", settled_round, index, amount);
    events::emit_winner_selected(env, settled_round, winner, amount);
}
