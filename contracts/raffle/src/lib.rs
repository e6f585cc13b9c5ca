//! # Raffle Contract
//!
//! A time-gated lottery. Players pay an entrance fee into a shared pool; once
//! the round interval has elapsed any automation agent can trigger upkeep,
//! which asks an external VRF coordinator for randomness. The coordinator's
//! callback picks the winner, pays out the entire pool and opens the next
//! round.
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Bootstrap    | [`Raffle::init`], [`Raffle::network_preset`]    |
//! | Entry        | [`Raffle::enter`]                               |
//! | Upkeep       | [`Raffle::check_upkeep`], [`Raffle::perform_upkeep`] |
//! | Settlement   | [`Raffle::fulfill_randomness`]                  |
//! | Recovery     | [`Raffle::retry_randomness`]                    |
//! | Ownership    | `owner`, `transfer_ownership`                   |
//! | Queries      | `get_state`, `get_entrance_fee`, `get_entrant`, ... |
//!
//! ## Architecture
//!
//! Fee admission lives in [`ledger`], the readiness check in [`upkeep`], the
//! coordinator boundary in [`oracle`] and the payout in [`settle`]. Storage
//! access is delegated to `storage`. Entry points here load the round, hand
//! it to those modules by exclusive reference and save it back.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, Address, Env, Vec,
};

pub mod events;
pub mod ledger;
pub mod network;
pub mod oracle;
pub mod ownership;
pub mod settle;
mod storage;
mod types;
pub mod upkeep;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{
    Network, NetworkPreset, PendingRequest, RaffleConfig, RaffleState, RequestSlot, RoundState,
    MAX_INTERVAL, MAX_REQUEST_TIMEOUT,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidConfig = 4,
    InsufficientFee = 5,
    RaffleNotOpen = 6,
    UpkeepNotNeeded = 7,
    UnknownRequest = 8,
    NoEntrants = 9,
    PayoutFailed = 10,
    MissingRandomWord = 11,
    EntrantNotFound = 12,
    Overflow = 13,
    NoPendingRequest = 14,
    RetryTooEarly = 15,
}

#[contract]
pub struct Raffle;

#[contractimpl]
impl Raffle {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the raffle with its immutable configuration.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` must sign; it may later re-request randomness for a stuck round.
    /// - `config` must pass [`RaffleConfig::is_valid`], else `InvalidConfig`.
    /// - The first round opens at the current ledger time.
    pub fn init(env: Env, owner: Address, config: RaffleConfig) {
        owner.require_auth();
        ownership::init_owner(&env, &owner);
        if !config.is_valid() {
            panic_with_error!(&env, Error::InvalidConfig);
        }
        storage::save_config(&env, &config);
        storage::save_round(&env, &RoundState::genesis(env.ledger().timestamp()));
    }

    /// Configuration defaults for `network`.
    pub fn network_preset(env: Env, network: Network) -> NetworkPreset {
        network::preset(&env, network)
    }

    // ─────────────────────────────────────────────────────────
    // Entry
    // ─────────────────────────────────────────────────────────

    /// Pay `amount` of the fee token to enter the current round.
    ///
    /// Fails with `InsufficientFee` below the entrance fee and with
    /// `RaffleNotOpen` while a winner is being calculated. Paying more than
    /// the fee is allowed; the whole amount goes into the pool.
    pub fn enter(env: Env, player: Address, amount: i128) {
        player.require_auth();
        let (config, mut round) = storage::load_config_and_round(&env);
        ledger::record_entry(&env, &config, &mut round, &player, amount);
        storage::save_round(&env, &round);
    }

    // ─────────────────────────────────────────────────────────
    // Upkeep
    // ─────────────────────────────────────────────────────────

    /// `true` when the round is open, the interval has elapsed and the pool
    /// is non-empty. Read-only.
    pub fn check_upkeep(env: Env) -> bool {
        let (config, round) = storage::load_config_and_round(&env);
        upkeep::upkeep_needed(&config, &round, env.ledger().timestamp())
    }

    /// Close entries and request randomness. Callable by anyone.
    ///
    /// Readiness is re-evaluated here rather than trusted from an earlier
    /// `check_upkeep`. Returns the coordinator's request id.
    pub fn perform_upkeep(env: Env) -> u64 {
        let (config, mut round) = storage::load_config_and_round(&env);
        if !upkeep::upkeep_needed(&config, &round, env.ledger().timestamp()) {
            panic_with_error!(&env, Error::UpkeepNotNeeded);
        }

        round.state = RaffleState::Calculating;
        let pending = oracle::request(&env, &config);
        let request_id = pending.request_id;
        round.pending = RequestSlot::Pending(pending);
        storage::save_round(&env, &round);

        log!(&env, "randomness requested", round.round, request_id);
        events::emit_upkeep_performed(&env, round.round, request_id);
        request_id
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Coordinator callback delivering randomness for `request_id`.
    ///
    /// Only the configured coordinator may call this. Replayed or stale ids
    /// fail with `UnknownRequest`; a rejected payout fails with
    /// `PayoutFailed` and leaves the round calculating.
    pub fn fulfill_randomness(env: Env, request_id: u64, random_words: Vec<u64>) {
        let (config, mut round) = storage::load_config_and_round(&env);
        oracle::require_coordinator(&config);
        settle::settle(&env, &config, &mut round, request_id, &random_words);
        storage::save_round(&env, &round);
    }

    // ─────────────────────────────────────────────────────────
    // Recovery
    // ─────────────────────────────────────────────────────────

    /// Replace an unanswered randomness request with a fresh one.
    ///
    /// - `caller` must be the owner.
    /// - The round must be calculating and the pending request at least
    ///   `request_timeout` seconds old.
    ///
    /// A late callback for the replaced id is rejected as unknown.
    pub fn retry_randomness(env: Env, caller: Address) -> u64 {
        caller.require_auth();
        ownership::require_owner(&env, &caller);

        let (config, mut round) = storage::load_config_and_round(&env);
        let replaced = match (&round.state, round.pending.get()) {
            (RaffleState::Calculating, Some(pending)) => pending.clone(),
            _ => panic_with_error!(&env, Error::NoPendingRequest),
        };
        let now = env.ledger().timestamp();
        if now.saturating_sub(replaced.requested_at) < config.request_timeout {
            panic_with_error!(&env, Error::RetryTooEarly);
        }

        let pending = oracle::request(&env, &config);
        let request_id = pending.request_id;
        round.pending = RequestSlot::Pending(pending);
        storage::save_round(&env, &round);

        log!(&env, "randomness re-requested", round.round, request_id);
        events::emit_randomness_rerequested(&env, round.round, request_id, replaced.request_id);
        request_id
    }

    // ─────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Address {
        ownership::owner(&env)
    }

    /// Transfer ownership to `new_owner`. `current_owner` must authorize.
    pub fn transfer_ownership(env: Env, current_owner: Address, new_owner: Address) {
        ownership::transfer_ownership(&env, &current_owner, &new_owner);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_state(env: Env) -> RaffleState {
        storage::load_round(&env).state
    }

    pub fn get_entrance_fee(env: Env) -> i128 {
        storage::load_config(&env).entrance_fee
    }

    pub fn get_interval(env: Env) -> u64 {
        storage::load_config(&env).interval
    }

    pub fn get_num_entrants(env: Env) -> u32 {
        storage::load_round(&env).entrant_count
    }

    /// Entrant at `index` in the current round; `EntrantNotFound` if out of range.
    pub fn get_entrant(env: Env, index: u32) -> Address {
        let round = storage::load_round(&env);
        ledger::entrant(&env, &round, index)
    }

    /// Winner of the most recently settled round, if any.
    pub fn get_recent_winner(env: Env) -> Option<Address> {
        storage::load_round(&env).recent_winner
    }

    pub fn get_pool_balance(env: Env) -> i128 {
        storage::load_round(&env).pool_balance
    }

    pub fn get_last_timestamp(env: Env) -> u64 {
        storage::load_round(&env).last_timestamp
    }

    pub fn get_pending_request(env: Env) -> Option<PendingRequest> {
        storage::load_round(&env).pending.get().cloned()
    }

    /// Full snapshot of the current round.
    pub fn get_round(env: Env) -> RoundState {
        storage::load_round(&env)
    }

    pub fn get_config(env: Env) -> RaffleConfig {
        storage::load_config(&env)
    }
}
