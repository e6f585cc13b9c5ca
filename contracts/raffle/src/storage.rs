//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the raffle.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type           | Description                         |
//! |----------|----------------|-------------------------------------|
//! | `Owner`  | `Address`      | Owner allowed to re-request         |
//! | `Config` | `RaffleConfig` | Immutable deployment configuration  |
//! | `Round`  | `RoundState`   | Mutable state of the current round  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type      | Description                     |
//! |------------------------|-----------|---------------------------------|
//! | `Entrant(round, idx)`  | `Address` | The `idx`-th entry of `round`   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Only writes extend TTLs. Loaders stay side-effect free so that
//! `check_upkeep` and the read accessors never touch the ledger.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{RaffleConfig, RoundState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract owner (Instance).
    Owner,
    /// Deployment configuration (Instance).
    Config,
    /// Current round state (Instance).
    Round,
    /// Entrant at `index` within `round` (Persistent).
    Entrant(u32, u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Owner
// ─────────────────────────────────────────────────────────

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn load_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────

/// Load the deployment configuration.
/// Panics with `Error::NotInitialized` before `init`.
pub fn load_config(env: &Env) -> RaffleConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Written exactly once, from `init`.
pub fn save_config(env: &Env, config: &RaffleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Round
// ─────────────────────────────────────────────────────────

pub fn load_round(env: &Env) -> RoundState {
    env.storage()
        .instance()
        .get(&DataKey::Round)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Load config and round together; used by every mutating entry point.
pub fn load_config_and_round(env: &Env) -> (RaffleConfig, RoundState) {
    (load_config(env), load_round(env))
}

pub fn save_round(env: &Env, round: &RoundState) {
    env.storage().instance().set(&DataKey::Round, round);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Entrants
// ─────────────────────────────────────────────────────────

pub fn save_entrant(env: &Env, round: u32, index: u32, entrant: &Address) {
    let key = DataKey::Entrant(round, index);
    env.storage().persistent().set(&key, entrant);
    bump_persistent(env, &key);
}

/// Load the `index`-th entrant of `round`.
/// Panics with `Error::EntrantNotFound` if no such entry was recorded.
pub fn load_entrant(env: &Env, round: u32, index: u32) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Entrant(round, index))
        .unwrap_or_else(|| panic_with_error!(env, Error::EntrantNotFound))
}
