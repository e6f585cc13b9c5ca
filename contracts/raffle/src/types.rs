//! # Types
//!
//! Shared data structures used across all modules of the raffle contract.
//!
//! ## Config / Round split
//!
//! The raffle keeps two instance-storage entries:
//!
//! - [`RaffleConfig`]: written once at `init`; never mutated.
//! - [`RoundState`]: written on every entry, upkeep and settlement.
//!
//! Entrants are not part of either struct; they live in per-index persistent
//! entries keyed by `(round, index)` so appending is O(1) and the whole
//! sequence is cleared by bumping `round`.
//!
//! ## Status as a Finite-State Machine
//!
//! ```text
//! Open ──perform_upkeep──► Calculating ──fulfill_randomness──► Open
//!                              │   ▲
//!                              └───┘ retry_randomness (owner, after timeout)
//! ```

use soroban_sdk::{contracttype, Address, BytesN};

/// Whether the current round accepts entries.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RaffleState {
    /// Accepting entries; upkeep may start once the interval has elapsed.
    Open,
    /// Randomness requested; waiting for the coordinator callback.
    Calculating,
}

/// Immutable deployment configuration, written once at `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleConfig {
    /// Token contract used for entrance fees and the payout.
    pub token: Address,
    /// Minimum amount accepted by `enter`, in token base units.
    pub entrance_fee: i128,
    /// Minimum number of seconds between the start of a round and upkeep.
    pub interval: u64,
    /// Randomness coordinator contract; the only caller allowed to fulfill.
    pub coordinator: Address,
    pub subscription_id: u64,
    /// Gas lane selecting the coordinator's proving key.
    pub key_hash: BytesN<32>,
    pub callback_gas_limit: u32,
    /// Seconds the owner must wait on an unanswered request before re-requesting.
    pub request_timeout: u64,
}

/// Longest accepted round interval and re-request timeout. Entrant entries
/// live 30 days in persistent storage, so a round that keeps to both limits
/// settles well before its entries can be archived.
pub const MAX_INTERVAL: u64 = 7 * 24 * 60 * 60;
pub const MAX_REQUEST_TIMEOUT: u64 = 7 * 24 * 60 * 60;

impl RaffleConfig {
    /// Positive fee, interval, gas limit and timeout, with interval and
    /// timeout within their upper bounds.
    pub fn is_valid(&self) -> bool {
        self.entrance_fee > 0
            && (1..=MAX_INTERVAL).contains(&self.interval)
            && self.callback_gas_limit > 0
            && (1..=MAX_REQUEST_TIMEOUT).contains(&self.request_timeout)
    }

    /// Assemble a config from a network preset plus the deployment-specific addresses.
    pub fn from_preset(
        preset: NetworkPreset,
        token: Address,
        coordinator: Address,
        subscription_id: u64,
    ) -> Self {
        RaffleConfig {
            token,
            entrance_fee: preset.entrance_fee,
            interval: preset.interval,
            coordinator,
            subscription_id,
            key_hash: preset.key_hash,
            callback_gas_limit: preset.callback_gas_limit,
            request_timeout: preset.request_timeout,
        }
    }
}

/// An in-flight randomness request. At most one exists at a time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRequest {
    pub request_id: u64,
    /// Ledger timestamp at which the request was issued.
    pub requested_at: u64,
}

/// The request slot of a round: empty while open, filled while calculating.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestSlot {
    Empty,
    Pending(PendingRequest),
}

impl RequestSlot {
    pub fn get(&self) -> Option<&PendingRequest> {
        match self {
            RequestSlot::Pending(pending) => Some(pending),
            RequestSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RequestSlot::Empty)
    }
}

/// Mutable round state, updated on entries, upkeep and settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundState {
    /// Monotonic round index; incremented by every settlement.
    pub round: u32,
    pub state: RaffleState,
    /// Start time of the current round.
    pub last_timestamp: u64,
    pub entrant_count: u32,
    /// Sum of all fees paid this round.
    pub pool_balance: i128,
    pub pending: RequestSlot,
    pub recent_winner: Option<Address>,
}

impl RoundState {
    /// The state of a freshly deployed raffle.
    pub fn genesis(now: u64) -> Self {
        RoundState {
            round: 0,
            state: RaffleState::Open,
            last_timestamp: now,
            entrant_count: 0,
            pool_balance: 0,
            pending: RequestSlot::Empty,
            recent_winner: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }
}

/// Networks with known configuration defaults.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Network {
    /// Local sandbox / test harness.
    Local,
    Testnet,
}

/// Per-network configuration defaults returned by `network_preset`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkPreset {
    pub entrance_fee: i128,
    pub interval: u64,
    pub key_hash: BytesN<32>,
    pub callback_gas_limit: u32,
    pub request_timeout: u64,
}
