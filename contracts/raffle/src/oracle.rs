//! # Randomness oracle client
//!
//! The raffle talks to an external VRF coordinator contract in two directions:
//!
//! - outbound: [`request`] calls `request_randomness` on the coordinator and
//!   gets back an opaque request id;
//! - inbound: the coordinator later invokes the raffle's
//!   `fulfill_randomness(request_id, random_words)`. [`require_coordinator`]
//!   restricts that entry point to the configured coordinator.
//!
//! Nothing about entrants crosses this boundary; requests are correlated back
//! to the round only through the id stored in `RoundState::pending`.

use soroban_sdk::{contractclient, panic_with_error, Address, BytesN, Env, Vec};

use crate::types::{PendingRequest, RaffleConfig};
use crate::Error;

/// Words requested per round. Only the first is consumed.
pub const NUM_WORDS: u32 = 1;

/// Interface the coordinator contract must expose.
#[contractclient(name = "VrfCoordinatorClient")]
pub trait VrfCoordinator {
    /// Queue a request on behalf of `consumer` and return its id.
    fn request_randomness(
        env: Env,
        consumer: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}

/// Submit a randomness request and return the record to persist as pending.
pub fn request(env: &Env, config: &RaffleConfig) -> PendingRequest {
    let coordinator = VrfCoordinatorClient::new(env, &config.coordinator);
    let request_id = coordinator.request_randomness(
        &env.current_contract_address(),
        &config.key_hash,
        &config.subscription_id,
        &config.callback_gas_limit,
        &NUM_WORDS,
    );
    PendingRequest {
        request_id,
        requested_at: env.ledger().timestamp(),
    }
}

/// Only the configured coordinator may deliver randomness.
pub fn require_coordinator(config: &RaffleConfig) {
    config.coordinator.require_auth();
}

/// The word consumed for winner selection.
/// Panics with `Error::MissingRandomWord` if the callback carried none.
pub fn first_word(env: &Env, random_words: &Vec<u64>) -> u64 {
    random_words
        .first()
        .unwrap_or_else(|| panic_with_error!(env, Error::MissingRandomWord))
}
