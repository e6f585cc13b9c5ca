//! # Ownership
//!
//! Single-owner access control. The owner has no power over entries, upkeep
//! or payouts; it can only re-request randomness for a round stuck in
//! `Calculating` and hand ownership to another address.
//!
//! ## Threat model notes
//!
//! - The owner cannot settle a round or pick a winner; only the configured
//!   coordinator can call `fulfill_randomness`.
//! - A re-request replaces the pending request id, so a late callback for the
//!   old id is rejected as unknown.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{events, storage, Error};

/// Set the initial owner. Panics with `Error::AlreadyInitialized` if called again.
pub fn init_owner(env: &Env, owner: &Address) {
    if storage::has_owner(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    storage::save_owner(env, owner);
}

/// Assert that `address` is the owner.
/// Panics with `Error::NotAuthorized` on failure.
pub fn require_owner(env: &Env, address: &Address) {
    if storage::load_owner(env) != *address {
        panic_with_error!(env, Error::NotAuthorized);
    }
}

/// Hand ownership from `current` to `new`.
///
/// `current` must authorize and hold ownership. Emits `OwnershipTransferred`.
pub fn transfer_ownership(env: &Env, current: &Address, new: &Address) {
    current.require_auth();
    require_owner(env, current);

    storage::save_owner(env, new);
    events::emit_ownership_transferred(env, current.clone(), new.clone());
}

pub fn owner(env: &Env) -> Address {
    storage::load_owner(env)
}
