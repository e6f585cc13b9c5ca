//! Per-network configuration defaults.
//!
//! Deployers combine a preset with the addresses that only exist on the target
//! network (fee token, coordinator) via [`RaffleConfig::from_preset`].
//!
//! [`RaffleConfig::from_preset`]: crate::types::RaffleConfig::from_preset

use soroban_sdk::{BytesN, Env};

use crate::types::{Network, NetworkPreset};

/// One XLM in stroops.
const ONE_XLM: i128 = 10_000_000;

const DEFAULT_INTERVAL: u64 = 30;
const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;

/// Gas lane of the public testnet coordinator.
const TESTNET_KEY_HASH: [u8; 32] = [
    0x47, 0x4e, 0x34, 0xa0, 0x77, 0xdf, 0x58, 0x80, 0x7d, 0xbe, 0x9c, 0x96, 0xd3, 0xc0, 0x09,
    0xb2, 0x3b, 0x3c, 0x6d, 0x0c, 0xce, 0x43, 0x3e, 0x59, 0xbb, 0xf5, 0xb3, 0x4f, 0x82, 0x3b,
    0xc5, 0x6c,
];

pub fn preset(env: &Env, network: Network) -> NetworkPreset {
    match network {
        // The local mock coordinator ignores the gas lane.
        Network::Local => NetworkPreset {
            entrance_fee: ONE_XLM,
            interval: DEFAULT_INTERVAL,
            key_hash: BytesN::from_array(env, &[0u8; 32]),
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
            request_timeout: 5 * 60,
        },
        Network::Testnet => NetworkPreset {
            entrance_fee: ONE_XLM,
            interval: DEFAULT_INTERVAL,
            key_hash: BytesN::from_array(env, &TESTNET_KEY_HASH),
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
            request_timeout: 60 * 60,
        },
    }
}
