use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryRecorded {
    pub participant: Address,
    pub amount: i128,
    /// Start time of the round the entry belongs to.
    pub round_started_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepPerformed {
    pub request_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerSelected {
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessRerequested {
    pub request_id: u64,
    pub replaced: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous: Address,
    pub new: Address,
}

pub fn emit_entry_recorded(
    env: &Env,
    round: u32,
    participant: Address,
    amount: i128,
    round_started_at: u64,
) {
    let topics = (symbol_short!("entered"), round);
    let data = EntryRecorded {
        participant,
        amount,
        round_started_at,
    };
    env.events().publish(topics, data);
}

pub fn emit_upkeep_performed(env: &Env, round: u32, request_id: u64) {
    let topics = (symbol_short!("upkeep"), round);
    env.events().publish(topics, UpkeepPerformed { request_id });
}

pub fn emit_winner_selected(env: &Env, round: u32, winner: Address, amount: i128) {
    let topics = (symbol_short!("winner"), round);
    env.events().publish(topics, WinnerSelected { winner, amount });
}

pub fn emit_randomness_rerequested(env: &Env, round: u32, request_id: u64, replaced: u64) {
    let topics = (symbol_short!("rerequest"), round);
    let data = RandomnessRerequested {
        request_id,
        replaced,
    };
    env.events().publish(topics, data);
}

pub fn emit_ownership_transferred(env: &Env, previous: Address, new: Address) {
    let topics = (symbol_short!("owner"),);
    env.events()
        .publish(topics, OwnershipTransferred { previous, new });
}
