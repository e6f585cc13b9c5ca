#![allow(dead_code)]

extern crate std;

use crate::types::{RaffleState, RoundState};

/// INV-1: The pool always equals the fee tokens held in custody.
pub fn assert_pool_matches_custody(round: &RoundState, custody: i128) {
    assert_eq!(
        round.pool_balance, custody,
        "INV-1 violated: pool {} != custody {} in round {}",
        round.pool_balance, custody, round.round
    );
}

/// INV-2: An open round never carries a pending request.
pub fn assert_open_has_no_pending(round: &RoundState) {
    if round.state == RaffleState::Open {
        assert!(
            round.pending.is_empty(),
            "INV-2 violated: round {} is open with a pending request",
            round.round
        );
    }
}

/// INV-3: A calculating round always has exactly one pending request and at
/// least one entrant.
pub fn assert_calculating_has_pending(round: &RoundState) {
    if round.state == RaffleState::Calculating {
        assert!(
            !round.pending.is_empty(),
            "INV-3 violated: round {} is calculating without a request",
            round.round
        );
        assert!(
            round.entrant_count > 0,
            "INV-3 violated: round {} is calculating with no entrants",
            round.round
        );
    }
}

/// INV-4: A round with no entrants has an empty pool.
pub fn assert_empty_round_has_empty_pool(round: &RoundState) {
    if round.entrant_count == 0 {
        assert_eq!(
            round.pool_balance, 0,
            "INV-4 violated: round {} has no entrants but pool {}",
            round.round, round.pool_balance
        );
    }
}

/// INV-5: Entry accounting. One entry adds exactly one entrant and exactly
/// `amount` to the pool.
pub fn assert_entry_accounting(before: &RoundState, after: &RoundState, amount: i128) {
    assert_eq!(
        after.entrant_count,
        before.entrant_count + 1,
        "INV-5 violated: entrant count {} -> {}",
        before.entrant_count,
        after.entrant_count
    );
    assert_eq!(
        after.pool_balance,
        before.pool_balance + amount,
        "INV-5 violated: pool {} + {} != {}",
        before.pool_balance,
        amount,
        after.pool_balance
    );
}

/// INV-6: Settlement leaves a fresh open round one index ahead.
pub fn assert_settled(before: &RoundState, after: &RoundState, now: u64) {
    assert_eq!(after.state, RaffleState::Open, "INV-6 violated: not re-opened");
    assert_eq!(after.round, before.round + 1, "INV-6 violated: round not advanced");
    assert_eq!(after.entrant_count, 0, "INV-6 violated: entrants not cleared");
    assert_eq!(after.pool_balance, 0, "INV-6 violated: pool not cleared");
    assert!(after.pending.is_empty(), "INV-6 violated: request not cleared");
    assert_eq!(after.last_timestamp, now, "INV-6 violated: round start not reset");
}

/// INV-7: Calculating -> Open happens only through settlement, which
/// advances the round index. Every other transition keeps the index.
pub fn assert_valid_transition(before: &RoundState, after: &RoundState) {
    match (before.state, after.state) {
        (RaffleState::Calculating, RaffleState::Open) => assert_eq!(
            after.round,
            before.round + 1,
            "INV-7 violated: round re-opened without advancing"
        ),
        _ => assert_eq!(
            after.round, before.round,
            "INV-7 violated: round index changed on {:?} -> {:?}",
            before.state, after.state
        ),
    }
}

/// Run all stateless round invariants.
pub fn assert_all_round_invariants(round: &RoundState, custody: i128) {
    assert_pool_matches_custody(round, custody);
    assert_open_has_no_pending(round);
    assert_calculating_has_pending(round);
    assert_empty_round_has_empty_pool(round);
}
