extern crate std;

use soroban_sdk::{
    symbol_short, testutils::{Address as _, Events}, vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{
    EntryRecorded, OwnershipTransferred, RandomnessRerequested, UpkeepPerformed, WinnerSelected,
};
use crate::test_utils::*;

#[test]
fn test_entry_recorded_event() {
    let s = Setup::new();
    let player = s.funded_player(FEE);

    s.raffle.enter(&player, &FEE);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("entered"), round)
    assert_eq!(last_event.0, s.raffle.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("entered").into_val(&s.env),
        0u32.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: EntryRecorded = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        EntryRecorded {
            participant: player,
            amount: FEE,
            round_started_at: GENESIS_TIME,
        }
    );
}

#[test]
fn test_upkeep_performed_event() {
    let s = Setup::new();
    let (_, request_id) = s.calculating_round(2);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, s.raffle.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("upkeep").into_val(&s.env),
        0u32.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: UpkeepPerformed = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(event_data, UpkeepPerformed { request_id });
}

#[test]
fn test_winner_selected_event() {
    let s = Setup::new();
    let (players, request_id) = s.calculating_round(3);

    s.coordinator.fulfill(&request_id, &s.words(&[7]));

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // The event carries the index of the round that was settled.
    assert_eq!(last_event.0, s.raffle.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("winner").into_val(&s.env),
        0u32.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: WinnerSelected = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        WinnerSelected {
            winner: players[1].clone(),
            amount: 3,
        }
    );
}

#[test]
fn test_entry_event_carries_new_round_index() {
    let s = Setup::new();
    let (_, request_id) = s.calculating_round(1);
    s.coordinator.fulfill(&request_id, &s.words(&[0]));
    let settled_at = s.env.ledger().timestamp();

    let player = s.funded_player(FEE);
    s.raffle.enter(&player, &FEE);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &s.env,
        symbol_short!("entered").into_val(&s.env),
        1u32.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: EntryRecorded = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(event_data.round_started_at, settled_at);
}

#[test]
fn test_randomness_rerequested_event() {
    let s = Setup::new();
    let (_, first_id) = s.calculating_round(1);
    s.advance(REQUEST_TIMEOUT);

    let second_id = s.raffle.retry_randomness(&s.owner);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, s.raffle.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("rerequest").into_val(&s.env),
        0u32.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RandomnessRerequested = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        RandomnessRerequested {
            request_id: second_id,
            replaced: first_id,
        }
    );
}

#[test]
fn test_ownership_transferred_event() {
    let s = Setup::new();
    let new_owner = Address::generate(&s.env);

    s.raffle.transfer_ownership(&s.owner, &new_owner);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, s.raffle.address);
    let expected_topics = vec![&s.env, symbol_short!("owner").into_val(&s.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: OwnershipTransferred = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        OwnershipTransferred {
            previous: s.owner.clone(),
            new: new_owner,
        }
    );
}
