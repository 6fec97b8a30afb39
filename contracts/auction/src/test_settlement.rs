#![cfg(test)]

use cast_lib::{AuctionParams, AuctionState, ContractError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address};

use crate::testutils::{AuctionHarness, STARTING_BALANCE, T0};

#[test]
fn test_full_auction_lifecycle() {
    let h = AuctionHarness::new();
    let item = h.item(1);

    let first = h.start_default(&item, 1_000_000);
    assert_eq!(h.client.get_auction(&item).end_time, T0 + 86_400);

    h.advance(100);
    let second = h.funded_bidder();
    h.bid(&item, &second, 1_100_000);
    assert_eq!(h.balance(&first), STARTING_BALANCE);
    assert_eq!(h.client.get_auction(&item).bid_count, 2);

    let third = h.funded_bidder();
    let auth = h.bid_authorization(&item, &third, 3, 1_150_000);
    assert_eq!(
        h.client
            .try_bid(&item, &third, &3, &1_150_000, &auth, &None),
        Err(Ok(ContractError::InvalidBidAmount))
    );

    h.advance(86_400);
    assert_eq!(h.client.get_auction_state(&item), AuctionState::Ended);
    h.client.settle(&item);

    // 5% protocol fee on 1_100_000.
    assert_eq!(h.balance(&h.treasury), 55_000);
    assert_eq!(h.balance(&h.creator), 1_045_000);
    assert_eq!(h.balance(&h.engine), 0);

    assert_eq!(h.collectible.owner_of(&item), Some(second.clone()));
    let token = h.collectible.get_token(&item).unwrap();
    assert_eq!(token.creator, h.creator);
    assert_eq!(token.creator_handle, 1);
    assert_eq!(h.collectible.total_supply(), 1);

    assert_eq!(h.client.get_auction_state(&item), AuctionState::Settled);
    assert_eq!(
        h.client.try_settle(&item),
        Err(Ok(ContractError::AuctionAlreadySettled))
    );
    assert_eq!(h.collectible.total_supply(), 1);
}

#[test]
fn test_settle_requires_ended_auction() {
    let h = AuctionHarness::new();

    assert_eq!(
        h.client.try_settle(&h.item(9)),
        Err(Ok(ContractError::AuctionDoesNotExist))
    );

    let item = h.item(1);
    h.start_default(&item, 1_000_000);
    h.advance(86_399);
    assert_eq!(
        h.client.try_settle(&item),
        Err(Ok(ContractError::AuctionNotEnded))
    );

    // Ended is reached exactly at end_time.
    h.advance(1);
    h.client.settle(&item);
}

#[test]
fn test_settle_after_cancel_or_recover_fails() {
    let h = AuctionHarness::new();
    let cancelled = h.item(1);
    let recovered = h.item(2);
    h.start_default(&cancelled, 1_000_000);
    h.start_default(&recovered, 1_000_000);

    let auth = h.cancel_authorization(&cancelled);
    h.client.cancel(&cancelled, &auth);
    let refund_to = Address::generate(&h.env);
    h.client.recover(&h.owner, &recovered, &refund_to);

    h.advance(86_400);
    assert_eq!(
        h.client.try_settle(&cancelled),
        Err(Ok(ContractError::AuctionIsCancelled))
    );
    assert_eq!(
        h.client.try_settle(&recovered),
        Err(Ok(ContractError::AuctionIsRecovered))
    );
    assert_eq!(h.collectible.total_supply(), 0);
}

#[test]
fn test_anyone_can_settle() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    let winner = h.start_default(&item, 2_000_000);
    h.advance(86_400);

    h.env.set_auths(&[]);
    h.client.settle(&item);

    assert_eq!(h.collectible.owner_of(&item), Some(winner));
}

#[test]
fn test_zero_and_full_protocol_fee() {
    let h = AuctionHarness::new();

    for (seed, fee_bps) in [(1u8, 0u32), (2u8, 10_000u32)] {
        let item = h.item(seed);
        let bidder = h.funded_bidder();
        let params = AuctionParams {
            protocol_fee_bps: fee_bps,
            ..AuctionHarness::params()
        };
        let auth = h.start_authorization(&item, &bidder, 2, 3_000_000, params);
        h.client.start(
            &item, &h.creator, &1, &bidder, &2, &3_000_000, &params, &auth, &None,
        );
    }

    h.advance(86_400);
    h.client.settle(&h.item(1));
    assert_eq!(h.balance(&h.treasury), 0);
    assert_eq!(h.balance(&h.creator), 3_000_000);

    h.client.settle(&h.item(2));
    assert_eq!(h.balance(&h.treasury), 3_000_000);
    assert_eq!(h.balance(&h.creator), 3_000_000);
}

#[test]
fn test_batch_settle_is_all_or_nothing() {
    let h = AuctionHarness::new();
    let a = h.item(1);
    let b = h.item(2);
    h.start_default(&a, 1_000_000);
    h.start_default(&b, 1_000_000);
    h.advance(86_400);

    let late = h.item(3);
    h.start_default(&late, 1_000_000);

    let items = vec![&h.env, a.clone(), b.clone(), late.clone()];
    assert_eq!(
        h.client.try_batch_settle(&items),
        Err(Ok(ContractError::AuctionNotEnded))
    );
    assert_eq!(h.client.get_auction_state(&a), AuctionState::Ended);
    assert_eq!(h.client.get_auction_state(&b), AuctionState::Ended);
    assert_eq!(h.balance(&h.treasury), 0);
    assert_eq!(h.collectible.total_supply(), 0);

    h.client.batch_settle(&vec![&h.env, a.clone(), b.clone()]);
    assert_eq!(h.client.get_auction_state(&a), AuctionState::Settled);
    assert_eq!(h.client.get_auction_state(&b), AuctionState::Settled);
    assert_eq!(h.balance(&h.treasury), 100_000);
    assert_eq!(h.collectible.total_supply(), 2);

    // Duplicates abort the batch at the second occurrence.
    h.advance(86_400);
    assert_eq!(
        h.client
            .try_batch_settle(&vec![&h.env, late.clone(), late.clone()]),
        Err(Ok(ContractError::AuctionAlreadySettled))
    );
    assert_eq!(h.client.get_auction_state(&late), AuctionState::Ended);
}

#[test]
fn test_pause_blocks_settlement() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    h.start_default(&item, 1_000_000);
    h.advance(86_400);

    h.client.pause(&h.owner);
    assert_eq!(h.client.try_settle(&item), Err(Ok(ContractError::Paused)));
    assert_eq!(
        h.client.try_batch_settle(&vec![&h.env, item.clone()]),
        Err(Ok(ContractError::Paused))
    );

    h.client.unpause(&h.owner);
    h.client.settle(&item);
    assert_eq!(h.client.get_auction_state(&item), AuctionState::Settled);
}
