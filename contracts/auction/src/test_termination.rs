#![cfg(test)]

use cast_lib::{AuctionState, ContractError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Vec};

use crate::testutils::{AuctionHarness, STARTING_BALANCE};

#[test]
fn test_cancel_refunds_highest_bidder() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    let first = h.start_default(&item, 1_000_000);
    let second = h.funded_bidder();
    h.bid(&item, &second, 1_100_000);

    let auth = h.cancel_authorization(&item);
    h.client.cancel(&item, &auth);

    assert_eq!(h.client.get_auction_state(&item), AuctionState::Cancelled);
    assert_eq!(h.balance(&first), STARTING_BALANCE);
    assert_eq!(h.balance(&second), STARTING_BALANCE);
    assert_eq!(h.balance(&h.engine), 0);
    assert!(h.client.is_nonce_used(&auth.nonce));
}

#[test]
fn test_ended_auction_can_still_be_cancelled() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    let bidder = h.start_default(&item, 1_000_000);
    h.advance(90_000);
    assert_eq!(h.client.get_auction_state(&item), AuctionState::Ended);

    let auth = h.cancel_authorization(&item);
    h.client.cancel(&item, &auth);

    assert_eq!(h.client.get_auction_state(&item), AuctionState::Cancelled);
    assert_eq!(h.balance(&bidder), STARTING_BALANCE);
}

#[test]
fn test_terminal_auctions_reject_everything() {
    let h = AuctionHarness::new();
    let settled = h.item(1);
    let cancelled = h.item(2);
    let recovered = h.item(3);
    for item in [&settled, &cancelled, &recovered] {
        h.start_default(item, 1_000_000);
    }

    let auth = h.cancel_authorization(&cancelled);
    h.client.cancel(&cancelled, &auth);
    let refund_to = Address::generate(&h.env);
    h.client.recover(&h.owner, &recovered, &refund_to);
    h.advance(86_400);
    h.client.settle(&settled);

    let cases = [
        (&settled, AuctionState::Settled, ContractError::AuctionAlreadySettled),
        (&cancelled, AuctionState::Cancelled, ContractError::AuctionIsCancelled),
        (&recovered, AuctionState::Recovered, ContractError::AuctionIsRecovered),
    ];
    let bidder = h.funded_bidder();

    for (item, state, settle_error) in cases {
        let before = h.client.get_auction(item);
        assert_eq!(before.state, state);

        let bid_auth = h.bid_authorization(item, &bidder, 3, 2_000_000);
        assert_eq!(
            h.client
                .try_bid(item, &bidder, &3, &2_000_000, &bid_auth, &None),
            Err(Ok(ContractError::AuctionNotActive))
        );
        assert_eq!(h.client.try_settle(item), Err(Ok(settle_error)));

        let cancel_auth = h.cancel_authorization(item);
        assert_eq!(
            h.client.try_cancel(item, &cancel_auth),
            Err(Ok(ContractError::AuctionNotCancellable))
        );
        assert_eq!(
            h.client.try_recover(&h.owner, item, &refund_to),
            Err(Ok(ContractError::AuctionNotCancellable))
        );

        assert_eq!(h.client.get_auction(item), before);
    }

    // Time does not move a terminal record either.
    h.advance(10 * 86_400);
    for (item, state, _) in cases {
        assert_eq!(h.client.get_auction_state(item), state);
    }
    assert_eq!(h.balance(&bidder), STARTING_BALANCE);
}

#[test]
fn test_cancel_unknown_or_settled_item() {
    let h = AuctionHarness::new();

    let unknown = h.item(9);
    let auth = h.cancel_authorization(&unknown);
    assert_eq!(
        h.client.try_cancel(&unknown, &auth),
        Err(Ok(ContractError::AuctionNotCancellable))
    );

    let item = h.item(1);
    h.start_default(&item, 1_000_000);
    h.advance(86_400);
    h.client.settle(&item);

    let auth = h.cancel_authorization(&item);
    assert_eq!(
        h.client.try_cancel(&item, &auth),
        Err(Ok(ContractError::AuctionNotCancellable))
    );
}

#[test]
fn test_cancel_authorization_is_per_item() {
    let h = AuctionHarness::new();
    let a = h.item(1);
    let b = h.item(2);
    h.start_default(&a, 1_000_000);
    h.start_default(&b, 1_000_000);

    let auth = h.cancel_authorization(&a);
    h.client.cancel(&a, &auth);

    assert_eq!(
        h.client.try_cancel(&b, &auth),
        Err(Ok(ContractError::NonceAlreadyUsed))
    );
    assert_eq!(h.client.get_auction_state(&b), AuctionState::Active);
}

#[test]
fn test_batch_cancel_is_all_or_nothing() {
    let h = AuctionHarness::new();
    let a = h.item(1);
    let b = h.item(2);
    let first = h.start_default(&a, 1_000_000);
    let second = h.start_default(&b, 2_000_000);

    let items = vec![&h.env, a.clone(), b.clone()];
    let short: Vec<_> = vec![&h.env, h.cancel_authorization(&a)];
    assert_eq!(
        h.client.try_batch_cancel(&items, &short),
        Err(Ok(ContractError::InvalidAuctionParams))
    );

    // The second entry reuses the first nonce, so the whole batch fails.
    let auth_a = h.cancel_authorization(&a);
    let replayed = vec![&h.env, auth_a.clone(), auth_a.clone()];
    assert_eq!(
        h.client.try_batch_cancel(&items, &replayed),
        Err(Ok(ContractError::NonceAlreadyUsed))
    );
    assert_eq!(h.client.get_auction_state(&a), AuctionState::Active);
    assert!(!h.client.is_nonce_used(&auth_a.nonce));
    assert_eq!(h.balance(&h.engine), 3_000_000);

    let auths = vec![&h.env, auth_a, h.cancel_authorization(&b)];
    h.client.batch_cancel(&items, &auths);
    assert_eq!(h.client.get_auction_state(&a), AuctionState::Cancelled);
    assert_eq!(h.client.get_auction_state(&b), AuctionState::Cancelled);
    assert_eq!(h.balance(&first), STARTING_BALANCE);
    assert_eq!(h.balance(&second), STARTING_BALANCE);
}

#[test]
fn test_pause_blocks_cancel() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    h.start_default(&item, 1_000_000);

    h.client.pause(&h.owner);
    let auth = h.cancel_authorization(&item);
    assert_eq!(h.client.try_cancel(&item, &auth), Err(Ok(ContractError::Paused)));
    assert_eq!(
        h.client
            .try_batch_cancel(&vec![&h.env, item.clone()], &vec![&h.env, auth]),
        Err(Ok(ContractError::Paused))
    );
}

#[test]
fn test_recover_sends_escrow_to_chosen_address() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    let bidder = h.start_default(&item, 1_000_000);
    let refund_to = Address::generate(&h.env);

    // Recovery stays available while paused.
    h.client.pause(&h.owner);
    h.client.recover(&h.owner, &item, &refund_to);

    assert_eq!(h.client.get_auction_state(&item), AuctionState::Recovered);
    assert_eq!(h.balance(&refund_to), 1_000_000);
    assert_eq!(h.balance(&bidder), STARTING_BALANCE - 1_000_000);
    assert_eq!(h.balance(&h.engine), 0);

    assert_eq!(
        h.client.try_recover(&h.owner, &item, &refund_to),
        Err(Ok(ContractError::AuctionNotCancellable))
    );
}

#[test]
fn test_recover_guards() {
    let h = AuctionHarness::new();
    let item = h.item(1);
    h.start_default(&item, 1_000_000);
    let stranger = Address::generate(&h.env);

    assert_eq!(
        h.client.try_recover(&stranger, &item, &stranger),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(
        h.client.try_recover(&h.owner, &item, &h.engine),
        Err(Ok(ContractError::InvalidAddress))
    );
    assert_eq!(
        h.client.try_recover(&h.owner, &h.item(9), &stranger),
        Err(Ok(ContractError::AuctionNotCancellable))
    );
    assert_eq!(h.client.get_auction_state(&item), AuctionState::Active);
}
