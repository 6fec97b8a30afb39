use cast_lib::{
    validation::{min_next_bid, validate_handle, validate_item, validate_params},
    AuctionParams, AuctionRecord, AuctionState, Authorization, ContractError, StoredState,
};
use soroban_sdk::{Address, BytesN, Env};

use crate::{
    authorization::{self, AuthorizedAction, BidTerms, StartTerms},
    escrow, events,
    repository::AuctionRepository,
    state::derive_state,
    storage,
};

/// Opens the auction for `item` with its first bid.
///
/// # Rules
/// * Item, creator and creator handle must be non-zero; the creator cannot
///   bid on their own item.
/// * One auction per item, ever, even after it terminates.
/// * `params` must sit inside the global configuration.
/// * The opening bid must reach both the global and the per-auction minimum.
/// * With `allowance_expiration_ledger` set, any allowance the bidder already
///   granted the engine is overwritten (see `escrow::pull`).
#[allow(clippy::too_many_arguments)]
pub fn start(
    env: &Env,
    item: BytesN<32>,
    creator: Address,
    creator_handle: u64,
    bidder: Address,
    bidder_handle: u64,
    amount: i128,
    params: AuctionParams,
    authorization: Authorization,
    allowance_expiration_ledger: Option<u32>,
) -> Result<(), ContractError> {
    storage::require_not_paused(env)?;
    bidder.require_auth();

    validate_item(env, &item)?;
    if creator == env.current_contract_address() {
        return Err(ContractError::InvalidAddress);
    }
    validate_handle(creator_handle)?;
    if bidder == creator {
        return Err(ContractError::SelfBid);
    }

    let repo = AuctionRepository::new(env);
    if repo.exists(&item) {
        return Err(ContractError::AuctionAlreadyExists);
    }

    let config = storage::get_config(env)?;
    validate_params(&params, &config)?;

    let terms = StartTerms {
        item: item.clone(),
        creator: creator.clone(),
        creator_handle,
        bidder: bidder.clone(),
        bidder_handle,
        amount,
        params,
    };
    let authorizer = authorization::verify(env, AuthorizedAction::Start(terms), &authorization)?;

    if amount < config.min_bid_amount.max(params.min_bid) {
        return Err(ContractError::InvalidBidAmount);
    }

    escrow::pull(env, &bidder, amount, allowance_expiration_ledger)?;

    let now = env.ledger().timestamp();
    let end_time = now
        .checked_add(params.duration)
        .ok_or(ContractError::InvalidAuctionParams)?;

    let record = AuctionRecord {
        creator: creator.clone(),
        creator_handle,
        highest_bidder: bidder.clone(),
        highest_bidder_handle: bidder_handle,
        highest_bid: amount,
        last_bid_at: now,
        end_time,
        bid_count: 1,
        params,
        stored_state: StoredState::Active,
    };
    repo.save(&item, &record);

    events::auction_started(
        env,
        &item,
        &creator,
        creator_handle,
        &bidder,
        bidder_handle,
        amount,
        end_time,
        &authorizer,
    );
    Ok(())
}

/// Outbids the current highest bidder, who is refunded in the same call.
///
/// A bid landing within `extension_threshold` of the end time resets the
/// end time to `now + extension`. The allowance shortcut behaves as in
/// `start` and overwrites any earlier allowance to the engine.
pub fn bid(
    env: &Env,
    item: BytesN<32>,
    bidder: Address,
    bidder_handle: u64,
    amount: i128,
    authorization: Authorization,
    allowance_expiration_ledger: Option<u32>,
) -> Result<(), ContractError> {
    storage::require_not_paused(env)?;
    bidder.require_auth();

    let repo = AuctionRepository::new(env);
    let now = env.ledger().timestamp();
    let loaded = repo.load(&item);

    let mut record = match (derive_state(loaded.as_ref(), now), loaded) {
        (AuctionState::Active, Some(record)) => record,
        (AuctionState::None, _) => return Err(ContractError::AuctionDoesNotExist),
        _ => return Err(ContractError::AuctionNotActive),
    };

    if bidder == record.creator {
        return Err(ContractError::SelfBid);
    }

    let terms = BidTerms {
        item: item.clone(),
        bidder: bidder.clone(),
        bidder_handle,
        amount,
    };
    let authorizer = authorization::verify(env, AuthorizedAction::Bid(terms), &authorization)?;

    let required = min_next_bid(record.highest_bid, record.params.min_bid_increment_bps)?;
    if amount < required {
        return Err(ContractError::InvalidBidAmount);
    }

    escrow::pull(env, &bidder, amount, allowance_expiration_ledger)?;
    escrow::push(env, &record.highest_bidder, record.highest_bid)?;

    record.highest_bidder = bidder.clone();
    record.highest_bidder_handle = bidder_handle;
    record.highest_bid = amount;
    record.last_bid_at = now;
    record.bid_count += 1;

    let snipe_window_opens = record
        .end_time
        .saturating_sub(record.params.extension_threshold);
    let extended = now >= snipe_window_opens;
    if extended {
        record.end_time = now
            .checked_add(record.params.extension)
            .ok_or(ContractError::InvalidAuctionParams)?;
    }

    repo.save(&item, &record);

    events::bid_placed(env, &item, &bidder, bidder_handle, amount, &authorizer);
    if extended {
        events::auction_extended(env, &item, record.end_time);
    }
    Ok(())
}
