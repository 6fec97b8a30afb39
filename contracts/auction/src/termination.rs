use cast_lib::{admin, AuctionRecord, Authorization, ContractError, StoredState};
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::{
    authorization::{self, AuthorizedAction, CancelTerms},
    escrow, events,
    repository::AuctionRepository,
    storage,
};

pub fn cancel(env: &Env, item: BytesN<32>, authorization: Authorization) -> Result<(), ContractError> {
    storage::require_not_paused(env)?;
    cancel_one(env, &AuctionRepository::new(env), &item, &authorization)
}

/// All-or-nothing, like `batch_settle`. Each entry needs its own
/// authorization with its own nonce.
pub fn batch_cancel(
    env: &Env,
    items: Vec<BytesN<32>>,
    authorizations: Vec<Authorization>,
) -> Result<(), ContractError> {
    storage::require_not_paused(env)?;
    if items.len() != authorizations.len() {
        return Err(ContractError::InvalidAuctionParams);
    }

    let repo = AuctionRepository::new(env);
    for (item, authorization) in items.iter().zip(authorizations.iter()) {
        cancel_one(env, &repo, &item, &authorization)?;
    }
    Ok(())
}

/// Owner-only escape hatch for escrow that cannot be returned through the
/// normal refund path. Available while paused.
pub fn recover(
    env: &Env,
    caller: Address,
    item: BytesN<32>,
    refund_to: Address,
) -> Result<(), ContractError> {
    admin::require_owner(env, &caller)?;
    if refund_to == env.current_contract_address() {
        return Err(ContractError::InvalidAddress);
    }

    let repo = AuctionRepository::new(env);
    let mut record = load_cancellable(&repo, &item)?;

    record.stored_state = StoredState::Recovered;
    repo.save(&item, &record);

    escrow::push(env, &refund_to, record.highest_bid)?;

    events::auction_recovered(env, &item, &refund_to, record.highest_bid, &caller);
    Ok(())
}

fn cancel_one(
    env: &Env,
    repo: &AuctionRepository,
    item: &BytesN<32>,
    authorization: &Authorization,
) -> Result<(), ContractError> {
    let mut record = load_cancellable(repo, item)?;

    let terms = CancelTerms { item: item.clone() };
    let authorizer = authorization::verify(env, AuthorizedAction::Cancel(terms), authorization)?;

    record.stored_state = StoredState::Cancelled;
    repo.save(item, &record);

    escrow::push(env, &record.highest_bidder, record.highest_bid)?;

    events::auction_cancelled(
        env,
        item,
        &record.highest_bidder,
        record.highest_bidder_handle,
        record.highest_bid,
        &authorizer,
    );
    Ok(())
}

/// Cancellation and recovery share one window: Active or Ended, i.e. any
/// stored record that is not terminal yet.
fn load_cancellable(
    repo: &AuctionRepository,
    item: &BytesN<32>,
) -> Result<AuctionRecord, ContractError> {
    match repo.load(item) {
        Some(record) if !record.stored_state.is_terminal() => Ok(record),
        _ => Err(ContractError::AuctionNotCancellable),
    }
}
