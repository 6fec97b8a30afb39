use cast_lib::{
    interface::CollectibleClient, validation::bps_of, AuctionState, ContractError, StoredState,
};
use soroban_sdk::{BytesN, Env, Vec};

use crate::{escrow, events, repository::AuctionRepository, state::derive_state, storage};

pub fn settle(env: &Env, item: BytesN<32>) -> Result<(), ContractError> {
    storage::require_not_paused(env)?;
    settle_one(env, &AuctionRepository::new(env), &item)
}

/// Settles every item or none: the first ineligible item aborts the batch.
pub fn batch_settle(env: &Env, items: Vec<BytesN<32>>) -> Result<(), ContractError> {
    storage::require_not_paused(env)?;
    let repo = AuctionRepository::new(env);
    for item in items.iter() {
        settle_one(env, &repo, &item)?;
    }
    Ok(())
}

/// Splits the winning bid between treasury and creator and issues the claim
/// token to the winner.
fn settle_one(env: &Env, repo: &AuctionRepository, item: &BytesN<32>) -> Result<(), ContractError> {
    let loaded = repo.load(item);
    let mut record = match (derive_state(loaded.as_ref(), env.ledger().timestamp()), loaded) {
        (AuctionState::Ended, Some(record)) => record,
        (AuctionState::None, _) => return Err(ContractError::AuctionDoesNotExist),
        (AuctionState::Active, _) => return Err(ContractError::AuctionNotEnded),
        (AuctionState::Settled, _) => return Err(ContractError::AuctionAlreadySettled),
        (AuctionState::Cancelled, _) => return Err(ContractError::AuctionIsCancelled),
        (AuctionState::Recovered, _) => return Err(ContractError::AuctionIsRecovered),
        (AuctionState::Ended, None) => return Err(ContractError::AuctionDoesNotExist),
    };

    let protocol_amount = bps_of(record.highest_bid, record.params.protocol_fee_bps)?;
    let creator_amount = record.highest_bid - protocol_amount;

    record.stored_state = StoredState::Settled;
    repo.save(item, &record);

    escrow::push(env, &storage::get_treasury(env)?, protocol_amount)?;
    escrow::push(env, &record.creator, creator_amount)?;

    CollectibleClient::new(env, &storage::get_collectible(env)?).mint(
        &record.highest_bidder,
        item,
        &record.creator_handle,
        &record.creator,
    );

    events::auction_settled(
        env,
        item,
        &record.highest_bidder,
        record.highest_bidder_handle,
        record.highest_bid,
        creator_amount,
        protocol_amount,
    );
    Ok(())
}
