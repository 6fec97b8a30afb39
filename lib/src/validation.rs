use soroban_sdk::{BytesN, Env};

use crate::{errors::ContractError, AuctionConfig, AuctionParams, BPS_DENOMINATOR};

pub fn validate_item(env: &Env, item: &BytesN<32>) -> Result<(), ContractError> {
    if item == &BytesN::from_array(env, &[0u8; 32]) {
        return Err(ContractError::InvalidItem);
    }
    Ok(())
}

pub fn validate_handle(handle: u64) -> Result<(), ContractError> {
    if handle == 0 {
        return Err(ContractError::InvalidHandle);
    }
    Ok(())
}

/// Global bounds must describe a non-empty duration window and a usable
/// extension cap.
pub fn validate_config(config: &AuctionConfig) -> Result<(), ContractError> {
    if config.min_bid_amount <= 0
        || config.min_auction_duration == 0
        || config.min_auction_duration > config.max_auction_duration
        || config.max_extension == 0
        || config.max_extension > config.max_auction_duration
    {
        return Err(ContractError::InvalidAuctionParams);
    }
    Ok(())
}

pub fn validate_params(
    params: &AuctionParams,
    config: &AuctionConfig,
) -> Result<(), ContractError> {
    let valid = params.extension > 0
        && params.extension_threshold > 0
        && params.min_bid >= config.min_bid_amount
        && params.duration >= config.min_auction_duration
        && params.duration <= config.max_auction_duration
        && params.extension <= params.duration
        && params.extension <= config.max_extension
        && params.min_bid_increment_bps <= BPS_DENOMINATOR
        && params.protocol_fee_bps <= BPS_DENOMINATOR;

    if !valid {
        return Err(ContractError::InvalidAuctionParams);
    }
    Ok(())
}

/// `amount * bps / 10_000`, rounded down.
pub fn bps_of(amount: i128, bps: u32) -> Result<i128, ContractError> {
    amount
        .checked_mul(bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR as i128)
        .ok_or(ContractError::InvalidBidAmount)
}

/// Smallest bid that outbids `highest_bid` under a percentage increment.
pub fn min_next_bid(highest_bid: i128, increment_bps: u32) -> Result<i128, ContractError> {
    highest_bid
        .checked_add(bps_of(highest_bid, increment_bps)?)
        .ok_or(ContractError::InvalidBidAmount)
}
