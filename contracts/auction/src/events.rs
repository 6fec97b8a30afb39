use cast_lib::AuctionConfig;
use soroban_sdk::{Address, BytesN, Env, Symbol};

#[allow(clippy::too_many_arguments)]
pub fn auction_started(
    env: &Env,
    item: &BytesN<32>,
    creator: &Address,
    creator_handle: u64,
    bidder: &Address,
    bidder_handle: u64,
    amount: i128,
    end_time: u64,
    authorizer: &BytesN<32>,
) {
    env.events().publish(
        (Symbol::new(env, "auction_started"), item.clone()),
        (
            creator.clone(),
            creator_handle,
            bidder.clone(),
            bidder_handle,
            amount,
            end_time,
            authorizer.clone(),
        ),
    );
}

pub fn bid_placed(
    env: &Env,
    item: &BytesN<32>,
    bidder: &Address,
    bidder_handle: u64,
    amount: i128,
    authorizer: &BytesN<32>,
) {
    env.events().publish(
        (Symbol::new(env, "bid_placed"), item.clone()),
        (bidder.clone(), bidder_handle, amount, authorizer.clone()),
    );
}

pub fn auction_extended(env: &Env, item: &BytesN<32>, end_time: u64) {
    env.events().publish(
        (Symbol::new(env, "auction_extended"), item.clone()),
        end_time,
    );
}

pub fn auction_settled(
    env: &Env,
    item: &BytesN<32>,
    winner: &Address,
    winner_handle: u64,
    amount: i128,
    creator_amount: i128,
    protocol_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "auction_settled"), item.clone()),
        (
            winner.clone(),
            winner_handle,
            amount,
            creator_amount,
            protocol_amount,
        ),
    );
}

pub fn auction_cancelled(
    env: &Env,
    item: &BytesN<32>,
    refunded_bidder: &Address,
    refunded_bidder_handle: u64,
    amount: i128,
    authorizer: &BytesN<32>,
) {
    env.events().publish(
        (Symbol::new(env, "auction_cancelled"), item.clone()),
        (
            refunded_bidder.clone(),
            refunded_bidder_handle,
            amount,
            authorizer.clone(),
        ),
    );
}

pub fn auction_recovered(
    env: &Env,
    item: &BytesN<32>,
    refund_to: &Address,
    amount: i128,
    owner: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "auction_recovered"), item.clone()),
        (refund_to.clone(), amount, owner.clone()),
    );
}

/* ---------------- ADMINISTRATION ---------------- */

pub fn authorizer_allowed(env: &Env, signer: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "authorizer_allowed"),), signer.clone());
}

pub fn authorizer_denied(env: &Env, signer: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "authorizer_denied"),), signer.clone());
}

pub fn treasury_set(env: &Env, treasury: &Address) {
    env.events()
        .publish((Symbol::new(env, "treasury_set"),), treasury.clone());
}

pub fn config_set(env: &Env, config: &AuctionConfig) {
    env.events().publish(
        (Symbol::new(env, "config_set"),),
        (
            config.min_bid_amount,
            config.min_auction_duration,
            config.max_auction_duration,
            config.max_extension,
        ),
    );
}

pub fn paused(env: &Env, owner: &Address, paused: bool) {
    let name = if paused { "paused" } else { "unpaused" };
    env.events()
        .publish((Symbol::new(env, name),), owner.clone());
}

pub fn ownership_proposed(env: &Env, owner: &Address, nominee: &Address) {
    env.events().publish(
        (Symbol::new(env, "ownership_proposed"),),
        (owner.clone(), nominee.clone()),
    );
}

pub fn ownership_accepted(env: &Env, previous: &Address, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "ownership_accepted"),),
        (previous.clone(), owner.clone()),
    );
}
