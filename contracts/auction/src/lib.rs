#![no_std]

mod authorization;
mod bidding;
mod escrow;
mod events;
mod repository;
mod settlement;
mod state;
mod storage;
mod termination;

#[cfg(test)]
mod test_settlement;
#[cfg(test)]
mod test_termination;

use cast_lib::{
    admin, validation::validate_config, AuctionConfig, AuctionParams, AuctionState, AuctionView,
    Authorization, ContractError,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

pub use authorization::{
    message_digest, AuthorizationMessage, AuthorizedAction, BidTerms, CancelTerms, StartTerms,
};

#[contract]
pub struct Auction;

#[contractimpl]
impl Auction {
    /// Initialize the engine with its owner, escrow asset, collectible
    /// contract, treasury and global bounds.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        collectible: Address,
        treasury: Address,
        config: AuctionConfig,
    ) -> Result<(), ContractError> {
        if admin::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        validate_config(&config)?;
        if treasury == env.current_contract_address() {
            return Err(ContractError::InvalidAddress);
        }

        admin::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        storage::set_collectible(&env, &collectible);
        storage::set_treasury(&env, &treasury);
        storage::set_config(&env, &config);
        storage::set_paused(&env, false);
        storage::bump_instance(&env);

        events::treasury_set(&env, &treasury);
        events::config_set(&env, &config);
        Ok(())
    }

    /* ---------------- AUCTIONS ---------------- */

    /// Open an auction on `item` with the first bid. Escrows `amount` from
    /// `bidder`; pass `allowance_expiration_ledger` to approve and pull in
    /// one call.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        env: Env,
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
        storage::bump_instance(&env);
        bidding::start(
            &env,
            item,
            creator,
            creator_handle,
            bidder,
            bidder_handle,
            amount,
            params,
            authorization,
            allowance_expiration_ledger,
        )
    }

    /// Outbid the current highest bidder on an active auction.
    pub fn bid(
        env: Env,
        item: BytesN<32>,
        bidder: Address,
        bidder_handle: u64,
        amount: i128,
        authorization: Authorization,
        allowance_expiration_ledger: Option<u32>,
    ) -> Result<(), ContractError> {
        storage::bump_instance(&env);
        bidding::bid(
            &env,
            item,
            bidder,
            bidder_handle,
            amount,
            authorization,
            allowance_expiration_ledger,
        )
    }

    /// Pay out an ended auction and issue the collectible to the winner.
    /// Anyone may call this.
    pub fn settle(env: Env, item: BytesN<32>) -> Result<(), ContractError> {
        storage::bump_instance(&env);
        settlement::settle(&env, item)
    }

    pub fn batch_settle(env: Env, items: Vec<BytesN<32>>) -> Result<(), ContractError> {
        storage::bump_instance(&env);
        settlement::batch_settle(&env, items)
    }

    /// Cancel an active or ended auction and refund its highest bidder.
    pub fn cancel(
        env: Env,
        item: BytesN<32>,
        authorization: Authorization,
    ) -> Result<(), ContractError> {
        storage::bump_instance(&env);
        termination::cancel(&env, item, authorization)
    }

    pub fn batch_cancel(
        env: Env,
        items: Vec<BytesN<32>>,
        authorizations: Vec<Authorization>,
    ) -> Result<(), ContractError> {
        storage::bump_instance(&env);
        termination::batch_cancel(&env, items, authorizations)
    }

    /// Owner-only: send an auction's escrow to `refund_to` and close it.
    pub fn recover(
        env: Env,
        caller: Address,
        item: BytesN<32>,
        refund_to: Address,
    ) -> Result<(), ContractError> {
        storage::bump_instance(&env);
        termination::recover(&env, caller, item, refund_to)
    }

    /* ---------------- ADMINISTRATION ---------------- */

    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        storage::set_paused(&env, true);
        events::paused(&env, &caller, true);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        storage::set_paused(&env, false);
        events::paused(&env, &caller, false);
        Ok(())
    }

    /// Replace the global bounds. Running auctions keep the params they
    /// started with.
    pub fn set_auction_config(
        env: Env,
        caller: Address,
        config: AuctionConfig,
    ) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        validate_config(&config)?;
        storage::set_config(&env, &config);
        events::config_set(&env, &config);
        Ok(())
    }

    pub fn allow_authorizer(
        env: Env,
        caller: Address,
        signer: BytesN<32>,
    ) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        storage::set_authorizer(&env, &signer, true);
        events::authorizer_allowed(&env, &signer);
        Ok(())
    }

    pub fn deny_authorizer(
        env: Env,
        caller: Address,
        signer: BytesN<32>,
    ) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        storage::set_authorizer(&env, &signer, false);
        events::authorizer_denied(&env, &signer);
        Ok(())
    }

    pub fn set_treasury(env: Env, caller: Address, treasury: Address) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        if treasury == env.current_contract_address() {
            return Err(ContractError::InvalidAddress);
        }
        storage::set_treasury(&env, &treasury);
        events::treasury_set(&env, &treasury);
        Ok(())
    }

    /// Nominate a new owner. Takes effect once the nominee calls
    /// `accept_ownership`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        admin::propose_owner(&env, &caller, &new_owner)?;
        events::ownership_proposed(&env, &caller, &new_owner);
        Ok(())
    }

    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), ContractError> {
        let previous = admin::accept_owner(&env, &caller)?;
        events::ownership_accepted(&env, &previous, &caller);
        Ok(())
    }

    /* ---------------- VIEWS ---------------- */

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        admin::get_owner(&env)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        admin::pending_owner(&env)
    }

    pub fn token(env: Env) -> Result<Address, ContractError> {
        storage::get_token(&env)
    }

    pub fn collectible(env: Env) -> Result<Address, ContractError> {
        storage::get_collectible(&env)
    }

    pub fn treasury(env: Env) -> Result<Address, ContractError> {
        storage::get_treasury(&env)
    }

    pub fn auction_config(env: Env) -> Result<AuctionConfig, ContractError> {
        storage::get_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn is_authorizer(env: Env, signer: BytesN<32>) -> bool {
        storage::is_authorizer(&env, &signer)
    }

    pub fn is_nonce_used(env: Env, nonce: BytesN<32>) -> bool {
        storage::is_nonce_used(&env, &nonce)
    }

    /// Full record for `item`. Unknown items come back zeroed with state
    /// `None`.
    pub fn get_auction(env: Env, item: BytesN<32>) -> AuctionView {
        let record = repository::AuctionRepository::new(&env).load(&item);
        state::to_view(record, env.ledger().timestamp())
    }

    pub fn get_auction_state(env: Env, item: BytesN<32>) -> AuctionState {
        let record = repository::AuctionRepository::new(&env).load(&item);
        state::derive_state(record.as_ref(), env.ledger().timestamp())
    }
}
