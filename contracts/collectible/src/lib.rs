#![no_std]


use cast_lib::{
    admin,
    interface::CollectibleInterface,
    validation::validate_item,
    ContractError,
    TokenRecord,
    RECORD_TTL_EXTEND,
    RECORD_TTL_THRESHOLD,
};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, Symbol};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Minter,
    Supply,
    Token(BytesN<32>),
}

#[contract]
pub struct Collectible;

#[contractimpl]
impl Collectible {
    /// Initialize contract with owner and the single address allowed to mint
    pub fn initialize(env: Env, owner: Address, minter: Address) -> Result<(), ContractError> {
        if admin::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        owner.require_auth();
        admin::set_owner(&env, &owner);
        env.storage().instance().set(&DataKey::Minter, &minter);
        env.storage().instance().set(&DataKey::Supply, &0u64);

        Ok(())
    }

    /// Point issuance at a different engine (owner only)
    pub fn set_minter(env: Env, caller: Address, minter: Address) -> Result<(), ContractError> {
        admin::require_owner(&env, &caller)?;
        env.storage().instance().set(&DataKey::Minter, &minter);

        env.events()
            .publish((Symbol::new(&env, "minter_set"),), (caller, minter));
        Ok(())
    }

    pub fn minter(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Minter)
    }

    pub fn get_token(env: Env, item: BytesN<32>) -> Option<TokenRecord> {
        env.storage().persistent().get(&DataKey::Token(item))
    }

    pub fn total_supply(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Supply).unwrap_or(0)
    }
}

#[contractimpl]
impl CollectibleInterface for Collectible {
    fn mint(
        env: Env,
        to: Address,
        item: BytesN<32>,
        creator_handle: u64,
        creator: Address,
    ) -> Result<(), ContractError> {
        let minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(ContractError::NotInitialized)?;
        minter.require_auth();

        validate_item(&env, &item)?;

        let key = DataKey::Token(item.clone());
        if env.storage().persistent().has(&key) {
            return Err(ContractError::TokenAlreadyIssued);
        }

        let token = TokenRecord {
            owner: to.clone(),
            creator,
            creator_handle,
            minted_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&key, &token);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

        let supply: u64 = env.storage().instance().get(&DataKey::Supply).unwrap_or(0);
        env.storage().instance().set(&DataKey::Supply, &(supply + 1));

        env.events()
            .publish((Symbol::new(&env, "minted"), item), (to, creator_handle));
        Ok(())
    }

    fn owner_of(env: Env, item: BytesN<32>) -> Option<Address> {
        env.storage()
            .persistent()
            .get::<_, TokenRecord>(&DataKey::Token(item))
            .map(|token| token.owner)
    }

    fn exists(env: Env, item: BytesN<32>) -> bool {
        env.storage().persistent().has(&DataKey::Token(item))
    }
}
