use cast_lib::{
    AuctionConfig, ContractError, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, BytesN, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    Collectible,
    Treasury,
    Config,
    Paused,
    Authorizer(BytesN<32>),
    UsedNonce(BytesN<32>),
    Auction(BytesN<32>),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/* ---------------- COLLABORATORS ---------------- */

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_collectible(env: &Env, collectible: &Address) {
    env.storage().instance().set(&DataKey::Collectible, collectible);
}

pub fn get_collectible(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Collectible)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- TREASURY ---------------- */

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn get_treasury(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- CONFIG ---------------- */

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<AuctionConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- PAUSE ---------------- */

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/* ---------------- AUTHORIZERS ---------------- */

// One persistent entry per signer; the allowlist never loads as a whole.
pub fn set_authorizer(env: &Env, signer: &BytesN<32>, allowed: bool) {
    let key = DataKey::Authorizer(signer.clone());
    if allowed {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_authorizer(env: &Env, signer: &BytesN<32>) -> bool {
    let key = DataKey::Authorizer(signer.clone());
    let allowed = env.storage().persistent().has(&key);
    if allowed {
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    }
    allowed
}

/* ---------------- NONCES ---------------- */

pub fn is_nonce_used(env: &Env, nonce: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::UsedNonce(nonce.clone()))
}

pub fn consume_nonce(env: &Env, nonce: &BytesN<32>) {
    let key = DataKey::UsedNonce(nonce.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}
