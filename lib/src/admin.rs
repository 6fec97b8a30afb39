use soroban_sdk::{Address, Env, Symbol};

use crate::{errors::ContractError, OWNER_KEY, PENDING_OWNER_KEY};

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, OWNER_KEY))
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, OWNER_KEY))
        .ok_or(ContractError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, OWNER_KEY), owner);
}

pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner = get_owner(env)?;
    if &owner != caller {
        return Err(ContractError::NotOwner);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    verify_owner(env, caller)
}

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, PENDING_OWNER_KEY))
}

/// First step of an ownership transfer. The nomination replaces any earlier
/// one and has no effect until the nominee accepts.
pub fn propose_owner(
    env: &Env,
    current_owner: &Address,
    nominee: &Address,
) -> Result<(), ContractError> {
    require_owner(env, current_owner)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, PENDING_OWNER_KEY), nominee);
    Ok(())
}

/// Second step: the nominee takes over. Returns the previous owner.
pub fn accept_owner(env: &Env, nominee: &Address) -> Result<Address, ContractError> {
    nominee.require_auth();
    let pending = pending_owner(env).ok_or(ContractError::NotPendingOwner)?;
    if &pending != nominee {
        return Err(ContractError::NotPendingOwner);
    }

    let previous = get_owner(env)?;
    set_owner(env, nominee);
    env.storage()
        .instance()
        .remove(&Symbol::new(env, PENDING_OWNER_KEY));
    Ok(previous)
}
