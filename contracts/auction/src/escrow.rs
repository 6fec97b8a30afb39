use cast_lib::ContractError;
use soroban_sdk::{token, Address, Env};

use crate::storage;

/// Moves `amount` from `payer` into the engine.
///
/// With `allowance_expiration_ledger` set, the payer's approval and the pull
/// happen in one step (`approve` then `transfer_from`). If that path fails the
/// invocation fails; there is no retry through a plain transfer.
///
/// The `approve` replaces whatever allowance the payer had already granted
/// the engine, including a larger one; after the pull it is zero.
pub fn pull(
    env: &Env,
    payer: &Address,
    amount: i128,
    allowance_expiration_ledger: Option<u32>,
) -> Result<(), ContractError> {
    let client = token::Client::new(env, &storage::get_token(env)?);
    let engine = env.current_contract_address();

    match allowance_expiration_ledger {
        Some(expiration_ledger) => {
            client.approve(payer, &engine, &amount, &expiration_ledger);
            client.transfer_from(&engine, payer, &engine, &amount);
        }
        None => client.transfer(payer, &engine, &amount),
    }
    Ok(())
}

/// Pays `amount` out of escrow. Zero amounts are skipped.
pub fn push(env: &Env, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, &storage::get_token(env)?);
    client.transfer(&env.current_contract_address(), recipient, &amount);
    Ok(())
}
