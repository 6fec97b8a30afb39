use soroban_sdk::{contractclient, Address, BytesN, Env};

use crate::errors::ContractError;

/// Issuance collaborator: mints exactly one claim token per item.
///
/// The auction engine calls `mint` once per item, from settlement only.
#[contractclient(name = "CollectibleClient")]
pub trait CollectibleInterface {
    /// Fails with `TokenAlreadyIssued` when `item` was minted before.
    fn mint(
        env: Env,
        to: Address,
        item: BytesN<32>,
        creator_handle: u64,
        creator: Address,
    ) -> Result<(), ContractError>;

    fn owner_of(env: Env, item: BytesN<32>) -> Option<Address>;

    fn exists(env: Env, item: BytesN<32>) -> bool;
}
