use cast_lib::{AuctionParams, Authorization, ContractError};
use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::storage;

/// Terms an authorizer approves for opening an auction with its first bid.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartTerms {
    pub item: BytesN<32>,
    pub creator: Address,
    pub creator_handle: u64,
    pub bidder: Address,
    pub bidder_handle: u64,
    pub amount: i128,
    pub params: AuctionParams,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidTerms {
    pub item: BytesN<32>,
    pub bidder: Address,
    pub bidder_handle: u64,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CancelTerms {
    pub item: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorizedAction {
    Start(StartTerms),
    Bid(BidTerms),
    Cancel(CancelTerms),
}

/// The exact value an authorizer signs.
///
/// `contract` and `network` bind the approval to one deployment on one
/// network; a signature never verifies against another engine instance.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationMessage {
    pub contract: Address,
    pub network: BytesN<32>,
    pub action: AuthorizedAction,
    pub nonce: BytesN<32>,
    pub deadline: u64,
}

/// SHA-256 of the XDR encoding of `message`. Off-chain signers sign these
/// 32 bytes with their ed25519 key.
pub fn message_digest(env: &Env, message: &AuthorizationMessage) -> BytesN<32> {
    let encoded = message.clone().to_xdr(env);
    env.crypto().sha256(&encoded).to_bytes()
}

/// Checks `authorization` against `action` in this engine's domain and
/// consumes its nonce. Returns the authorizer key.
///
/// An invalid signature traps inside the host, which aborts the whole
/// invocation like any other failure.
pub fn verify(
    env: &Env,
    action: AuthorizedAction,
    authorization: &Authorization,
) -> Result<BytesN<32>, ContractError> {
    if !storage::is_authorizer(env, &authorization.signer) {
        return Err(ContractError::Unauthorized);
    }
    if env.ledger().timestamp() > authorization.deadline {
        return Err(ContractError::DeadlineExpired);
    }
    if storage::is_nonce_used(env, &authorization.nonce) {
        return Err(ContractError::NonceAlreadyUsed);
    }

    let message = AuthorizationMessage {
        contract: env.current_contract_address(),
        network: env.ledger().network_id(),
        action,
        nonce: authorization.nonce.clone(),
        deadline: authorization.deadline,
    };
    let digest = message_digest(env, &message);
    env.crypto().ed25519_verify(
        &authorization.signer,
        &Bytes::from_array(env, &digest.to_array()),
        &authorization.signature,
    );

    storage::consume_nonce(env, &authorization.nonce);
    Ok(authorization.signer.clone())
}
