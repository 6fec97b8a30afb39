use soroban_sdk::contracterror;

/// Failure kinds shared by the auction engine and the collectible contract.
///
/// Codes are grouped by class: 1-9 access and lifecycle of the contract
/// itself, 10-19 malformed input, 20-29 auction lifecycle, 30+ issuance.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Signer is not an allowed authorizer.
    Unauthorized = 3,
    DeadlineExpired = 4,
    NonceAlreadyUsed = 5,
    NotOwner = 6,
    NotPendingOwner = 7,
    Paused = 8,

    InvalidItem = 10,
    InvalidAddress = 11,
    InvalidHandle = 12,
    SelfBid = 13,
    InvalidAuctionParams = 14,
    InvalidBidAmount = 15,

    AuctionAlreadyExists = 20,
    AuctionDoesNotExist = 21,
    AuctionNotActive = 22,
    AuctionNotEnded = 23,
    AuctionAlreadySettled = 24,
    AuctionIsCancelled = 25,
    AuctionIsRecovered = 26,
    AuctionNotCancellable = 27,

    TokenAlreadyIssued = 30,
}
