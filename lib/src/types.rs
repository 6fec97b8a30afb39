use soroban_sdk::{contracttype, Address, BytesN};

use crate::{
    DEFAULT_MAX_AUCTION_DURATION, DEFAULT_MAX_EXTENSION, DEFAULT_MIN_AUCTION_DURATION,
    DEFAULT_MIN_BID_AMOUNT,
};

/// Tunable parameters of a single auction, snapshotted when it starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[contracttype]
pub struct AuctionParams {
    /// Minimum opening bid for this auction.
    pub min_bid: i128,
    /// Minimum raise over the current highest bid, in basis points.
    pub min_bid_increment_bps: u32,
    /// Seconds from the opening bid until the auction ends.
    pub duration: u64,
    /// New remaining time, in seconds, after an anti-snipe extension.
    pub extension: u64,
    /// A bid this close (in seconds) to the end time triggers an extension.
    pub extension_threshold: u64,
    /// Treasury share of the winning bid, in basis points.
    pub protocol_fee_bps: u32,
}

/// Global bounds every per-auction `AuctionParams` is validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub struct AuctionConfig {
    pub min_bid_amount: i128,
    pub min_auction_duration: u64,
    pub max_auction_duration: u64,
    pub max_extension: u64,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            min_bid_amount: DEFAULT_MIN_BID_AMOUNT,
            min_auction_duration: DEFAULT_MIN_AUCTION_DURATION,
            max_auction_duration: DEFAULT_MAX_AUCTION_DURATION,
            max_extension: DEFAULT_MAX_EXTENSION,
        }
    }
}

/// Lifecycle value persisted with a record. `Ended` is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum StoredState {
    None = 0,
    Active = 1,
    Settled = 2,
    Cancelled = 3,
    Recovered = 4,
}

impl StoredState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StoredState::Settled | StoredState::Cancelled | StoredState::Recovered
        )
    }
}

/// Lifecycle state as observed at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum AuctionState {
    None = 0,
    Active = 1,
    Ended = 2,
    Settled = 3,
    Cancelled = 4,
    Recovered = 5,
}

/// One auction per item, ever.
///
/// Stored under `DataKey::Auction(item)` in persistent storage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct AuctionRecord {
    pub creator: Address,
    pub creator_handle: u64,
    pub highest_bidder: Address,
    pub highest_bidder_handle: u64,
    pub highest_bid: i128,
    pub last_bid_at: u64,
    pub end_time: u64,
    pub bid_count: u32,
    pub params: AuctionParams,
    pub stored_state: StoredState,
}

/// Read-side projection of an `AuctionRecord` with its derived state.
///
/// Unknown items project to `None` addresses, zeroed numbers and
/// `AuctionState::None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct AuctionView {
    pub creator: Option<Address>,
    pub creator_handle: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bidder_handle: u64,
    pub highest_bid: i128,
    pub last_bid_at: u64,
    pub end_time: u64,
    pub bid_count: u32,
    pub params: AuctionParams,
    pub state: AuctionState,
}

/// Off-chain authorizer approval submitted alongside a start, bid or cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct Authorization {
    /// ed25519 public key of the authorizer.
    pub signer: BytesN<32>,
    pub signature: BytesN<64>,
    /// One-time value; consumed globally on first successful use.
    pub nonce: BytesN<32>,
    /// Last ledger timestamp (inclusive) at which the approval is valid.
    pub deadline: u64,
}

/// Issued claim token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct TokenRecord {
    pub owner: Address,
    pub creator: Address,
    pub creator_handle: u64,
    pub minted_at: u64,
}
