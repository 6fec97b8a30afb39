#![no_std]
pub mod admin;
pub mod errors;
pub mod interface;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::ContractError;
pub use storage_keys::*;
pub use types::*;

/// Basis-point denominator: 10_000 bps = 100%. Also the largest valid bps value.
pub const BPS_DENOMINATOR: u32 = 10_000;

// Default global auction bounds. Amounts assume a 6-decimal escrow asset.
pub const DEFAULT_MIN_BID_AMOUNT: i128 = 1_000_000; // 1 USDC
pub const DEFAULT_MIN_AUCTION_DURATION: u64 = 60 * 60; // 1 hour
pub const DEFAULT_MAX_AUCTION_DURATION: u64 = 30 * 24 * 60 * 60; // 30 days
pub const DEFAULT_MAX_EXTENSION: u64 = 24 * 60 * 60; // 24 hours

/// TTL constants (in ledgers).
///
/// Ledgers close roughly every 5 seconds, so the record window keeps an
/// auction readable for about 30 days past its last write and bumps it to
/// about 60 days.
pub const RECORD_TTL_THRESHOLD: u32 = 518_400;
pub const RECORD_TTL_EXTEND: u32 = 1_036_800;
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
pub const INSTANCE_TTL_EXTEND: u32 = 518_400;
