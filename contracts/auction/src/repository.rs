use cast_lib::{AuctionRecord, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};
use soroban_sdk::{BytesN, Env};

use crate::storage::DataKey;

/// Handles all persistent-storage interactions for auction records.
///
/// The engines never touch `env.storage()` for records directly; records
/// are always read back through `state::derive_state` before acting.
pub struct AuctionRepository {
    env: Env,
}

impl AuctionRepository {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    pub fn load(&self, item: &BytesN<32>) -> Option<AuctionRecord> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Auction(item.clone()))
    }

    pub fn exists(&self, item: &BytesN<32>) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Auction(item.clone()))
    }

    pub fn save(&self, item: &BytesN<32>, record: &AuctionRecord) {
        let key = DataKey::Auction(item.clone());
        self.env.storage().persistent().set(&key, record);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    }
}
