use cast_lib::{AuctionParams, AuctionRecord, AuctionState, AuctionView, StoredState};

/// Lifecycle state of `record` at ledger time `now`.
///
/// `Ended` is never stored: an `Active` record whose `end_time` has been
/// reached reads as `Ended`. Expiry is therefore detected lazily on the next
/// interaction, without any timer.
pub fn derive_state(record: Option<&AuctionRecord>, now: u64) -> AuctionState {
    let Some(record) = record else {
        return AuctionState::None;
    };

    match record.stored_state {
        StoredState::None => AuctionState::None,
        StoredState::Active if now < record.end_time => AuctionState::Active,
        StoredState::Active => AuctionState::Ended,
        StoredState::Settled => AuctionState::Settled,
        StoredState::Cancelled => AuctionState::Cancelled,
        StoredState::Recovered => AuctionState::Recovered,
    }
}

pub fn to_view(record: Option<AuctionRecord>, now: u64) -> AuctionView {
    let state = derive_state(record.as_ref(), now);
    match record {
        Some(record) => AuctionView {
            creator: Some(record.creator),
            creator_handle: record.creator_handle,
            highest_bidder: Some(record.highest_bidder),
            highest_bidder_handle: record.highest_bidder_handle,
            highest_bid: record.highest_bid,
            last_bid_at: record.last_bid_at,
            end_time: record.end_time,
            bid_count: record.bid_count,
            params: record.params,
            state,
        },
        None => AuctionView {
            creator: None,
            creator_handle: 0,
            highest_bidder: None,
            highest_bidder_handle: 0,
            highest_bid: 0,
            last_bid_at: 0,
            end_time: 0,
            bid_count: 0,
            params: AuctionParams::default(),
            state,
        },
    }
}
