#![no_std]

/// Upper bound on the reporter set. Also the capacity of the median buffer,
/// so a round can never hold more submissions than this when it finalizes.
pub const MAX_REPORTERS: usize = 31;

pub const MIN_QUORUM: usize = 1;

pub const AGGREGATOR_VERSION: u64 = 4;
pub const AGGREGATOR_TYPE_AND_VERSION: &[u8] = b"PriceAggregator 1.0.0";

pub const PROXY_TYPE_AND_VERSION: &[u8] = b"AggregatorProxy 1.0.0";

/// Phase assigned to the aggregator the proxy is deployed with.
pub const FIRST_PHASE_ID: u16 = 1;
