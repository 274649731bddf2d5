use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::MxscPath;

pub const PRICE_AGGREGATOR_PATH: MxscPath = MxscPath::new("output/price_aggregator.mxsc.json");
pub const PRICE_AGGREGATOR_ADDRESS: TestSCAddress = TestSCAddress::new("price-aggregator");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const REPORTER_A: TestAddress = TestAddress::new("reporter-a");
pub const REPORTER_B: TestAddress = TestAddress::new("reporter-b");
pub const REPORTER_C: TestAddress = TestAddress::new("reporter-c");
pub const REPORTER_D: TestAddress = TestAddress::new("reporter-d");
pub const REPORTER_E: TestAddress = TestAddress::new("reporter-e");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const ALL_REPORTERS: [TestAddress; 5] =
    [REPORTER_A, REPORTER_B, REPORTER_C, REPORTER_D, REPORTER_E];

pub const DEFAULT_QUORUM: usize = 3;
pub const MIN_ANSWER: i64 = 1;
pub const MAX_ANSWER: i64 = 1_000_000;
pub const DECIMALS: u8 = 8;
pub const DESCRIPTION: &[u8] = b"EGLD / USD";

pub const START_TIMESTAMP: u64 = 1_700_000_000;
pub const SEED: u64 = 0x5eed;
