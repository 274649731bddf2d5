use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::MxscPath;

pub const AGGREGATOR_PROXY_PATH: MxscPath = MxscPath::new("output/aggregator_proxy.mxsc.json");
pub const PRICE_AGGREGATOR_PATH: MxscPath =
    MxscPath::new("../price_aggregator/output/price_aggregator.mxsc.json");

pub const AGGREGATOR_PROXY_ADDRESS: TestSCAddress = TestSCAddress::new("aggregator-proxy");
pub const AGGREGATOR_X_ADDRESS: TestSCAddress = TestSCAddress::new("aggregator-x");
pub const AGGREGATOR_Y_ADDRESS: TestSCAddress = TestSCAddress::new("aggregator-y");
pub const AGGREGATOR_Z_ADDRESS: TestSCAddress = TestSCAddress::new("aggregator-z");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const REPORTER_A: TestAddress = TestAddress::new("reporter-a");
pub const REPORTER_B: TestAddress = TestAddress::new("reporter-b");
pub const REPORTER_C: TestAddress = TestAddress::new("reporter-c");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const QUORUM: usize = 3;
pub const MIN_ANSWER: i64 = 1;
pub const MAX_ANSWER: i64 = 1_000_000;
pub const DECIMALS: u8 = 8;
pub const DESCRIPTION: &[u8] = b"EGLD / USD";

pub const START_TIMESTAMP: u64 = 1_700_000_000;
