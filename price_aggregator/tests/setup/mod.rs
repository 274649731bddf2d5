use crate::constants::*;

use common_proxies::proxy_price_aggregator::PriceAggregatorProxy;
use common_structs::{ReporterStatus, RoundData};

use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigInt, ManagedAddress, ManagedBuffer, MultiValueEncoded, ReturnsNewManagedAddress,
        ReturnsResult,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(PRICE_AGGREGATOR_PATH, price_aggregator::ContractBuilder);

    blockchain
}

pub fn answer(value: i64) -> BigInt<StaticApi> {
    BigInt::from(value)
}

fn reporter_args(reporters: &[TestAddress]) -> MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>> {
    let mut args = MultiValueEncoded::new();
    for reporter in reporters {
        args.push(reporter.to_managed_address());
    }
    args
}

fn error_text(error_message: &[u8]) -> &str {
    core::str::from_utf8(error_message).unwrap()
}

pub struct PriceAggregatorTestState {
    pub world: ScenarioWorld,
    pub price_aggregator_sc: ManagedAddress<StaticApi>,
}

impl PriceAggregatorTestState {
    /// Five reporters, quorum of three, bounds wide enough for every test price.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_QUORUM, MIN_ANSWER, MAX_ANSWER, &ALL_REPORTERS)
    }

    pub fn with_config(
        quorum: usize,
        min_answer: i64,
        max_answer: i64,
        reporters: &[TestAddress],
    ) -> Self {
        let mut world = world();
        world.account(OWNER_ADDRESS).nonce(1);
        world.account(OUTSIDER).nonce(1);
        for reporter in ALL_REPORTERS {
            world.account(reporter).nonce(1);
        }
        world.current_block().block_timestamp(START_TIMESTAMP);

        let price_aggregator_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(PriceAggregatorProxy)
            .init(
                quorum,
                answer(min_answer),
                answer(max_answer),
                DECIMALS,
                ManagedBuffer::from(DESCRIPTION),
            )
            .code(PRICE_AGGREGATOR_PATH)
            .new_address(PRICE_AGGREGATOR_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            price_aggregator_sc,
        };
        if !reporters.is_empty() {
            state.set_reporters(reporters);
        }
        state
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Administration
    pub fn set_reporters(&mut self, reporters: &[TestAddress]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .set_reporters(reporter_args(reporters))
            .run();
    }

    pub fn set_reporters_error(
        &mut self,
        from: TestAddress,
        reporters: &[TestAddress],
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .set_reporters(reporter_args(reporters))
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn set_quorum(&mut self, quorum: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .set_quorum(quorum)
            .run();
    }

    pub fn set_quorum_error(&mut self, from: TestAddress, quorum: usize, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .set_quorum(quorum)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    // Reporting
    pub fn transmit(&mut self, from: TestAddress, round_id: u64, value: i64) {
        self.world
            .tx()
            .from(from)
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .transmit(round_id, answer(value))
            .run();
    }

    pub fn transmit_error(
        &mut self,
        from: TestAddress,
        round_id: u64,
        value: i64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .transmit(round_id, answer(value))
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    /// Submits one answer per reporter, in the given order.
    pub fn transmit_all(&mut self, round_id: u64, submissions: &[(TestAddress, i64)]) {
        for (reporter, value) in submissions {
            self.transmit(*reporter, round_id, *value);
        }
    }

    // Reads
    pub fn latest_round_data(&mut self) -> RoundData<StaticApi> {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .run()
    }

    pub fn latest_round_data_error(&mut self, error_message: &[u8]) {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .latest_round_data()
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn get_round_data(&mut self, round_id: u64) -> RoundData<StaticApi> {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_round_data(round_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_round_data_error(&mut self, round_id: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_round_data(round_id)
            .returns(ExpectMessage(error_text(error_message)))
            .run();
    }

    pub fn latest_answer(&mut self) -> BigInt<StaticApi> {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .latest_answer()
            .returns(ReturnsResult)
            .run()
    }

    pub fn latest_timestamp(&mut self) -> u64 {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .latest_timestamp()
            .returns(ReturnsResult)
            .run()
    }

    pub fn latest_round(&mut self) -> u64 {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .latest_round()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_answer(&mut self, round_id: u64) -> BigInt<StaticApi> {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_answer(round_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_timestamp(&mut self, round_id: u64) -> u64 {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_timestamp(round_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn quorum(&mut self) -> usize {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .quorum()
            .returns(ReturnsResult)
            .run()
    }

    pub fn decimals(&mut self) -> u8 {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .decimals()
            .returns(ReturnsResult)
            .run()
    }

    pub fn description(&mut self) -> ManagedBuffer<StaticApi> {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .description()
            .returns(ReturnsResult)
            .run()
    }

    pub fn version(&mut self) -> u64 {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .version()
            .returns(ReturnsResult)
            .run()
    }

    pub fn type_and_version(&mut self) -> ManagedBuffer<StaticApi> {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .type_and_version()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_reporters(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        let reporters = self
            .world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_reporters()
            .returns(ReturnsResult)
            .run();

        reporters.into_iter().collect()
    }

    pub fn is_reporter(&mut self, reporter: TestAddress) -> bool {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .is_reporter(reporter.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn reporter_status(&mut self, reporter: TestAddress) -> Option<ReporterStatus> {
        let status = self
            .world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_reporter_status(reporter.to_managed_address())
            .returns(ReturnsResult)
            .run();

        status.into_option()
    }

    pub fn submission(&mut self, round_id: u64, reporter: TestAddress) -> Option<BigInt<StaticApi>> {
        let submission: OptionalValue<BigInt<StaticApi>> = self
            .world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_submission(round_id, reporter.to_managed_address())
            .returns(ReturnsResult)
            .run();

        submission.into_option()
    }

    pub fn submission_count(&mut self, round_id: u64) -> usize {
        self.world
            .query()
            .to(self.price_aggregator_sc.clone())
            .typed(PriceAggregatorProxy)
            .get_submission_count(round_id)
            .returns(ReturnsResult)
            .run()
    }
}
