multiversx_sc::imports!();

use common_constants::PROXY_TYPE_AND_VERSION;
use common_proxies::proxy_price_aggregator::PriceAggregatorProxy;
use common_structs::RoundData;

use crate::source::RoundDataSource;

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule + crate::source::SourceModule {
    #[view(latestRoundData)]
    fn latest_round_data(&self) -> RoundData<Self::Api> {
        self.fetch_latest_round_data(RoundDataSource::Current)
    }

    #[view(getRoundData)]
    fn get_round_data(&self, round_id: u64) -> RoundData<Self::Api> {
        self.fetch_round_data(RoundDataSource::Current, round_id)
    }

    /// Lets consumers inspect the candidate before it is confirmed.
    #[view(proposedLatestRoundData)]
    fn proposed_latest_round_data(&self) -> RoundData<Self::Api> {
        self.fetch_latest_round_data(RoundDataSource::Proposed)
    }

    #[view(proposedGetRoundData)]
    fn proposed_get_round_data(&self, round_id: u64) -> RoundData<Self::Api> {
        self.fetch_round_data(RoundDataSource::Proposed, round_id)
    }

    /// Round ids restart with every aggregator, so historical reads are
    /// addressed by phase.
    #[view(getPhaseRoundData)]
    fn get_phase_round_data(&self, phase_id: u16, round_id: u64) -> RoundData<Self::Api> {
        self.fetch_round_data(RoundDataSource::Phase(phase_id), round_id)
    }

    #[view(latestAnswer)]
    fn latest_answer(&self) -> BigInt {
        self.fetch_latest_round_data(RoundDataSource::Current).answer
    }

    #[view(latestTimestamp)]
    fn latest_timestamp(&self) -> u64 {
        self.fetch_latest_round_data(RoundDataSource::Current)
            .updated_at
    }

    #[view(latestRound)]
    fn latest_round(&self) -> u64 {
        self.fetch_latest_round_data(RoundDataSource::Current)
            .round_id
    }

    #[view(getAnswer)]
    fn get_answer(&self, round_id: u64) -> BigInt {
        self.fetch_round_data(RoundDataSource::Current, round_id)
            .answer
    }

    #[view(getTimestamp)]
    fn get_timestamp(&self, round_id: u64) -> u64 {
        self.fetch_round_data(RoundDataSource::Current, round_id)
            .updated_at
    }

    #[view(decimals)]
    fn decimals(&self) -> u8 {
        self.tx()
            .to(self.current_aggregator().get())
            .typed(PriceAggregatorProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(description)]
    fn description(&self) -> ManagedBuffer {
        self.tx()
            .to(self.current_aggregator().get())
            .typed(PriceAggregatorProxy)
            .description()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(version)]
    fn version(&self) -> u64 {
        self.tx()
            .to(self.current_aggregator().get())
            .typed(PriceAggregatorProxy)
            .version()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(proposedAggregator)]
    fn get_proposed_aggregator(&self) -> OptionalValue<ManagedAddress> {
        let proposed_mapper = self.proposed_aggregator();
        if proposed_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(proposed_mapper.get())
        }
    }

    #[view(phaseAggregators)]
    fn get_phase_aggregator(&self, phase_id: u16) -> OptionalValue<ManagedAddress> {
        let phase_mapper = self.phase_aggregators(phase_id);
        if phase_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(phase_mapper.get())
        }
    }

    #[view(typeAndVersion)]
    fn type_and_version(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(PROXY_TYPE_AND_VERSION)
    }
}
