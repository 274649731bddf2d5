multiversx_sc::imports!();

use common_errors::*;
use common_proxies::proxy_price_aggregator::PriceAggregatorProxy;
use common_structs::RoundData;

/// Aggregator a forwarded read is served by.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundDataSource {
    Current,
    Proposed,
    Phase(u16),
}

#[multiversx_sc::module]
pub trait SourceModule: crate::storage::StorageModule {
    fn source_address(&self, source: RoundDataSource) -> ManagedAddress {
        match source {
            RoundDataSource::Current => self.current_aggregator().get(),
            RoundDataSource::Proposed => {
                let proposed_mapper = self.proposed_aggregator();
                require!(!proposed_mapper.is_empty(), ERROR_NO_PROPOSAL_PENDING);
                proposed_mapper.get()
            },
            RoundDataSource::Phase(phase_id) => {
                let phase_mapper = self.phase_aggregators(phase_id);
                require!(!phase_mapper.is_empty(), ERROR_PHASE_NOT_FOUND);
                phase_mapper.get()
            },
        }
    }

    /// Errors raised by the aggregator abort the whole call with the
    /// aggregator's message.
    fn fetch_latest_round_data(&self, source: RoundDataSource) -> RoundData<Self::Api> {
        self.tx()
            .to(self.source_address(source))
            .typed(PriceAggregatorProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn fetch_round_data(&self, source: RoundDataSource, round_id: u64) -> RoundData<Self::Api> {
        self.tx()
            .to(self.source_address(source))
            .typed(PriceAggregatorProxy)
            .get_round_data(round_id)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
