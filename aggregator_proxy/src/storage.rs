multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(aggregator)]
    #[storage_mapper("current_aggregator")]
    fn current_aggregator(&self) -> SingleValueMapper<ManagedAddress>;

    /// Candidate waiting for `confirmAggregator`. Empty while the proxy is stable.
    #[storage_mapper("proposed_aggregator")]
    fn proposed_aggregator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(phaseId)]
    #[storage_mapper("phase_id")]
    fn phase_id(&self) -> SingleValueMapper<u16>;

    #[storage_mapper("phase_aggregators")]
    fn phase_aggregators(&self, phase_id: u16) -> SingleValueMapper<ManagedAddress>;
}
