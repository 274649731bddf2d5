use common_constants::FIRST_PHASE_ID;
use common_errors::*;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[init]
    fn init(&self, aggregator: ManagedAddress) {
        self.require_valid_aggregator(&aggregator);

        self.current_aggregator().set(&aggregator);
        self.phase_id().set(FIRST_PHASE_ID);
        self.phase_aggregators(FIRST_PHASE_ID).set(&aggregator);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Stages a replacement aggregator. Reads keep hitting the current one
    /// until the proposal is confirmed. A new proposal replaces a pending one.
    #[endpoint(proposeAggregator)]
    fn propose_aggregator(&self, aggregator: ManagedAddress) {
        self.require_caller_is_admin();
        self.require_valid_aggregator(&aggregator);

        self.proposed_aggregator().set(&aggregator);
        self.aggregator_proposed_event(&self.current_aggregator().get(), &aggregator);
    }

    /// Promotes the pending proposal. The caller restates the address it
    /// expects, so a proposal swapped in between is never confirmed by mistake.
    #[endpoint(confirmAggregator)]
    fn confirm_aggregator(&self, aggregator: ManagedAddress) {
        self.require_caller_is_admin();

        let proposed_mapper = self.proposed_aggregator();
        require!(
            !proposed_mapper.is_empty() && proposed_mapper.get() == aggregator,
            ERROR_PROPOSAL_MISMATCH
        );
        proposed_mapper.clear();

        let phase_id = self
            .phase_id()
            .get()
            .checked_add(1)
            .unwrap_or_else(|| sc_panic!(ERROR_PHASE_LIMIT_REACHED));
        self.phase_id().set(phase_id);

        let previous = self.current_aggregator().replace(&aggregator);
        self.phase_aggregators(phase_id).set(&aggregator);

        self.aggregator_confirmed_event(&previous, &aggregator, phase_id);
    }

    fn require_caller_is_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERROR_UNAUTHORIZED
        );
    }

    fn require_valid_aggregator(&self, aggregator: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(aggregator),
            ERROR_INVALID_AGGREGATOR
        );
    }
}
