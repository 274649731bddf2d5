multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("aggregator_proposed")]
    fn aggregator_proposed_event(
        &self,
        #[indexed] current: &ManagedAddress,
        #[indexed] proposed: &ManagedAddress,
    );

    #[event("aggregator_confirmed")]
    fn aggregator_confirmed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] latest: &ManagedAddress,
        phase_id: u16,
    );
}
