multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("new_round")]
    fn new_round_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] started_by: &ManagedAddress,
        started_at: u64,
    );

    #[event("new_transmission")]
    fn new_transmission_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] reporter: &ManagedAddress,
        answer: &BigInt,
    );

    #[event("answer_updated")]
    fn answer_updated_event(
        &self,
        #[indexed] current: &BigInt,
        #[indexed] round_id: u64,
        updated_at: u64,
    );

    #[event("reporters_set")]
    fn reporters_set_event(&self, #[indexed] quorum: usize, reporters: &ManagedVec<ManagedAddress>);

    #[event("quorum_set")]
    fn quorum_set_event(&self, #[indexed] previous: usize, #[indexed] quorum: usize);
}
