multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{ReporterStatus, Round};

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[view(description)]
    #[storage_mapper("description")]
    fn description(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getMinAnswer)]
    #[storage_mapper("min_answer")]
    fn min_answer(&self) -> SingleValueMapper<BigInt>;

    #[view(getMaxAnswer)]
    #[storage_mapper("max_answer")]
    fn max_answer(&self) -> SingleValueMapper<BigInt>;

    #[view(getQuorum)]
    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<usize>;

    /// Authorized reporters. Removing a reporter drops its counters.
    #[storage_mapper("reporter_status")]
    fn reporter_status(&self) -> MapMapper<ManagedAddress, ReporterStatus>;

    #[storage_mapper("round")]
    fn round(&self, round_id: u64) -> SingleValueMapper<Round<Self::Api>>;

    #[storage_mapper("round_submissions")]
    fn round_submissions(&self, round_id: u64) -> MapMapper<ManagedAddress, BigInt>;

    /// Rounds above the latest settled one that have not reached quorum yet.
    #[storage_mapper("open_rounds")]
    fn open_rounds(&self) -> UnorderedSetMapper<u64>;

    /// Highest finalized round. `None` until the first round settles, which
    /// keeps round id 0 usable.
    #[storage_mapper("latest_round_id")]
    fn latest_round_id(&self) -> SingleValueMapper<Option<u64>>;
}
