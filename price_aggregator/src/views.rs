multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{AGGREGATOR_TYPE_AND_VERSION, AGGREGATOR_VERSION};
use common_errors::*;
use common_structs::{ReporterStatus, RoundData};

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule {
    /// Settled answer of the highest finalized round.
    /// Fails while no round has reached quorum yet.
    #[view(latestRoundData)]
    fn latest_round_data(&self) -> RoundData<Self::Api> {
        let latest_round_id = self
            .latest_round_id()
            .get()
            .unwrap_or_else(|| sc_panic!(ERROR_NO_DATA_AVAILABLE));

        self.round(latest_round_id)
            .get()
            .round_data(latest_round_id)
            .unwrap_or_else(|| sc_panic!(ERROR_NO_DATA_AVAILABLE))
    }

    /// Settled answer of a given round. Open or unknown rounds are not found.
    #[view(getRoundData)]
    fn get_round_data(&self, round_id: u64) -> RoundData<Self::Api> {
        let round_mapper = self.round(round_id);
        require!(!round_mapper.is_empty(), ERROR_ROUND_NOT_FOUND);

        round_mapper
            .get()
            .round_data(round_id)
            .unwrap_or_else(|| sc_panic!(ERROR_ROUND_NOT_FOUND))
    }

    #[view(latestAnswer)]
    fn latest_answer(&self) -> BigInt {
        self.latest_round_data().answer
    }

    #[view(latestTimestamp)]
    fn latest_timestamp(&self) -> u64 {
        self.latest_round_data().updated_at
    }

    #[view(latestRound)]
    fn latest_round(&self) -> u64 {
        self.latest_round_data().round_id
    }

    #[view(getAnswer)]
    fn get_answer(&self, round_id: u64) -> BigInt {
        self.get_round_data(round_id).answer
    }

    #[view(getTimestamp)]
    fn get_timestamp(&self, round_id: u64) -> u64 {
        self.get_round_data(round_id).updated_at
    }

    #[view(version)]
    fn version(&self) -> u64 {
        AGGREGATOR_VERSION
    }

    #[view(typeAndVersion)]
    fn type_and_version(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(AGGREGATOR_TYPE_AND_VERSION)
    }

    #[view(getReporters)]
    fn get_reporters(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for key in self.reporter_status().keys() {
            result.push(key);
        }
        result
    }

    #[view(isReporter)]
    fn is_reporter(&self, reporter: ManagedAddress) -> bool {
        self.reporter_status().contains_key(&reporter)
    }

    #[view(getReporterStatus)]
    fn get_reporter_status(&self, reporter: ManagedAddress) -> OptionalValue<ReporterStatus> {
        self.reporter_status().get(&reporter).into()
    }

    /// Value a reporter submitted to a round, including submissions recorded
    /// after the round was finalized.
    #[view(getSubmission)]
    fn get_submission(&self, round_id: u64, reporter: ManagedAddress) -> OptionalValue<BigInt> {
        self.round_submissions(round_id).get(&reporter).into()
    }

    #[view(getSubmissionCount)]
    fn get_submission_count(&self, round_id: u64) -> usize {
        self.round_submissions(round_id).len()
    }
}
