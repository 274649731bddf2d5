use common_constants::{MAX_REPORTERS, MIN_QUORUM};
use common_errors::*;
use common_structs::ReporterStatus;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule + crate::utils::UtilsModule + crate::events::EventsModule
{
    /// Answer bounds, decimals and description are fixed for the lifetime of
    /// the contract. The reporter set starts empty and is filled with
    /// `setReporters`.
    #[init]
    fn init(
        &self,
        quorum: usize,
        min_answer: BigInt,
        max_answer: BigInt,
        decimals: u8,
        description: ManagedBuffer,
    ) {
        require!(
            quorum >= MIN_QUORUM && quorum <= MAX_REPORTERS,
            ERROR_INVALID_QUORUM
        );
        require!(min_answer <= max_answer, ERROR_INVALID_ANSWER_BOUNDS);

        self.quorum().set(quorum);
        self.min_answer().set(min_answer);
        self.max_answer().set(max_answer);
        self.decimals().set(decimals);
        self.description().set(description);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces the whole reporter set. Reporters present in both the old and
    /// the new set keep their submission counters.
    #[endpoint(setReporters)]
    fn set_reporters(&self, reporters: MultiValueEncoded<ManagedAddress>) {
        self.require_caller_is_admin();

        let mut new_reporters: ManagedVec<ManagedAddress> = ManagedVec::new();
        for reporter in reporters {
            require!(
                !new_reporters.contains(&reporter),
                ERROR_DUPLICATE_REPORTER
            );
            new_reporters.push(reporter);
        }
        require!(
            new_reporters.len() <= MAX_REPORTERS,
            ERROR_TOO_MANY_REPORTERS
        );

        let quorum = self.quorum().get();
        self.require_valid_quorum(quorum, new_reporters.len());

        let mut reporter_mapper = self.reporter_status();
        let mut removed: ManagedVec<ManagedAddress> = ManagedVec::new();
        for reporter in reporter_mapper.keys() {
            if !new_reporters.contains(&reporter) {
                removed.push(reporter);
            }
        }
        for reporter in removed.iter() {
            let _ = reporter_mapper.remove(&reporter);
        }
        for reporter in new_reporters.iter() {
            if !reporter_mapper.contains_key(&reporter) {
                let _ = reporter_mapper.insert(reporter.clone_value(), ReporterStatus::default());
            }
        }

        self.reporters_set_event(quorum, &new_reporters);
    }

    #[endpoint(setQuorum)]
    fn set_quorum(&self, quorum: usize) {
        self.require_caller_is_admin();
        self.require_valid_quorum(quorum, self.reporter_status().len());

        let previous = self.quorum().replace(quorum);
        self.quorum_set_event(previous, quorum);

        if quorum < previous {
            self.finalize_open_rounds(quorum);
        }
    }
}
