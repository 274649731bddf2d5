multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use arrayvec::ArrayVec;
use common_constants::{MAX_REPORTERS, MIN_QUORUM};
use common_errors::*;
use common_structs::Round;

use crate::median;

#[multiversx_sc::module]
pub trait UtilsModule: crate::storage::StorageModule + crate::events::EventsModule {
    fn require_caller_is_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERROR_UNAUTHORIZED
        );
    }

    fn require_is_reporter(&self, reporter: &ManagedAddress) {
        require!(
            self.reporter_status().contains_key(reporter),
            ERROR_UNAUTHORIZED_REPORTER
        );
    }

    fn require_valid_quorum(&self, quorum: usize, reporters: usize) {
        require!(
            quorum >= MIN_QUORUM && quorum <= reporters && quorum <= MAX_REPORTERS,
            ERROR_INVALID_QUORUM
        );
    }

    fn require_answer_in_bounds(&self, answer: &BigInt) {
        require!(
            answer >= &self.min_answer().get() && answer <= &self.max_answer().get(),
            ERROR_OUT_OF_BOUNDS
        );
    }

    /// Rounds older than the last settled one are closed for good. The settled
    /// round itself still accepts submissions, they are only recorded.
    fn require_round_not_stale(&self, round_id: u64) {
        if let Some(latest_round_id) = self.latest_round_id().get() {
            require!(round_id >= latest_round_id, ERROR_STALE_ROUND);
        }
    }

    fn record_submission(&self, round_id: u64, reporter: ManagedAddress, answer: BigInt) {
        let current_timestamp = self.blockchain().get_block_timestamp();

        let round_mapper = self.round(round_id);
        let mut round = if round_mapper.is_empty() {
            self.new_round_event(round_id, &reporter, current_timestamp);
            let _ = self.open_rounds().insert(round_id);
            Round::open(reporter.clone(), current_timestamp)
        } else {
            round_mapper.get()
        };

        let mut submissions = self.round_submissions(round_id);
        let _ = submissions.insert(reporter.clone(), answer.clone());
        self.new_transmission_event(round_id, &reporter, &answer);

        let counted = !round.finalized;
        if counted && submissions.len() >= self.quorum().get() {
            self.finalize_round(round_id, &mut round, &submissions, current_timestamp);
            self.close_stale_rounds();
        }
        round_mapper.set(&round);

        self.reporter_status()
            .entry(reporter)
            .and_modify(|status| {
                status.submissions += 1;
                status.counted_submissions += counted as u64;
            });
    }

    fn finalize_round(
        &self,
        round_id: u64,
        round: &mut Round<Self::Api>,
        submissions: &MapMapper<ManagedAddress, BigInt>,
        current_timestamp: u64,
    ) {
        let submissions_len = submissions.len();
        require!(
            submissions_len <= MAX_REPORTERS,
            ERROR_TOO_MANY_REPORTERS
        );

        let mut answers = ArrayVec::<BigInt, MAX_REPORTERS>::new();
        for answer in submissions.values() {
            answers.push(answer);
        }

        let answer = median::calculate(answers.as_mut_slice())
            .unwrap_or_else(|| sc_panic!(ERROR_NO_SUBMISSIONS));

        if !round.finalize(round_id, answer.clone(), current_timestamp) {
            return;
        }
        let _ = self.open_rounds().swap_remove(&round_id);

        let latest_round_mapper = self.latest_round_id();
        match latest_round_mapper.get() {
            Some(latest_round_id) if latest_round_id >= round_id => {},
            _ => latest_round_mapper.set(Some(round_id)),
        }

        self.answer_updated_event(&answer, round_id, current_timestamp);
    }

    /// Settles every open round that already holds `quorum` submissions.
    /// Used when the quorum is lowered, so that a round never sits on enough
    /// submissions without being finalized.
    fn finalize_open_rounds(&self, quorum: usize) {
        let current_timestamp = self.blockchain().get_block_timestamp();

        let mut ready: ManagedVec<u64> = ManagedVec::new();
        for round_id in self.open_rounds().iter() {
            if self.round_submissions(round_id).len() >= quorum {
                ready.push(round_id);
            }
        }

        for round_id in ready.iter() {
            let round_mapper = self.round(round_id);
            let mut round = round_mapper.get();
            let submissions = self.round_submissions(round_id);
            self.finalize_round(round_id, &mut round, &submissions, current_timestamp);
            round_mapper.set(&round);
        }

        if !ready.is_empty() {
            self.close_stale_rounds();
        }
    }

    /// Rounds below the latest settled one can no longer receive submissions
    /// and are dropped from the open set without being finalized.
    fn close_stale_rounds(&self) {
        let Some(latest_round_id) = self.latest_round_id().get() else {
            return;
        };

        let mut open_rounds = self.open_rounds();
        let mut stale: ManagedVec<u64> = ManagedVec::new();
        for round_id in open_rounds.iter() {
            if round_id < latest_round_id {
                stale.push(round_id);
            }
        }
        for round_id in stale.iter() {
            let _ = open_rounds.swap_remove(&round_id);
        }
    }
}
