#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Bookkeeping kept per authorized reporter.
///
/// `counted_submissions` only grows for submissions that arrived while their
/// round was still open, i.e. the ones that could take part in the quorum.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Default, Debug, PartialEq, Eq)]
pub struct ReporterStatus {
    pub submissions: u64,
    pub counted_submissions: u64,
}

/// Stored state of one aggregation round.
///
/// `answer`, `updated_at` and `answered_in_round` carry meaning only once
/// `finalized` is set; before that they hold zero values.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq)]
pub struct Round<M: ManagedTypeApi> {
    pub started_at: u64,
    pub started_by: ManagedAddress<M>,
    pub finalized: bool,
    pub answer: BigInt<M>,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

impl<M: ManagedTypeApi> Round<M> {
    pub fn open(started_by: ManagedAddress<M>, started_at: u64) -> Self {
        Round {
            started_at,
            started_by,
            finalized: false,
            answer: BigInt::zero(),
            updated_at: 0,
            answered_in_round: 0,
        }
    }

    /// One-shot transition to a settled answer. Returns `false` and leaves the
    /// round untouched if it was already finalized.
    pub fn finalize(&mut self, round_id: u64, answer: BigInt<M>, updated_at: u64) -> bool {
        if self.finalized {
            return false;
        }

        self.finalized = true;
        self.answer = answer;
        self.updated_at = updated_at;
        self.answered_in_round = round_id;

        true
    }

    /// Read projection handed to consumers. `None` while the round is open.
    pub fn round_data(&self, round_id: u64) -> Option<RoundData<M>> {
        if !self.finalized {
            return None;
        }

        Some(RoundData {
            round_id,
            answer: self.answer.clone(),
            started_at: self.started_at,
            updated_at: self.updated_at,
            answered_in_round: self.answered_in_round,
        })
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq)]
pub struct RoundData<M: ManagedTypeApi> {
    pub round_id: u64,
    pub answer: BigInt<M>,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}
