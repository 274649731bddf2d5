#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod median;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_structs::{ReporterStatus, Round, RoundData};

#[multiversx_sc::contract]
pub trait PriceAggregator:
    events::EventsModule
    + utils::UtilsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Submits the caller's answer for a round.
    /// A later submission from the same reporter to the same round overwrites the earlier one.
    /// The round settles on the lower median as soon as `quorum` distinct reporters submitted.
    #[endpoint(transmit)]
    fn transmit(&self, round_id: u64, answer: BigInt) {
        let caller = self.blockchain().get_caller();
        self.require_is_reporter(&caller);
        self.require_answer_in_bounds(&answer);
        self.require_round_not_stale(round_id);

        self.record_submission(round_id, caller, answer);
    }
}
