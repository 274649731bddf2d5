#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod source;
pub mod storage;
pub mod views;

pub use source::RoundDataSource;

/// Stable read address in front of a replaceable price aggregator.
#[multiversx_sc::contract]
pub trait AggregatorProxy:
    admin::AdminModule
    + events::EventsModule
    + storage::StorageModule
    + source::SourceModule
    + views::ViewsModule
{
}
