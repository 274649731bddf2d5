#![no_std]

pub mod proxy_aggregator_proxy;
pub mod proxy_price_aggregator;
