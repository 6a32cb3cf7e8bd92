//! Per match death and damage statistics of a League of Legends player.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod server;

pub use server::build_router;
