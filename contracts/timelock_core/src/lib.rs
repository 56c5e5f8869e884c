#![no_std]

//! Shared engine behind the timelock contracts: content-addressed queue,
//! per-owner confirmations, time-window checks and guarded execution of an
//! arbitrary contract call.

pub mod config;
pub mod errors;
pub mod events;
pub mod execution;
pub mod id;
pub mod queue;
pub mod types;
pub mod window;

pub use config::DEFAULT_GRACE_PERIOD;
pub use errors::TimelockError;
pub use id::transaction_id;
pub use types::{Call, Confirmation, DataKey, QueuedTransaction, TimelockConfig};
