#![no_std]

mod timelock;

pub use timelock::*;
pub use timelock_core::{TimelockError, DEFAULT_GRACE_PERIOD};
