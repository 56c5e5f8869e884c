#![no_std]

mod multisig;

pub use multisig::*;
pub use timelock_core::{TimelockError, DEFAULT_GRACE_PERIOD};
