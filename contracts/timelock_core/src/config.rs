use soroban_sdk::{log, Address, Env};

use crate::errors::TimelockError;
use crate::types::{DataKey, TimelockConfig};

/// One day. A transaction scheduled at `t` can be executed while
/// `t <= now < t + DEFAULT_GRACE_PERIOD`.
pub const DEFAULT_GRACE_PERIOD: u64 = 86_400;

// TTL: ~30 days at 5s/ledger
pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 1_036_800;

/// Keeps configuration and the owner set alive as long as the queue is used.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn require_initialized(env: &Env) -> Result<(), TimelockError> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(TimelockError::NotInitialized);
    }
    Ok(())
}

/// Validates and stores the configuration shared by both contracts. Fails if
/// the contract was already initialized.
pub fn init(
    env: &Env,
    token: Address,
    grace_period: Option<u64>,
) -> Result<TimelockConfig, TimelockError> {
    if env.storage().instance().has(&DataKey::Initialized) {
        return Err(TimelockError::AlreadyInitialized);
    }

    let grace_period = grace_period.unwrap_or(DEFAULT_GRACE_PERIOD);
    if grace_period == 0 {
        log!(env, "grace period must be positive");
        return Err(TimelockError::InvalidGracePeriod);
    }

    let config = TimelockConfig {
        token,
        grace_period,
    };
    env.storage().instance().set(&DataKey::Config, &config);
    env.storage().instance().set(&DataKey::Initialized, &true);
    extend_instance_ttl(env);

    Ok(config)
}

pub fn load(env: &Env) -> Result<TimelockConfig, TimelockError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(TimelockError::NotInitialized)
}
