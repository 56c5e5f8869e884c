use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Symbol, Val, Vec};

use timelock_core::{config, events, execution, queue};
use timelock_core::{Call, DataKey, QueuedTransaction, TimelockConfig, TimelockError};

/// Timelock shared by a fixed set of owners. A queued call needs `threshold`
/// distinct owner confirmations before it may run; deploying with
/// `threshold == owners.len()` makes every owner's confirmation mandatory.
#[contract]
pub struct MultisigTimelockContract;

#[contractimpl]
impl MultisigTimelockContract {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        token: Address,
        grace_period: Option<u64>,
    ) -> Result<(), TimelockError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(TimelockError::AlreadyInitialized);
        }

        if owners.is_empty() {
            return Err(TimelockError::EmptyOwnerList);
        }

        if threshold == 0 {
            return Err(TimelockError::InvalidThreshold);
        }

        if threshold > owners.len() {
            return Err(TimelockError::ThresholdExceedsOwners);
        }

        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    log!(&env, "duplicate owner", owners.get_unchecked(i));
                    return Err(TimelockError::DuplicateOwner);
                }
            }
        }

        let config = config::init(&env, token, grace_period)?;

        env.storage().instance().set(&DataKey::Threshold, &threshold);
        for owner in owners.iter() {
            env.storage().instance().set(&DataKey::IsOwner(owner), &true);
        }
        env.storage().instance().set(&DataKey::Owners, &owners);

        events::publish_initialized(&env, &config);
        Ok(())
    }

    pub fn add_to_queue(
        env: Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
        scheduled_time: u64,
    ) -> Result<BytesN<32>, TimelockError> {
        Self::require_owner(&env, &caller)?;

        let call = Call {
            target,
            function,
            args,
            value,
            scheduled_time,
        };
        queue::add(&env, &call)
    }

    /// Adds the caller's confirmation. Confirming the same id again is a
    /// no-op; the returned count is the number of distinct confirmers.
    pub fn confirm(env: Env, caller: Address, tx_id: BytesN<32>) -> Result<u32, TimelockError> {
        Self::require_owner(&env, &caller)?;
        queue::confirm(&env, &tx_id, &caller)
    }

    pub fn execute(
        env: Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
        scheduled_time: u64,
        payment: i128,
    ) -> Result<Val, TimelockError> {
        Self::require_owner(&env, &caller)?;
        let threshold = Self::load_threshold(&env)?;

        let call = Call {
            target,
            function,
            args,
            value,
            scheduled_time,
        };
        let (_, result) = execution::execute(&env, &caller, &call, payment, threshold)?;
        Ok(result)
    }

    pub fn discard(env: Env, caller: Address, tx_id: BytesN<32>) -> Result<(), TimelockError> {
        Self::require_owner(&env, &caller)?;
        queue::discard(&env, &tx_id)
    }

    pub fn is_queued(env: Env, tx_id: BytesN<32>) -> bool {
        queue::is_queued(&env, &tx_id)
    }

    pub fn get_transaction(env: Env, tx_id: BytesN<32>) -> Option<QueuedTransaction> {
        queue::load(&env, &tx_id)
    }

    pub fn confirmation_count(env: Env, tx_id: BytesN<32>) -> u32 {
        queue::confirmation_count(&env, &tx_id)
    }

    pub fn has_confirmed(env: Env, tx_id: BytesN<32>, owner: Address) -> bool {
        queue::has_confirmed(&env, &tx_id, &owner)
    }

    pub fn transaction_id(
        env: Env,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
        scheduled_time: u64,
    ) -> BytesN<32> {
        let call = Call {
            target,
            function,
            args,
            value,
            scheduled_time,
        };
        timelock_core::transaction_id(&env, &call)
    }

    pub fn threshold(env: Env) -> Result<u32, TimelockError> {
        Self::load_threshold(&env)
    }

    pub fn owners(env: Env) -> Result<Vec<Address>, TimelockError> {
        env.storage()
            .instance()
            .get(&DataKey::Owners)
            .ok_or(TimelockError::NotInitialized)
    }

    pub fn is_owner(env: Env, owner: Address) -> bool {
        env.storage().instance().has(&DataKey::IsOwner(owner))
    }

    pub fn config(env: Env) -> Result<TimelockConfig, TimelockError> {
        config::load(&env)
    }

    fn load_threshold(env: &Env) -> Result<u32, TimelockError> {
        env.storage()
            .instance()
            .get(&DataKey::Threshold)
            .ok_or(TimelockError::NotInitialized)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), TimelockError> {
        config::require_initialized(env)?;
        config::extend_instance_ttl(env);
        caller.require_auth();

        if !env.storage().instance().has(&DataKey::IsOwner(caller.clone())) {
            log!(env, "access denied", caller.clone());
            return Err(TimelockError::AccessDenied);
        }
        Ok(())
    }
}
