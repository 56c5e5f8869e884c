use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Symbol, Val, Vec};

use timelock_core::{config, events, execution, queue};
use timelock_core::{Call, DataKey, QueuedTransaction, TimelockConfig, TimelockError};

/// Timelock controlled by a single fixed owner. Nothing needs confirming:
/// a queued call becomes executable purely by the passage of time.
#[contract]
pub struct TimelockContract;

#[contractimpl]
impl TimelockContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        grace_period: Option<u64>,
    ) -> Result<(), TimelockError> {
        let config = config::init(&env, token, grace_period)?;
        env.storage().instance().set(&DataKey::Owner, &owner);

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

        let call = Call {
            target,
            function,
            args,
            value,
            scheduled_time,
        };
        let (_, result) = execution::execute(&env, &caller, &call, payment, 0)?;
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

    pub fn owner(env: Env) -> Result<Address, TimelockError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TimelockError::NotInitialized)
    }

    pub fn config(env: Env) -> Result<TimelockConfig, TimelockError> {
        config::load(&env)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), TimelockError> {
        config::require_initialized(env)?;
        config::extend_instance_ttl(env);
        caller.require_auth();

        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TimelockError::NotInitialized)?;
        if *caller != owner {
            log!(env, "invalid owner", caller.clone());
            return Err(TimelockError::InvalidOwner);
        }
        Ok(())
    }
}
