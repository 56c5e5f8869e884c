//! Execution engine.
//!
//! Validation runs in a fixed order: presence, quorum, time window, payment.
//! Once every check passes the entry is deleted *before* any external
//! interaction (token transfers and the call itself), so a callee that calls
//! back into the timelock finds nothing left to confirm, execute or discard.
//!
//! Failures abort the contract entry point, which makes the host roll back the
//! whole invocation: a failed callee therefore leaves the entry queued and the
//! payment with the caller, and the call can be retried while the window is
//! still open.

use soroban_sdk::{log, token, xdr::ScErrorType, Address, BytesN, Env, Val};

use crate::config;
use crate::errors::TimelockError;
use crate::events;
use crate::id::transaction_id;
use crate::queue;
use crate::types::Call;
use crate::window::check_window;

/// Validates and runs a queued call on behalf of `executor`, who sends
/// `payment` units of the configured token. `quorum` is the number of
/// confirmations required; zero disables the check.
pub fn execute(
    env: &Env,
    executor: &Address,
    call: &Call,
    payment: i128,
    quorum: u32,
) -> Result<(BytesN<32>, Val), TimelockError> {
    let config = config::load(env)?;
    let tx_id = transaction_id(env, call);

    let entry = queue::require_queued(env, &tx_id)?;

    let confirmations = entry.confirmation_count();
    if confirmations < quorum {
        log!(
            env,
            "not enough confirmations",
            tx_id.clone(),
            confirmations,
            quorum
        );
        return Err(TimelockError::NotEnoughConfirmations);
    }

    let now = env.ledger().timestamp();
    if let Err(err) = check_window(now, call.scheduled_time, config.grace_period) {
        log!(env, "outside execution window", now, call.scheduled_time);
        return Err(err);
    }

    if payment != call.value {
        log!(env, "payment does not match value", payment, call.value);
        return Err(TimelockError::ValueMismatch);
    }

    queue::remove(env, &tx_id);

    forward_value(env, &config.token, executor, call);
    let result = invoke(env, call)?;

    events::publish_executed(env, &tx_id, &result);
    Ok((tx_id, result))
}

/// Moves `value` from the executor through the timelock to the target.
fn forward_value(env: &Env, token: &Address, executor: &Address, call: &Call) {
    if call.value == 0 {
        return;
    }

    let token_client = token::Client::new(env, token);
    let timelock = env.current_contract_address();

    token_client.transfer(executor, &timelock, &call.value);
    token_client.transfer(&timelock, &call.target, &call.value);
}

/// Runs the call. A contract error raised by the callee is re-raised as is,
/// so the caller sees the callee's own `Error(Contract, #N)`; any other
/// failure becomes [`TimelockError::ExternalCallFailure`].
fn invoke(env: &Env, call: &Call) -> Result<Val, TimelockError> {
    match env.try_invoke_contract::<Val, soroban_sdk::Error>(
        &call.target,
        &call.function,
        call.args.clone(),
    ) {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(_)) => {
            log!(env, "callee returned an unreadable value", call.function.clone());
            Err(TimelockError::ExternalCallFailure)
        }
        Err(Ok(callee_error)) if callee_error.is_type(ScErrorType::Contract) => {
            log!(env, "callee failed", call.function.clone(), callee_error);
            env.panic_with_error(callee_error)
        }
        Err(Ok(host_error)) => {
            log!(env, "callee aborted", call.function.clone(), host_error);
            Err(TimelockError::ExternalCallFailure)
        }
        Err(Err(_)) => {
            log!(env, "callee aborted", call.function.clone());
            Err(TimelockError::ExternalCallFailure)
        }
    }
}
