//! Content-addressed transaction ids.
//!
//! `id = SHA-256(xdr(target, function, args, value, scheduled_time))`
//!
//! The id is the only key a queued transaction has. Queuing the same call
//! twice lands on the same key, which is what rejects duplicates; executing
//! removes the key, which is what makes a replay miss.

use soroban_sdk::{xdr::ToXdr, BytesN, Env};

use crate::types::Call;

pub fn transaction_id(env: &Env, call: &Call) -> BytesN<32> {
    let encoded = (
        call.target.clone(),
        call.function.clone(),
        call.args.clone(),
        call.value,
        call.scheduled_time,
    )
        .to_xdr(env);

    env.crypto().sha256(&encoded).into()
}
