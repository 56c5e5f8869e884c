//! Queue store: transaction id -> [`QueuedTransaction`].
//!
//! ```text
//! absent ──add──► queued ──confirm──► queued (+1 per owner)
//!                   │
//!                   ├──execute──► absent
//!                   └──discard──► absent
//! ```

use soroban_sdk::{log, Address, BytesN, Env, Vec};

use crate::errors::TimelockError;
use crate::events;
use crate::id::transaction_id;
use crate::types::{Call, Confirmation, DataKey, QueuedTransaction};

// TTL: ~30 days at 5s/ledger
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 1_036_800;

pub fn load(env: &Env, tx_id: &BytesN<32>) -> Option<QueuedTransaction> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(tx_id.clone()))
}

pub fn is_queued(env: &Env, tx_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Transaction(tx_id.clone()))
}

fn store(env: &Env, tx_id: &BytesN<32>, entry: &QueuedTransaction) {
    let key = DataKey::Transaction(tx_id.clone());
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Removes the entry together with its confirmations.
pub(crate) fn remove(env: &Env, tx_id: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Transaction(tx_id.clone()));
}

pub(crate) fn require_queued(
    env: &Env,
    tx_id: &BytesN<32>,
) -> Result<QueuedTransaction, TimelockError> {
    load(env, tx_id).ok_or_else(|| {
        log!(env, "no such transaction in the queue", tx_id.clone());
        TimelockError::NoSuchTransaction
    })
}

/// Admits `call` to the queue and returns its id. Access control is the
/// caller's job.
pub fn add(env: &Env, call: &Call) -> Result<BytesN<32>, TimelockError> {
    if call.value < 0 {
        return Err(TimelockError::InvalidValue);
    }

    let tx_id = transaction_id(env, call);
    if is_queued(env, &tx_id) {
        log!(env, "transaction already queued", tx_id.clone());
        return Err(TimelockError::AlreadyQueued);
    }

    let entry = QueuedTransaction {
        queued_at: env.ledger().timestamp(),
        confirmations: Vec::new(env),
    };
    store(env, &tx_id, &entry);
    events::publish_queued(env, &tx_id, call);

    Ok(tx_id)
}

/// Records `owner`'s confirmation and returns the resulting count. A repeated
/// confirmation by the same owner leaves the count unchanged.
pub fn confirm(env: &Env, tx_id: &BytesN<32>, owner: &Address) -> Result<u32, TimelockError> {
    let mut entry = require_queued(env, tx_id)?;

    if entry.is_confirmed_by(owner) {
        return Ok(entry.confirmation_count());
    }

    entry.confirmations.push_back(Confirmation {
        owner: owner.clone(),
        confirmed_at: env.ledger().timestamp(),
    });
    store(env, tx_id, &entry);

    let count = entry.confirmation_count();
    events::publish_confirmed(env, tx_id, owner, count);
    Ok(count)
}

/// Cancels a queued entry regardless of its confirmations or time window.
pub fn discard(env: &Env, tx_id: &BytesN<32>) -> Result<(), TimelockError> {
    require_queued(env, tx_id)?;
    remove(env, tx_id);
    events::publish_discarded(env, tx_id);
    Ok(())
}

pub fn confirmation_count(env: &Env, tx_id: &BytesN<32>) -> u32 {
    load(env, tx_id)
        .map(|entry| entry.confirmation_count())
        .unwrap_or(0)
}

pub fn has_confirmed(env: &Env, tx_id: &BytesN<32>, owner: &Address) -> bool {
    load(env, tx_id)
        .map(|entry| entry.is_confirmed_by(owner))
        .unwrap_or(false)
}
