#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, BytesN, Env, Val};

use crate::types::{Call, TimelockConfig};

pub fn publish_initialized(env: &Env, config: &TimelockConfig) {
    env.events().publish(
        (symbol_short!("INIT"),),
        (config.token.clone(), config.grace_period),
    );
}

pub fn publish_queued(env: &Env, tx_id: &BytesN<32>, call: &Call) {
    env.events().publish(
        (symbol_short!("QUEUED"), tx_id.clone()),
        (
            call.target.clone(),
            call.function.clone(),
            call.value,
            call.scheduled_time,
        ),
    );
}

pub fn publish_confirmed(env: &Env, tx_id: &BytesN<32>, owner: &Address, count: u32) {
    env.events().publish(
        (symbol_short!("CONFIRM"), tx_id.clone()),
        (owner.clone(), count),
    );
}

pub fn publish_executed(env: &Env, tx_id: &BytesN<32>, result: &Val) {
    env.events()
        .publish((symbol_short!("EXECUTED"), tx_id.clone()), *result);
}

pub fn publish_discarded(env: &Env, tx_id: &BytesN<32>) {
    env.events()
        .publish((symbol_short!("DISCARD"), tx_id.clone()), ());
}
