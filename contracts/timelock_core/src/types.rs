use soroban_sdk::{contracttype, Address, BytesN, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Owner,
    Owners,
    IsOwner(Address),
    Threshold,
    Transaction(BytesN<32>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimelockConfig {
    /// Token used to carry the `value` of executed calls.
    pub token: Address,
    /// Seconds after `scheduled_time` during which execution stays valid.
    pub grace_period: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confirmation {
    pub owner: Address,
    pub confirmed_at: u64,
}

/// A queued entry. Its presence in storage is what marks the id as queued;
/// execution and discard remove it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueuedTransaction {
    pub queued_at: u64,
    pub confirmations: Vec<Confirmation>,
}

impl QueuedTransaction {
    pub fn confirmation_count(&self) -> u32 {
        self.confirmations.len()
    }

    pub fn is_confirmed_by(&self, owner: &Address) -> bool {
        self.confirmations.iter().any(|c| c.owner == *owner)
    }
}

/// The external call a transaction id stands for.
///
/// Never stored; rebuilt from the caller's arguments on queue and execute and
/// hashed into the id.
#[derive(Clone)]
pub struct Call {
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub value: i128,
    pub scheduled_time: u64,
}
