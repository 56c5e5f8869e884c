use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TimelockError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 3,
    InvalidOwner = 4,
    AlreadyQueued = 5,
    NoSuchTransaction = 6,
    NotEnoughConfirmations = 7,
    TooEarly = 8,
    Expired = 9,
    ValueMismatch = 10,
    ExternalCallFailure = 11,
    EmptyOwnerList = 12,
    DuplicateOwner = 13,
    InvalidThreshold = 14,
    ThresholdExceedsOwners = 15,
    InvalidGracePeriod = 16,
    InvalidValue = 17,
}
