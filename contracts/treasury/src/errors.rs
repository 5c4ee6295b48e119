use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TreasuryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidThreshold = 3,
    DuplicateApprover = 4,
    TooManyApprovers = 5,
    InvalidAmount = 6,
    Unauthorized = 7,
    InsufficientFunds = 8,
    AlreadySettled = 9,
    DestinationMismatch = 10,
    AmountMismatch = 11,
    TransferFailed = 12,
    Locked = 13,
    Overflow = 14,
}
