use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    Unauthorized = 1,
    InvalidTransaction = 2,
    AlreadyExecuted = 3,
    DuplicateApproval = 4,
    InsufficientApprovals = 5,
    InsufficientFunds = 6,
    TransferFailed = 7,
    InvalidAmount = 8,
    Overflow = 9,
    EmptyOwners = 10,
    DuplicateOwner = 11,
    InvalidThreshold = 12,
}
