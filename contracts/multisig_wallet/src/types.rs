use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner(Address),
    Owners,
    Threshold,
    Token,
    Balance,
    TransactionCount,
    Transaction(u64),
}

/// A proposed disbursement from the custody pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub index: u64,
    pub destination: Address,
    pub amount: i128,
    pub executed: bool,
    pub approvals: Vec<Address>,
}
