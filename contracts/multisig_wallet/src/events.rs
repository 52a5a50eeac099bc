use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxSubmitted {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u64,
    pub destination: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxApproved {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u64,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxExecuted {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u64,
    pub destination: Address,
    pub amount: i128,
}
