#![no_std]

mod custody;
mod errors;
mod events;
mod multisig;
mod storage;
mod types;


pub use crate::errors::MultisigError;
pub use crate::events::{Deposited, TxApproved, TxExecuted, TxSubmitted};
pub use crate::multisig::{MultisigWallet, MultisigWalletClient};
pub use crate::types::Transaction;
