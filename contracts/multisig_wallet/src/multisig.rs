use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Vec};

use crate::custody;
use crate::errors::MultisigError;
use crate::events::{Deposited, TxApproved, TxExecuted, TxSubmitted};
use crate::storage;
use crate::types::Transaction;

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    pub fn __constructor(env: Env, owners: Vec<Address>, threshold: u32, token: Address) {
        if let Err(err) = storage::validate_config(&env, &owners, threshold) {
            panic_with_error!(&env, err);
        }

        storage::write_config(&env, &owners, threshold, &token);
        storage::extend_instance(&env);

        log!(&env, "multisig initialized", owners.len(), threshold);
    }

    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, MultisigError> {
        from.require_auth();
        storage::extend_instance(&env);

        if amount < 0 {
            return Err(MultisigError::InvalidAmount);
        }

        let balance = custody::credit(&env, &from, amount)?;

        Deposited {
            from,
            amount,
            balance,
        }
        .publish(&env);

        Ok(balance)
    }

    // Funds are not checked until execution.
    pub fn submit(
        env: Env,
        caller: Address,
        destination: Address,
        amount: i128,
    ) -> Result<u64, MultisigError> {
        Self::require_owner(&env, &caller)?;

        if amount < 0 {
            return Err(MultisigError::InvalidAmount);
        }

        let transaction = storage::push_transaction(&env, destination.clone(), amount);

        log!(&env, "transaction submitted", transaction.index, amount);
        TxSubmitted {
            owner: caller,
            index: transaction.index,
            destination,
            amount,
        }
        .publish(&env);

        Ok(transaction.index)
    }

    pub fn approve(env: Env, caller: Address, index: u64) -> Result<(), MultisigError> {
        Self::require_owner(&env, &caller)?;

        let mut transaction = storage::read_transaction(&env, index)?;
        if transaction.executed {
            return Err(MultisigError::AlreadyExecuted);
        }

        if transaction.approvals.contains(&caller) {
            return Err(MultisigError::DuplicateApproval);
        }

        transaction.approvals.push_back(caller.clone());
        storage::write_transaction(&env, &transaction);

        let approvals = transaction.approvals.len();
        log!(&env, "transaction approved", index, approvals);
        TxApproved {
            owner: caller,
            index,
            approvals,
        }
        .publish(&env);

        Ok(())
    }

    pub fn execute(env: Env, caller: Address, index: u64) -> Result<(), MultisigError> {
        Self::require_owner(&env, &caller)?;

        let mut transaction = storage::read_transaction(&env, index)?;
        if transaction.executed {
            return Err(MultisigError::AlreadyExecuted);
        }

        if transaction.approvals.len() < storage::threshold(&env) {
            return Err(MultisigError::InsufficientApprovals);
        }

        // Pay out first; the record is only marked once the payout succeeded.
        let remaining = custody::disburse(&env, &transaction.destination, transaction.amount)?;

        transaction.executed = true;
        storage::write_transaction(&env, &transaction);

        log!(&env, "transaction executed", index, remaining);
        TxExecuted {
            owner: caller,
            index,
            destination: transaction.destination,
            amount: transaction.amount,
        }
        .publish(&env);

        Ok(())
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        storage::is_owner(&env, &address)
    }

    pub fn owners(env: Env) -> Vec<Address> {
        storage::owners(&env)
    }

    pub fn threshold(env: Env) -> u32 {
        storage::threshold(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::token(&env)
    }

    pub fn balance(env: Env) -> i128 {
        custody::balance(&env)
    }

    pub fn transaction_count(env: Env) -> u64 {
        storage::transaction_count(&env)
    }

    pub fn get_transaction(env: Env, index: u64) -> Result<Transaction, MultisigError> {
        storage::read_transaction(&env, index)
    }

    pub fn get_approvals(env: Env, index: u64) -> Result<Vec<Address>, MultisigError> {
        Ok(storage::read_transaction(&env, index)?.approvals)
    }

    pub fn is_approved(env: Env, index: u64, owner: Address) -> Result<bool, MultisigError> {
        Ok(storage::read_transaction(&env, index)?
            .approvals
            .contains(&owner))
    }

    pub fn is_executed(env: Env, index: u64) -> Result<bool, MultisigError> {
        Ok(storage::read_transaction(&env, index)?.executed)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), MultisigError> {
        caller.require_auth();
        storage::extend_instance(env);

        if !storage::is_owner(env, caller) {
            return Err(MultisigError::Unauthorized);
        }
        Ok(())
    }
}
