use soroban_sdk::{Address, Env, Map, Vec};

use crate::errors::MultisigError;
use crate::types::{DataKey, Transaction};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn validate_config(
    env: &Env,
    owners: &Vec<Address>,
    threshold: u32,
) -> Result<(), MultisigError> {
    if owners.is_empty() {
        return Err(MultisigError::EmptyOwners);
    }

    if threshold == 0 || threshold > owners.len() {
        return Err(MultisigError::InvalidThreshold);
    }

    let mut seen: Map<Address, bool> = Map::new(env);
    for owner in owners.iter() {
        if seen.contains_key(owner.clone()) {
            return Err(MultisigError::DuplicateOwner);
        }
        seen.set(owner, true);
    }

    Ok(())
}

pub(crate) fn write_config(env: &Env, owners: &Vec<Address>, threshold: u32, token: &Address) {
    let instance = env.storage().instance();
    for owner in owners.iter() {
        instance.set(&DataKey::Owner(owner), &true);
    }
    instance.set(&DataKey::Owners, owners);
    instance.set(&DataKey::Threshold, &threshold);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Balance, &0i128);
    instance.set(&DataKey::TransactionCount, &0u64);
}

pub(crate) fn is_owner(env: &Env, address: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Owner(address.clone()))
}

pub(crate) fn owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .unwrap_or(0)
}

pub(crate) fn token(env: &Env) -> Address {
    // Written by the constructor; a deployed instance always has it.
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap()
}

pub(crate) fn balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance)
        .unwrap_or(0)
}

pub(crate) fn set_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::Balance, &balance);
}

pub(crate) fn transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0)
}

pub(crate) fn push_transaction(env: &Env, destination: Address, amount: i128) -> Transaction {
    let index = transaction_count(env);
    let transaction = Transaction {
        index,
        destination,
        amount,
        executed: false,
        approvals: Vec::new(env),
    };

    write_transaction(env, &transaction);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(index + 1));

    transaction
}

pub(crate) fn read_transaction(env: &Env, index: u64) -> Result<Transaction, MultisigError> {
    let key = DataKey::Transaction(index);
    let transaction: Transaction = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(MultisigError::InvalidTransaction)?;

    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);

    Ok(transaction)
}

pub(crate) fn write_transaction(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.index);
    env.storage().persistent().set(&key, transaction);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
