use soroban_sdk::{log, token, Address, Env};

use crate::errors::MultisigError;
use crate::storage;

pub(crate) fn balance(env: &Env) -> i128 {
    storage::balance(env)
}

pub(crate) fn credit(env: &Env, from: &Address, amount: i128) -> Result<i128, MultisigError> {
    let updated = storage::balance(env)
        .checked_add(amount)
        .ok_or(MultisigError::Overflow)?;

    transfer(env, from, &env.current_contract_address(), amount)?;
    storage::set_balance(env, updated);

    log!(env, "custody credited", from.clone(), amount, updated);
    Ok(updated)
}

// Storage is only written once the token transfer went through.
pub(crate) fn disburse(
    env: &Env,
    destination: &Address,
    amount: i128,
) -> Result<i128, MultisigError> {
    let current = storage::balance(env);
    if amount > current {
        return Err(MultisigError::InsufficientFunds);
    }

    transfer(env, &env.current_contract_address(), destination, amount)?;

    let remaining = current - amount;
    storage::set_balance(env, remaining);

    log!(env, "custody disbursed", destination.clone(), amount, remaining);
    Ok(remaining)
}

fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), MultisigError> {
    let client = token::TokenClient::new(env, &storage::token(env));
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer rejected", from.clone(), to.clone(), amount);
            Err(MultisigError::TransferFailed)
        }
    }
}
