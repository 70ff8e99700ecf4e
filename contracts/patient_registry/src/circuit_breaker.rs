use crate::ContractError;
use soroban_sdk::{symbol_short, Env, Symbol};

const PAUSED: Symbol = symbol_short!("P_GLOB");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Every state-changing entry point calls this before touching storage.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&PAUSED, &paused);
}
