use crate::ContractError;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const RATE_CFG: Symbol = symbol_short!("RL_CFG");
const RATE_TRACK: Symbol = symbol_short!("RL_TRK");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

pub fn set_config(env: &Env, max_requests_per_window: u64, window_duration_seconds: u64) {
    env.storage()
        .instance()
        .set(&RATE_CFG, &(max_requests_per_window, window_duration_seconds));
}

pub fn get_config(env: &Env) -> Option<(u64, u64)> {
    env.storage().instance().get(&RATE_CFG)
}

/// Counts one mutation against `caller`'s fixed window.
/// Without a stored config every caller is unlimited.
pub fn enforce(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let (max_requests_per_window, window_duration_seconds) = match get_config(env) {
        Some(cfg) => cfg,
        None => return Ok(()),
    };

    let now = env.ledger().timestamp();
    let key = (RATE_TRACK, caller.clone());

    // (requests in window, window start)
    let mut state: (u64, u64) = env.storage().persistent().get(&key).unwrap_or((0, now));

    let window_end = state.1.saturating_add(window_duration_seconds);
    if now >= window_end {
        state = (0, now);
    }

    let next = state.0.saturating_add(1);
    if next > max_requests_per_window {
        return Err(ContractError::RateLimitExceeded);
    }

    state.0 = next;
    env.storage().persistent().set(&key, &state);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    Ok(())
}
