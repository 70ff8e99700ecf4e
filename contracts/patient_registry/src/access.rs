//! Patient → doctor access grants.
//!
//! Each `(patient, doctor)` pair moves through `NoGrant → Active ⇄ Revoked`.
//! Grants are never deleted: revocation flips the status and the pair keeps a
//! bounded transition history for audit. Both sides keep an index of every
//! counterparty they have ever been paired with so listings can filter on the
//! current status.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

const GRANT: Symbol = symbol_short!("GRANT");
const GRANT_HISTORY: Symbol = symbol_short!("GRT_HIST");
const PATIENT_DOCTORS: Symbol = symbol_short!("PAT_DOCS");
const DOCTOR_PATIENTS: Symbol = symbol_short!("DOC_PATS");

/// Transitions retained per pair; the oldest is dropped past this.
pub const MAX_GRANT_HISTORY: u32 = 50;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrantStatus {
    NoGrant,
    Active,
    Revoked,
}

/// Access grant structure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrant {
    pub patient: Address,
    pub doctor: Address,
    pub status: GrantStatus,
    pub granted_at: u64,
    /// Zero while the grant is active.
    pub revoked_at: u64,
}

/// One status change of a pair, kept for audit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrantTransition {
    pub status: GrantStatus,
    pub actor: Address,
    pub timestamp: u64,
}

fn grant_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (GRANT, patient.clone(), doctor.clone())
}

fn history_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (GRANT_HISTORY, patient.clone(), doctor.clone())
}

fn extend_ttl_pair_key(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_grant(env: &Env, patient: &Address, doctor: &Address) -> Option<AccessGrant> {
    env.storage().persistent().get(&grant_key(patient, doctor))
}

pub fn status(env: &Env, patient: &Address, doctor: &Address) -> GrantStatus {
    get_grant(env, patient, doctor)
        .map(|grant| grant.status)
        .unwrap_or(GrantStatus::NoGrant)
}

pub fn is_active(env: &Env, patient: &Address, doctor: &Address) -> bool {
    status(env, patient, doctor) == GrantStatus::Active
}

/// Activates the grant for the pair. Returns `false` when it was already active,
/// in which case nothing is written.
pub fn activate(env: &Env, patient: &Address, doctor: &Address) -> bool {
    let now = env.ledger().timestamp();
    let grant = match get_grant(env, patient, doctor) {
        Some(grant) if grant.status == GrantStatus::Active => return false,
        Some(mut grant) => {
            grant.status = GrantStatus::Active;
            grant.granted_at = now;
            grant.revoked_at = 0;
            grant
        }
        None => {
            index_pair(env, patient, doctor);
            AccessGrant {
                patient: patient.clone(),
                doctor: doctor.clone(),
                status: GrantStatus::Active,
                granted_at: now,
                revoked_at: 0,
            }
        }
    };

    let key = grant_key(patient, doctor);
    env.storage().persistent().set(&key, &grant);
    extend_ttl_pair_key(env, &key);
    record_transition(env, patient, doctor, GrantStatus::Active, patient);
    true
}

/// Revokes an active grant. Returns `false` for a missing or already revoked grant.
pub fn deactivate(env: &Env, patient: &Address, doctor: &Address) -> bool {
    let mut grant = match get_grant(env, patient, doctor) {
        Some(grant) if grant.status == GrantStatus::Active => grant,
        _ => return false,
    };

    grant.status = GrantStatus::Revoked;
    grant.revoked_at = env.ledger().timestamp();

    let key = grant_key(patient, doctor);
    env.storage().persistent().set(&key, &grant);
    extend_ttl_pair_key(env, &key);
    record_transition(env, patient, doctor, GrantStatus::Revoked, patient);
    true
}

pub fn history(env: &Env, patient: &Address, doctor: &Address) -> Vec<GrantTransition> {
    env.storage()
        .persistent()
        .get(&history_key(patient, doctor))
        .unwrap_or(Vec::new(env))
}

/// Doctors this patient has ever granted, in first-grant order.
pub fn doctors_of(env: &Env, patient: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&(PATIENT_DOCTORS, patient.clone()))
        .unwrap_or(Vec::new(env))
}

/// Patients that have ever granted this doctor, in first-grant order.
pub fn patients_of(env: &Env, doctor: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&(DOCTOR_PATIENTS, doctor.clone()))
        .unwrap_or(Vec::new(env))
}

// A pair is indexed exactly once, on its first grant, so the index never
// holds duplicates.
fn index_pair(env: &Env, patient: &Address, doctor: &Address) {
    let doctors_key = (PATIENT_DOCTORS, patient.clone());
    let mut doctors = doctors_of(env, patient);
    doctors.push_back(doctor.clone());
    env.storage().persistent().set(&doctors_key, &doctors);
    extend_ttl_address_key(env, &doctors_key);

    let patients_key = (DOCTOR_PATIENTS, doctor.clone());
    let mut patients = patients_of(env, doctor);
    patients.push_back(patient.clone());
    env.storage().persistent().set(&patients_key, &patients);
    extend_ttl_address_key(env, &patients_key);
}

fn record_transition(
    env: &Env,
    patient: &Address,
    doctor: &Address,
    status: GrantStatus,
    actor: &Address,
) {
    let key = history_key(patient, doctor);
    let mut transitions = history(env, patient, doctor);
    if transitions.len() >= MAX_GRANT_HISTORY {
        transitions.pop_front();
    }
    transitions.push_back(GrantTransition {
        status,
        actor: actor.clone(),
        timestamp: env.ledger().timestamp(),
    });
    env.storage().persistent().set(&key, &transitions);
    extend_ttl_pair_key(env, &key);
}
