use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when a patient profile is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub name: String,
    pub timestamp: u64,
}

/// Event published when a doctor profile is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorRegisteredEvent {
    pub doctor: Address,
    pub name: String,
    pub specialization: String,
    pub timestamp: u64,
}

/// Event published when a patient's profile fields change.
/// The topic (`HLTH_UPD`, `PROF_UPD` or `HIST_ADD`) says which fields.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientUpdatedEvent {
    pub patient: Address,
    pub history_len: u32,
    pub timestamp: u64,
}

/// Event published when a patient grants a doctor access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a patient revokes a doctor's access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when the circuit breaker changes state.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_registered(env: &Env, patient: Address, name: String) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_doctor_registered(
    env: &Env,
    doctor: Address,
    name: String,
    specialization: String,
) {
    let topics = (symbol_short!("DOC_REG"), doctor.clone());
    let data = DoctorRegisteredEvent {
        doctor,
        name,
        specialization,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_updated(env: &Env, topic: Symbol, patient: Address, history_len: u32) {
    let topics = (topic, patient.clone());
    let data = PatientUpdatedEvent {
        patient,
        history_len,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_granted(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("ACC_GRT"), patient.clone(), doctor.clone());
    let data = AccessGrantedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_revoked(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("ACC_REV"), patient.clone(), doctor.clone());
    let data = AccessRevokedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_paused(env: &Env, caller: Address) {
    let topics = (symbol_short!("PAUSED"),);
    let data = PauseChangedEvent {
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_resumed(env: &Env, caller: Address) {
    let topics = (symbol_short!("RESUMED"),);
    let data = PauseChangedEvent {
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
