use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

const PATIENT: Symbol = symbol_short!("PATIENT");
const DOCTOR: Symbol = symbol_short!("DOCTOR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// The two registrable roles. One address may hold a profile in each.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Role {
    Patient,
    Doctor,
}

/// Patient profile structure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub patient: Address,
    pub name: String,
    /// Unix seconds. Signed so that births before 1970 are representable.
    pub birth_date: i64,
    pub phone: String,
    pub email: String,
    pub medical_history: Vec<String>,
    pub allergies: String,
    pub insurance: String,
    pub registered_at: u64,
    pub updated_at: u64,
}

/// Doctor profile structure. Immutable once registered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorProfile {
    pub doctor: Address,
    pub name: String,
    pub specialization: String,
    pub registered_at: u64,
}

/// Input for `register_patient`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegistration {
    pub name: String,
    pub birth_date: i64,
    pub phone: String,
    pub email: String,
}

/// Input for `register_doctor`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorRegistration {
    pub name: String,
    pub specialization: String,
}

/// Input for `complete_registration`. Every field overwrites the stored value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthDetails {
    pub allergies: String,
    pub medical_history: Vec<String>,
    pub insurance: String,
}

fn patient_key(patient: &Address) -> (Symbol, Address) {
    (PATIENT, patient.clone())
}

fn doctor_key(doctor: &Address) -> (Symbol, Address) {
    (DOCTOR, doctor.clone())
}

fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_registered(env: &Env, identity: &Address, role: Role) -> bool {
    match role {
        Role::Patient => env.storage().persistent().has(&patient_key(identity)),
        Role::Doctor => env.storage().persistent().has(&doctor_key(identity)),
    }
}

pub fn get_patient(env: &Env, patient: &Address) -> Option<PatientProfile> {
    env.storage().persistent().get(&patient_key(patient))
}

pub fn set_patient(env: &Env, profile: &PatientProfile) {
    let key = patient_key(&profile.patient);
    env.storage().persistent().set(&key, profile);
    extend_ttl_address_key(env, &key);
}

pub fn get_doctor(env: &Env, doctor: &Address) -> Option<DoctorProfile> {
    env.storage().persistent().get(&doctor_key(doctor))
}

pub fn set_doctor(env: &Env, profile: &DoctorProfile) {
    let key = doctor_key(&profile.doctor);
    env.storage().persistent().set(&key, profile);
    extend_ttl_address_key(env, &key);
}
