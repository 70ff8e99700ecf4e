#![no_std]

pub mod access;
pub mod circuit_breaker;
pub mod errors;
pub mod events;
pub mod profile;
pub mod rate_limit;
pub mod validation;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

pub use access::{AccessGrant, GrantStatus, GrantTransition};
pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use profile::{
    DoctorProfile, DoctorRegistration, HealthDetails, PatientProfile, PatientRegistration, Role,
};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// A doctor holding an active grant from the queried patient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrantedDoctor {
    pub profile: DoctorProfile,
    pub granted_at: u64,
}

#[contract]
pub struct PatientRegistry;

#[contractimpl]
impl PatientRegistry {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin = Self::get_admin(env.clone())?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Authenticates `caller`, then checks it owns the patient profile being changed.
    fn require_owner(env: &Env, caller: &Address, patient: &Address) -> Result<(), ContractError> {
        circuit_breaker::require_not_paused(env)?;
        caller.require_auth();
        rate_limit::enforce(env, caller)?;

        if caller != patient {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn load_patient(env: &Env, patient: &Address) -> Result<PatientProfile, ContractError> {
        profile::get_patient(env, patient).ok_or(ContractError::NotRegistered)
    }

    fn load_doctor(env: &Env, doctor: &Address) -> Result<DoctorProfile, ContractError> {
        profile::get_doctor(env, doctor).ok_or(ContractError::NotRegistered)
    }

    // ======================== Administration ========================

    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Configure per-address rate limiting of mutations.
    pub fn set_rate_limit_config(
        env: Env,
        caller: Address,
        max_requests_per_window: u64,
        window_duration_seconds: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if max_requests_per_window == 0 || window_duration_seconds == 0 {
            return Err(ContractError::InvalidInput);
        }

        rate_limit::set_config(&env, max_requests_per_window, window_duration_seconds);
        Ok(())
    }

    pub fn get_rate_limit_config(env: Env) -> Option<(u64, u64)> {
        rate_limit::get_config(&env)
    }

    /// Halt every mutation until `resume`. Reads keep working.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        circuit_breaker::set_paused(&env, true);
        events::publish_paused(&env, caller);
        Ok(())
    }

    pub fn resume(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        circuit_breaker::set_paused(&env, false);
        events::publish_resumed(&env, caller);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        circuit_breaker::is_paused(&env)
    }

    // ======================== Registration ========================

    /// Create the caller's patient profile. Health details start empty and are
    /// filled by `complete_registration`.
    pub fn register_patient(
        env: Env,
        patient: Address,
        registration: PatientRegistration,
    ) -> Result<PatientProfile, ContractError> {
        circuit_breaker::require_not_paused(&env)?;
        patient.require_auth();
        rate_limit::enforce(&env, &patient)?;

        if profile::is_registered(&env, &patient, Role::Patient) {
            return Err(ContractError::AlreadyRegistered);
        }
        validation::validate_patient(&registration)?;

        let now = env.ledger().timestamp();
        let created = PatientProfile {
            patient: patient.clone(),
            name: registration.name.clone(),
            birth_date: registration.birth_date,
            phone: registration.phone,
            email: registration.email,
            medical_history: Vec::new(&env),
            allergies: String::from_str(&env, ""),
            insurance: String::from_str(&env, ""),
            registered_at: now,
            updated_at: now,
        };
        profile::set_patient(&env, &created);

        events::publish_patient_registered(&env, patient, registration.name);

        Ok(created)
    }

    /// Create the caller's doctor profile.
    pub fn register_doctor(
        env: Env,
        doctor: Address,
        registration: DoctorRegistration,
    ) -> Result<DoctorProfile, ContractError> {
        circuit_breaker::require_not_paused(&env)?;
        doctor.require_auth();
        rate_limit::enforce(&env, &doctor)?;

        if profile::is_registered(&env, &doctor, Role::Doctor) {
            return Err(ContractError::AlreadyRegistered);
        }
        validation::validate_doctor(&registration)?;

        let created = DoctorProfile {
            doctor: doctor.clone(),
            name: registration.name.clone(),
            specialization: registration.specialization.clone(),
            registered_at: env.ledger().timestamp(),
        };
        profile::set_doctor(&env, &created);

        events::publish_doctor_registered(
            &env,
            doctor,
            registration.name,
            registration.specialization,
        );

        Ok(created)
    }

    /// Overwrite allergies, medical history and insurance. Prior history entries
    /// are replaced, not merged; use `add_medical_history_entry` to append.
    pub fn complete_registration(
        env: Env,
        caller: Address,
        patient: Address,
        details: HealthDetails,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller, &patient)?;
        let mut stored = Self::load_patient(&env, &patient)?;
        validation::validate_health_details(&details)?;

        stored.allergies = details.allergies;
        stored.medical_history = details.medical_history;
        stored.insurance = details.insurance;
        stored.updated_at = env.ledger().timestamp();
        profile::set_patient(&env, &stored);

        events::publish_patient_updated(
            &env,
            symbol_short!("HLTH_UPD"),
            patient,
            stored.medical_history.len(),
        );

        Ok(())
    }

    /// Replace the patient's name, phone and email.
    pub fn update_patient_contact(
        env: Env,
        caller: Address,
        patient: Address,
        name: String,
        phone: String,
        email: String,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller, &patient)?;
        let mut stored = Self::load_patient(&env, &patient)?;
        validation::validate_name(&name)?;
        validation::validate_contact(&phone, &email)?;

        stored.name = name;
        stored.phone = phone;
        stored.email = email;
        stored.updated_at = env.ledger().timestamp();
        profile::set_patient(&env, &stored);

        events::publish_patient_updated(
            &env,
            symbol_short!("PROF_UPD"),
            patient,
            stored.medical_history.len(),
        );

        Ok(())
    }

    /// Append one entry to the end of the patient's medical history.
    pub fn add_medical_history_entry(
        env: Env,
        caller: Address,
        patient: Address,
        entry: String,
    ) -> Result<u32, ContractError> {
        Self::require_owner(&env, &caller, &patient)?;
        let mut stored = Self::load_patient(&env, &patient)?;
        validation::validate_history_entry(&entry)?;
        if stored.medical_history.len() >= validation::MAX_HISTORY_ENTRIES {
            return Err(ContractError::InvalidInput);
        }

        stored.medical_history.push_back(entry);
        stored.updated_at = env.ledger().timestamp();
        profile::set_patient(&env, &stored);

        let len = stored.medical_history.len();
        events::publish_patient_updated(&env, symbol_short!("HIST_ADD"), patient, len);

        Ok(len)
    }

    // ======================== Queries ========================

    pub fn is_registered(env: Env, identity: Address, role: Role) -> bool {
        profile::is_registered(&env, &identity, role)
    }

    pub fn get_patient(env: Env, patient: Address) -> Result<PatientProfile, ContractError> {
        Self::load_patient(&env, &patient)
    }

    pub fn get_doctor(env: Env, doctor: Address) -> Result<DoctorProfile, ContractError> {
        Self::load_doctor(&env, &doctor)
    }

    /// Empty for a registered patient who has not recorded any history.
    pub fn get_medical_history(env: Env, patient: Address) -> Result<Vec<String>, ContractError> {
        Self::load_patient(&env, &patient).map(|stored| stored.medical_history)
    }

    // ======================== Access grants ========================

    /// Give `doctor` read access to `patient`'s profile. Granting an already
    /// active grant changes nothing and publishes no event.
    pub fn grant_access(
        env: Env,
        caller: Address,
        patient: Address,
        doctor: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller, &patient)?;
        if patient == doctor {
            return Err(ContractError::InvalidInput);
        }
        Self::load_patient(&env, &patient)?;
        Self::load_doctor(&env, &doctor)?;

        if access::activate(&env, &patient, &doctor) {
            events::publish_access_granted(&env, patient, doctor);
        }

        Ok(())
    }

    /// Withdraw `doctor`'s access. Revoking a missing or already revoked grant
    /// is a successful no-op.
    pub fn revoke_access(
        env: Env,
        caller: Address,
        patient: Address,
        doctor: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller, &patient)?;

        if access::deactivate(&env, &patient, &doctor) {
            events::publish_access_revoked(&env, patient, doctor);
        }

        Ok(())
    }

    pub fn get_grant_status(env: Env, patient: Address, doctor: Address) -> GrantStatus {
        access::status(&env, &patient, &doctor)
    }

    pub fn get_grant(env: Env, patient: Address, doctor: Address) -> Option<AccessGrant> {
        access::get_grant(&env, &patient, &doctor)
    }

    /// Status transitions of the pair, oldest first.
    pub fn get_grant_history(env: Env, patient: Address, doctor: Address) -> Vec<GrantTransition> {
        access::history(&env, &patient, &doctor)
    }

    /// Doctors with an active grant from `patient`, in first-grant order.
    pub fn list_granted_doctors(
        env: Env,
        patient: Address,
    ) -> Result<Vec<GrantedDoctor>, ContractError> {
        Self::load_patient(&env, &patient)?;

        let mut granted = Vec::new(&env);
        for doctor in access::doctors_of(&env, &patient).iter() {
            let grant = match access::get_grant(&env, &patient, &doctor) {
                Some(grant) if grant.status == GrantStatus::Active => grant,
                _ => continue,
            };
            if let Some(profile) = profile::get_doctor(&env, &doctor) {
                granted.push_back(GrantedDoctor {
                    profile,
                    granted_at: grant.granted_at,
                });
            }
        }
        Ok(granted)
    }

    /// Patients with an active grant to `doctor`, in first-grant order.
    pub fn list_accessible_patients(
        env: Env,
        doctor: Address,
    ) -> Result<Vec<PatientProfile>, ContractError> {
        Self::load_doctor(&env, &doctor)?;

        let mut patients = Vec::new(&env);
        for patient in access::patients_of(&env, &doctor).iter() {
            if !access::is_active(&env, &patient, &doctor) {
                continue;
            }
            if let Some(profile) = profile::get_patient(&env, &patient) {
                patients.push_back(profile);
            }
        }
        Ok(patients)
    }

    /// A doctor's view of one patient. Requires an active grant.
    pub fn get_patient_for_doctor(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<PatientProfile, ContractError> {
        doctor.require_auth();
        Self::load_doctor(&env, &doctor)?;
        let stored = Self::load_patient(&env, &patient)?;

        if !access::is_active(&env, &patient, &doctor) {
            return Err(ContractError::AccessDenied);
        }
        Ok(stored)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}



#[cfg(test)]
mod test_admin;
