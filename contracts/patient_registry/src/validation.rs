use crate::{ContractError, DoctorRegistration, HealthDetails, PatientRegistration};
use soroban_sdk::{String, Vec};

pub const MAX_NAME_LEN: u32 = 100;
pub const MAX_PHONE_LEN: u32 = 32;
pub const MAX_EMAIL_LEN: u32 = 254;
pub const MAX_TEXT_LEN: u32 = 500;
pub const MAX_HISTORY_ENTRIES: u32 = 100;

fn require_len(value: &String, min: u32, max: u32) -> Result<(), ContractError> {
    let len = value.len();
    if len < min || len > max {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_name(name: &String) -> Result<(), ContractError> {
    require_len(name, 1, MAX_NAME_LEN)
}

/// Phone and email may be left blank but are bounded.
pub fn validate_contact(phone: &String, email: &String) -> Result<(), ContractError> {
    require_len(phone, 0, MAX_PHONE_LEN)?;
    require_len(email, 0, MAX_EMAIL_LEN)
}

pub fn validate_history_entry(entry: &String) -> Result<(), ContractError> {
    require_len(entry, 1, MAX_TEXT_LEN)
}

pub fn validate_history(history: &Vec<String>) -> Result<(), ContractError> {
    if history.len() > MAX_HISTORY_ENTRIES {
        return Err(ContractError::InvalidInput);
    }
    for entry in history.iter() {
        validate_history_entry(&entry)?;
    }
    Ok(())
}

pub fn validate_patient(registration: &PatientRegistration) -> Result<(), ContractError> {
    validate_name(&registration.name)?;
    validate_contact(&registration.phone, &registration.email)
}

pub fn validate_doctor(registration: &DoctorRegistration) -> Result<(), ContractError> {
    validate_name(&registration.name)?;
    require_len(&registration.specialization, 1, MAX_NAME_LEN)
}

/// Allergies and insurance are optional free text.
pub fn validate_health_details(details: &HealthDetails) -> Result<(), ContractError> {
    require_len(&details.allergies, 0, MAX_TEXT_LEN)?;
    require_len(&details.insurance, 0, MAX_TEXT_LEN)?;
    validate_history(&details.medical_history)
}
