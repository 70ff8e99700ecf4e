#![cfg(test)]

use crate::{
    ContractError, DoctorRegistration, PatientRegistration, PatientRegistry,
    PatientRegistryClient, Role,
};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, String};

fn setup_test() -> (Env, PatientRegistryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PatientRegistry, ());
    let client = PatientRegistryClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

fn registration(env: &Env) -> PatientRegistration {
    PatientRegistration {
        name: String::from_str(env, "Test"),
        birth_date: 0,
        phone: String::from_str(env, ""),
        email: String::from_str(env, ""),
    }
}

#[test]
fn test_initialize() {
    let (env, client, admin) = setup_test();

    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);

    let res = client.try_initialize(&Address::generate(&env));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::AlreadyInitialized);
}

#[test]
fn test_admin_functions_need_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(PatientRegistry, ());
    let client = PatientRegistryClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    assert!(!client.is_initialized());
    assert_eq!(
        client.try_get_admin().unwrap_err().unwrap(),
        ContractError::NotInitialized
    );
    assert_eq!(
        client.try_pause(&caller).unwrap_err().unwrap(),
        ContractError::NotInitialized
    );

    // Registration works without an admin.
    let patient = Address::generate(&env);
    client.register_patient(&patient, &registration(&env));
    assert!(client.is_registered(&patient, &Role::Patient));
}

#[test]
fn test_global_pause() {
    let (env, client, admin) = setup_test();
    let patient = Address::generate(&env);
    client.register_patient(&patient, &registration(&env));

    client.pause(&admin);
    assert!(client.is_paused());

    let newcomer = Address::generate(&env);
    let res = client.try_register_patient(&newcomer, &registration(&env));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Paused);

    let doctor = Address::generate(&env);
    let res = client.try_register_doctor(
        &doctor,
        &DoctorRegistration {
            name: String::from_str(&env, "Doc"),
            specialization: String::from_str(&env, "Oncology"),
        },
    );
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Paused);

    let res = client.try_revoke_access(&patient, &patient, &doctor);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Paused);

    // Reads keep working while paused.
    assert!(client.is_registered(&patient, &Role::Patient));
    assert_eq!(client.get_patient(&patient).patient, patient);

    client.resume(&admin);
    assert!(!client.is_paused());
    client.register_patient(&newcomer, &registration(&env));
}

#[test]
fn test_pause_requires_admin() {
    let (env, client, _admin) = setup_test();
    let outsider = Address::generate(&env);

    assert_eq!(
        client.try_pause(&outsider).unwrap_err().unwrap(),
        ContractError::Unauthorized
    );
    assert_eq!(
        client
            .try_set_rate_limit_config(&outsider, &1, &60)
            .unwrap_err()
            .unwrap(),
        ContractError::Unauthorized
    );
    assert!(!client.is_paused());
}

#[test]
fn test_rate_limit_config_validation() {
    let (_env, client, admin) = setup_test();

    assert_eq!(client.get_rate_limit_config(), None);
    assert_eq!(
        client
            .try_set_rate_limit_config(&admin, &0, &60)
            .unwrap_err()
            .unwrap(),
        ContractError::InvalidInput
    );

    client.set_rate_limit_config(&admin, &3, &60);
    assert_eq!(client.get_rate_limit_config(), Some((3, 60)));
}

#[test]
fn test_rate_limit_window() {
    let (env, client, admin) = setup_test();
    client.set_rate_limit_config(&admin, &2, &60);

    let patient = Address::generate(&env);
    client.register_patient(&patient, &registration(&env));
    client.add_medical_history_entry(&patient, &patient, &String::from_str(&env, "flu"));

    let res = client.try_add_medical_history_entry(
        &patient,
        &patient,
        &String::from_str(&env, "cold"),
    );
    assert_eq!(res.unwrap_err().unwrap(), ContractError::RateLimitExceeded);

    // Other callers have their own budget.
    let other = Address::generate(&env);
    client.register_patient(&other, &registration(&env));

    let current = env.ledger().timestamp();
    env.ledger().set_timestamp(current + 61);
    client.add_medical_history_entry(&patient, &patient, &String::from_str(&env, "cold"));
    assert_eq!(client.get_medical_history(&patient).len(), 2);
}
