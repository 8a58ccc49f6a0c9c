//! End-to-end enrollment and login flows as the host application drives them.

use tally_otp_core::{
    base32_to_hex, build_provisioning_uri, generate_base32_secret, generate_totp, validate_setup,
    verify_totp, SetupRejection, DEFAULT_ISSUER, DEFAULT_PERIOD, SECRET_LENGTH,
};

const TIME: u64 = 1_700_000_000;

/// Enrollment: generate secret → build URI → user's app produces the first
/// code → setup validation accepts → host persists the secret.
#[test]
fn enrollment_happy_path() {
    let secret_b32 = generate_base32_secret();
    assert_eq!(secret_b32.len(), SECRET_LENGTH);

    let uri = build_provisioning_uri("alice@tally.example", &secret_b32, DEFAULT_ISSUER);
    assert!(uri.contains(&format!("secret={secret_b32}&")));

    // The authenticator app derives codes from the same secret the QR held.
    let secret_hex = base32_to_hex(&secret_b32);
    let first_code = generate_totp(&secret_hex, TIME, DEFAULT_PERIOD).expect("generate");

    let outcome = validate_setup(&secret_hex, &first_code, TIME).expect("validate");
    assert!(outcome.valid, "first code must be accepted at enrollment");
    assert!(outcome.error.is_none());
}

/// A user typing a garbled first code gets a rejection, not an error, and
/// retrying with the right code succeeds.
#[test]
fn enrollment_retry_after_typo() {
    let secret_hex = base32_to_hex(&generate_base32_secret());

    let typo = validate_setup(&secret_hex, "12 456", TIME).expect("validate");
    assert_eq!(typo.error, Some(SetupRejection::MalformedCode));

    let code = generate_totp(&secret_hex, TIME, DEFAULT_PERIOD).expect("generate");
    let retry = validate_setup(&secret_hex, &code, TIME).expect("validate");
    assert!(retry.valid);
}

/// Login: the host loads the stored hex secret and verifies the submitted
/// code directly, skipping the setup gates.
#[test]
fn login_flow_verifies_stored_secret() {
    let secret_hex = base32_to_hex(&generate_base32_secret());
    let code = generate_totp(&secret_hex, TIME, DEFAULT_PERIOD).expect("generate");

    assert!(verify_totp(&secret_hex, &code, TIME, DEFAULT_PERIOD).expect("verify"));
    assert!(!verify_totp(&secret_hex, "000000", TIME, DEFAULT_PERIOD).expect("verify")
        || code == "000000");
}

/// Two independently generated enrollments use distinct secrets.
#[test]
fn independent_enrollments_get_distinct_secrets() {
    let a = base32_to_hex(&generate_base32_secret());
    let b = base32_to_hex(&generate_base32_secret());
    assert_ne!(a, b, "two fresh secrets collided");
}
