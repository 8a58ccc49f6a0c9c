//! `tally-otp-core` — RFC 6238 second-factor primitives for Tally.
//!
//! This crate is the audit target for Tally's two-factor login: zero network,
//! zero async, zero storage. Every value is derived fresh from its inputs
//! (secret, code, clock) on each call, so all functions are safe to call
//! concurrently without coordination. The host application owns secret
//! persistence, rate limiting, and lockout policy.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod encoding;
pub mod error;
pub mod provision;
pub mod secret;
pub mod setup;
pub mod totp;

pub use encoding::{base32_to_hex, decode_hex, encode_hex, hex_to_base32, BASE32_ALPHABET};
pub use error::OtpError;
pub use provision::{build_provisioning_uri, DEFAULT_ISSUER};
pub use secret::{generate_base32_secret, SECRET_LENGTH};
pub use setup::{
    validate_setup, validate_setup_now, SetupOutcome, SetupRejection, MIN_SECRET_HEX_LENGTH,
};
pub use totp::{
    generate_hotp, generate_totp, generate_totp_now, verify_totp, verify_totp_now, CODE_DIGITS,
    DEFAULT_PERIOD, DRIFT_WINDOW,
};
