//! Enrollment setup validation.
//!
//! The single entry point the host calls after the user scans the QR code
//! and types their first code, to confirm the authenticator app is in sync
//! before the secret is persisted. Checks fail fast in a fixed order:
//! secret strength, code shape, then the TOTP match itself.

use serde::{Deserialize, Serialize};

use crate::error::OtpError;
use crate::totp::{verify_totp, CODE_DIGITS, DEFAULT_PERIOD};

// ── Constants ───────────────────────────────────────────────────────

/// Minimum accepted secret length in hex characters (8 bytes).
pub const MIN_SECRET_HEX_LENGTH: usize = 16;

// ── Types ───────────────────────────────────────────────────────────

/// Why an enrollment attempt was rejected.
///
/// These are expected user-facing outcomes, not errors. `MalformedCode` and
/// `CodeMismatch` are distinct here so the host can log them, but it must
/// present both as the same generic "invalid code" message — revealing which
/// check failed would hand an attacker an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetupRejection {
    /// Secret shorter than [`MIN_SECRET_HEX_LENGTH`] hex characters.
    WeakSecret,
    /// Submitted code is not exactly 6 ASCII digits.
    MalformedCode,
    /// Well-formed code that matches none of the three candidate steps.
    CodeMismatch,
}

/// Result of a setup validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupOutcome {
    /// `true` iff the proposed secret/code pair was accepted.
    pub valid: bool,
    /// Rejection reason when `valid` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SetupRejection>,
}

impl SetupOutcome {
    /// Accepted outcome.
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// Rejected outcome with the given reason.
    #[must_use]
    pub const fn rejected(reason: SetupRejection) -> Self {
        Self {
            valid: false,
            error: Some(reason),
        }
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a proposed secret/code pair at the given Unix time.
///
/// Side-effect free; safe to call repeatedly for the same enrollment.
///
/// # Errors
///
/// Returns [`OtpError::InvalidEncoding`] only for a secret that passes the
/// length gate but is not valid hex — a host bug, not a user outcome.
pub fn validate_setup(secret_hex: &str, code: &str, time: u64) -> Result<SetupOutcome, OtpError> {
    if secret_hex.len() < MIN_SECRET_HEX_LENGTH {
        return Ok(SetupOutcome::rejected(SetupRejection::WeakSecret));
    }
    if !is_six_digit_code(code) {
        return Ok(SetupOutcome::rejected(SetupRejection::MalformedCode));
    }
    if verify_totp(secret_hex, code, time, DEFAULT_PERIOD)? {
        Ok(SetupOutcome::accepted())
    } else {
        Ok(SetupOutcome::rejected(SetupRejection::CodeMismatch))
    }
}

/// Validate a proposed secret/code pair against the current wall clock.
///
/// # Errors
///
/// As [`validate_setup`]; additionally [`OtpError::InvalidParameter`] if the
/// system clock reads before the Unix epoch.
pub fn validate_setup_now(secret_hex: &str, code: &str) -> Result<SetupOutcome, OtpError> {
    validate_setup(secret_hex, code, crate::totp::unix_time_now()?)
}

// ── Internal helpers ────────────────────────────────────────────────

/// `^\d{6}$` without pulling in a regex engine.
fn is_six_digit_code(code: &str) -> bool {
    code.len() == CODE_DIGITS && code.bytes().all(|b| b.is_ascii_digit())
}

// ── Tests ───────────────────────────────────────────────────────────
