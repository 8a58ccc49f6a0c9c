//! RFC 6238 TOTP and RFC 4226 HOTP engine.
//!
//! Standards-compliant one-time password generation and verification using
//! `ring::hmac` HMAC-SHA1, fixed at the 6-digit output every Tally credential
//! uses. Purely functional over `(secret, time, period)` — the wall clock is
//! only read by the `_now` convenience wrappers.

use std::time::{SystemTime, UNIX_EPOCH};

use ring::hmac;
use zeroize::Zeroize;

use crate::encoding::decode_hex;
use crate::error::OtpError;

// ── Constants ───────────────────────────────────────────────────────

/// Default TOTP period in seconds (RFC 6238 §4).
pub const DEFAULT_PERIOD: u32 = 30;

/// Verification tolerates ±1 time step of clock drift (RFC 6238 §5.2).
pub const DRIFT_WINDOW: u32 = 1;

/// Every code is exactly 6 decimal digits, left-zero-padded.
pub const CODE_DIGITS: usize = 6;

/// Truncation modulus: 10^6.
const CODE_MODULUS: u32 = 1_000_000;

// ── HOTP (RFC 4226) ────────────────────────────────────────────────

/// Generate an HOTP code for an 8-byte big-endian counter per RFC 4226.
///
/// Dynamic truncation (§5.3): the low nibble of the last digest byte selects
/// a 4-byte window, whose most significant bit is masked before reducing
/// modulo 10^6.
///
/// # Errors
///
/// Returns [`OtpError::InvalidParameter`] if `secret` is empty.
#[must_use = "OTP code should be used or stored"]
pub fn generate_hotp(secret: &[u8], counter: u64) -> Result<String, OtpError> {
    if secret.is_empty() {
        return Err(OtpError::InvalidParameter(
            "secret must not be empty".to_owned(),
        ));
    }

    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, secret);
    let tag = hmac::sign(&key, &counter.to_be_bytes());
    let digest = tag.as_ref();

    // offset = low-order 4 bits of the last byte.
    let offset = usize::from(digest[digest.len().wrapping_sub(1)] & 0x0F);

    // 4 bytes starting at offset, high bit masked to a 31-bit integer.
    let binary = u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset.wrapping_add(1)],
        digest[offset.wrapping_add(2)],
        digest[offset.wrapping_add(3)],
    ]);

    // CODE_MODULUS is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    let code = binary % CODE_MODULUS;

    Ok(format!("{code:06}"))
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// Generate the TOTP code for a hex secret at the given Unix time.
///
/// A pure function of `(secret, floor(time / period))`: any two calls within
/// the same time step yield the same code.
///
/// # Errors
///
/// Returns [`OtpError::InvalidEncoding`] for a malformed hex secret and
/// [`OtpError::InvalidParameter`] for a zero period or empty secret.
#[must_use = "OTP code should be used or stored"]
pub fn generate_totp(secret_hex: &str, time: u64, period: u32) -> Result<String, OtpError> {
    let step = time_step(time, period)?;
    let mut key = decode_hex(secret_hex)?;
    let code = generate_hotp(&key, step);
    key.zeroize();
    code
}

/// Generate the TOTP code for the current wall-clock time.
///
/// # Errors
///
/// As [`generate_totp`]; additionally [`OtpError::InvalidParameter`] if the
/// system clock reads before the Unix epoch.
#[must_use = "OTP code should be used or stored"]
pub fn generate_totp_now(secret_hex: &str, period: u32) -> Result<String, OtpError> {
    generate_totp(secret_hex, unix_time_now()?, period)
}

/// Verify a submitted code against the steps `T-1`, `T`, `T+1`.
///
/// A code that is not exactly [`CODE_DIGITS`] characters is rejected
/// immediately with `Ok(false)`. All three candidates are derived and
/// compared in constant time; there is no early exit on match, so timing
/// reveals nothing about which step (if any) matched.
///
/// # Errors
///
/// Returns [`OtpError::InvalidEncoding`] for a malformed hex secret and
/// [`OtpError::InvalidParameter`] for a zero period or empty secret.
#[must_use = "verification result should be checked"]
pub fn verify_totp(secret_hex: &str, code: &str, time: u64, period: u32) -> Result<bool, OtpError> {
    let step = time_step(time, period)?;
    let mut key = decode_hex(secret_hex)?;
    if key.is_empty() {
        return Err(OtpError::InvalidParameter(
            "secret must not be empty".to_owned(),
        ));
    }

    if code.len() != CODE_DIGITS {
        key.zeroize();
        return Ok(false);
    }

    // Saturate at the u64 boundaries: at step 0 the window is [0, 1].
    let start = step.saturating_sub(u64::from(DRIFT_WINDOW));
    let end = step.saturating_add(u64::from(DRIFT_WINDOW));

    let mut valid = false;
    let mut candidate = start;
    loop {
        // Secret is non-empty, so generation cannot fail here.
        let expected = generate_hotp(&key, candidate)?;
        if constant_time_eq(expected.as_bytes(), code.as_bytes()) {
            valid = true;
        }
        if candidate == end {
            break;
        }
        candidate = candidate.wrapping_add(1);
    }

    key.zeroize();
    Ok(valid)
}

/// Verify a submitted code against the current wall-clock time.
///
/// # Errors
///
/// As [`verify_totp`]; additionally [`OtpError::InvalidParameter`] if the
/// system clock reads before the Unix epoch.
#[must_use = "verification result should be checked"]
pub fn verify_totp_now(secret_hex: &str, code: &str, period: u32) -> Result<bool, OtpError> {
    verify_totp(secret_hex, code, unix_time_now()?, period)
}

// ── Internal helpers ────────────────────────────────────────────────

/// T = floor(time / period) per RFC 6238 §4.
fn time_step(time: u64, period: u32) -> Result<u64, OtpError> {
    if period == 0 {
        return Err(OtpError::InvalidParameter("period must be > 0".to_owned()));
    }
    // period is validated non-zero above.
    #[allow(clippy::arithmetic_side_effects)]
    Ok(time / u64::from(period))
}

/// Current Unix time in seconds.
pub(crate) fn unix_time_now() -> Result<u64, OtpError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| OtpError::InvalidParameter(format!("system clock before Unix epoch: {e}")))
}

/// Constant-time byte comparison for OTP codes.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks. The
/// early return on length mismatch is acceptable: the 6-digit width is
/// public information, only the code value is protected.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ── Tests ───────────────────────────────────────────────────────────
