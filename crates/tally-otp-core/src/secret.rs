//! Enrollment secret generation.
//!
//! Uses `OsRng` (OS-level CSPRNG) for every character draw — a predictable
//! secret here is a direct authentication bypass.

use rand::rngs::OsRng;
use rand::Rng;

use crate::encoding::BASE32_ALPHABET;

/// Length of a freshly generated Base32 secret (32 chars = 160 bits).
pub const SECRET_LENGTH: usize = 32;

/// Generate a fresh Base32 enrollment secret.
///
/// Each of the [`SECRET_LENGTH`] characters is drawn independently and
/// uniformly from the Base32 alphabet.
#[must_use]
pub fn generate_base32_secret() -> String {
    let mut rng = OsRng;
    (0..SECRET_LENGTH)
        .map(|_| char::from(BASE32_ALPHABET[rng.gen_range(0..BASE32_ALPHABET.len())]))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────
