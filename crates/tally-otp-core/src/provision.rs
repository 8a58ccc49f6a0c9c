//! `otpauth://` provisioning URI builder.
//!
//! Formats the URI an authenticator app consumes via QR code at enrollment.
//! Rendering the QR image is the host's job; this module only produces the
//! string payload.

// ── Constants ───────────────────────────────────────────────────────

/// Issuer shown in authenticator apps when the host does not override it.
pub const DEFAULT_ISSUER: &str = "Tally";

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

// ── Public API ──────────────────────────────────────────────────────

/// Build the `otpauth://totp/...` provisioning URI for an enrollment.
///
/// `account` and `issuer` are percent-encoded so that colons, spaces, and
/// `@` inside them cannot break the `issuer:account` label; the separator
/// colon itself stays literal, which is what authenticator apps split on.
/// `secret_base32` is inserted verbatim — the Base32 alphabet is URI-safe.
///
/// The algorithm, digit count, and period are fixed to the only credential
/// shape Tally provisions: SHA-1, 6 digits, 30 seconds.
#[must_use]
pub fn build_provisioning_uri(account: &str, secret_base32: &str, issuer: &str) -> String {
    let issuer_enc = percent_encode(issuer);
    let account_enc = percent_encode(account);
    format!(
        "otpauth://totp/{issuer_enc}:{account_enc}\
         ?secret={secret_base32}&issuer={issuer_enc}\
         &algorithm=SHA1&digits=6&period=30"
    )
}

// ── Internal helpers ────────────────────────────────────────────────

/// Percent-encode everything outside the RFC 3986 unreserved set.
///
/// Multi-byte UTF-8 sequences encode byte-by-byte (`é` → `%C3%A9`).
#[allow(clippy::arithmetic_side_effects)]
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b));
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX_UPPER[usize::from(b >> 4)]));
                out.push(char::from(HEX_UPPER[usize::from(b & 0x0F)]));
            }
        }
    }
    out
}

// ── Tests ───────────────────────────────────────────────────────────
