//! Error types for `tally-otp-core`.

use thiserror::Error;

/// Errors produced by the second-factor primitives.
///
/// These represent caller bugs (malformed secret material, out-of-range
/// parameters) and fail loudly. A well-formed code that simply does not
/// match is *not* an error — see [`crate::setup::SetupRejection`].
#[derive(Debug, Error)]
pub enum OtpError {
    /// Malformed hex input: odd length or a character outside `[0-9a-fA-F]`.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Parameter outside the valid range (zero period, empty secret).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
