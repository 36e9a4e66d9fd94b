// RSA Error Types
// Typed failures for the number-theoretic core

use num_bigint::BigUint;

#[derive(thiserror::Error, Debug)]
pub enum RsaError {
    /// The candidate public exponent shares a factor with the totient, so no
    /// modular inverse exists. Key generation filters for coprimality first,
    /// so this is a structural guard rather than an expected outcome.
    #[error("no modular inverse of {e} exists modulo {phi}")]
    NoInverse { e: BigUint, phi: BigUint },

    /// Malformed arguments, e.g. a zero modulus or inverted range bounds.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A character's numeric code does not fit under the key modulus and
    /// would not survive a round-trip.
    #[error("character {ch:?} (code {code}) is not below modulus {modulus}")]
    CharacterOutOfRange {
        ch: char,
        code: u32,
        modulus: BigUint,
    },

    /// A decrypted value is not a valid Unicode scalar value.
    #[error("decrypted value {0} is not a valid character code")]
    InvalidCharacterCode(String),
}

/// Result type for the RSA core
pub type RsaResult<T> = Result<T, RsaError>;
