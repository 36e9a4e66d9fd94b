// RSA Encryption Implementation
// Maps each character code to code^e mod n

use num_bigint::BigUint;

use super::bigint::{from_u64, mod_pow};
use super::errors::{RsaError, RsaResult};
use super::keygen::RsaPublicKey;

/// Encrypt a string with an RSA public key
/// Produces one ciphertext integer per character, in input order.
///
/// Every character code must be strictly below the key modulus; a code at or
/// above it cannot survive the round-trip, so it is rejected up front.
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &str) -> RsaResult<Vec<BigUint>> {
    plaintext
        .chars()
        .map(|ch| {
            let code = ch as u32;
            let m = from_u64(code as u64);
            if m >= public_key.n {
                return Err(RsaError::CharacterOutOfRange {
                    ch,
                    code,
                    modulus: public_key.n.clone(),
                });
            }
            mod_pow(&m, &public_key.e, &public_key.n)
        })
        .collect()
}
