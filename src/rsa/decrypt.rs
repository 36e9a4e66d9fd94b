// RSA Decryption Implementation
// Maps each ciphertext integer back to a character via c^d mod n

use num_bigint::BigUint;

use super::bigint::{mod_pow, to_char_code};
use super::errors::{RsaError, RsaResult};
use super::keygen::RsaPrivateKey;

/// Decrypt a ciphertext sequence with an RSA private key
/// Produces one character per ciphertext integer, in input order.
///
/// A recovered value that is not a valid Unicode scalar is rejected; this
/// can only happen when the ciphertext was not produced under the matching
/// public key.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[BigUint]) -> RsaResult<String> {
    ciphertext
        .iter()
        .map(|value| {
            let recovered = mod_pow(value, &private_key.d, &private_key.n)?;
            let code = to_char_code(&recovered)
                .ok_or_else(|| RsaError::InvalidCharacterCode(recovered.to_string()))?;
            char::from_u32(code).ok_or_else(|| RsaError::InvalidCharacterCode(code.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::bigint::from_u64;
    use super::super::keygen::{generate_keypair, generate_keypair_in_range, RsaKeyPair};

    fn textbook_private_key() -> RsaPrivateKey {
        // p=61, q=53 -> n=3233; d = 17^(-1) mod 3120 = 2753
        RsaPrivateKey {
            d: from_u64(2753),
            n: from_u64(3233),
        }
    }

    fn roundtrip(keypair: &RsaKeyPair, plaintext: &str) {
        let ciphertext = keypair.public_key.encrypt(plaintext).unwrap();
        let decrypted = keypair.private_key.decrypt(&ciphertext).unwrap();
        assert_eq!(plaintext, decrypted);
    }

    #[test]
    fn test_decrypt_known_value() {
        // 2790 decrypts back to code 65 = 'A'
        let plaintext = decrypt(&textbook_private_key(), &[from_u64(2790)]).unwrap();
        assert_eq!(plaintext, "A");
    }

    #[test]
    fn test_decrypt_empty_input() {
        assert_eq!(decrypt(&textbook_private_key(), &[]).unwrap(), "");
    }

    #[test]
    fn test_roundtrip_generated_keys() {
        let keypair = generate_keypair().unwrap();

        roundtrip(&keypair, "Hello, RSA!");
        roundtrip(&keypair, "the quick brown fox JUMPS over 13 lazy dogs?!");
        roundtrip(&keypair, "   leading and trailing   ");
    }

    #[test]
    fn test_roundtrip_same_keypair_many_messages() {
        // Keys are immutable after creation; reuse across messages is fine
        let keypair = generate_keypair_in_range(2000, 4000).unwrap();

        for plaintext in ["a", "ab", "aba", "héllo ☃", "\n\ttabs and newlines\n"] {
            roundtrip(&keypair, plaintext);
        }
    }

    #[test]
    fn test_decrypt_rejects_invalid_character_code() {
        // d=1, huge n: decryption is the identity, and 0xD800 is a surrogate,
        // not a valid scalar value
        let key = RsaPrivateKey {
            d: from_u64(1),
            n: from_u64(10_000_000),
        };
        let result = decrypt(&key, &[from_u64(0xD800)]);
        assert!(matches!(result, Err(RsaError::InvalidCharacterCode(_))));
    }
}
