// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use num_bigint::BigUint;
use num_traits::One;

use super::bigint::{from_u64, gcd, generate_prime, mod_inverse, random_biguint_range};
use super::errors::{RsaError, RsaResult};

/// Inclusive range the prime factors are sampled from
pub const DEFAULT_PRIME_RANGE: (u64, u64) = (1_000, 10_000);

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: BigUint, // Encryption exponent
    pub n: BigUint, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: BigUint, // Decryption exponent
    pub n: BigUint, // Modulus (same as public)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encrypt a string using this public key
    pub fn encrypt(&self, plaintext: &str) -> RsaResult<Vec<BigUint>> {
        super::encrypt::encrypt(self, plaintext)
    }
}

impl RsaPrivateKey {
    /// Decrypt a ciphertext sequence using this private key
    pub fn decrypt(&self, ciphertext: &[BigUint]) -> RsaResult<String> {
        super::decrypt::decrypt(self, ciphertext)
    }
}

/// Generate an RSA key pair from primes in the default sampling range
pub fn generate_keypair() -> RsaResult<RsaKeyPair> {
    let (low, high) = DEFAULT_PRIME_RANGE;
    generate_keypair_in_range(low, high)
}

/// Generate an RSA key pair from primes sampled in [low, high]
///
/// Drawing the two primes independently means equal values are possible,
/// just vanishingly unlikely for ranges the size of the default.
pub fn generate_keypair_in_range(low: u64, high: u64) -> RsaResult<RsaKeyPair> {
    if low > high {
        return Err(RsaError::InvalidParameter(format!(
            "prime range is empty: low {} exceeds high {}",
            low, high
        )));
    }

    let p = generate_prime(low, high);
    let q = generate_prime(low, high);

    keypair_from_primes(p, q)
}

/// Derive the key pair for a fixed pair of primes
fn keypair_from_primes(p: u64, q: u64) -> RsaResult<RsaKeyPair> {
    // n = p * q, φ(n) = (p-1)(q-1)
    let n = from_u64(p) * from_u64(q);
    let phi = from_u64(p - 1) * from_u64(q - 1);

    if phi <= BigUint::one() {
        return Err(RsaError::InvalidParameter(format!(
            "totient of {}*{} leaves no room for an exponent",
            p, q
        )));
    }

    // Sample e from [1, φ) until it is coprime with φ
    let e = random_coprime_exponent(&phi);

    // d = e^(-1) mod φ; the coprimality filter above makes this exist
    let d = mod_inverse(&e, &phi).ok_or_else(|| RsaError::NoInverse {
        e: e.clone(),
        phi: phi.clone(),
    })?;

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n: n.clone() },
        private_key: RsaPrivateKey { d, n },
    })
}

/// Rejection-sample a uniform exponent from [1, φ) with gcd(e, φ) = 1
fn random_coprime_exponent(phi: &BigUint) -> BigUint {
    let one = BigUint::one();

    loop {
        let e = random_biguint_range(&one, phi);
        if gcd(&e, phi).is_one() {
            return e;
        }
    }
}
