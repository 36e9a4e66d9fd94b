// RSA Big Integer Operations
// Number-theoretic primitives on top of num-bigint: modular exponentiation,
// extended Euclid, and trial-division prime sampling

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::{thread_rng, Rng};

use super::errors::{RsaError, RsaResult};

/// Create a big integer from u64
pub fn from_u64(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses iterative square-and-multiply; every intermediate value stays
/// reduced modulo the modulus.
///
/// The modulus must be positive. A negative exponent is unrepresentable
/// by `BigUint`, so the `exp >= 0` precondition holds by construction.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> RsaResult<BigUint> {
    if modulus.is_zero() {
        return Err(RsaError::InvalidParameter(
            "mod_pow requires a positive modulus".to_string(),
        ));
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Greatest common divisor (Euclidean algorithm)
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Compute the modular inverse: a^(-1) mod m
/// Returns None if the inverse doesn't exist, i.e. gcd(a, m) != 1
///
/// Iterative extended Euclidean algorithm; the Bezout coefficient is tracked
/// in signed arithmetic and normalized into [0, m) at the end.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let m_signed = BigInt::from_biguint(Sign::Plus, m.clone());

    // Invariant: r0 ≡ s0*a and r1 ≡ s1*a (mod m)
    let mut r0 = BigInt::from_biguint(Sign::Plus, a.clone());
    let mut r1 = m_signed.clone();
    let mut s0 = BigInt::one();
    let mut s1 = BigInt::zero();

    while !r1.is_zero() {
        let quotient = &r0 / &r1;
        let r2 = &r0 - &quotient * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let s2 = &s0 - &quotient * &s1;
        s0 = std::mem::replace(&mut s1, s2);
    }

    if !r0.is_one() {
        // gcd(a, m) != 1, inverse doesn't exist
        return None;
    }

    let mut inverse = s0 % &m_signed;
    if inverse.sign() == Sign::Minus {
        inverse += &m_signed;
    }

    inverse.to_biguint()
}

/// Exact primality test by trial division
/// 2 is prime; anything below 2 or even is not; otherwise divide by every
/// odd integer up to the square root.
pub fn is_prime(num: u64) -> bool {
    if num == 2 {
        return true;
    }
    if num < 2 || num % 2 == 0 {
        return false;
    }

    let mut divisor = 3u64;
    // u128 keeps divisor*divisor from overflowing near u64::MAX
    while (divisor as u128) * (divisor as u128) <= num as u128 {
        if num % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Sample a prime uniformly from the inclusive range [low, high] by
/// rejection. Loops until a draw passes `is_prime`; the caller must pick a
/// range that contains at least one prime.
pub fn generate_prime(low: u64, high: u64) -> u64 {
    let mut rng = thread_rng();

    loop {
        let candidate = rng.gen_range(low..=high);
        if is_prime(candidate) {
            return candidate;
        }
    }
}

/// Sample a uniform big integer from [low, high)
pub fn random_biguint_range(low: &BigUint, high: &BigUint) -> BigUint {
    let mut rng = thread_rng();
    rng.gen_biguint_range(low, high)
}

/// Convert a big integer to a character code if it fits
pub fn to_char_code(n: &BigUint) -> Option<u32> {
    n.to_u32()
}
