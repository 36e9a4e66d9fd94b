// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod errors;
pub mod keygen;

pub use bigint::{gcd, generate_prime, is_prime, mod_inverse, mod_pow};
pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use errors::{RsaError, RsaResult};
pub use keygen::{
    generate_keypair, generate_keypair_in_range, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
    DEFAULT_PRIME_RANGE,
};
