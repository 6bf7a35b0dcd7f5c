//! `oauth2-hmac-header` must perform certain cryptographic operations in order to sign and
//! validate requests.  This module contains the traits that a cryptographic backend must
//! implement, along with the functions that install one.
//!
//! By default (with the `use_ring` feature) the `ring` crate is used, and nothing needs to be
//! configured.  Without it, call [`set_cryptographer`] before signing anything.

use crate::credentials::Algorithm;
use failure::Fail;

pub(crate) mod holder;
pub(crate) use holder::get_crypographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[derive(Fail, Debug)]
pub enum CryptoError {
    /// The cryptographer does not support the requested algorithm.
    #[fail(display = "MAC algorithm {} is unsupported by this Cryptographer", _0)]
    UnsupportedAlgorithm(Algorithm),

    /// Any other failure inside the backend.
    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] failure::Error),
}

/// A keyed HMAC, ready to sign data.
pub trait HmacKey: Send + Sync + 'static {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// A trait consolidating the cryptographic operations the MAC signer needs.
pub trait Cryptographer: Send + Sync + 'static {
    fn rand_bytes(&self, output: &mut [u8]) -> Result<(), CryptoError>;
    fn new_key(&self, algorithm: Algorithm, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;
    /// Compare the two slices without leaking where they differ.
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}
