use crate::crypto::{self, HmacKey};
use crate::error::*;
use std::fmt;
use std::str::FromStr;

/// The MAC algorithms defined for the MAC access authentication scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HmacSha1,
    HmacSha256,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::HmacSha1 => "hmac-sha-1",
            Algorithm::HmacSha256 => "hmac-sha-256",
        })
    }
}

impl FromStr for Algorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<Algorithm> {
        match s.to_ascii_lowercase().as_str() {
            "hmac-sha-1" | "hmac-sha1" => Ok(Algorithm::HmacSha1),
            "hmac-sha-256" | "hmac-sha256" => Ok(Algorithm::HmacSha256),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// MAC key.
///
/// Any sequence of bytes can be used as a key; keys of unusual length are handled according
/// to HMAC's rules for the chosen digest.
pub struct Key(Box<dyn HmacKey>);

impl Key {
    pub fn new<B>(key: B, algorithm: Algorithm) -> Result<Key>
    where
        B: AsRef<[u8]>,
    {
        Ok(Key(crypto::get_crypographer()
            .new_key(algorithm, key.as_ref())?))
    }

    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.0.sign(data)?)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Key(..)")
    }
}
