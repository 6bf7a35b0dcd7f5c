use crate::credentials::{Algorithm, Key};
use crate::crypto;
use crate::error::*;
use crate::request::Request;
use log::{debug, warn};
use std::io::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The result of signing a request: everything that goes into the header besides the id.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub ts: SystemTime,
    pub nonce: String,
    pub ext: String,
    pub mac: String,
}

impl Signature {
    /// The timestamp as it appears in the header: whole seconds since the UNIX epoch.
    pub fn ts_secs(&self) -> u64 {
        self.ts
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// The engine that produces and checks request signatures.
///
/// `AuthorizationHeader` only composes with this trait; errors from `generate` are handed back
/// to the caller as they are.
pub trait SignatureProvider {
    type Error;

    /// Sign a fresh request, producing a timestamp, nonce, the resolved ext, and the MAC.
    fn generate(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
    ) -> std::result::Result<Signature, Self::Error>;

    /// Check that `signature` is a valid signature of `request`, with a timestamp no more than
    /// `ts_skew` away from the current time.
    fn is_valid(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
        signature: &Signature,
        ts_skew: Duration,
    ) -> bool;
}

/// Bytes of entropy in a generated nonce.
const NONCE_BYTES: usize = 12;

/// The default `SignatureProvider`, computing the MAC over the normalized request string of
/// the OAuth 2.0 MAC draft:
///
/// ```text
/// ts\nnonce\nMETHOD\nrequest-uri\nhost\nport\next\n
/// ```
///
/// The method is upper-cased and the host lower-cased before signing; the MAC is
/// base64-encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacSigner;

impl MacSigner {
    /// Sign `request` with the given timestamp and nonce.
    pub fn sign(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
        ts: SystemTime,
        nonce: &str,
    ) -> Result<Signature> {
        let ext = request.ext().unwrap_or("");
        let key = Key::new(key, algorithm)?;
        let mac = key.sign(&normalized_string(request, ts, nonce, ext)?)?;
        Ok(Signature {
            ts,
            nonce: nonce.to_string(),
            ext: ext.to_string(),
            mac: base64::encode(&mac),
        })
    }

    fn check(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
        signature: &Signature,
    ) -> Result<bool> {
        let key = Key::new(key, algorithm)?;
        let normalized =
            normalized_string(request, signature.ts, &signature.nonce, &signature.ext)?;
        let mac = base64::encode(&key.sign(&normalized)?);
        Ok(crypto::get_crypographer().constant_time_compare(mac.as_bytes(), signature.mac.as_bytes()))
    }
}

impl SignatureProvider for MacSigner {
    type Error = Error;

    fn generate(&self, algorithm: Algorithm, key: &[u8], request: &Request) -> Result<Signature> {
        let nonce = random_string(NONCE_BYTES)?;
        self.sign(algorithm, key, request, SystemTime::now(), &nonce)
    }

    fn is_valid(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
        signature: &Signature,
        ts_skew: Duration,
    ) -> bool {
        let now = SystemTime::now();
        let skew = match now.duration_since(signature.ts) {
            Ok(d) => d,
            Err(e) => e.duration(),
        };
        if skew > ts_skew {
            debug!(
                "rejecting signature: ts {} is {:?} from now",
                signature.ts_secs(),
                skew
            );
            return false;
        }

        match self.check(algorithm, key, request, signature) {
            Ok(true) => true,
            Ok(false) => {
                debug!("rejecting signature: mac mismatch for nonce {}", signature.nonce);
                false
            }
            Err(e) => {
                warn!("could not validate signature: {}", e);
                false
            }
        }
    }
}

fn normalized_string(
    request: &Request,
    ts: SystemTime,
    nonce: &str,
    ext: &str,
) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = vec![];
    let secs = ts.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();

    writeln!(buffer, "{}", secs)?;
    writeln!(buffer, "{}", nonce)?;
    writeln!(buffer, "{}", request.method().to_ascii_uppercase())?;
    writeln!(buffer, "{}", request.uri())?;
    writeln!(buffer, "{}", request.host().to_ascii_lowercase())?;
    writeln!(buffer, "{}", request.port())?;
    writeln!(buffer, "{}", ext)?;

    Ok(buffer)
}

/// Create a random string with `bytes` bytes of entropy.  The string
/// is base64-encoded, so it will be longer than `bytes` characters.
fn random_string(bytes: usize) -> Result<String> {
    let mut bytes = vec![0u8; bytes];
    crypto::get_crypographer().rand_bytes(&mut bytes)?;
    Ok(base64::encode(&bytes))
}
