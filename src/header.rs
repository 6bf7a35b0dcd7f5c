use crate::credentials::Algorithm;
use crate::error::*;
use crate::request::Request;
use crate::signature::{Signature, SignatureProvider};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, UNIX_EPOCH};

/// The authentication scheme name that prefixes the header value.
pub const SCHEME: &str = "MAC";

/// Attributes that must appear in every header, in the order they are checked.
const MANDATORY: [&str; 4] = ["id", "ts", "nonce", "mac"];

static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(id|ts|nonce|ext|mac)=("[^"]+")"#).unwrap());

/// Representation of a MAC `Authorization` header value.
///
/// Headers are created with `generate` or parsed with `parse` (also available through
/// `FromStr`), and formatted with `Display`, which includes the `"MAC "` prefix.
///
/// None of the components may contain the character `"`: the format has no way to escape it,
/// and parsing drops every such character from a value.
#[derive(Clone, PartialEq, Debug)]
pub struct AuthorizationHeader {
    pub id: String,
    pub ts: String,
    pub nonce: String,
    /// Extension data; empty when the header carries none.
    pub ext: String,
    pub mac: String,
}

impl AuthorizationHeader {
    /// Create a new header from its components.  This is a low-level function; no component
    /// is checked.
    pub fn new<S, T>(id: S, ts: T, nonce: S, ext: Option<S>, mac: S) -> AuthorizationHeader
    where
        S: Into<String>,
        T: fmt::Display,
    {
        AuthorizationHeader {
            id: id.into(),
            ts: ts.to_string(),
            nonce: nonce.into(),
            ext: match ext {
                Some(ext) => ext.into(),
                None => String::new(),
            },
            mac: mac.into(),
        }
    }

    /// Generate the complete header value, `MAC id="..", ts="..", nonce="..", ext="..", mac=".."`.
    ///
    /// `ext` is left out entirely when it is `None` or empty.
    pub fn generate<T>(id: &str, ts: T, nonce: &str, ext: Option<&str>, mac: &str) -> String
    where
        T: fmt::Display,
    {
        AuthorizationHeader::new(id, ts, nonce, ext, mac).to_string()
    }

    /// Sign a fresh request with `provider` and generate the header for it.
    ///
    /// Any error from the provider is returned as-is.
    pub fn generate_with_new_signature<P>(
        provider: &P,
        id: &str,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
    ) -> std::result::Result<String, P::Error>
    where
        P: SignatureProvider,
    {
        let sig = provider.generate(algorithm, key, request)?;
        Ok(AuthorizationHeader::generate(
            id,
            sig.ts_secs(),
            &sig.nonce,
            Some(sig.ext.as_str()),
            &sig.mac,
        ))
    }

    /// Parse a header value.
    ///
    /// Parsing is a lenient scan for `key="value"` pairs: the `"MAC "` prefix, ordering, and
    /// any surrounding text are ignored, and a repeated attribute takes its last value.  It
    /// fails only when one of `id`, `ts`, `nonce`, or `mac` is missing or empty.
    pub fn parse(header: &str) -> Result<AuthorizationHeader> {
        let mut attrs: HashMap<&str, &str> = HashMap::new();
        for cap in ATTRIBUTE.captures_iter(header) {
            if let (Some(key), Some(value)) = (cap.get(1), cap.get(2)) {
                attrs.insert(key.as_str(), value.as_str());
            }
        }

        if let Some(missing) = MANDATORY.iter().find(|k| !attrs.contains_key(*k)) {
            debug!("MAC header is missing `{}`", missing);
            return Err(Error::MissingField(*missing));
        }

        let field = |key: &str| {
            attrs
                .get(key)
                .map(|v| v.replace('"', ""))
                .unwrap_or_default()
        };
        Ok(AuthorizationHeader {
            id: field("id"),
            ts: field("ts"),
            nonce: field("nonce"),
            ext: field("ext"),
            mac: field("mac"),
        })
    }

    /// The components as a tuple `(id, ts, nonce, ext, mac)`.
    pub fn into_parts(self) -> (String, String, String, String, String) {
        (self.id, self.ts, self.nonce, self.ext, self.mac)
    }

    /// Check a signature through `provider`.  This adds nothing to the provider's own check.
    pub fn is_valid<P>(
        provider: &P,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
        signature: &Signature,
        ts_skew: Duration,
    ) -> bool
    where
        P: SignatureProvider,
    {
        provider.is_valid(algorithm, key, request, signature, ts_skew)
    }

    /// Validate this header's signature against `request`.
    ///
    /// A header whose `ts` is not a number of seconds cannot carry a valid signature.
    pub fn validate<P>(
        &self,
        provider: &P,
        algorithm: Algorithm,
        key: &[u8],
        request: &Request,
        ts_skew: Duration,
    ) -> bool
    where
        P: SignatureProvider,
    {
        let secs = match u64::from_str(&self.ts) {
            Ok(secs) => secs,
            Err(_) => {
                debug!("MAC header has a non-numeric `ts`: {}", self.ts);
                return false;
            }
        };
        let ts = match UNIX_EPOCH.checked_add(Duration::from_secs(secs)) {
            Some(ts) => ts,
            None => {
                debug!("MAC header has an out-of-range `ts`: {}", self.ts);
                return false;
            }
        };
        let signature = Signature {
            ts,
            nonce: self.nonce.clone(),
            ext: self.ext.clone(),
            mac: self.mac.clone(),
        };
        AuthorizationHeader::is_valid(provider, algorithm, key, request, &signature, ts_skew)
    }

    /// Format the attributes of the header, omitting the `"MAC "` prefix.
    pub fn fmt_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id=\"{}\", ts=\"{}\", nonce=\"{}\", ",
            self.id, self.ts, self.nonce
        )?;
        if !self.ext.is_empty() {
            write!(f, "ext=\"{}\", ", self.ext)?;
        }
        write!(f, "mac=\"{}\"", self.mac)
    }
}

impl fmt::Display for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", SCHEME)?;
        self.fmt_header(f)
    }
}

impl FromStr for AuthorizationHeader {
    type Err = Error;
    fn from_str(s: &str) -> Result<AuthorizationHeader> {
        AuthorizationHeader::parse(s)
    }
}
