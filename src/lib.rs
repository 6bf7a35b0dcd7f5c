//! The `oauth2-hmac-header` crate builds and parses the `Authorization` header of the OAuth 2.0
//! MAC access authentication scheme:
//!
//! ```text
//! MAC id="h480djs93hd8", ts="1336363200", nonce="dj83hs9s", ext="a,b,c", mac="bhCQXTVyfj5cmA9uKkPFx1zeOXM="
//! ```
//!
//! It is a low-level crate: it formats and parses header values, and signs and validates
//! requests through a `SignatureProvider`, but does not send or receive HTTP requests itself.
//!
//! # Examples
//!
//! ## Client
//!
//! A client signs a request with its key and attaches the resulting header.
//!
//! ```
//! use oauth2_hmac_header::{Algorithm, AuthorizationHeader, MacSigner, RequestBuilder};
//!
//! let request = RequestBuilder::new("POST", "example.com", 443, "/v1/users")
//!     .ext("a,b,c")
//!     .request();
//!
//! // the timestamp and nonce are fresh, so the MAC differs on every call
//! let header = AuthorizationHeader::generate_with_new_signature(
//!     &MacSigner,
//!     "client1",
//!     Algorithm::HmacSha256,
//!     b"demo_key",
//!     &request,
//! )
//! .unwrap();
//!
//! assert!(header.starts_with("MAC id=\"client1\", ts=\""));
//! assert!(header.contains("ext=\"a,b,c\""));
//! ```
//!
//! Headers can also be formatted from components that were computed elsewhere:
//!
//! ```
//! use oauth2_hmac_header::AuthorizationHeader;
//!
//! let header = AuthorizationHeader::generate("c1", 100, "n1", None, "m1");
//! assert_eq!(header, "MAC id=\"c1\", ts=\"100\", nonce=\"n1\", mac=\"m1\"");
//! ```
//!
//! ## Server
//!
//! A server parses the received header, describes the request it received, and validates
//! the header against it.
//!
//! ```
//! use oauth2_hmac_header::{Algorithm, AuthorizationHeader, MacSigner, RequestBuilder};
//! use std::time::Duration;
//!
//! let received = "MAC id=\"client1\", ts=\"1353832234\", nonce=\"j4h3g2\", \
//!                 ext=\"a,b,c\", mac=\"53ED6eRHCSAmzBimkS8CSPZQ+8fX77s/By0WrXXfgOQ=\"";
//! let header = AuthorizationHeader::parse(received).unwrap();
//!
//! let request = RequestBuilder::new(
//!     "POST",
//!     "example.com",
//!     443,
//!     "/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b&c2&a3=2+q",
//! )
//! .request();
//!
//! // the key would be looked up by `header.id`
//! let key = b"werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn";
//! let one_week_in_secs = 7 * 24 * 60 * 60;
//! if !header.validate(
//!     &MacSigner,
//!     Algorithm::HmacSha256,
//!     key,
//!     &request,
//!     Duration::from_secs(5200 * one_week_in_secs),
//! ) {
//!     panic!("header validation failed. Is it 2112 already?");
//! }
//! ```
//!
//! ## Features
//!
//! By default, the `use_ring` feature is enabled, which means that this crate will
//! use `ring` for all cryptographic operations.
//!
//! If it is disabled, you must provide a custom implementation of the
//! [`crypto::Cryptographer`] trait to the `set_cryptographer` function, or
//! signing and validation will panic.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod header;
pub use crate::header::{AuthorizationHeader, SCHEME};

mod credentials;
pub use crate::credentials::{Algorithm, Key};

mod request;
pub use crate::request::{Request, RequestBuilder};

mod signature;
pub use crate::signature::{MacSigner, Signature, SignatureProvider};

mod error;
pub use crate::error::*;

pub mod crypto;
