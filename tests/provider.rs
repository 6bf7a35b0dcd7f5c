use oauth2_hmac_header::{
    Algorithm, AuthorizationHeader, Request, RequestBuilder, Signature, SignatureProvider,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Debug, PartialEq)]
struct ProviderDown(&'static str);

/// A provider with canned answers, counting how often it is asked to validate.
struct FixedProvider {
    fail: bool,
    valid: bool,
    checks: Cell<usize>,
}

impl FixedProvider {
    fn new(fail: bool, valid: bool) -> Self {
        FixedProvider {
            fail,
            valid,
            checks: Cell::new(0),
        }
    }
}

impl SignatureProvider for FixedProvider {
    type Error = ProviderDown;

    fn generate(
        &self,
        _algorithm: Algorithm,
        _key: &[u8],
        request: &Request,
    ) -> Result<Signature, ProviderDown> {
        if self.fail {
            return Err(ProviderDown("hsm unavailable"));
        }
        Ok(Signature {
            ts: UNIX_EPOCH + Duration::from_secs(1234567890),
            nonce: "abc123".to_string(),
            ext: request.ext().unwrap_or("").to_string(),
            mac: "deadbeef".to_string(),
        })
    }

    fn is_valid(
        &self,
        _algorithm: Algorithm,
        _key: &[u8],
        _request: &Request,
        signature: &Signature,
        _ts_skew: Duration,
    ) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.valid && signature.mac == "deadbeef"
    }
}

#[test]
fn generate_with_new_signature() {
    let request = RequestBuilder::new("post", "example.com", 443, "/request")
        .ext("a,b,c")
        .request();
    let header = AuthorizationHeader::generate_with_new_signature(
        &FixedProvider::new(false, true),
        "client1",
        Algorithm::HmacSha256,
        b"demo_key",
        &request,
    )
    .unwrap();
    assert_eq!(
        header,
        "MAC id=\"client1\", ts=\"1234567890\", nonce=\"abc123\", ext=\"a,b,c\", \
         mac=\"deadbeef\""
    );
}

#[test]
fn generate_with_new_signature_no_ext() {
    let request = RequestBuilder::new("get", "example.com", 80, "/").request();
    let header = AuthorizationHeader::generate_with_new_signature(
        &FixedProvider::new(false, true),
        "client1",
        Algorithm::HmacSha1,
        b"demo_key",
        &request,
    )
    .unwrap();
    assert_eq!(
        header,
        "MAC id=\"client1\", ts=\"1234567890\", nonce=\"abc123\", mac=\"deadbeef\""
    );
}

#[test]
fn provider_error_passes_through() {
    let request = RequestBuilder::new("get", "example.com", 80, "/").request();
    let err = AuthorizationHeader::generate_with_new_signature(
        &FixedProvider::new(true, true),
        "client1",
        Algorithm::HmacSha256,
        b"demo_key",
        &request,
    )
    .unwrap_err();
    assert_eq!(err, ProviderDown("hsm unavailable"));
}

#[test]
fn is_valid_forwards_every_call() {
    let provider = FixedProvider::new(false, true);
    let request = RequestBuilder::new("get", "example.com", 80, "/").request();
    let signature = Signature {
        ts: UNIX_EPOCH,
        nonce: "n".to_string(),
        ext: String::new(),
        mac: "deadbeef".to_string(),
    };
    for _ in 0..3 {
        assert!(AuthorizationHeader::is_valid(
            &provider,
            Algorithm::HmacSha256,
            b"demo_key",
            &request,
            &signature,
            Duration::from_secs(1)
        ));
    }
    assert_eq!(provider.checks.get(), 3);

    let rejecting = FixedProvider::new(false, false);
    assert!(!AuthorizationHeader::is_valid(
        &rejecting,
        Algorithm::HmacSha256,
        b"demo_key",
        &request,
        &signature,
        Duration::from_secs(1)
    ));
}

#[test]
fn validate_parsed_header() {
    let provider = FixedProvider::new(false, true);
    let request = RequestBuilder::new("get", "example.com", 80, "/").request();
    let header = AuthorizationHeader::parse(
        "MAC id=\"client1\", ts=\"1234567890\", nonce=\"abc123\", mac=\"deadbeef\"",
    )
    .unwrap();
    assert!(header.validate(
        &provider,
        Algorithm::HmacSha256,
        b"demo_key",
        &request,
        Duration::from_secs(1)
    ));
    assert_eq!(provider.checks.get(), 1);
}
