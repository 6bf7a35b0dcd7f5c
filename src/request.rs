use crate::error::*;
use url::{Position, Url};

/// Request represents a single HTTP request, as far as the MAC signature is concerned.
///
/// Requests are built with `RequestBuilder`, and handed to a `SignatureProvider` to create
/// or validate a signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<'a> {
    method: &'a str,
    uri: &'a str,
    host: &'a str,
    port: u16,
    ext: Option<&'a str>,
}

impl<'a> Request<'a> {
    /// The HTTP method, as given to the builder.
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// The HTTP request-URI: path and query, as sent on the request line.
    pub fn uri(&self) -> &'a str {
        self.uri
    }

    pub fn host(&self) -> &'a str {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn ext(&self) -> Option<&'a str> {
        self.ext
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder<'a>(Request<'a>);

impl<'a> RequestBuilder<'a> {
    /// Create a new request with the given method, host, port, and request-URI.
    ///
    /// The port is the one the `Host` header names, or the scheme's default (80 for HTTP,
    /// 443 for HTTPS) when the header carries none.
    pub fn new(method: &'a str, host: &'a str, port: u16, uri: &'a str) -> Self {
        RequestBuilder(Request {
            method,
            uri,
            host,
            port,
            ext: None,
        })
    }

    /// Create a new request with the host, port, and request-URI determined from the URL.
    pub fn from_url(method: &'a str, url: &'a Url) -> Result<Self> {
        let (host, port, uri) = RequestBuilder::parse_url(url)?;
        Ok(RequestBuilder::new(method, host, port, uri))
    }

    /// Set the request's extension data.
    pub fn ext<S>(mut self, ext: S) -> Self
    where
        S: Into<Option<&'a str>>,
    {
        self.0.ext = ext.into();
        self
    }

    /// Get the request from this builder
    pub fn request(self) -> Request<'a> {
        self.0
    }

    fn parse_url(url: &'a Url) -> Result<(&'a str, u16, &'a str)> {
        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("url {} has no host", url)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| Error::InvalidUrl(format!("url {} has no port", url)))?;
        let uri = &url[Position::BeforePath..Position::AfterQuery];
        Ok((host, port, uri))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder() {
        let req = RequestBuilder::new("POST", "example.com", 443, "/v1/api")
            .ext("a,b,c")
            .request();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.host(), "example.com");
        assert_eq!(req.port(), 443);
        assert_eq!(req.uri(), "/v1/api");
        assert_eq!(req.ext(), Some("a,b,c"));
    }

    #[test]
    fn builder_no_ext() {
        let req = RequestBuilder::new("GET", "example.com", 80, "/").request();
        assert_eq!(req.ext(), None);
    }

    #[test]
    fn from_url() {
        let url = Url::parse("https://example.com/request?b5=%3D%253D&a3=a#frag").unwrap();
        let req = RequestBuilder::from_url("GET", &url).unwrap().request();
        assert_eq!(req.host(), "example.com");
        assert_eq!(req.port(), 443);
        assert_eq!(req.uri(), "/request?b5=%3D%253D&a3=a");
    }

    #[test]
    fn from_url_explicit_port() {
        let url = Url::parse("http://localhost:8000/resource").unwrap();
        let req = RequestBuilder::from_url("GET", &url).unwrap().request();
        assert_eq!(req.host(), "localhost");
        assert_eq!(req.port(), 8000);
        assert_eq!(req.uri(), "/resource");
    }

    #[test]
    fn from_url_no_host() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert!(RequestBuilder::from_url("GET", &url).is_err());
    }
}
