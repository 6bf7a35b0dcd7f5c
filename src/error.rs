use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    /// A mandatory attribute (`id`, `ts`, `nonce` or `mac`) is absent from a parsed header.
    #[fail(display = "Missing `{}` attribute in MAC header", _0)]
    MissingField(&'static str),

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(display = "Unsupported MAC algorithm: {}", _0)]
    UnsupportedAlgorithm(String),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),

    #[fail(display = "{}", _0)]
    Io(#[fail(cause)] std::io::Error),
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
