use super::Cryptographer;
use failure::Fail;
use once_cell::sync::OnceCell;

static CRYPTOGRAPHER: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

#[derive(Debug, Fail)]
#[fail(display = "A MAC cryptographer is already installed")]
pub struct SetCryptographerError(());

/// Install a boxed cryptographer; the box is leaked to live for the rest of the program.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Install the cryptographer used to sign and validate MAC requests.
///
/// Only the first installation succeeds.  With the `use_ring` feature, the ring backend is
/// installed on first use, so a custom cryptographer must be set before any request is
/// signed or validated.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    CRYPTOGRAPHER.set(c).map_err(|_| SetCryptographerError(()))
}

pub(crate) fn get_crypographer() -> &'static dyn Cryptographer {
    *CRYPTOGRAPHER.get_or_init(default_cryptographer)
}

#[cfg(feature = "use_ring")]
fn default_cryptographer() -> &'static dyn Cryptographer {
    &super::ring::RingCryptographer
}

#[cfg(not(feature = "use_ring"))]
fn default_cryptographer() -> &'static dyn Cryptographer {
    panic!(
        "no MAC cryptographer installed: enable the `use_ring` feature \
         or call `oauth2_hmac_header::crypto::set_cryptographer` first"
    )
}
