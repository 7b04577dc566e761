//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with this crate's [`Error`] type.
pub type Result<T, E = core::convert::Infallible> = core::result::Result<T, Error<E>>;

/// Error types returned by the padding engine.
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<E = core::convert::Infallible> {
    /// Operation attempted before a key was installed.
    NoKey,

    /// Plaintext (or digest plus DigestInfo prefix) is longer than `k - 11`.
    InputTooLarge,

    /// Destination buffer is too small to hold the result.
    OutputOverflow {
        /// Number of octets the caller needs to provide.
        required: usize,
    },

    /// A type-02 (`decrypt`) block failed structural validation.
    InvalidEncoding,

    /// A type-01 (`verify`) block failed structural validation, or its
    /// DigestInfo prefix did not match the configured hash.
    BadSignature,

    /// The installed key's modulus is larger than this instance's scratch
    /// buffer bound.
    NotSupported,

    /// A hash name passed to [`crate::Pkcs1Pad::new_with_hash`] is not present
    /// in the DigestInfo table.
    UnknownHash,

    /// The underlying primitive reported it could not service the request.
    Busy,

    /// An error propagated verbatim from the underlying [`crate::RsaPrimitive`].
    Primitive(E),
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoKey => write!(f, "no key installed"),
            Error::InputTooLarge => write!(f, "message too long for this key and padding scheme"),
            Error::OutputOverflow { required } => {
                write!(f, "destination buffer too small, need {required} octets")
            }
            Error::InvalidEncoding => write!(f, "invalid PKCS#1 v1.5 encryption block"),
            Error::BadSignature => write!(f, "invalid PKCS#1 v1.5 signature"),
            Error::NotSupported => write!(f, "key size exceeds this instance's scratch buffer"),
            Error::UnknownHash => write!(f, "unrecognized hash name"),
            Error::Busy => write!(f, "underlying RSA primitive is busy"),
            Error::Primitive(e) => write!(f, "RSA primitive error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Error<E> where E: fmt::Debug + fmt::Display {}
