//! The contract this crate expects from an external raw-RSA (modexp) provider.

/// Outcome of a call into the underlying [`RsaPrimitive`].
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum PrimitiveError<E> {
    /// The primitive could not service the request right now.
    Busy,
    /// `dst` was too small for the primitive's raw output.
    OutputOverflow,
    /// An error specific to the primitive implementation.
    Other(E),
}

/// A raw RSA modexp provider, set up with a public and/or private key.
///
/// Implementations perform unpadded modular exponentiation only; all padding
/// logic lives in [`crate::Pkcs1Pad`]. An implementation's `encrypt`/`verify`
/// use the public exponent; `decrypt`/`sign` use the private exponent. Output
/// written to `dst` may be shorter than [`RsaPrimitive::max_size`] octets when
/// the modexp result has leading zero octets ([`crate::Pkcs1Pad`] restores
/// them).
pub trait RsaPrimitive {
    /// Implementation-specific error type (invalid key material, internal
    /// failures, and so on).
    type Error;

    /// Installs a public key; afterwards [`Self::max_size`] reports the new
    /// modulus length.
    fn set_public_key(&mut self, key: &[u8]) -> Result<(), PrimitiveError<Self::Error>>;

    /// Installs a private key; afterwards [`Self::max_size`] reports the new
    /// modulus length.
    fn set_private_key(&mut self, key: &[u8]) -> Result<(), PrimitiveError<Self::Error>>;

    /// The modulus length in octets, or `None` before any key is installed.
    fn max_size(&self) -> Option<usize>;

    /// `dst := src ^ e mod n`, used by [`crate::Pkcs1Pad::encrypt`].
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>>;

    /// `dst := src ^ d mod n`, used by [`crate::Pkcs1Pad::decrypt`].
    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>>;

    /// `dst := src ^ d mod n`, used by [`crate::Pkcs1Pad::sign`].
    fn sign(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>>;

    /// `dst := src ^ e mod n`, used by [`crate::Pkcs1Pad::verify`].
    fn verify(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>>;
}
