//! The padding engine: the four public operations over an [`RsaPrimitive`].

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::block::{builder, parser};
use crate::digest_info::{self, DigestInfo};
use crate::errors::Error;
use crate::normalize::left_pad;
use crate::primitive::{PrimitiveError, RsaPrimitive};

/// PKCS#1 v1.5 encrypt/decrypt/sign/verify over an [`RsaPrimitive`].
///
/// `K` bounds the modulus size (in octets) this instance is willing to
/// handle; it sizes the stack scratch buffers used to build and parse
/// padding blocks. Installing a key whose modulus is larger than `K` fails
/// with [`Error::NotSupported`].
pub struct Pkcs1Pad<P, const K: usize>
where
    P: RsaPrimitive,
{
    primitive: P,
    hash: Option<&'static DigestInfo>,
    key_size: Option<usize>,
}

impl<P, const K: usize> Pkcs1Pad<P, K>
where
    P: RsaPrimitive,
{
    /// Creates an encrypt/decrypt-only instance with no hash configured.
    pub fn new(primitive: P) -> Self {
        Self {
            primitive,
            hash: None,
            key_size: None,
        }
    }

    /// Creates a sign/verify instance bound to the DigestInfo entry named
    /// `hash_name`. Fails with [`Error::UnknownHash`] if the name is not in
    /// the DigestInfo table.
    pub fn new_with_hash(primitive: P, hash_name: &str) -> Result<Self, Error<P::Error>> {
        let hash = digest_info::lookup(hash_name).ok_or(Error::UnknownHash)?;
        Ok(Self {
            primitive,
            hash: Some(hash),
            key_size: None,
        })
    }

    /// Installs a public key and learns the new modulus size.
    pub fn set_public_key(&mut self, key: &[u8]) -> Result<(), Error<P::Error>> {
        self.primitive
            .set_public_key(key)
            .map_err(Self::primitive_err)?;
        self.adopt_key_size()
    }

    /// Installs a private key and learns the new modulus size.
    pub fn set_priv_key(&mut self, key: &[u8]) -> Result<(), Error<P::Error>> {
        self.primitive
            .set_private_key(key)
            .map_err(Self::primitive_err)?;
        self.adopt_key_size()
    }

    /// The modulus length in octets, or `None` before a key has been
    /// installed.
    pub fn max_size(&self) -> Option<usize> {
        self.key_size
    }

    /// `EME-PKCS1-v1_5` encryption. `dst` must be at least [`Self::max_size`]
    /// octets; on success returns the number of octets written, always equal
    /// to the modulus size.
    pub fn encrypt<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, Error<P::Error>> {
        let k = self.key_size.ok_or(Error::NoKey)?;
        if dst.len() < k {
            return Err(Error::OutputOverflow { required: k });
        }

        let mut block = Zeroizing::new([0u8; K]);
        let em = &mut block[..k - 1];
        builder::build_encrypt(rng, src, k, em)?;

        let mut raw = Zeroizing::new([0u8; K]);
        let written = self
            .primitive
            .encrypt(em, &mut raw[..k])
            .map_err(Self::primitive_err)?;

        left_pad(&raw[..written], &mut dst[..k], k);
        #[cfg(feature = "log")]
        log::trace!("pkcs1pad: encrypt produced {k} octets");
        Ok(k)
    }

    /// `EME-PKCS1-v1_5` decryption. `src` must be exactly [`Self::max_size`]
    /// octets. On success returns the number of plaintext octets written to
    /// `dst`.
    pub fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error<P::Error>> {
        let k = self.key_size.ok_or(Error::NoKey)?;
        if src.len() != k {
            return Err(Error::InvalidEncoding);
        }

        let mut raw = Zeroizing::new([0u8; K]);
        let written = match self.primitive.decrypt(src, &mut raw[..k - 1]) {
            Ok(n) => n,
            Err(PrimitiveError::OutputOverflow) => return Err(Error::InvalidEncoding),
            Err(e) => return Err(Self::primitive_err(e)),
        };

        let mut em = Zeroizing::new([0u8; K]);
        left_pad(&raw[..written], &mut em[..k - 1], k - 1);

        let plaintext = parser::parse_decrypt(&em[..k - 1], k)?;
        if dst.len() < plaintext.len() {
            #[cfg(feature = "log")]
            log::debug!("pkcs1pad: decrypt destination too small");
            return Err(Error::OutputOverflow {
                required: plaintext.len(),
            });
        }
        dst[..plaintext.len()].copy_from_slice(plaintext);
        Ok(plaintext.len())
    }

    /// `EMSA-PKCS1-v1_5` signing. `src` is the (already hashed, if a hash is
    /// configured) message representative. `dst` must be at least
    /// [`Self::max_size`] octets.
    pub fn sign(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error<P::Error>> {
        let k = self.key_size.ok_or(Error::NoKey)?;
        if dst.len() < k {
            return Err(Error::OutputOverflow { required: k });
        }

        let mut block = Zeroizing::new([0u8; K]);
        let em = &mut block[..k - 1];
        let prefix = self.hash.map(|h| h.prefix);
        builder::build_sign(prefix, src, k, em)?;

        let mut raw = Zeroizing::new([0u8; K]);
        let written = self
            .primitive
            .sign(em, &mut raw[..k])
            .map_err(Self::primitive_err)?;

        left_pad(&raw[..written], &mut dst[..k], k);
        Ok(k)
    }

    /// `EMSA-PKCS1-v1_5` verification. `src` may be longer than
    /// [`Self::max_size`]; only the leading `max_size()` octets are treated
    /// as the signature (see the crate-level docs for why trailing bytes are
    /// tolerated). On success returns the number of recovered message octets
    /// written to `dst`.
    pub fn verify(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error<P::Error>> {
        let k = self.key_size.ok_or(Error::NoKey)?;
        if src.len() < k {
            return Err(Error::BadSignature);
        }
        let sig = &src[..k];

        let mut raw = Zeroizing::new([0u8; K]);
        let written = match self.primitive.verify(sig, &mut raw[..k - 1]) {
            Ok(n) => n,
            Err(PrimitiveError::OutputOverflow) => return Err(Error::BadSignature),
            Err(e) => return Err(Self::primitive_err(e)),
        };

        let mut em = Zeroizing::new([0u8; K]);
        left_pad(&raw[..written], &mut em[..k - 1], k - 1);

        let prefix = self.hash.map(|h| h.prefix);
        let message = parser::parse_verify(&em[..k - 1], k, prefix)?;
        if dst.len() < message.len() {
            return Err(Error::OutputOverflow {
                required: message.len(),
            });
        }
        dst[..message.len()].copy_from_slice(message);
        Ok(message.len())
    }

    fn adopt_key_size(&mut self) -> Result<(), Error<P::Error>> {
        let size = self.primitive.max_size().ok_or(Error::NoKey)?;
        if size > K {
            #[cfg(feature = "log")]
            log::warn!("pkcs1pad: key size {size} exceeds scratch bound {K}");
            return Err(Error::NotSupported);
        }
        #[cfg(feature = "log")]
        log::trace!("pkcs1pad: installed key, size {size}");
        self.key_size = Some(size);
        Ok(())
    }

    fn primitive_err(e: PrimitiveError<P::Error>) -> Error<P::Error> {
        match e {
            PrimitiveError::Busy => Error::Busy,
            PrimitiveError::OutputOverflow => Error::NotSupported,
            PrimitiveError::Other(inner) => Error::Primitive(inner),
        }
    }
}

impl<P, const K: usize> core::fmt::Debug for Pkcs1Pad<P, K>
where
    P: RsaPrimitive,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pkcs1Pad")
            .field("hash", &self.hash.map(|h| h.name))
            .field("key_size", &self.key_size)
            .finish()
    }
}
