//! Shared test fixture: a toy [`RsaPrimitive`] backed by real modular
//! exponentiation, plus a fixed 1024-bit keypair for deterministic tests.
//!
//! This is not a cryptographically sound RSA implementation (no blinding, no
//! constant-time modpow): it exists purely to give integration tests a
//! primitive that actually round-trips, the same role the teacher's
//! `num-bigint-dig`-backed test keys play.

#![allow(dead_code)]

use hex_literal::hex;
use num_bigint::BigUint;
use pkcs1pad::{Pkcs1Pad, PrimitiveError, RsaPrimitive};

/// A 1024-bit RSA keypair, generated offline for these tests only.
pub const MODULUS_LEN: usize = 128;

pub const N: [u8; 128] = hex!(
    "919e46ebf8653637e2a023da32f02a44cf9983be5f25a4383e20941c519010b7\
     a666e3172e9685d694112aef445f6f262a04110caf73be7bafc6f0dbec58ecde\
     06b11807a0912b011d90b5f8d7542972aa79b7445eb48e85bfe201604dfc433e\
     b9480f471eaf650e855d8f7c1c89d4365d81fd016a6ba08411c797480c1b4ccf"
);
pub const E: [u8; 3] = hex!("010001");
pub const D: [u8; 128] = hex!(
    "044c156fb53ed760c2d152fd876f4af008e850d8f759d704c9e0903e5db1d0ac\
     7abea288f698fe8e1c847d2dde68aa9107c062f86add118bf8ddf811a561e26b\
     8785023d4e652c6f08cdd6b5644feec498d214c5286cdc73df86b3c879ae1da8\
     32a8968a37fea12656a53cabd3434cba618821abf48b806e90651dd86b14e561"
);

/// Packs a modulus and exponent into the byte string [`ToyRsa`] expects:
/// a two-octet big-endian modulus length, the modulus, then the exponent.
pub fn encode_key(n: &BigUint, exp: &BigUint) -> Vec<u8> {
    let n_bytes = n.to_bytes_be();
    let exp_bytes = exp.to_bytes_be();
    let mut out = Vec::with_capacity(2 + n_bytes.len() + exp_bytes.len());
    out.extend_from_slice(&(n_bytes.len() as u16).to_be_bytes());
    out.extend_from_slice(&n_bytes);
    out.extend_from_slice(&exp_bytes);
    out
}

fn decode_key(key: &[u8]) -> Option<(BigUint, BigUint)> {
    if key.len() < 2 {
        return None;
    }
    let n_len = u16::from_be_bytes([key[0], key[1]]) as usize;
    let rest = &key[2..];
    if rest.len() <= n_len {
        return None;
    }
    let n = BigUint::from_bytes_be(&rest[..n_len]);
    let exp = BigUint::from_bytes_be(&rest[n_len..]);
    Some((n, exp))
}

pub fn public_key_bytes() -> Vec<u8> {
    encode_key(&BigUint::from_bytes_be(&N), &BigUint::from_bytes_be(&E))
}

pub fn private_key_bytes() -> Vec<u8> {
    encode_key(&BigUint::from_bytes_be(&N), &BigUint::from_bytes_be(&D))
}

/// A raw-modexp-only RSA primitive, no padding, no blinding.
#[derive(Default)]
pub struct ToyRsa {
    n: Option<BigUint>,
    e: Option<BigUint>,
    d: Option<BigUint>,
    size: Option<usize>,
}

impl ToyRsa {
    pub fn new() -> Self {
        Self::default()
    }

    fn modpow(n: &BigUint, exp: &BigUint, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<&'static str>> {
        let m = BigUint::from_bytes_be(src);
        if m >= *n {
            return Err(PrimitiveError::Other("representative not reduced mod n"));
        }
        let c = m.modpow(exp, n);
        let out = c.to_bytes_be();
        if out.len() > dst.len() {
            return Err(PrimitiveError::OutputOverflow);
        }
        dst[..out.len()].copy_from_slice(&out);
        Ok(out.len())
    }
}

impl RsaPrimitive for ToyRsa {
    type Error = &'static str;

    fn set_public_key(&mut self, key: &[u8]) -> Result<(), PrimitiveError<Self::Error>> {
        let (n, e) = decode_key(key).ok_or(PrimitiveError::Other("malformed public key"))?;
        self.size = Some(n.to_bytes_be().len());
        self.n = Some(n);
        self.e = Some(e);
        Ok(())
    }

    fn set_private_key(&mut self, key: &[u8]) -> Result<(), PrimitiveError<Self::Error>> {
        let (n, d) = decode_key(key).ok_or(PrimitiveError::Other("malformed private key"))?;
        self.size = Some(n.to_bytes_be().len());
        self.n = Some(n);
        self.d = Some(d);
        Ok(())
    }

    fn max_size(&self) -> Option<usize> {
        self.size
    }

    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>> {
        let n = self.n.as_ref().ok_or(PrimitiveError::Other("no key"))?;
        let e = self.e.as_ref().ok_or(PrimitiveError::Other("no public exponent"))?;
        Self::modpow(n, e, src, dst)
    }

    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>> {
        let n = self.n.as_ref().ok_or(PrimitiveError::Other("no key"))?;
        let d = self.d.as_ref().ok_or(PrimitiveError::Other("no private exponent"))?;
        Self::modpow(n, d, src, dst)
    }

    fn sign(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>> {
        self.decrypt(src, dst)
    }

    fn verify(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError<Self::Error>> {
        self.encrypt(src, dst)
    }
}

/// Builds a [`ToyRsa`] with both halves of the fixed test keypair installed,
/// ready for encrypt+decrypt or sign+verify round trips.
pub fn keypair() -> ToyRsa {
    let mut primitive = ToyRsa::new();
    primitive.set_public_key(&public_key_bytes()).unwrap();
    primitive.set_private_key(&private_key_bytes()).unwrap();
    primitive
}

/// Builds a [`Pkcs1Pad`] over a fresh [`ToyRsa`] with both halves of the
/// fixed test keypair installed through the padding engine's own key-install
/// path, so `max_size()` and the size bound check both run for real.
pub fn new_pad<const K: usize>() -> Pkcs1Pad<ToyRsa, K> {
    let mut pad = Pkcs1Pad::new(ToyRsa::new());
    pad.set_public_key(&public_key_bytes()).unwrap();
    pad.set_priv_key(&private_key_bytes()).unwrap();
    pad
}

/// Same as [`new_pad`], but bound to a hash name for sign/verify.
pub fn new_pad_with_hash<const K: usize>(hash_name: &str) -> Pkcs1Pad<ToyRsa, K> {
    let mut pad = Pkcs1Pad::new_with_hash(ToyRsa::new(), hash_name).unwrap();
    pad.set_public_key(&public_key_bytes()).unwrap();
    pad.set_priv_key(&private_key_bytes()).unwrap();
    pad
}
