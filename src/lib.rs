#![cfg_attr(not(test), no_std)]

//! PKCS#1 v1.5 padding ([RFC 8017 §§ 7.2, 8.2]) over a caller-supplied raw RSA
//! primitive.
//!
//! This crate implements [`EME-PKCS1-v1_5`] encryption padding and
//! [`EMSA-PKCS1-v1_5`] signature padding. It does **not** implement the RSA
//! primitive itself (big-integer modular exponentiation): callers provide one
//! by implementing [`RsaPrimitive`]. It also does not implement hashing:
//! [`Pkcs1Pad::sign`] and [`Pkcs1Pad::verify`] take already-hashed bytes and a
//! hash *name*, which this crate resolves against a static table of
//! [`DigestInfo`](digest_info::DigestInfo) ASN.1 prefixes.
//!
//! # Example
//!
//! ```
//! use pkcs1pad::{Pkcs1Pad, PrimitiveError, RsaPrimitive};
//!
//! struct ToyPrimitive; // a real implementation performs modexp.
//! # impl RsaPrimitive for ToyPrimitive {
//! #     type Error = ();
//! #     fn set_public_key(&mut self, _: &[u8]) -> Result<(), PrimitiveError<()>> { Ok(()) }
//! #     fn set_private_key(&mut self, _: &[u8]) -> Result<(), PrimitiveError<()>> { Ok(()) }
//! #     fn max_size(&self) -> Option<usize> { Some(128) }
//! #     fn encrypt(&self, s: &[u8], d: &mut [u8]) -> Result<usize, PrimitiveError<()>> { d[..s.len()].copy_from_slice(s); Ok(s.len()) }
//! #     fn decrypt(&self, s: &[u8], d: &mut [u8]) -> Result<usize, PrimitiveError<()>> { d.copy_from_slice(&s[1..]); Ok(d.len()) }
//! #     fn sign(&self, s: &[u8], d: &mut [u8]) -> Result<usize, PrimitiveError<()>> { d[..s.len()].copy_from_slice(s); Ok(s.len()) }
//! #     fn verify(&self, s: &[u8], d: &mut [u8]) -> Result<usize, PrimitiveError<()>> { d.copy_from_slice(&s[1..]); Ok(d.len()) }
//! # }
//!
//! let mut pad = Pkcs1Pad::<_, 128>::new(ToyPrimitive);
//! pad.set_public_key(&[]).unwrap();
//! assert_eq!(pad.max_size(), Some(128));
//! ```
//!
//! [`EME-PKCS1-v1_5`]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2
//! [`EMSA-PKCS1-v1_5`]: https://datatracker.ietf.org/doc/html/rfc8017#section-8.2
//! [RFC 8017 §§ 7.2, 8.2]: https://datatracker.ietf.org/doc/html/rfc8017

#[cfg(feature = "std")]
extern crate std;

pub use rand_core;

mod block;
pub mod digest_info;
mod engine;
pub mod errors;
mod normalize;
mod primitive;

pub use crate::{
    engine::Pkcs1Pad,
    errors::{Error, Result},
    primitive::{PrimitiveError, RsaPrimitive},
};
