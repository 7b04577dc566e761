//! Pure functions parsing a post-modexp octet string back into its payload.
//!
//! Both parsers evaluate every structural check unconditionally and fold the
//! results with [`subtle::Choice`] before branching once on the aggregate, so
//! that a caller cannot distinguish *which* check failed by timing.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::errors::Error;

/// Parses a type-02 (decrypt) block of length `k - 1` and returns the
/// plaintext slice `em[p+1..]` on acceptance.
///
/// Acceptance requires: `em[0] == 0x02`; some separator index `p` in
/// `[1, em.len() - 1)` with `em[p] == 0x00`; `p >= 9` (PS length >= 8).
pub(crate) fn parse_decrypt<E>(em: &[u8], k: usize) -> Result<&[u8], Error<E>> {
    if em.len() != k - 1 {
        return Err(Error::InvalidEncoding);
    }

    let mut ok = em[0].ct_eq(&0x02);

    // Find the first zero byte at or after index 1; a constant-time scan that
    // still records the earliest qualifying index without branching on each
    // byte's value.
    let mut found = Choice::from(0u8);
    let mut p = 0usize;
    for (i, &byte) in em.iter().enumerate().skip(1) {
        let is_zero = byte.ct_eq(&0);
        let take = is_zero & !found;
        p = usize::conditional_select(&p, &i, take);
        found |= is_zero;
    }
    ok &= found;
    ok &= Choice::from((p >= 9) as u8);
    ok &= Choice::from((p < em.len()) as u8);

    if ok.unwrap_u8() != 1 {
        return Err(Error::InvalidEncoding);
    }
    Ok(&em[p + 1..])
}

/// Parses a type-01 (verify) block of length `k - 1` and returns the
/// recovered digest slice on acceptance, after checking the PS run of
/// `0xFF` bytes, the `0x00` separator, and (if `prefix` is `Some`) an exact
/// DigestInfo prefix match.
pub(crate) fn parse_verify<'a, E>(
    em: &'a [u8],
    k: usize,
    prefix: Option<&[u8]>,
) -> Result<&'a [u8], Error<E>> {
    if em.len() != k - 1 {
        return Err(Error::BadSignature);
    }

    let mut ok = em[0].ct_eq(&0x01);

    let mut found = Choice::from(0u8);
    let mut all_ff_so_far = Choice::from(1u8);
    let mut p = 0usize;
    for (i, &byte) in em.iter().enumerate().skip(1) {
        let is_zero = byte.ct_eq(&0);
        let take = is_zero & !found;
        // Once the separator is found, stop requiring 0xFF for subsequent bytes.
        all_ff_so_far &= byte.ct_eq(&0xFF) | found | is_zero;
        p = usize::conditional_select(&p, &i, take);
        found |= is_zero;
    }
    ok &= found;
    ok &= all_ff_so_far;
    ok &= Choice::from((p >= 9) as u8);
    ok &= Choice::from((p < em.len()) as u8);

    if ok.unwrap_u8() != 1 {
        return Err(Error::BadSignature);
    }

    let rest = &em[p + 1..];
    match prefix {
        None => Ok(rest),
        Some(prefix) => {
            if rest.len() < prefix.len() || rest[..prefix.len()].ct_eq(prefix).unwrap_u8() != 1 {
                return Err(Error::BadSignature);
            }
            Ok(&rest[prefix.len()..])
        }
    }
}
