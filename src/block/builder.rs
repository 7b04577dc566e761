//! Pure functions building the pre-modexp plaintext block (EME/EMSA-PKCS1-v1_5).

use rand_core::CryptoRngCore;

use crate::errors::Error;

/// Fills `data` with random bytes, resampling any byte that comes up zero.
///
/// The PS segment of a type-02 block must never contain a `0x00` octet (it
/// would be indistinguishable from the separator), so each byte is retried
/// independently until it is nonzero.
#[inline]
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    rng.fill_bytes(data);
    for byte in data.iter_mut() {
        while *byte == 0 {
            rng.fill_bytes(core::slice::from_mut(byte));
        }
    }
}

/// Builds the EME-PKCS1-v1_5 encryption block for message `msg` into `out`.
///
/// `out` must be exactly `k - 1` octets; this is the modexp input with the
/// leading `0x00` octet omitted (the normalizer restores it on the way out).
///
/// Layout: `0x02 || PS || 0x00 || msg`, with `PS` nonzero random bytes of
/// length `k - msg.len() - 3`.
pub(crate) fn build_encrypt<R, E>(
    rng: &mut R,
    msg: &[u8],
    k: usize,
    out: &mut [u8],
) -> Result<(), Error<E>>
where
    R: CryptoRngCore + ?Sized,
{
    if msg.len() > k - 11 {
        return Err(Error::InputTooLarge);
    }
    debug_assert_eq!(out.len(), k - 1);

    out[0] = 0x02;
    let ps_end = k - msg.len() - 2;
    non_zero_random_bytes(rng, &mut out[1..ps_end]);
    out[ps_end] = 0x00;
    out[ps_end + 1..].copy_from_slice(msg);
    Ok(())
}

/// Builds the EMSA-PKCS1-v1_5 signature block for payload `t` (a raw digest
/// when `prefix` is `Some`, or the caller's own bytes when unprefixed) into
/// `out`.
///
/// `out` must be exactly `k - 1` octets. Layout: `0x01 || PS || 0x00 ||
/// prefix? || t`, with `PS` all `0xFF` bytes of length `k - prefix.len() -
/// t.len() - 3`.
pub(crate) fn build_sign<E>(
    prefix: Option<&[u8]>,
    t: &[u8],
    k: usize,
    out: &mut [u8],
) -> Result<(), Error<E>> {
    let prefix = prefix.unwrap_or(&[]);
    let t_len = t.len() + prefix.len();
    if t_len > k - 11 {
        return Err(Error::InputTooLarge);
    }
    debug_assert_eq!(out.len(), k - 1);

    out[0] = 0x01;
    let ps_end = k - t_len - 2;
    out[1..ps_end].fill(0xFF);
    out[ps_end] = 0x00;
    out[ps_end + 1..ps_end + 1 + prefix.len()].copy_from_slice(prefix);
    out[ps_end + 1 + prefix.len()..].copy_from_slice(t);
    Ok(())
}
