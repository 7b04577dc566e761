//! Restores the leading zero octets a raw modexp primitive may have dropped.

/// Writes `k` octets to `dst`: `k - src.len()` zero octets followed by `src`.
///
/// `src` is the raw primitive output, which may be shorter than `k` because
/// the high-order octet of a valid PKCS#1 v1.5 block is always zero and a
/// big-integer primitive has no reason to preserve leading zero octets.
pub(crate) fn left_pad(src: &[u8], dst: &mut [u8], k: usize) {
    debug_assert!(src.len() <= k);
    debug_assert_eq!(dst.len(), k);
    let pad_len = k - src.len();
    dst[..pad_len].fill(0);
    dst[pad_len..].copy_from_slice(src);
}
