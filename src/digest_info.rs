//! The static ASN.1 DigestInfo prefix table (RFC 8017 § 9.2).
//!
//! Each entry is the DER encoding of a `DigestInfo` SEQUENCE up to, but not
//! including, the digest bytes themselves: those are appended by the caller
//! (or by [`crate::block::builder`]) at sign time.

/// One DigestInfo table entry: a hash name paired with its DER prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestInfo {
    /// Case-sensitive hash name, e.g. `"sha256"`.
    pub name: &'static str,
    /// DER prefix, not including the digest bytes.
    pub prefix: &'static [u8],
}

macro_rules! digest_info {
    ($name:literal, $prefix:expr) => {
        DigestInfo {
            name: $name,
            prefix: &$prefix,
        }
    };
}

/// All recognized hash names and their DigestInfo prefixes.
pub const TABLE: &[DigestInfo] = &[
    digest_info!(
        "md5",
        [
            0x30, 0x20, 0x30, 0x0C, 0x06, 0x08, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x05,
            0x05, 0x00, 0x04, 0x10,
        ]
    ),
    digest_info!(
        "sha1",
        [
            0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2B, 0x0E, 0x03, 0x02, 0x1A, 0x05, 0x00, 0x04,
            0x14,
        ]
    ),
    digest_info!(
        "rmd160",
        [
            0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2B, 0x24, 0x03, 0x02, 0x01, 0x05, 0x00, 0x04,
            0x14,
        ]
    ),
    digest_info!(
        "sha224",
        [
            0x30, 0x2D, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x04, 0x05, 0x00, 0x04, 0x1C,
        ]
    ),
    digest_info!(
        "sha256",
        [
            0x30, 0x31, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x01, 0x05, 0x00, 0x04, 0x20,
        ]
    ),
    digest_info!(
        "sha384",
        [
            0x30, 0x41, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x02, 0x05, 0x00, 0x04, 0x30,
        ]
    ),
    digest_info!(
        "sha512",
        [
            0x30, 0x51, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x03, 0x05, 0x00, 0x04, 0x40,
        ]
    ),
];

/// Looks up a hash name by exact, case-sensitive match.
pub fn lookup(name: &str) -> Option<&'static DigestInfo> {
    TABLE.iter().find(|entry| entry.name == name)
}
