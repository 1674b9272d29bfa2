use sha2::{Digest, Sha256};
use std::fmt::Debug;

/// Byte length of a search seed.
pub const SEED_LEN: usize = 32;

/// Byte length of an encoded nonce.
pub const NONCE_LEN: usize = 8;

/// Byte length of a digest produced by a [`DigestHasher`].
pub const DIGEST_LEN: usize = 32;

/// A function from bytes to a fixed-length digest.
///
/// The search loop only depends on this capability, so the hash pipeline can
/// be swapped without touching the engine. Every proof is bound to the hasher
/// that produced it: verifying with a different one gives a different answer.
pub trait DigestHasher: Send + Sync + Debug {
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_LEN];
}

/// SHA-256 applied to its own output: `SHA256(SHA256(data))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Twice;

impl DigestHasher for Sha256Twice {
    #[inline]
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        double_sha256(data)
    }
}

/// `SHA256(SHA256(data))` without heap allocation.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Count consecutive zero bits from the most significant bit of `digest[0]`.
///
/// An all-zero digest counts every bit, i.e. `digest.len() * 8`. Counts that
/// do not fit in a `u32` saturate at `u32::MAX`.
#[inline]
pub fn leading_zero_bits(digest: &[u8]) -> u32 {
    match digest.iter().position(|byte| *byte != 0) {
        Some(index) => bits_in(index).saturating_add(digest[index].leading_zeros()),
        None => bits_in(digest.len()),
    }
}

/// Bit count of `len` bytes, saturating at `u32::MAX`.
#[inline]
fn bits_in(len: usize) -> u32 {
    u32::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .unwrap_or(u32::MAX)
}

/// Whether `digest` has at least `bits` leading zero bits.
#[inline]
pub fn meets_leading_zero_bits(digest: &[u8], bits: u32) -> bool {
    leading_zero_bits(digest) >= bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_sha256_known_vector() {
        let expected =
            hex::decode("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
                .unwrap();
        assert_eq!(double_sha256(b"hello").as_slice(), expected.as_slice());
    }

    #[test]
    fn hasher_is_deterministic() {
        let hasher = Sha256Twice;
        let input = [7u8; SEED_LEN + NONCE_LEN];
        assert_eq!(hasher.hash(&input), hasher.hash(&input));
        assert_eq!(hasher.hash(&input), double_sha256(&input));
    }

    #[test]
    fn leading_zero_bits_per_byte() {
        assert_eq!(leading_zero_bits(&[0x80]), 0);
        assert_eq!(leading_zero_bits(&[0x01]), 7);
        assert_eq!(leading_zero_bits(&[0x00]), 8);
        assert_eq!(leading_zero_bits(&[0x00, 0x0f, 0x00]), 12);
        assert_eq!(leading_zero_bits(&[0x00, 0x00, 0x01, 0xff]), 23);
    }

    #[test]
    fn all_zero_digest_counts_every_bit() {
        let digest = [0u8; DIGEST_LEN];
        assert_eq!(leading_zero_bits(&digest), 256);
        assert!(meets_leading_zero_bits(&digest, 255));
        assert!(meets_leading_zero_bits(&digest, 256));
        assert_eq!(leading_zero_bits(&[]), 0);
    }

    #[test]
    fn bit_counts_saturate_for_huge_lengths() {
        assert_eq!(bits_in(DIGEST_LEN), 256);
        assert_eq!(bits_in((1 << 29) - 1), u32::MAX - 7);
        assert_eq!(bits_in(1 << 29), u32::MAX);
        assert_eq!(bits_in(usize::MAX), u32::MAX);
        assert_eq!(bits_in((1 << 29) - 1).saturating_add(7), u32::MAX);
    }

    #[test]
    fn meets_is_inclusive() {
        let mut digest = [0xffu8; DIGEST_LEN];
        digest[0] = 0x00;
        digest[1] = 0x3f;
        assert!(meets_leading_zero_bits(&digest, 10));
        assert!(!meets_leading_zero_bits(&digest, 11));
    }
}
