use crate::core::{leading_zero_bits, DigestHasher, NONCE_LEN, SEED_LEN};
use crate::error::Error;
use crate::types::{Difficulty, Nonce, Seed};

/// Recompute the digest for `seed || nonce` and check it against `target`.
///
/// Returns the digest's leading zero bit count when the target is met.
pub fn check_nonce(
    hasher: &dyn DigestHasher,
    seed: &Seed,
    nonce: Nonce,
    target: Difficulty,
) -> Result<u32, Error> {
    let mut input = [0u8; SEED_LEN + NONCE_LEN];
    input[..SEED_LEN].copy_from_slice(seed.as_bytes());
    input[SEED_LEN..].copy_from_slice(&nonce.to_le_bytes());
    let zeros = leading_zero_bits(&hasher.hash(&input));
    if zeros < target {
        return Err(Error::InsufficientLeadingZeros {
            expected_at_least: target.get(),
            actual: zeros,
        });
    }
    Ok(zeros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{double_sha256, Sha256Twice, DIGEST_LEN};

    #[derive(Debug)]
    struct ZeroHasher;

    impl DigestHasher for ZeroHasher {
        fn hash(&self, _data: &[u8]) -> [u8; DIGEST_LEN] {
            [0u8; DIGEST_LEN]
        }
    }

    fn seed_16() -> Seed {
        Seed::from_hex("d92e9d175a5ebe22c5330ab3435078f65a9eb9c85a475fdd7c335d180e497375")
            .unwrap()
    }

    #[test]
    fn accepts_known_nonce() {
        let zeros = check_nonce(
            &Sha256Twice,
            &seed_16(),
            Nonce::new(662_213),
            Difficulty::new(16).unwrap(),
        )
        .expect("known nonce must verify");
        assert_eq!(zeros, 18);
    }

    #[test]
    fn holds_for_every_lower_target() {
        for bits in 1..=18u8 {
            let target = Difficulty::new(bits).unwrap();
            assert!(check_nonce(&Sha256Twice, &seed_16(), Nonce::new(662_213), target).is_ok());
        }
        let err = check_nonce(
            &Sha256Twice,
            &seed_16(),
            Nonce::new(662_213),
            Difficulty::new(19).unwrap(),
        )
        .expect_err("19 bits exceeds the digest");
        assert_eq!(
            err,
            Error::InsufficientLeadingZeros {
                expected_at_least: 19,
                actual: 18
            }
        );
    }

    #[test]
    fn agrees_with_direct_count() {
        let seed = Seed::from([3u8; 32]);
        let target = Difficulty::new(2).unwrap();
        for value in [-2i64, -1, 0, 1, 2, 1_000, i64::MAX, i64::MIN] {
            let nonce = Nonce::new(value);
            let mut input = seed.as_bytes().to_vec();
            input.extend_from_slice(&nonce.to_le_bytes());
            let zeros = leading_zero_bits(&double_sha256(&input));
            let result = check_nonce(&Sha256Twice, &seed, nonce, target);
            assert_eq!(result.is_ok(), zeros >= 2, "nonce {value}");
        }
    }

    #[test]
    fn all_zero_digest_meets_max_target() {
        let zeros = check_nonce(
            &ZeroHasher,
            &Seed::from([0u8; 32]),
            Nonce::new(1),
            Difficulty::new(u8::MAX).unwrap(),
        )
        .unwrap();
        assert_eq!(zeros, 256);
    }
}
