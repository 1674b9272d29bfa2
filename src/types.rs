use crate::core::{leading_zero_bits, DigestHasher, Sha256Twice, DIGEST_LEN, NONCE_LEN, SEED_LEN};
use crate::error::Error;
use crate::verify::check_nonce;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Fixed-length input a proof is bound to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(#[serde(with = "hex::serde")] [u8; SEED_LEN]);

impl Seed {
    /// Copy a seed out of `bytes`, which must be exactly [`SEED_LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; SEED_LEN] = bytes.try_into().map_err(|_| Error::SeedLengthMismatch {
            expected: SEED_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Decode a hex seed, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| Error::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Seed {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

/// Search counter appended to the seed before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(i64);

impl Nonce {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Uniform over the whole `i64` range, from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen())
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// The next nonce, wrapping from `i64::MAX` to `i64::MIN`.
    #[inline]
    pub const fn wrapping_next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Hash-input encoding: 8 bytes, little-endian two's complement.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; NONCE_LEN] {
        self.0.to_le_bytes()
    }
}

impl From<i64> for Nonce {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Required number of leading zero bits in a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const DEFAULT: Difficulty = Difficulty(16);

    pub fn new(zero_bits: u8) -> Result<Self, Error> {
        if zero_bits < Self::MIN.0 {
            return Err(Error::InvalidDifficulty {
                minimum: Self::MIN.0,
                requested: zero_bits,
            });
        }
        Ok(Self(zero_bits))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_met_by(self, zero_bits: u32) -> bool {
        zero_bits >= u32::from(self.0)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(zero_bits: u8) -> Result<Self, Self::Error> {
        Self::new(zero_bits)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq<u32> for Difficulty {
    fn eq(&self, other: &u32) -> bool {
        u32::from(self.0) == *other
    }
}

impl PartialOrd<u32> for Difficulty {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        Some(u32::from(self.0).cmp(other))
    }
}

impl PartialEq<Difficulty> for u32 {
    fn eq(&self, other: &Difficulty) -> bool {
        *self == u32::from(other.0)
    }
}

impl PartialOrd<Difficulty> for u32 {
    fn partial_cmp(&self, other: &Difficulty) -> Option<Ordering> {
        Some(self.cmp(&u32::from(other.0)))
    }
}

/// A nonce claimed to meet `target` for `seed`.
///
/// Construction does no hashing; call [`Proof::prove`] to check the claim.
/// Proofs returned by a search have already been checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof {
    seed: Seed,
    #[serde(rename = "target_zero_bits")]
    target: Difficulty,
    nonce: Nonce,
}

impl Proof {
    pub const fn new(seed: Seed, target: Difficulty, nonce: Nonce) -> Self {
        Self {
            seed,
            target,
            nonce,
        }
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn target(&self) -> Difficulty {
        self.target
    }

    pub fn nonce(&self) -> Nonce {
        self.nonce
    }

    pub fn digest(&self) -> [u8; DIGEST_LEN] {
        self.digest_with(&Sha256Twice)
    }

    pub fn digest_with(&self, hasher: &dyn DigestHasher) -> [u8; DIGEST_LEN] {
        let mut input = [0u8; SEED_LEN + NONCE_LEN];
        input[..SEED_LEN].copy_from_slice(self.seed.as_bytes());
        input[SEED_LEN..].copy_from_slice(&self.nonce.to_le_bytes());
        hasher.hash(&input)
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }

    pub fn leading_zero_bits(&self) -> u32 {
        leading_zero_bits(&self.digest())
    }

    /// Re-check the proof with the default double SHA-256 pipeline.
    pub fn prove(&self) -> Result<&Self, Error> {
        self.prove_with(&Sha256Twice)
    }

    pub fn prove_with(&self, hasher: &dyn DigestHasher) -> Result<&Self, Error> {
        check_nonce(hasher, &self.seed, self.nonce, self.target)?;
        Ok(self)
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.nonce, f)
    }
}

impl fmt::Debug for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proof")
            .field("nonce", &self.nonce.get())
            .field("hash", &self.digest_hex())
            .finish()
    }
}
