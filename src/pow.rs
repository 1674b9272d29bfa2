use crate::error::Error;
use crate::types::{Difficulty, Proof, Seed};

/// A proof-of-work engine that searches for a nonce meeting a difficulty.
pub trait PowEngine {
    /// Search for a nonce such that the digest of `seed || nonce` has at least
    /// `target` leading zero bits.
    ///
    /// Without a stop flag or attempt cap the search either succeeds or runs
    /// until the nonce space is exhausted.
    fn search(&self, seed: &Seed, target: Difficulty) -> Result<Proof, Error>;

    /// Length-check raw `seed` bytes, then search. No hashing happens when the
    /// length is wrong.
    fn search_bytes(&self, seed: &[u8], target: Difficulty) -> Result<Proof, Error> {
        let seed = Seed::from_slice(seed)?;
        self.search(&seed, target)
    }
}
