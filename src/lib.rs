//! Seed-bound proof-of-work over double SHA-256.
//!
//! A proof is a nonce such that `SHA256(SHA256(seed || nonce_le))` has at
//! least the target number of leading zero bits. Finding one takes about
//! `2^target` hashes; checking one takes a single double hash.
//!
//! ```no_run
//! use seedpow::{search, verify, Difficulty};
//!
//! let seed = [7u8; 32];
//! let proof = search(&seed, Difficulty::DEFAULT)?;
//! verify(&seed, proof.nonce(), Difficulty::DEFAULT)?;
//! # Ok::<(), seedpow::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod observe;
pub mod pow;
pub mod stream;
pub mod types;
pub mod verify;

pub use crate::config::SearchConfig;
pub use crate::core::{
    double_sha256, leading_zero_bits, meets_leading_zero_bits, DigestHasher, Sha256Twice,
    DIGEST_LEN, NONCE_LEN, SEED_LEN,
};
pub use crate::engine::{Searcher, SearcherBuilder, SearcherBuilderError};
pub use crate::error::Error;
pub use crate::observe::{HighNonceLogger, NoopObserver, ProofObserver};
pub use crate::pow::PowEngine;
pub use crate::stream::{NonceCounter, NonceStart, StopFlag};
pub use crate::types::{Difficulty, Nonce, Proof, Seed};

/// Search with the default engine: nonces counted up from 1, double SHA-256,
/// high-nonce logging. Blocks until a proof is found.
pub fn search(seed: &[u8], target: Difficulty) -> Result<Proof, Error> {
    Searcher::default().search_bytes(seed, target)
}

/// Search with every setting, difficulty included, taken from `config`.
pub fn search_with_config(seed: &[u8], config: &SearchConfig) -> Result<Proof, Error> {
    Searcher::from_config(config)?.search_bytes(seed, config.difficulty)
}

/// Check a nonce received from elsewhere against `seed` and `target`.
pub fn verify(seed: &[u8], nonce: Nonce, target: Difficulty) -> Result<Proof, Error> {
    let proof = Proof::new(Seed::from_slice(seed)?, target, nonce);
    proof.prove()?;
    Ok(proof)
}
