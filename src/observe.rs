//! Hooks run when a search produces a proof.
use crate::types::Proof;
use std::fmt::Debug;

/// Attempt count above which [`HighNonceLogger`] reports a proof by default.
pub const DEFAULT_HIGH_NONCE_THRESHOLD: u64 = 500_000;

/// Called once for every proof a search constructs, with the number of
/// nonces the search hashed to find it.
pub trait ProofObserver: Send + Sync + Debug {
    fn on_proof(&self, proof: &Proof, attempts: u64);
}

/// Logs proofs that took more than `threshold` attempts.
///
/// From the default start of zero the attempt count equals the nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighNonceLogger {
    pub threshold: u64,
}

impl HighNonceLogger {
    pub const fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    pub fn is_high(&self, attempts: u64) -> bool {
        attempts > self.threshold
    }
}

impl Default for HighNonceLogger {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_NONCE_THRESHOLD)
    }
}

impl ProofObserver for HighNonceLogger {
    fn on_proof(&self, proof: &Proof, attempts: u64) {
        if !self.is_high(attempts) {
            return;
        }
        tracing::info!(
            nonce = proof.nonce().get(),
            attempts,
            seed = %proof.seed().to_hex(),
            target = proof.target().get(),
            "high proof-of-work nonce"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProofObserver for NoopObserver {
    fn on_proof(&self, _proof: &Proof, _attempts: u64) {}
}
