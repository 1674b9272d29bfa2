use crate::config::{validate_max_attempts, SearchConfig};
use crate::core::{leading_zero_bits, DigestHasher, Sha256Twice, NONCE_LEN, SEED_LEN};
use crate::error::Error;
use crate::observe::{HighNonceLogger, ProofObserver};
use crate::pow::PowEngine;
use crate::stream::{NonceCounter, NonceStart, StopFlag};
use crate::types::{Difficulty, Nonce, Proof, Seed};
use derive_builder::Builder;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Attempts between two stores to the shared progress counter.
const PROGRESS_INTERVAL: u64 = 1 << 12;

/// Sequential nonce search over `seed || nonce`, on the calling thread.
#[derive(Builder, Debug, Clone)]
#[builder(pattern = "owned")]
pub struct Searcher {
    #[builder(default = "Arc::new(Sha256Twice)")]
    pub hasher: Arc<dyn DigestHasher>,
    /// First nonce tried is one past the start. Zero unless set.
    #[builder(default)]
    pub start: NonceStart,
    #[builder(default, setter(strip_option))]
    pub max_attempts: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub stop: Option<Arc<StopFlag>>,
    #[builder(default, setter(strip_option))]
    pub progress: Option<Arc<AtomicU64>>,
    #[builder(default = "Arc::new(HighNonceLogger::default())")]
    pub observer: Arc<dyn ProofObserver>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            hasher: Arc::new(Sha256Twice),
            start: NonceStart::default(),
            max_attempts: None,
            stop: None,
            progress: None,
            observer: Arc::new(HighNonceLogger::default()),
        }
    }
}

impl Searcher {
    /// Build a searcher from file or env supplied settings. The configured
    /// difficulty is applied by [`crate::search_with_config`].
    pub fn from_config(config: &SearchConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Searcher {
            start: config.nonce_start(),
            max_attempts: config.max_attempts,
            observer: Arc::new(HighNonceLogger::new(config.high_nonce_threshold)),
            ..Searcher::default()
        })
    }

    fn publish_progress(&self, attempts: u64) {
        if let Some(progress) = &self.progress {
            progress.store(attempts, Ordering::Relaxed);
        }
    }
}

impl SearcherBuilder {
    /// Count from `nonce`; the first nonce tried is `nonce + 1`.
    pub fn start_nonce(mut self, nonce: Nonce) -> Self {
        self.start = Some(NonceStart::Fixed(nonce));
        self
    }

    /// Draw a fresh random start for every search.
    pub fn random_start(mut self) -> Self {
        self.start = Some(NonceStart::Random);
        self
    }

    pub fn build_validated(self) -> Result<Searcher, Error> {
        validate_max_attempts(self.max_attempts.flatten())?;
        self.build().map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

impl PowEngine for Searcher {
    fn search(&self, seed: &Seed, target: Difficulty) -> Result<Proof, Error> {
        validate_max_attempts(self.max_attempts)?;
        let start = self.start.resolve();
        tracing::debug!(
            seed = %seed.to_hex(),
            target = target.get(),
            start = start.get(),
            "starting proof-of-work search"
        );

        let mut counter = NonceCounter::new(start);
        let mut input = [0u8; SEED_LEN + NONCE_LEN];
        input[..SEED_LEN].copy_from_slice(seed.as_bytes());
        let mut attempts: u64 = 0;

        loop {
            if let Some(stop) = &self.stop {
                if stop.should_stop() {
                    self.publish_progress(attempts);
                    tracing::warn!(attempts, "proof-of-work search cancelled");
                    return Err(Error::Cancelled { attempts });
                }
            }
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    self.publish_progress(attempts);
                    return Err(Error::AttemptsExhausted { attempts });
                }
            }
            let Some(nonce) = counter.advance() else {
                self.publish_progress(attempts);
                return Err(Error::NonceSpaceExhausted);
            };

            input[SEED_LEN..].copy_from_slice(&nonce.to_le_bytes());
            let digest = self.hasher.hash(&input);
            attempts = attempts.wrapping_add(1);
            if attempts % PROGRESS_INTERVAL == 0 {
                self.publish_progress(attempts);
            }

            if target.is_met_by(leading_zero_bits(&digest)) {
                self.publish_progress(attempts);
                let proof = Proof::new(*seed, target, nonce);
                tracing::debug!(nonce = nonce.get(), attempts, "proof-of-work found");
                self.observer.on_proof(&proof, attempts);
                return Ok(proof);
            }
        }
    }
}
