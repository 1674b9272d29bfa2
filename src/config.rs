use crate::error::Error;
use crate::observe::DEFAULT_HIGH_NONCE_THRESHOLD;
use crate::stream::NonceStart;
use crate::types::{Difficulty, Nonce};
use serde::{Deserialize, Serialize};

/// Search settings, typically read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Counting starts just after this nonce. Zero when absent.
    pub start_nonce: Option<i64>,
    /// Draw a fresh random start for every search instead.
    pub random_start: bool,
    pub max_attempts: Option<u64>,
    /// Proofs taking more attempts than this are logged.
    pub high_nonce_threshold: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::DEFAULT,
            start_nonce: None,
            random_start: false,
            max_attempts: None,
            high_nonce_threshold: DEFAULT_HIGH_NONCE_THRESHOLD,
        }
    }
}

impl SearchConfig {
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.random_start && self.start_nonce.is_some() {
            return Err(Error::InvalidConfig(
                "start_nonce and random_start are mutually exclusive".into(),
            ));
        }
        validate_max_attempts(self.max_attempts)
    }

    pub fn nonce_start(&self) -> NonceStart {
        match (self.random_start, self.start_nonce) {
            (true, _) => NonceStart::Random,
            (false, Some(start)) => NonceStart::Fixed(Nonce::new(start)),
            (false, None) => NonceStart::default(),
        }
    }
}

/// Attempt caps must allow at least one hash.
pub(crate) fn validate_max_attempts(max_attempts: Option<u64>) -> Result<(), Error> {
    if max_attempts == Some(0) {
        return Err(Error::InvalidConfig("max_attempts must be >= 1".into()));
    }
    Ok(())
}
