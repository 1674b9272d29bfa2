#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("incorrect seed length: expected {expected} bytes, got {actual}")]
    SeedLengthMismatch { expected: usize, actual: usize },
    #[error("invalid difficulty: expected at least {minimum} leading zero bits, got {requested}")]
    InvalidDifficulty { minimum: u8, requested: u8 },
    #[error("too few leading zero bits: expected at least {expected_at_least}, got {actual}")]
    InsufficientLeadingZeros { expected_at_least: u8, actual: u32 },
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("search cancelled after {attempts} attempts")]
    Cancelled { attempts: u64 },
    #[error("no proof found within {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
    #[error("nonce space exhausted")]
    NonceSpaceExhausted,
}
