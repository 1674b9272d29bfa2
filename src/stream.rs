//! Nonce iteration and cooperative stop for the search loop.
use crate::types::Nonce;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where a search begins counting. The first nonce tried is one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceStart {
    Fixed(Nonce),
    /// Drawn uniformly over `i64` for every search.
    Random,
}

impl NonceStart {
    pub fn resolve(self) -> Nonce {
        match self {
            NonceStart::Fixed(nonce) => nonce,
            NonceStart::Random => Nonce::random(),
        }
    }
}

impl Default for NonceStart {
    fn default() -> Self {
        NonceStart::Fixed(Nonce::new(0))
    }
}

/// Sequential nonces starting just after `start`, wrapping at `i64::MAX`.
///
/// Yields every one of the 2^64 values exactly once, `start` itself last,
/// then `None`.
#[derive(Debug, Clone)]
pub struct NonceCounter {
    start: Nonce,
    current: Nonce,
    exhausted: bool,
}

impl NonceCounter {
    pub const fn new(start: Nonce) -> Self {
        Self {
            start,
            current: start,
            exhausted: false,
        }
    }

    /// Advance and return the next nonce to try.
    #[inline]
    pub fn advance(&mut self) -> Option<Nonce> {
        if self.exhausted {
            return None;
        }
        self.current = self.current.wrapping_next();
        if self.current == self.start {
            self.exhausted = true;
        }
        Some(self.current)
    }
}

/// Shared flag a caller raises to stop an in-flight search.
#[derive(Debug)]
pub struct StopFlag {
    stop: AtomicBool,
}

impl StopFlag {
    pub const fn new() -> Self {
        Self {
            stop: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn force_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}
