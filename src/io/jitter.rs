//! Delay strategies used to simulate non-deterministic I/O completion.

use std::fmt::Debug;
use std::time::Duration;

use rand::Rng;

/// Strategy deciding how long to wait before a read starts.
pub trait Jitter: Send + Sync + Debug {
    fn delay(&self) -> Duration;
}

/// No artificial delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// The same delay before every read.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub Duration);

impl Jitter for FixedJitter {
    fn delay(&self) -> Duration {
        self.0
    }
}

/// A uniformly random delay in `[0, max)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomJitter {
    max: Duration,
}

impl RandomJitter {
    pub fn new(max: Duration) -> Self {
        Self { max }
    }

    /// Random delay of up to `ms` milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn max(&self) -> Duration {
        self.max
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::from_millis(200)
    }
}

impl Jitter for RandomJitter {
    fn delay(&self) -> Duration {
        let max_micros = self.max.as_micros() as u64;
        if max_micros == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(rand::thread_rng().gen_range(0..max_micros))
    }
}
