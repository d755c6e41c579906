//! Random source used by the mocked disease detection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;

    /// Uniform integer in `low..=high`
    fn between(&self, low: u32, high: u32) -> u32;
}

/// Thread-local RNG, reseeded from the OS
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn between(&self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic RNG for tests and reproducible demos
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..len))
    }

    fn between(&self, low: u32, high: u32) -> u32 {
        self.with_rng(|rng| rng.gen_range(low..=high))
    }
}
