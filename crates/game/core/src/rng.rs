//! Seeded random number stream for deterministic simulation.
//!
//! Every random decision in a session (generation, spawning, combat rolls,
//! enemy wandering) draws from one [`SeededRng`] stream in a fixed call
//! order. Identical seeds therefore reproduce identical sessions, which is
//! the basis for replay and cross-port verification.

/// Park–Miller linear congruential generator.
///
/// State advances as `state = (state * 16807) mod 2147483647` and is never
/// zero, so the stream has full period over `1..=2147483646`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    const MULTIPLIER: u64 = 16807;
    const MODULUS: u64 = 2_147_483_647;

    /// Creates a stream from an arbitrary integer seed.
    ///
    /// Seeds outside `1..=2146483646` are normalized into range: the seed is
    /// reduced modulo 2147483647 and shifted positive if the remainder is
    /// zero or negative, so seed 0 and negative seeds are valid inputs.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % Self::MODULUS as i64;
        if state <= 0 {
            state += (Self::MODULUS - 1) as i64;
        }
        Self {
            state: state as u64,
        }
    }

    /// Returns the next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER) % Self::MODULUS;
        (self.state - 1) as f64 / (Self::MODULUS - 1) as f64
    }

    /// Returns a uniformly selected integer in `[min, max_exclusive)`.
    ///
    /// # Panics
    ///
    /// Panics if `max_exclusive <= min`. An inverted range is a caller bug,
    /// not a runtime game condition, and must fail loudly.
    pub fn next_range(&mut self, min: i32, max_exclusive: i32) -> i32 {
        assert!(
            max_exclusive > min,
            "next_range requires max_exclusive ({max_exclusive}) > min ({min})"
        );
        (self.next() * (max_exclusive - min) as f64) as i32 + min
    }

    /// Returns a uniformly selected element of `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "choice requires a non-empty slice");
        let index = self.next_range(0, items.len() as i32) as usize;
        &items[index]
    }
}
