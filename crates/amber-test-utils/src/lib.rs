//! Test utilities for Amber development.
//!
//! [`ScriptedRng`] replays fixed uniform draws so tests can force the
//! light to hold or advance. [`strategies`] holds proptest generators for
//! the core value types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

use rand::RngCore;

/// Number of mantissa bits `rand` uses when drawing an `f64` in `[0, 1)`.
const F64_PRECISION: u32 = 53;

/// An [`RngCore`] whose `f64` draws replay a fixed script.
///
/// Each call to `next_u64` yields the next scripted value, cycling when
/// the script runs out, encoded so that `rng.random::<f64>()` returns it
/// exactly (for values that are multiples of 2^-53, such as `0.0`, `0.5`
/// or `0.25`) or rounded down by less than 2^-53 otherwise.
///
/// ```
/// use amber_test_utils::ScriptedRng;
/// use rand::Rng;
///
/// let mut rng = ScriptedRng::new(&[0.25, 0.5]);
/// assert_eq!(rng.random::<f64>(), 0.25);
/// assert_eq!(rng.random::<f64>(), 0.5);
/// assert_eq!(rng.random::<f64>(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: Vec<u64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Replay `draws` in order, cycling.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is empty or any value lies outside `[0, 1)`.
    pub fn new(draws: &[f64]) -> Self {
        assert!(!draws.is_empty(), "ScriptedRng needs at least one draw");
        let script = draws.iter().map(|&r| encode(r)).collect();
        Self { script, cursor: 0 }
    }

    /// Always draw `r`.
    ///
    /// `always(0.0)` advances every light whose probability is positive;
    /// `always(0.99)` holds every light whose probability is below 0.99.
    pub fn always(r: f64) -> Self {
        Self::new(&[r])
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

fn encode(r: f64) -> u64 {
    assert!(
        (0.0..1.0).contains(&r),
        "scripted draw {r} outside [0, 1)"
    );
    let mantissa = (r * (1u64 << F64_PRECISION) as f64) as u64;
    mantissa << (64 - F64_PRECISION)
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
