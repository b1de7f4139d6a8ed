//! Stochastic light-phase process.
//!
//! Each step the light performs one Bernoulli trial: with the configured
//! probability for its current phase it advances one step along the cycle,
//! otherwise it holds. The trial depends only on the current phase.

use amber_core::LightPhase;
use rand::{Rng, RngCore};

/// Per-phase probability that the light advances on a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseProbabilities {
    /// `P(Green -> Yellow)`.
    pub green_to_yellow: f64,
    /// `P(Yellow -> Red)`.
    pub yellow_to_red: f64,
    /// `P(Red -> Green)`.
    pub red_to_green: f64,
}

impl PhaseProbabilities {
    /// Probabilities for the three transitions, in cycle order.
    pub fn new(green_to_yellow: f64, yellow_to_red: f64, red_to_green: f64) -> Self {
        Self {
            green_to_yellow,
            yellow_to_red,
            red_to_green,
        }
    }

    /// A light that advances every step.
    pub fn cycling() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Advance probability out of `phase`.
    pub fn for_phase(&self, phase: LightPhase) -> f64 {
        match phase {
            LightPhase::Green => self.green_to_yellow,
            LightPhase::Yellow => self.yellow_to_red,
            LightPhase::Red => self.red_to_green,
        }
    }

    /// `(name, value)` pairs, for validation and diagnostics.
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("p_green_to_yellow", self.green_to_yellow),
            ("p_yellow_to_red", self.yellow_to_red),
            ("p_red_to_green", self.red_to_green),
        ]
    }
}

impl Default for PhaseProbabilities {
    /// Slow green, fast yellow and red.
    fn default() -> Self {
        Self::new(0.4, 0.8, 0.8)
    }
}

/// The light-phase Markov chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightProcess {
    probabilities: PhaseProbabilities,
}

impl LightProcess {
    /// Create a process with the given advance probabilities.
    pub fn new(probabilities: PhaseProbabilities) -> Self {
        Self { probabilities }
    }

    /// The configured probabilities.
    pub fn probabilities(&self) -> &PhaseProbabilities {
        &self.probabilities
    }

    /// Probability that `phase` advances on the next step.
    pub fn advance_probability(&self, phase: LightPhase) -> f64 {
        self.probabilities.for_phase(phase)
    }

    /// The deterministic successor of `phase` in the cycle.
    pub fn advance(&self, phase: LightPhase) -> LightPhase {
        phase.next()
    }

    /// Run one Bernoulli trial from `phase`.
    ///
    /// Draws `r` uniformly from `[0, 1)` and advances iff `r <= p`. A
    /// phase with `p == 0.0` never advances, so sampling agrees with the
    /// enumerated distribution at both ends of the range.
    pub fn sample(&self, phase: LightPhase, rng: &mut dyn RngCore) -> LightPhase {
        let p = self.advance_probability(phase);
        let r: f64 = rng.random();
        if p > 0.0 && r <= p {
            self.advance(phase)
        } else {
            phase
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amber_test_utils::ScriptedRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn process() -> LightProcess {
        LightProcess::new(PhaseProbabilities::new(0.3, 0.9, 0.8))
    }

    #[test]
    fn advance_probability_per_phase() {
        let p = process();
        assert_eq!(p.advance_probability(LightPhase::Green), 0.3);
        assert_eq!(p.advance_probability(LightPhase::Yellow), 0.9);
        assert_eq!(p.advance_probability(LightPhase::Red), 0.8);
    }

    #[test]
    fn low_draw_advances_high_draw_holds() {
        let p = process();
        let mut low = ScriptedRng::always(0.1);
        let mut high = ScriptedRng::always(0.95);
        assert_eq!(p.sample(LightPhase::Green, &mut low), LightPhase::Yellow);
        assert_eq!(p.sample(LightPhase::Green, &mut high), LightPhase::Green);
        assert_eq!(p.sample(LightPhase::Red, &mut low), LightPhase::Green);
    }

    #[test]
    fn draw_equal_to_probability_advances() {
        let p = LightProcess::new(PhaseProbabilities::new(0.5, 0.5, 0.5));
        let mut rng = ScriptedRng::always(0.5);
        assert_eq!(p.sample(LightPhase::Yellow, &mut rng), LightPhase::Red);
    }

    #[test]
    fn zero_probability_never_advances() {
        let p = LightProcess::new(PhaseProbabilities::new(0.0, 0.0, 0.0));
        let mut rng = ScriptedRng::always(0.0);
        for phase in LightPhase::ALL {
            assert_eq!(p.sample(phase, &mut rng), phase);
        }
    }

    #[test]
    fn certain_probability_always_advances() {
        let p = LightProcess::new(PhaseProbabilities::cycling());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut phase = LightPhase::Green;
        for _ in 0..30 {
            let next = p.sample(phase, &mut rng);
            assert_eq!(next, phase.next());
            phase = next;
        }
    }

    #[test]
    fn empirical_rate_matches_probability() {
        let p = process();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 20_000;
        let advanced = (0..trials)
            .filter(|_| p.sample(LightPhase::Green, &mut rng) == LightPhase::Yellow)
            .count();
        let rate = advanced as f64 / trials as f64;
        assert!((rate - 0.3).abs() < 0.02, "rate {rate} too far from 0.3");
    }

    #[test]
    fn sample_moves_at_most_one_step() {
        let p = process();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for phase in LightPhase::ALL {
            for _ in 0..200 {
                let next = p.sample(phase, &mut rng);
                assert!(next == phase || next == phase.next());
            }
        }
    }

    #[test]
    fn defaults_match_tutorial_values() {
        let d = PhaseProbabilities::default();
        assert_eq!(d, PhaseProbabilities::new(0.4, 0.8, 0.8));
        assert_eq!(d.named()[1], ("p_yellow_to_red", 0.8));
    }
}
