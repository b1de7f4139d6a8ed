//! Domain configuration, validation, and error types.
//!
//! [`DomainConfig`] is the builder-input for constructing a
//! [`Domain`](crate::Domain). [`validate()`](DomainConfig::validate) checks
//! every invariant up front; `Domain::new` refuses to build from a config
//! that fails it.

use std::error::Error;
use std::fmt;

use amber_model::{PhaseProbabilities, RewardCoefficients};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DomainConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The corridor has zero cells.
    EmptyCorridor,
    /// A phase advance probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// Which probability.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The goal or light cell lies outside the corridor.
    PositionOutOfCorridor {
        /// Which position (`goal_position` or `light_position`).
        name: &'static str,
        /// The rejected position.
        position: u32,
        /// Number of cells in the corridor.
        corridor_length: u32,
    },
    /// A reward coefficient is NaN or infinite.
    NonFiniteReward {
        /// Which coefficient.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorridor => write!(f, "corridor_length must be at least 1"),
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must lie in [0, 1], got {value}")
            }
            Self::PositionOutOfCorridor {
                name,
                position,
                corridor_length,
            } => write!(
                f,
                "{name} {position} outside corridor [0, {corridor_length})"
            ),
            Self::NonFiniteReward { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── DomainConfig ───────────────────────────────────────────────────

/// Everything needed to build one traffic-light corridor problem.
///
/// `Default` gives an 11-cell corridor with the goal at cell 10, the light
/// at cell 6, advance probabilities `(0.4, 0.8, 0.8)` and rewards
/// `(goal 100, red -100, forward -1, stop -2, reverse -3)`.
///
/// # Examples
///
/// ```
/// use amber_engine::DomainConfig;
///
/// let config = DomainConfig::default()
///     .with_phase_probabilities(0.3, 0.9, 0.8)
///     .with_light_position(4);
/// assert!(config.validate().is_ok());
///
/// let bad = DomainConfig::default().with_goal_position(11);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DomainConfig {
    /// Number of cells; positions are `[0, corridor_length)`.
    pub corridor_length: u32,
    /// Terminal cell.
    pub goal_position: u32,
    /// Cell where a red light is penalized.
    pub light_position: u32,
    /// Per-phase advance probabilities.
    pub probabilities: PhaseProbabilities,
    /// Reward magnitudes.
    pub rewards: RewardCoefficients,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            corridor_length: 11,
            goal_position: 10,
            light_position: 6,
            probabilities: PhaseProbabilities::default(),
            rewards: RewardCoefficients::default(),
        }
    }
}

impl DomainConfig {
    /// The tutorial corridor: default layout, advance probabilities
    /// `(0.3, 0.9, 0.8)` and rewards `(goal 20, red -20, forward -1,
    /// stop -2, reverse -3)`.
    pub fn tutorial() -> Self {
        Self::default()
            .with_phase_probabilities(0.3, 0.9, 0.8)
            .with_rewards(RewardCoefficients {
                goal_reward: 20.0,
                red_light_penalty: -20.0,
                forward_cost: -1.0,
                stop_cost: -2.0,
                reverse_cost: -3.0,
            })
    }

    /// Set the number of corridor cells.
    pub fn with_corridor_length(mut self, corridor_length: u32) -> Self {
        self.corridor_length = corridor_length;
        self
    }

    /// Set the goal cell.
    pub fn with_goal_position(mut self, goal_position: u32) -> Self {
        self.goal_position = goal_position;
        self
    }

    /// Set the light cell.
    pub fn with_light_position(mut self, light_position: u32) -> Self {
        self.light_position = light_position;
        self
    }

    /// Set the three advance probabilities, in cycle order.
    pub fn with_phase_probabilities(
        mut self,
        green_to_yellow: f64,
        yellow_to_red: f64,
        red_to_green: f64,
    ) -> Self {
        self.probabilities = PhaseProbabilities::new(green_to_yellow, yellow_to_red, red_to_green);
        self
    }

    /// Make the light advance on every step.
    ///
    /// Removes all randomness from the dynamics, which deterministic
    /// planners require.
    pub fn with_cycling_lights(mut self) -> Self {
        self.probabilities = PhaseProbabilities::cycling();
        self
    }

    /// Replace the reward magnitudes.
    pub fn with_rewards(mut self, rewards: RewardCoefficients) -> Self {
        self.rewards = rewards;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checked in the order: corridor
    /// length, probabilities, goal and light positions, rewards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corridor_length == 0 {
            return Err(ConfigError::EmptyCorridor);
        }

        for (name, value) in self.probabilities.named() {
            // NaN fails `contains`.
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        for (name, position) in [
            ("goal_position", self.goal_position),
            ("light_position", self.light_position),
        ] {
            if position >= self.corridor_length {
                return Err(ConfigError::PositionOutOfCorridor {
                    name,
                    position,
                    corridor_length: self.corridor_length,
                });
            }
        }

        for (name, value) in self.rewards.named() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteReward { name, value });
            }
        }

        Ok(())
    }
}
