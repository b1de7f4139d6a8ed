//! Reward for arriving in a state.
//!
//! Every step pays the cost of the chosen action. Arriving at the goal adds
//! the goal reward; otherwise, arriving at the light while it is red adds
//! the red-light penalty. The goal check wins when the two cells coincide.

use amber_core::{Action, LightPhase, State};

use crate::traits::RewardFunction;

/// Reward magnitudes. Costs are usually negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardCoefficients {
    /// Added when the resulting position is the goal.
    pub goal_reward: f64,
    /// Added when the resulting position is the light and the light is red.
    pub red_light_penalty: f64,
    /// Per-step cost of [`Action::Forward`].
    pub forward_cost: f64,
    /// Per-step cost of [`Action::Stop`].
    pub stop_cost: f64,
    /// Per-step cost of [`Action::Reverse`].
    pub reverse_cost: f64,
}

impl RewardCoefficients {
    /// `(name, value)` pairs, for validation and diagnostics.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("goal_reward", self.goal_reward),
            ("red_light_penalty", self.red_light_penalty),
            ("forward_cost", self.forward_cost),
            ("stop_cost", self.stop_cost),
            ("reverse_cost", self.reverse_cost),
        ]
    }
}

impl Default for RewardCoefficients {
    fn default() -> Self {
        Self {
            goal_reward: 100.0,
            red_light_penalty: -100.0,
            forward_cost: -1.0,
            stop_cost: -2.0,
            reverse_cost: -3.0,
        }
    }
}

/// Reward function of the traffic-light corridor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorridorReward {
    goal_position: u32,
    light_position: u32,
    coefficients: RewardCoefficients,
}

impl CorridorReward {
    /// Create a reward function for the given goal and light cells.
    pub fn new(goal_position: u32, light_position: u32, coefficients: RewardCoefficients) -> Self {
        Self {
            goal_position,
            light_position,
            coefficients,
        }
    }

    /// The reward magnitudes.
    pub fn coefficients(&self) -> &RewardCoefficients {
        &self.coefficients
    }

    /// Base cost of taking `action`, before any goal or light term.
    pub fn action_cost(&self, action: Action) -> f64 {
        match action {
            Action::Stop => self.coefficients.stop_cost,
            Action::Forward => self.coefficients.forward_cost,
            Action::Reverse => self.coefficients.reverse_cost,
        }
    }
}

impl RewardFunction for CorridorReward {
    fn reward(&self, action: Action, next: State) -> f64 {
        let cost = self.action_cost(action);
        if next.position() == self.goal_position {
            self.coefficients.goal_reward + cost
        } else if next.position() == self.light_position && next.light_phase() == LightPhase::Red {
            self.coefficients.red_light_penalty + cost
        } else {
            cost
        }
    }
}
