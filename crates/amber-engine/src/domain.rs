//! The immutable problem instance handed to planning and learning code.
//!
//! A [`Domain`] bundles the action set, transition model, reward function
//! and terminal predicate built from one validated [`DomainConfig`]. It has
//! no interior mutability: share it behind an `Arc` across any number of
//! readers without locking.

use std::collections::VecDeque;

use amber_core::{Action, ActionError, State, StateError};
use amber_model::{
    Corridor, CorridorReward, CorridorTransition, GoalTerminal, LightProcess, Outcomes,
    RewardFunction, TerminalPredicate, TransitionModel,
};
use indexmap::IndexSet;
use rand::RngCore;

use crate::config::{ConfigError, DomainConfig};

// Compile-time assertion: Domain is Send + Sync.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Domain>();
    }
};

/// One complete traffic-light corridor decision problem.
///
/// # Examples
///
/// ```
/// use amber_core::{Action, LightPhase, State};
/// use amber_engine::{Domain, DomainConfig};
///
/// let domain = Domain::new(DomainConfig::default()).unwrap();
/// let s = State::new(9, LightPhase::Green);
///
/// let outcomes = domain.enumerate(s, Action::Forward);
/// let total: f64 = outcomes.iter().map(|o| o.probability).sum();
/// assert!((total - 1.0).abs() < 1e-12);
///
/// let next = outcomes[0].state;
/// assert!(domain.is_terminal(next));
/// assert_eq!(domain.reward(Action::Forward, next), 99.0);
/// ```
#[derive(Clone, Debug)]
pub struct Domain {
    config: DomainConfig,
    transition: CorridorTransition,
    reward: CorridorReward,
    terminal: GoalTerminal,
}

impl Domain {
    /// Validate `config` and assemble the domain.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`DomainConfig::validate`]; no
    /// domain is produced.
    pub fn new(config: DomainConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let transition = CorridorTransition::new(
            Corridor::new(config.corridor_length),
            LightProcess::new(config.probabilities),
        );
        let reward = CorridorReward::new(config.goal_position, config.light_position, config.rewards);
        let terminal = GoalTerminal::new(config.goal_position);

        tracing::debug!(
            corridor_length = config.corridor_length,
            goal_position = config.goal_position,
            light_position = config.light_position,
            p_green_to_yellow = config.probabilities.green_to_yellow,
            p_yellow_to_red = config.probabilities.yellow_to_red,
            p_red_to_green = config.probabilities.red_to_green,
            "domain built"
        );

        Ok(Self {
            config,
            transition,
            reward,
            terminal,
        })
    }

    /// The configuration this domain was built from.
    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Number of corridor cells.
    pub fn corridor_length(&self) -> u32 {
        self.config.corridor_length
    }

    /// The admissible actions.
    pub fn actions(&self) -> &'static [Action] {
        &Action::ALL
    }

    /// Look an action up by name.
    pub fn action(&self, name: &str) -> Result<Action, ActionError> {
        name.parse()
    }

    /// The transition model.
    pub fn transition_model(&self) -> &CorridorTransition {
        &self.transition
    }

    /// The reward function.
    pub fn reward_function(&self) -> &CorridorReward {
        &self.reward
    }

    /// The terminal predicate.
    pub fn terminal_predicate(&self) -> &GoalTerminal {
        &self.terminal
    }

    /// Draw one successor of `(state, action)`.
    pub fn sample(&self, state: State, action: Action, rng: &mut dyn RngCore) -> State {
        self.transition.sample(state, action, rng)
    }

    /// Exact successor distribution of `(state, action)`.
    pub fn enumerate(&self, state: State, action: Action) -> Outcomes {
        self.transition.enumerate(state, action)
    }

    /// Reward for arriving in `next` via `action`.
    pub fn reward(&self, action: Action, next: State) -> f64 {
        self.reward.reward(action, next)
    }

    /// Whether `state` ends the episode.
    pub fn is_terminal(&self, state: State) -> bool {
        self.terminal.is_terminal(state)
    }

    /// Reject states that lie outside the corridor.
    pub fn check_state(&self, state: State) -> Result<State, StateError> {
        if self.transition.corridor().contains(state.position()) {
            Ok(state)
        } else {
            Err(StateError::PositionOutOfBounds {
                position: state.position(),
                corridor_length: self.corridor_length(),
            })
        }
    }

    /// All states reachable from `initial`, in breadth-first discovery order.
    ///
    /// Successors come from [`enumerate`](Self::enumerate) over every
    /// action. Terminal states are included but not expanded.
    pub fn reachable_states(&self, initial: State) -> Result<IndexSet<State>, StateError> {
        let initial = self.check_state(initial)?;

        let mut seen = IndexSet::new();
        let mut frontier = VecDeque::new();
        seen.insert(initial);
        frontier.push_back(initial);

        while let Some(state) = frontier.pop_front() {
            if self.is_terminal(state) {
                continue;
            }
            for &action in self.actions() {
                for outcome in self.enumerate(state, action) {
                    if seen.insert(outcome.state) {
                        frontier.push_back(outcome.state);
                    }
                }
            }
        }

        Ok(seen)
    }
}

impl TransitionModel for Domain {
    fn sample(&self, state: State, action: Action, rng: &mut dyn RngCore) -> State {
        Domain::sample(self, state, action, rng)
    }

    fn enumerate(&self, state: State, action: Action) -> Outcomes {
        Domain::enumerate(self, state, action)
    }
}

impl RewardFunction for Domain {
    fn reward(&self, action: Action, next: State) -> f64 {
        Domain::reward(self, action, next)
    }
}

impl TerminalPredicate for Domain {
    fn is_terminal(&self, state: State) -> bool {
        Domain::is_terminal(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amber_core::LightPhase;
    use amber_test_utils::strategies::{any_action, state_in};
    use amber_test_utils::ScriptedRng;
    use proptest::prelude::*;

    fn reference() -> Domain {
        Domain::new(DomainConfig::tutorial()).unwrap()
    }

    #[test]
    fn invalid_config_builds_nothing() {
        let result = Domain::new(DomainConfig::default().with_light_position(40));
        assert!(matches!(
            result,
            Err(ConfigError::PositionOutOfCorridor {
                name: "light_position",
                ..
            })
        ));
    }

    #[test]
    fn actions_are_the_full_set() {
        let d = reference();
        assert_eq!(d.actions(), &[Action::Forward, Action::Reverse, Action::Stop]);
    }

    #[test]
    fn action_lookup_by_name() {
        let d = reference();
        assert_eq!(d.action("stop"), Ok(Action::Stop));
        assert_eq!(
            d.action("teleport"),
            Err(ActionError::Unknown {
                name: "teleport".into()
            })
        );
    }

    #[test]
    fn check_state_enforces_corridor_bounds() {
        let d = reference();
        let ok = State::new(10, LightPhase::Red);
        assert_eq!(d.check_state(ok), Ok(ok));
        assert_eq!(
            d.check_state(State::new(11, LightPhase::Red)),
            Err(StateError::PositionOutOfBounds {
                position: 11,
                corridor_length: 11
            })
        );
    }

    #[test]
    fn delegates_to_components() {
        let d = reference();
        let s = State::new(5, LightPhase::Yellow);
        let mut rng = ScriptedRng::always(0.0);
        assert_eq!(
            d.sample(s, Action::Forward, &mut rng),
            State::new(6, LightPhase::Red)
        );
        assert_eq!(d.reward(Action::Forward, State::new(6, LightPhase::Red)), -21.0);
        assert!(d.is_terminal(State::new(10, LightPhase::Yellow)));
    }

    #[test]
    fn usable_through_trait_objects() {
        let d = reference();
        let tm: &dyn TransitionModel = &d;
        let rf: &dyn RewardFunction = &d;
        let tf: &dyn TerminalPredicate = &d;
        let s = State::new(9, LightPhase::Green);
        let out = tm.enumerate(s, Action::Forward);
        assert_eq!(out.len(), 2);
        assert_eq!(rf.reward(Action::Forward, out[0].state), 19.0);
        assert!(tf.is_terminal(out[0].state));
    }

    #[test]
    fn reachable_covers_whole_corridor() {
        let d = reference();
        let states = d.reachable_states(State::new(0, LightPhase::Green)).unwrap();
        // Every (position, phase) pair is reachable in a stochastic corridor.
        assert_eq!(states.len(), 11 * 3);
        assert_eq!(states[0], State::new(0, LightPhase::Green));
    }

    #[test]
    fn reachable_with_frozen_light_keeps_phase() {
        let config = DomainConfig::tutorial().with_phase_probabilities(0.0, 0.0, 0.0);
        let d = Domain::new(config).unwrap();
        let states = d.reachable_states(State::new(3, LightPhase::Yellow)).unwrap();
        assert_eq!(states.len(), 11);
        assert!(states.iter().all(|s| s.light_phase() == LightPhase::Yellow));
    }

    #[test]
    fn reachable_does_not_expand_terminal_start() {
        let d = reference();
        let start = State::new(10, LightPhase::Green);
        let states = d.reachable_states(start).unwrap();
        assert_eq!(states.len(), 1);
        assert!(states.contains(&start));
    }

    #[test]
    fn reachable_rejects_invalid_start() {
        let d = reference();
        assert!(d.reachable_states(State::new(99, LightPhase::Green)).is_err());
    }

    proptest! {
        #[test]
        fn terminal_ignores_phase(state in state_in(11)) {
            let d = reference();
            prop_assert_eq!(d.is_terminal(state), state.position() == 10);
        }

        #[test]
        fn enumerated_successors_stay_in_corridor(
            state in state_in(11),
            action in any_action(),
        ) {
            let d = reference();
            for o in d.enumerate(state, action) {
                prop_assert!(d.check_state(o.state).is_ok());
            }
        }
    }
}
