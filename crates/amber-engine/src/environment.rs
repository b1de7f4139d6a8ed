//! Stateful simulated environment for learning-style collaborators.
//!
//! [`SimulatedEnvironment`] owns one mutable current state and one RNG.
//! Each [`step()`](SimulatedEnvironment::step) draws a single successor
//! from the domain's transition model, scores it, and makes it current.
//!
//! # Ownership model
//!
//! The environment is [`Send`] but meant to be owned by exactly one
//! episode at a time; all mutating methods take `&mut self`. The
//! [`Domain`] it wraps is shared read-only through an `Arc`, so parallel
//! learners each hold their own environment over the same domain.

use std::sync::Arc;

use amber_core::{Action, State, StateError};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::Domain;
use crate::episode::{Episode, EpisodeStep, Policy};

// Compile-time assertion: the default environment is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulatedEnvironment>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of one [`SimulatedEnvironment::step()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    /// Reward for the transition.
    pub reward: f64,
    /// The new current state.
    pub next_state: State,
    /// Whether `next_state` is terminal.
    pub done: bool,
}

// ── SimulatedEnvironment ────────────────────────────────────────

/// Single-episode simulation over a shared [`Domain`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use amber_core::{Action, LightPhase, State};
/// use amber_engine::{Domain, DomainConfig, SimulatedEnvironment};
///
/// let domain = Arc::new(Domain::new(DomainConfig::default()).unwrap());
/// let start = State::new(0, LightPhase::Green);
/// let mut env = SimulatedEnvironment::new(domain, start, 42).unwrap();
///
/// let result = env.step(Action::Forward);
/// assert_eq!(result.next_state.position(), 1);
/// assert_eq!(env.current(), result.next_state);
/// ```
pub struct SimulatedEnvironment<R: RngCore = ChaCha8Rng> {
    domain: Arc<Domain>,
    initial: State,
    current: State,
    rng: R,
}

impl SimulatedEnvironment<ChaCha8Rng> {
    /// Create an environment whose phase draws come from a ChaCha8 stream
    /// seeded with `seed`.
    ///
    /// Two environments with the same domain, initial state, seed and
    /// action sequence produce identical trajectories.
    pub fn new(domain: Arc<Domain>, initial: State, seed: u64) -> Result<Self, StateError> {
        Self::with_rng(domain, initial, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SimulatedEnvironment<R> {
    /// Create an environment drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PositionOutOfBounds`] if `initial` lies
    /// outside the corridor.
    pub fn with_rng(domain: Arc<Domain>, initial: State, rng: R) -> Result<Self, StateError> {
        let initial = domain.check_state(initial)?;
        Ok(Self {
            domain,
            initial,
            current: initial,
            rng,
        })
    }

    /// Advance one step.
    ///
    /// This is the only method that changes the current state through the
    /// dynamics.
    pub fn step(&mut self, action: Action) -> StepResult {
        let next_state = self.domain.sample(self.current, action, &mut self.rng);
        let reward = self.domain.reward(action, next_state);
        let done = self.domain.is_terminal(next_state);

        tracing::trace!(
            %action,
            position = next_state.position(),
            light_phase = %next_state.light_phase(),
            reward,
            done,
            "step"
        );

        self.current = next_state;
        StepResult {
            reward,
            next_state,
            done,
        }
    }

    /// Make a copy of `state` current. No other effect.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PositionOutOfBounds`] and leaves the current
    /// state unchanged if `state` lies outside the corridor.
    pub fn reset(&mut self, state: State) -> Result<(), StateError> {
        self.current = self.domain.check_state(state)?;
        tracing::debug!(%state, "environment reset");
        Ok(())
    }

    /// Return to the state the environment was created with.
    pub fn reset_to_initial(&mut self) {
        self.current = self.initial;
        tracing::debug!(state = %self.initial, "environment reset to initial state");
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> State {
        self.current
    }

    /// The construction-time initial state.
    pub fn initial(&self) -> State {
        self.initial
    }

    /// Whether the current state is terminal.
    pub fn is_in_terminal_state(&self) -> bool {
        self.domain.is_terminal(self.current)
    }

    /// The shared domain.
    pub fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    /// Step `policy` from the current state until terminal or `max_steps`.
    ///
    /// The environment is left in the final state; call
    /// [`reset_to_initial`](Self::reset_to_initial) before the next episode.
    pub fn run_episode<P>(&mut self, policy: &mut P, max_steps: usize) -> Episode
    where
        P: Policy + ?Sized,
    {
        let mut episode = Episode::new(self.current);
        while !self.is_in_terminal_state() && episode.len() < max_steps {
            let state = self.current;
            let action = policy.action(&state);
            let result = self.step(action);
            episode.push(EpisodeStep {
                state,
                action,
                reward: result.reward,
                next_state: result.next_state,
                done: result.done,
            });
        }
        episode
    }
}

impl<R: RngCore> std::fmt::Debug for SimulatedEnvironment<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedEnvironment")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .finish()
    }
}
