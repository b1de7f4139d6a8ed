//! Capability traits consumed by planning and learning collaborators.
//!
//! Each capability is one small object-safe trait. The concrete corridor
//! implementations live in sibling modules; a collaborator that only needs
//! rewards can depend on `&dyn RewardFunction` without seeing the rest.

use amber_core::{Action, State};
use rand::RngCore;

use crate::transition::Outcomes;

/// Produces successor states for a `(state, action)` pair.
///
/// # Contract
///
/// - [`sample`](Self::sample) draws exactly one successor using only the
///   supplied RNG; the same RNG stream yields the same successor.
/// - [`enumerate`](Self::enumerate) is deterministic and returns every
///   successor with non-zero probability, each probability in `(0, 1]`,
///   summing to `1.0`.
pub trait TransitionModel: Send + Sync {
    /// Draw one successor state.
    fn sample(&self, state: State, action: Action, rng: &mut dyn RngCore) -> State;

    /// The exact successor distribution.
    fn enumerate(&self, state: State, action: Action) -> Outcomes;
}

/// Scalar reward for arriving in `next` via `action`.
///
/// Depends only on the action and the resulting state, so it can be
/// recomputed from an observed `(action, next_state)` pair.
pub trait RewardFunction: Send + Sync {
    /// Reward for the transition.
    fn reward(&self, action: Action, next: State) -> f64;
}

/// Decides whether a state ends the episode.
pub trait TerminalPredicate: Send + Sync {
    /// `true` if `state` is terminal.
    fn is_terminal(&self, state: State) -> bool;
}
