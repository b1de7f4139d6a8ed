//! Policies, recorded episodes, and Monte-Carlo policy evaluation.
//!
//! These are the thin driving loops a collaborator needs to exercise a
//! policy against a [`Domain`]; computing the policy is the caller's job.

use amber_core::{Action, State, StateError};
use rand::RngCore;

use crate::domain::Domain;

/// Chooses an action for a state.
///
/// Implemented for every `FnMut(&State) -> Action`, so closures work
/// directly:
///
/// ```
/// use amber_core::{Action, State};
/// use amber_engine::Policy;
///
/// let mut always_forward = |_: &State| Action::Forward;
/// fn takes_policy(p: &mut impl Policy) {}
/// takes_policy(&mut always_forward);
/// ```
pub trait Policy {
    /// The action to take in `state`.
    fn action(&mut self, state: &State) -> Action;
}

impl<F> Policy for F
where
    F: FnMut(&State) -> Action,
{
    fn action(&mut self, state: &State) -> Action {
        self(state)
    }
}

/// One `(s, a, r, s')` transition of an episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeStep {
    /// State the action was taken in.
    pub state: State,
    /// The action.
    pub action: Action,
    /// Reward received.
    pub reward: f64,
    /// Resulting state.
    pub next_state: State,
    /// Whether `next_state` is terminal.
    pub done: bool,
}

/// An ordered trajectory from an initial state.
#[derive(Clone, Debug, PartialEq)]
pub struct Episode {
    initial: State,
    steps: Vec<EpisodeStep>,
}

impl Episode {
    /// An empty episode starting at `initial`.
    pub fn new(initial: State) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn push(&mut self, step: EpisodeStep) {
        self.steps.push(step);
    }

    /// The starting state.
    pub fn initial_state(&self) -> State {
        self.initial
    }

    /// Recorded steps, in order.
    pub fn steps(&self) -> &[EpisodeStep] {
        &self.steps
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if no step was taken.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// State after the last step, or the initial state if there are none.
    pub fn final_state(&self) -> State {
        self.steps.last().map_or(self.initial, |s| s.next_state)
    }

    /// Whether the last step reached a terminal state.
    pub fn reached_terminal(&self) -> bool {
        self.steps.last().is_some_and(|s| s.done)
    }

    /// Undiscounted sum of rewards.
    pub fn total_reward(&self) -> f64 {
        self.steps.iter().map(|s| s.reward).sum()
    }

    /// `sum_t gamma^t * r_t`.
    pub fn discounted_return(&self, gamma: f64) -> f64 {
        let mut discount = 1.0;
        let mut total = 0.0;
        for step in &self.steps {
            total += discount * step.reward;
            discount *= gamma;
        }
        total
    }
}

/// Run `policy` from `initial` until a terminal state or `max_steps`.
///
/// A terminal `initial` yields an empty episode.
///
/// # Errors
///
/// Returns [`StateError::PositionOutOfBounds`] if `initial` lies outside
/// the corridor.
pub fn rollout<P>(
    domain: &Domain,
    policy: &mut P,
    initial: State,
    max_steps: usize,
    rng: &mut dyn RngCore,
) -> Result<Episode, StateError>
where
    P: Policy + ?Sized,
{
    let mut state = domain.check_state(initial)?;
    let mut episode = Episode::new(state);

    while !domain.is_terminal(state) {
        if episode.len() >= max_steps {
            tracing::debug!(max_steps, position = state.position(), "rollout cut off");
            break;
        }
        let action = policy.action(&state);
        let next_state = domain.sample(state, action, rng);
        let reward = domain.reward(action, next_state);
        let done = domain.is_terminal(next_state);
        episode.push(EpisodeStep {
            state,
            action,
            reward,
            next_state,
            done,
        });
        state = next_state;
    }

    Ok(episode)
}

/// Summary of repeated rollouts of one policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolicyEvaluation {
    /// Number of rollouts.
    pub trials: usize,
    /// Mean discounted return (0 with no trials).
    pub mean_return: f64,
    /// Lowest discounted return seen (0 with no trials).
    pub worst_return: f64,
}

/// Mean and worst-case discounted return of `policy` over `trials` rollouts.
pub fn evaluate_policy<P>(
    domain: &Domain,
    policy: &mut P,
    initial: State,
    trials: usize,
    gamma: f64,
    max_steps: usize,
    rng: &mut dyn RngCore,
) -> Result<PolicyEvaluation, StateError>
where
    P: Policy + ?Sized,
{
    if trials == 0 {
        return Ok(PolicyEvaluation {
            trials,
            mean_return: 0.0,
            worst_return: 0.0,
        });
    }

    let mut sum = 0.0;
    let mut worst = f64::INFINITY;
    for _ in 0..trials {
        let ret = rollout(domain, policy, initial, max_steps, rng)?.discounted_return(gamma);
        sum += ret;
        worst = worst.min(ret);
    }

    Ok(PolicyEvaluation {
        trials,
        mean_return: sum / trials as f64,
        worst_return: worst,
    })
}
