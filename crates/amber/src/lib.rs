//! Amber: a traffic-light corridor decision problem for planning and
//! reinforcement learning.
//!
//! A vehicle moves along a one-dimensional corridor toward a goal cell. A
//! traffic light at one cell cycles GREEN → YELLOW → RED stochastically;
//! arriving on the light cell while it is RED is penalized. This facade
//! re-exports the public API of the Amber sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use amber::prelude::*;
//!
//! let domain = Arc::new(Domain::new(DomainConfig::default()).unwrap());
//!
//! // Planning side: exact successor distributions.
//! let s = State::new(5, LightPhase::Yellow);
//! for outcome in domain.enumerate(s, Action::Forward) {
//!     let r = domain.reward(Action::Forward, outcome.state);
//!     assert!(outcome.probability > 0.0);
//!     assert!(r == -1.0 || r == -101.0);
//! }
//!
//! // Learning side: sampled steps from a seeded environment.
//! let start = State::new(0, LightPhase::Green);
//! let mut env = SimulatedEnvironment::new(Arc::clone(&domain), start, 42).unwrap();
//! let mut forward = |_: &State| Action::Forward;
//! let episode = env.run_episode(&mut forward, 100);
//! assert!(episode.reached_terminal());
//! assert_eq!(env.current().position(), 10);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `amber-core` | State, light phase, action, errors |
//! | [`model`] | `amber-model` | Capability traits and corridor dynamics |
//! | [`engine`] | `amber-engine` | Config, domain, environment, rollouts |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// State, light phase, action and error types (`amber-core`).
pub use amber_core as types;

/// Capability traits and the concrete corridor dynamics (`amber-model`).
///
/// Implement [`model::TransitionModel`], [`model::RewardFunction`] or
/// [`model::TerminalPredicate`] to plug alternative dynamics into
/// collaborators that program against the traits.
pub use amber_model as model;

/// Domain assembly and simulation (`amber-engine`).
///
/// [`engine::Domain`] for planners, [`engine::SimulatedEnvironment`] for
/// learners.
pub use amber_engine as engine;

/// Common imports for typical Amber usage.
///
/// ```rust
/// use amber::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use amber_core::{Action, LightPhase, State, StateField, StateValue};

    // Errors
    pub use amber_core::{ActionError, StateError};
    pub use amber_engine::ConfigError;

    // Model traits
    pub use amber_model::{Outcome, RewardFunction, TerminalPredicate, TransitionModel};

    // Engine
    pub use amber_engine::{
        evaluate_policy, rollout, Domain, DomainConfig, Episode, Policy, SimulatedEnvironment,
        StepResult,
    };
}
