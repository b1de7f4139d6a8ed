//! Dynamics, rewards and termination for the Amber traffic-light corridor.
//!
//! The capability traits ([`TransitionModel`], [`RewardFunction`],
//! [`TerminalPredicate`]) are what planning and learning collaborators
//! program against. The concrete corridor implementations compose as:
//!
//! 1. [`Corridor`]: deterministic motion, clamped at both ends.
//! 2. [`LightProcess`]: one Bernoulli phase trial per step.
//! 3. [`CorridorTransition`]: 1 + 2, sampled or fully enumerated.
//! 4. [`CorridorReward`] and [`GoalTerminal`]: functions of the resulting state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod light;
pub mod motion;
pub mod reward;
pub mod terminal;
pub mod traits;
pub mod transition;

pub use light::{LightProcess, PhaseProbabilities};
pub use motion::Corridor;
pub use reward::{CorridorReward, RewardCoefficients};
pub use terminal::GoalTerminal;
pub use traits::{RewardFunction, TerminalPredicate, TransitionModel};
pub use transition::{CorridorTransition, Outcome, Outcomes};
