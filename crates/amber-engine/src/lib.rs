//! Domain assembly and simulation for the Amber traffic-light corridor.
//!
//! - [`DomainConfig`] / [`Domain`]: validated, immutable problem instance
//!   for planning-style collaborators that need exact transition
//!   probabilities.
//! - [`SimulatedEnvironment`]: one mutable current state advanced by
//!   sampled steps, for learning-style collaborators.
//! - [`rollout`] / [`evaluate_policy`]: drive a [`Policy`] through a domain.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod environment;
pub mod episode;

pub use config::{ConfigError, DomainConfig};
pub use domain::Domain;
pub use environment::{SimulatedEnvironment, StepResult};
pub use episode::{evaluate_policy, rollout, Episode, EpisodeStep, Policy, PolicyEvaluation};
