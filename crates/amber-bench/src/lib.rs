//! Benchmark profiles for the Amber traffic-light corridor.
//!
//! - [`reference_profile`]: the 11-cell tutorial corridor
//! - [`stress_profile`]: a long corridor for reachability and rollout cost
//! - [`all_states`]: every state of a profile, in position-major order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use amber_core::{LightPhase, State};
use amber_engine::DomainConfig;

/// Number of cells in [`stress_profile`].
pub const STRESS_CORRIDOR_LENGTH: u32 = 10_000;

/// The tutorial corridor: 11 cells, goal at 10, light at 6.
pub fn reference_profile() -> DomainConfig {
    DomainConfig::tutorial()
}

/// A [`STRESS_CORRIDOR_LENGTH`]-cell corridor with the goal at the far
/// end and the light in the middle.
pub fn stress_profile() -> DomainConfig {
    DomainConfig::tutorial()
        .with_corridor_length(STRESS_CORRIDOR_LENGTH)
        .with_goal_position(STRESS_CORRIDOR_LENGTH - 1)
        .with_light_position(STRESS_CORRIDOR_LENGTH / 2)
}

/// Every `(position, phase)` pair of a `config`'s corridor.
pub fn all_states(config: &DomainConfig) -> Vec<State> {
    (0..config.corridor_length)
        .flat_map(|p| LightPhase::ALL.into_iter().map(move |ph| State::new(p, ph)))
        .collect()
}
