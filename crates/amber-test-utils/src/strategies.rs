//! Proptest strategies for core value types.

use amber_core::{Action, LightPhase, State};
use proptest::prelude::*;

/// Any light phase.
pub fn any_phase() -> impl Strategy<Value = LightPhase> {
    prop::sample::select(LightPhase::ALL.to_vec())
}

/// Any action.
pub fn any_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

/// Any state inside a corridor of `corridor_length` cells.
pub fn state_in(corridor_length: u32) -> impl Strategy<Value = State> {
    (0..corridor_length, any_phase()).prop_map(|(position, phase)| State::new(position, phase))
}
