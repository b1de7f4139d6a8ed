//! Transition model: corridor motion composed with the light process.

use amber_core::{Action, State};
use rand::RngCore;
use smallvec::SmallVec;

use crate::light::LightProcess;
use crate::motion::Corridor;
use crate::traits::TransitionModel;

/// One successor state and its probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    /// The successor.
    pub state: State,
    /// Probability mass, in `(0, 1]`.
    pub probability: f64,
}

/// Enumerated successor distribution.
///
/// The corridor dynamics have at most two successors (light holds or
/// advances), so the list never spills to the heap.
pub type Outcomes = SmallVec<[Outcome; 2]>;

/// Transition model of the traffic-light corridor.
///
/// Position moves deterministically via [`Corridor::resolve`]; the light
/// independently holds or advances via [`LightProcess`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorridorTransition {
    corridor: Corridor,
    light: LightProcess,
}

impl CorridorTransition {
    /// Compose a corridor and a light process.
    pub fn new(corridor: Corridor, light: LightProcess) -> Self {
        Self { corridor, light }
    }

    /// The motion component.
    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    /// The light component.
    pub fn light(&self) -> &LightProcess {
        &self.light
    }
}

impl TransitionModel for CorridorTransition {
    fn sample(&self, state: State, action: Action, rng: &mut dyn RngCore) -> State {
        let position = self.corridor.resolve(state.position(), action);
        let phase = self.light.sample(state.light_phase(), rng);
        State::new(position, phase)
    }

    /// Branches with exactly zero mass are omitted, so a light with
    /// `p == 0.0` or `p == 1.0` yields a single outcome of probability 1.
    fn enumerate(&self, state: State, action: Action) -> Outcomes {
        let phase = state.light_phase();
        let p = self.light.advance_probability(phase);
        let moved = self.corridor.resolve(state.position(), action);

        let mut outcomes = Outcomes::new();
        if p != 1.0 {
            outcomes.push(Outcome {
                state: State::new(moved, phase),
                probability: 1.0 - p,
            });
        }
        if p != 0.0 {
            outcomes.push(Outcome {
                state: State::new(moved, self.light.advance(phase)),
                probability: p,
            });
        }
        outcomes
    }
}
