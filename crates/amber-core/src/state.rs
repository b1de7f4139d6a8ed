//! The simulation state: vehicle position plus light phase.
//!
//! [`State`] is a `Copy` value type. Every "mutation" returns a new value,
//! so a state handed to a caller can never be changed behind its back and
//! a copy never aliases the original's storage.

use std::fmt;
use std::str::FromStr;

use crate::error::StateError;
use crate::phase::LightPhase;

/// Names of the state variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateField {
    /// Cell index of the vehicle along the corridor.
    Position,
    /// Current traffic-light phase.
    LightPhase,
}

impl StateField {
    /// Canonical field name.
    pub fn name(self) -> &'static str {
        match self {
            StateField::Position => "position",
            StateField::LightPhase => "light_phase",
        }
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StateField {
    type Err = StateError;

    /// Accepts the canonical names plus the short aliases `x` and `light`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" | "x" => Ok(StateField::Position),
            "light_phase" | "light" => Ok(StateField::LightPhase),
            other => Err(StateError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// A value read from or written to a [`StateField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateValue {
    /// Value of [`StateField::Position`].
    Position(u32),
    /// Value of [`StateField::LightPhase`].
    LightPhase(LightPhase),
}

impl StateValue {
    /// The field this value belongs to.
    pub fn field(self) -> StateField {
        match self {
            StateValue::Position(_) => StateField::Position,
            StateValue::LightPhase(_) => StateField::LightPhase,
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Position(p) => write!(f, "{p}"),
            StateValue::LightPhase(phase) => write!(f, "{phase}"),
        }
    }
}

impl From<u32> for StateValue {
    fn from(v: u32) -> Self {
        StateValue::Position(v)
    }
}

impl From<LightPhase> for StateValue {
    fn from(v: LightPhase) -> Self {
        StateValue::LightPhase(v)
    }
}

/// Snapshot of the corridor: where the vehicle is and what the light shows.
///
/// Equality, hashing and copying are all by value. Bounds against a
/// particular corridor are checked by the domain, not here.
///
/// # Examples
///
/// ```
/// use amber_core::{LightPhase, State, StateField, StateValue};
///
/// let s = State::new(3, LightPhase::Green);
/// let moved = s.set(StateField::Position, StateValue::Position(4)).unwrap();
///
/// assert_eq!(s.position(), 3, "the original is untouched");
/// assert_eq!(moved.get(StateField::Position), StateValue::Position(4));
/// assert_eq!(moved.light_phase(), LightPhase::Green);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    position: u32,
    light_phase: LightPhase,
}

impl State {
    const KEYS: [StateField; 2] = [StateField::Position, StateField::LightPhase];

    /// Create a state at `position` with the light showing `light_phase`.
    pub fn new(position: u32, light_phase: LightPhase) -> Self {
        Self {
            position,
            light_phase,
        }
    }

    /// Vehicle position.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Light phase.
    pub fn light_phase(&self) -> LightPhase {
        self.light_phase
    }

    /// Copy of `self` with the position replaced.
    pub fn with_position(self, position: u32) -> Self {
        Self { position, ..self }
    }

    /// Copy of `self` with the light phase replaced.
    pub fn with_light_phase(self, light_phase: LightPhase) -> Self {
        Self {
            light_phase,
            ..self
        }
    }

    /// The state variables, in declaration order.
    pub fn variable_keys() -> &'static [StateField] {
        &Self::KEYS
    }

    /// Read one field.
    pub fn get(&self, field: StateField) -> StateValue {
        match field {
            StateField::Position => StateValue::Position(self.position),
            StateField::LightPhase => StateValue::LightPhase(self.light_phase),
        }
    }

    /// Return a copy with `field` replaced by `value`.
    ///
    /// Fails with [`StateError::ValueMismatch`] when the value belongs to a
    /// different field.
    pub fn set(self, field: StateField, value: StateValue) -> Result<Self, StateError> {
        match (field, value) {
            (StateField::Position, StateValue::Position(p)) => Ok(self.with_position(p)),
            (StateField::LightPhase, StateValue::LightPhase(l)) => Ok(self.with_light_phase(l)),
            (field, value) => Err(StateError::ValueMismatch { field, value }),
        }
    }

    /// String-keyed [`get`](Self::get).
    ///
    /// Fails with [`StateError::UnknownField`] for any name other than the
    /// state variables (or their aliases).
    pub fn get_by_name(&self, name: &str) -> Result<StateValue, StateError> {
        Ok(self.get(name.parse()?))
    }

    /// String-keyed [`set`](Self::set).
    pub fn set_by_name(self, name: &str, value: StateValue) -> Result<Self, StateError> {
        self.set(name.parse()?, value)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: {}, light_phase: {}",
            self.position, self.light_phase
        )
    }
}
