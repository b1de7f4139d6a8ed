//! Traffic-light phases and their fixed advance cycle.

use std::fmt;
use std::str::FromStr;

use crate::error::StateError;

/// Discrete phase of the traffic light.
///
/// Phases advance in a fixed cycle `Green -> Yellow -> Red -> Green`.
/// The numeric codes match the classic tutorial encoding
/// (`GREEN = 0`, `YELLOW = 1`, `RED = 2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LightPhase {
    /// Vehicles may pass.
    Green = 0,
    /// About to turn red.
    Yellow = 1,
    /// Passing the light is penalized.
    Red = 2,
}

impl LightPhase {
    /// All phases in cycle order.
    pub const ALL: [LightPhase; 3] = [LightPhase::Green, LightPhase::Yellow, LightPhase::Red];

    /// The phase one step further along the cycle.
    ///
    /// ```
    /// use amber_core::LightPhase;
    ///
    /// assert_eq!(LightPhase::Green.next(), LightPhase::Yellow);
    /// assert_eq!(LightPhase::Red.next(), LightPhase::Green);
    /// ```
    pub fn next(self) -> Self {
        match self {
            LightPhase::Green => LightPhase::Yellow,
            LightPhase::Yellow => LightPhase::Red,
            LightPhase::Red => LightPhase::Green,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            LightPhase::Green => "green",
            LightPhase::Yellow => "yellow",
            LightPhase::Red => "red",
        }
    }

    /// Numeric phase code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Result<Self, StateError> {
        match code {
            0 => Ok(LightPhase::Green),
            1 => Ok(LightPhase::Yellow),
            2 => Ok(LightPhase::Red),
            other => Err(StateError::UnknownPhase {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for LightPhase {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LightPhase::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StateError::UnknownPhase { name: s.to_string() })
    }
}
