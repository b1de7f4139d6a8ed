//! Error types for state access and action lookup.
//!
//! Configuration errors live with the configuration in `amber-engine`;
//! this module only covers failures that can arise from the value types
//! themselves.

use std::error::Error;
use std::fmt;

use crate::state::{StateField, StateValue};

/// Errors from reading, writing, or validating a [`State`](crate::State).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The field name is not one of the state variables.
    UnknownField {
        /// The name that was looked up.
        name: String,
    },
    /// `set` was given a value whose kind does not match the field.
    ValueMismatch {
        /// The field being written.
        field: StateField,
        /// The rejected value.
        value: StateValue,
    },
    /// A light phase name or code did not match any phase.
    UnknownPhase {
        /// The name (or numeric code, rendered) that failed to parse.
        name: String,
    },
    /// A caller-supplied state lies outside the corridor.
    PositionOutOfBounds {
        /// The offending position.
        position: u32,
        /// Number of cells in the corridor.
        corridor_length: u32,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { name } => write!(f, "unknown state field '{name}'"),
            Self::ValueMismatch { field, value } => {
                write!(f, "value {value} cannot be assigned to field '{field}'")
            }
            Self::UnknownPhase { name } => write!(f, "unknown light phase '{name}'"),
            Self::PositionOutOfBounds {
                position,
                corridor_length,
            } => write!(
                f,
                "position {position} outside corridor [0, {corridor_length})"
            ),
        }
    }
}

impl Error for StateError {}

/// Errors from resolving an action by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The name does not identify one of the admissible actions.
    Unknown {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown action '{name}'"),
        }
    }
}

impl Error for ActionError {}
