//! Core types for the Amber traffic-light corridor.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other layer exchanges: the [`State`] snapshot, the
//! [`LightPhase`] cycle, the [`Action`] set, and the error enums raised
//! when those values are accessed by name.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod phase;
pub mod state;

pub use action::Action;
pub use error::{ActionError, StateError};
pub use phase::LightPhase;
pub use state::{State, StateField, StateValue};
