//! Goal-reached terminal predicate.

use amber_core::State;

use crate::traits::TerminalPredicate;

/// Ends the episode when the vehicle stands on the goal cell.
///
/// The light phase plays no part in the decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalTerminal {
    goal_position: u32,
}

impl GoalTerminal {
    /// Terminal at `goal_position`.
    pub fn new(goal_position: u32) -> Self {
        Self { goal_position }
    }

    /// The goal cell.
    pub fn goal_position(&self) -> u32 {
        self.goal_position
    }
}

impl TerminalPredicate for GoalTerminal {
    fn is_terminal(&self, state: State) -> bool {
        state.position() == self.goal_position
    }
}
