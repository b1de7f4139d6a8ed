//! The three admissible control inputs.

use std::fmt;
use std::str::FromStr;

use crate::error::ActionError;

/// A control input applied to the vehicle for one step.
///
/// Actions carry no payload; they are identified by name alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move one cell toward the goal.
    Forward,
    /// Move one cell away from the goal.
    Reverse,
    /// Hold position.
    Stop,
}

impl Action {
    /// The full action set, in the order a domain advertises it.
    pub const ALL: [Action; 3] = [Action::Forward, Action::Reverse, Action::Stop];

    /// Signed cell offset applied by this action.
    pub fn direction(self) -> i64 {
        match self {
            Action::Stop => 0,
            Action::Forward => 1,
            Action::Reverse => -1,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Reverse => "reverse",
            Action::Stop => "stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ActionError::Unknown { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions() {
        assert_eq!(Action::Stop.direction(), 0);
        assert_eq!(Action::Forward.direction(), 1);
        assert_eq!(Action::Reverse.direction(), -1);
    }

    #[test]
    fn names_parse_back() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>(), Ok(action));
            assert_eq!(action.to_string(), action.name());
        }
        assert_eq!("Forward".parse::<Action>(), Ok(Action::Forward));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "accelerate".parse::<Action>().unwrap_err();
        assert_eq!(
            err,
            ActionError::Unknown {
                name: "accelerate".into()
            }
        );
    }
}
