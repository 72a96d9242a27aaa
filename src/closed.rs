use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::IntervalError;

/// Which endpoints of an interval are included.
///
/// The relational predicates never look at the variant itself, only at the
/// two side booleans derived from it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Closed {
    Left,
    #[default]
    Right,
    Both,
    Neither,
}

impl Closed {
    pub const ALL: [Closed; 4] = [Closed::Left, Closed::Right, Closed::Both, Closed::Neither];

    pub fn from_sides(closed_left: bool, closed_right: bool) -> Closed {
        match (closed_left, closed_right) {
            (true, true) => Closed::Both,
            (true, false) => Closed::Left,
            (false, true) => Closed::Right,
            (false, false) => Closed::Neither,
        }
    }

    pub fn closed_left(self) -> bool {
        matches!(self, Closed::Left | Closed::Both)
    }

    pub fn closed_right(self) -> bool {
        matches!(self, Closed::Right | Closed::Both)
    }

    pub fn open_left(self) -> bool {
        !self.closed_left()
    }

    pub fn open_right(self) -> bool {
        !self.closed_right()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Closed::Left => "left",
            Closed::Right => "right",
            Closed::Both => "both",
            Closed::Neither => "neither",
        }
    }
}

impl fmt::Display for Closed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Closed {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Closed::Left),
            "right" => Ok(Closed::Right),
            "both" => Ok(Closed::Both),
            "neither" => Ok(Closed::Neither),
            other => Err(IntervalError::Value(format!(
                "invalid option for 'closed': {}",
                other
            ))),
        }
    }
}
