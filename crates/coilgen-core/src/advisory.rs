use std::fmt;

use serde::{Deserialize, Serialize};

/// A condition worth reporting that does not stop generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Adjacent turns would touch or overlap.
    NonPositiveSpacing { spacing: f64 },
    /// The square generator can only close whole turns.
    TurnsTruncated { requested: f64, used: u32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NonPositiveSpacing { spacing } => {
                write!(f, "line spacing <= 0 ({spacing:.3} mm); adjacent turns overlap")
            }
            Advisory::TurnsTruncated { requested, used } => write!(
                f,
                "square coil can only have an integer number of turns; reducing n_turns from {requested} to {used}"
            ),
        }
    }
}
