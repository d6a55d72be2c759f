//! Evaluation outcome, reduced to display text.

use std::fmt;

/// Result of evaluating a snippet against the runtime.
///
/// Both variants carry an opaque string rendered by the runtime; nothing
/// here inspects structure beyond that. A failed evaluation is still an
/// outcome, not an error: the failure text is what gets displayed or
/// inserted, exactly like a successful result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    /// The display text for this outcome, whichever variant it is.
    pub fn render(&self) -> &str {
        match self {
            Outcome::Success(text) => text,
            Outcome::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
