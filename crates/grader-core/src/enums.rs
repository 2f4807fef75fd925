//! Problem kinds and conversation roles.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The serialized form is also the value stored in SQL and emitted by the
//! analysis service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProblemType
// ---------------------------------------------------------------------------

/// How a problem is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Essay,
    MultipleChoices,
}

impl ProblemType {
    /// Return the string representation used in SQL storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Essay => "essay",
            Self::MultipleChoices => "multiple_choices",
        }
    }

    /// Human-facing label used in review output and tutoring prompts.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Essay => "Essay",
            Self::MultipleChoices => "Multiple choice",
        }
    }

    /// Match one of the two exact wire tokens. Anything else, including
    /// different casing, is rejected.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "essay" => Some(Self::Essay),
            "multiple_choices" => Some(Self::MultipleChoices),
            _ => None,
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Author of a message in a tutoring conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
