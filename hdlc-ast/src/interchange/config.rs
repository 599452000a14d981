//! Serializer configuration

use serde::{Deserialize, Serialize};

/// Spelling of the assignment discriminator.
///
/// Existing consumers of the interchange tree match on the legacy
/// `"ASSIGMENT"` string; `Corrected` emits `"ASSIGNMENT"`. The decoder
/// accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentTag {
    #[default]
    Legacy,
    Corrected,
}

impl AssignmentTag {
    pub const LEGACY: &'static str = "ASSIGMENT";
    pub const CORRECTED: &'static str = "ASSIGNMENT";

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentTag::Legacy => Self::LEGACY,
            AssignmentTag::Corrected => Self::CORRECTED,
        }
    }
}

/// Options for `TreeSerializer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SerializerConfig {
    #[serde(default)]
    pub assignment_tag: AssignmentTag,
}

impl SerializerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignment_tag(mut self, assignment_tag: AssignmentTag) -> Self {
        self.assignment_tag = assignment_tag;
        self
    }
}
