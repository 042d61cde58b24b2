// SPDX-License-Identifier: MIT OR Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical tag attached to every [`Message`](crate::Message).
///
/// Severities are used for filtering only. They have no ordering: an
/// `Error` is not "greater" than a `Warning`, it is simply a different kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The operation failed. Any message of this severity makes a result fail.
    Error,
    /// Something deserves attention but did not prevent success.
    Warning,
    /// Informational note.
    Information,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 3] = [Self::Error, Self::Warning, Self::Information];

    /// Stable lowercase name (`"error"`, `"warning"`, `"information"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
