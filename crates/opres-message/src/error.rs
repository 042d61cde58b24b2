// SPDX-License-Identifier: MIT OR Apache-2.0
//! Usage errors raised at the API boundary.
//!
//! These describe programmer mistakes (a required argument was absent, an
//! index was out of range). Domain failures are never expressed with this
//! type; they travel as [`Severity::Error`](crate::Severity::Error) messages.

/// Errors returned when a required input is absent or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// A required argument was absent (or empty where emptiness is not allowed).
    #[error("argument `{name}` is required")]
    Missing {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// A details source did not serialize to an object with named members.
    #[error("argument `{name}` must serialize to an object, found {found}")]
    NotAnObject {
        /// Name of the offending parameter.
        name: &'static str,
        /// JSON kind the source serialized to (e.g. `"array"`).
        found: &'static str,
    },

    /// A details source failed to serialize.
    #[error("argument `{name}` could not be serialized: {reason}")]
    Unserializable {
        /// Name of the offending parameter.
        name: &'static str,
        /// Serializer error text.
        reason: String,
    },

    /// An index lies outside the addressable range of a collection.
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Collection length at the time of the call.
        len: usize,
    },
}

impl ArgumentError {
    /// Name of the parameter this error refers to, when there is one.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::Missing { name }
            | Self::NotAnObject { name, .. }
            | Self::Unserializable { name, .. } => Some(name),
            Self::IndexOutOfRange { .. } => None,
        }
    }

    /// Shorthand for [`ArgumentError::Missing`].
    pub fn missing(name: &'static str) -> Self {
        tracing::debug!(target: "opres.argument", param = name, "required argument missing");
        Self::Missing { name }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(target: "opres.argument", index, len, "index out of range");
        Self::IndexOutOfRange { index, len }
    }
}
