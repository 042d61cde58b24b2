// SPDX-License-Identifier: MIT OR Apache-2.0
//! Severity-tagged messages with ordered details.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::{ArgumentError, ProblemDetails, Severity};

/// Insertion-ordered details attached to a [`Message`].
pub type Details = serde_json::Map<String, Value>;

/// Detail key holding the human-readable text of a message.
pub const MESSAGE_KEY: &str = "message";
/// Detail key holding the `Display` text of an error's source chain.
pub const SOURCES_KEY: &str = "sources";
/// Detail key holding the Rust type name of a captured error.
pub const TYPE_KEY: &str = "type";

/// Where a [`Message`] came from.
///
/// The set is closed so consumers can match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    /// Built directly from a severity and details.
    Plain,
    /// Captured from a [`std::error::Error`]. Severity is always `Error`.
    Exception {
        /// Type name of the captured error, when it was known statically.
        type_name: Option<String>,
    },
    /// Built from an RFC 7807 payload.
    ProblemDetails(ProblemDetails),
}

/// A severity plus an ordered map of named details.
///
/// Messages are immutable once built; only accessors are exposed.
///
/// ```
/// use opres_message::{Message, Severity};
///
/// let msg = Message::builder(Severity::Warning)
///     .detail("message", "disk almost full")
///     .detail("free_mb", 120)
///     .build();
/// assert_eq!(msg.text(), Some("disk almost full"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    severity: Severity,
    details: Details,
    kind: MessageKind,
}

impl Message {
    /// Message with no details.
    pub fn new(severity: Severity) -> Self {
        Self::with_details(severity, Details::new())
    }

    /// Message storing `details` as given.
    pub fn with_details(severity: Severity, details: Details) -> Self {
        Self {
            severity,
            details,
            kind: MessageKind::Plain,
        }
    }

    /// Like [`Message::with_details`], but the map may be absent.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Missing`] naming `details` when `details` is `None`.
    pub fn try_with_details(
        severity: Severity,
        details: Option<Details>,
    ) -> Result<Self, ArgumentError> {
        match details {
            Some(details) => Ok(Self::with_details(severity, details)),
            None => Err(ArgumentError::missing("details")),
        }
    }

    /// Populate details from the members of any serializable value.
    ///
    /// Top-level members are inserted under their serialized names in the
    /// order the value emits them. Named structs and ad-hoc
    /// `serde_json::json!` objects behave the same way. With `ignore_null`,
    /// members that serialize to `null` are left out entirely.
    ///
    /// Unit structs and `()` serialize to `null` and are therefore treated as
    /// absent. Use an empty braced struct (`struct Empty {}`) or
    /// `json!({})` for a message with no details.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::Missing`] when `source` is `None` or serializes to `null`.
    /// - [`ArgumentError::NotAnObject`] when it serializes to a scalar or sequence.
    /// - [`ArgumentError::Unserializable`] when its `Serialize` impl fails.
    pub fn from_object<T>(
        severity: Severity,
        source: Option<&T>,
        ignore_null: bool,
    ) -> Result<Self, ArgumentError>
    where
        T: Serialize + ?Sized,
    {
        let source = source.ok_or_else(|| ArgumentError::missing("details"))?;
        let value = serde_json::to_value(source).map_err(|e| {
            tracing::debug!(
                target: "opres.argument",
                param = "details",
                error = %e,
                "details source failed to serialize"
            );
            ArgumentError::Unserializable {
                name: "details",
                reason: e.to_string(),
            }
        })?;
        let members = match value {
            Value::Object(members) => members,
            Value::Null => return Err(ArgumentError::missing("details")),
            other => {
                let found = json_kind(&other);
                tracing::debug!(
                    target: "opres.argument",
                    param = "details",
                    found,
                    "details source is not an object"
                );
                return Err(ArgumentError::NotAnObject {
                    name: "details",
                    found,
                });
            }
        };
        let details = if ignore_null {
            members.into_iter().filter(|(_, v)| !v.is_null()).collect()
        } else {
            members
        };
        Ok(Self::with_details(severity, details))
    }

    /// Start a [`MessageBuilder`].
    pub fn builder(severity: Severity) -> MessageBuilder {
        MessageBuilder {
            severity,
            details: Details::new(),
        }
    }

    /// `Error` message whose text is stored under [`MESSAGE_KEY`].
    pub fn error(text: impl Into<String>) -> Self {
        Self::with_text(Severity::Error, text)
    }

    /// `Warning` message whose text is stored under [`MESSAGE_KEY`].
    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_text(Severity::Warning, text)
    }

    /// `Information` message whose text is stored under [`MESSAGE_KEY`].
    pub fn information(text: impl Into<String>) -> Self {
        Self::with_text(Severity::Information, text)
    }

    fn with_text(severity: Severity, text: impl Into<String>) -> Self {
        let mut details = Details::new();
        details.insert(MESSAGE_KEY.to_string(), Value::String(text.into()));
        Self::with_details(severity, details)
    }

    /// Capture an error as an `Error` message.
    ///
    /// Details hold the error's `Display` text under [`MESSAGE_KEY`] and, when
    /// the error has causes, their texts under [`SOURCES_KEY`].
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self {
            severity: Severity::Error,
            details: error_details(error),
            kind: MessageKind::Exception { type_name: None },
        }
    }

    /// Like [`Message::from_error`], also recording the error's type name.
    pub fn from_typed_error<E>(error: &E) -> Self
    where
        E: std::error::Error,
    {
        let type_name = std::any::type_name::<E>().to_string();
        let mut details = error_details(error);
        details.insert(TYPE_KEY.to_string(), Value::String(type_name.clone()));
        Self {
            severity: Severity::Error,
            details,
            kind: MessageKind::Exception {
                type_name: Some(type_name),
            },
        }
    }

    /// Capture an error and merge extra properties and metrics into details.
    ///
    /// Merged entries never replace keys already taken by the error itself.
    /// Non-finite metrics (`NaN`, infinities) have no JSON number form and are
    /// skipped.
    pub fn from_error_with<E>(
        error: &E,
        properties: Details,
        metrics: BTreeMap<String, f64>,
    ) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut msg = Self::from_error(error);
        for (key, value) in properties {
            msg.details.entry(key).or_insert(value);
        }
        for (key, value) in metrics {
            if let Some(number) = serde_json::Number::from_f64(value) {
                msg.details.entry(key).or_insert(Value::Number(number));
            }
        }
        msg
    }

    /// Message built from a problem details payload.
    pub fn from_problem_details(problem: ProblemDetails, severity: Severity) -> Self {
        Self {
            severity,
            details: problem.to_details(),
            kind: MessageKind::ProblemDetails(problem),
        }
    }

    /// Severity of this message.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// All details in insertion order.
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// One detail by key.
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    /// Origin of this message.
    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    /// Text stored under [`MESSAGE_KEY`], if it is a string.
    pub fn text(&self) -> Option<&str> {
        self.details.get(MESSAGE_KEY).and_then(Value::as_str)
    }

    /// `true` for `Error` severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `true` for `Warning` severity.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// `true` for `Information` severity.
    pub fn is_information(&self) -> bool {
        self.severity == Severity::Information
    }

    /// Consume the message, keeping its details.
    pub fn into_details(self) -> Details {
        self.details
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.severity)?;
        if let Some(text) = self.text() {
            write!(f, " {text}")
        } else if !self.details.is_empty() {
            match serde_json::to_string(&self.details) {
                Ok(json) => write!(f, " {json}"),
                Err(_) => Ok(()),
            }
        } else {
            Ok(())
        }
    }
}

/// Fluent builder returned by [`Message::builder`].
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    severity: Severity,
    details: Details,
}

impl MessageBuilder {
    /// Add a detail. Values that fail to serialize are skipped.
    #[must_use]
    pub fn detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.details.insert(key.into(), v);
        }
        self
    }

    /// Finish the message.
    pub fn build(self) -> Message {
        Message::with_details(self.severity, self.details)
    }
}

fn error_details<E>(error: &E) -> Details
where
    E: std::error::Error + ?Sized,
{
    let mut details = Details::new();
    details.insert(MESSAGE_KEY.to_string(), Value::String(error.to_string()));
    let mut sources = Vec::new();
    let mut cause = error.source();
    while let Some(err) = cause {
        sources.push(Value::String(err.to_string()));
        cause = err.source();
    }
    if !sources.is_empty() {
        details.insert(SOURCES_KEY.to_string(), Value::Array(sources));
    }
    details
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
