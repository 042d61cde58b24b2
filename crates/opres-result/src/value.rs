// SPDX-License-Identifier: MIT OR Apache-2.0
use opres_message::{ArgumentError, Message, MessageCollection, ProblemDetails, Severity};

use crate::{ConvertTarget, Outcome};

/// Result of an operation that may produce a value of type `T`.
///
/// The value slot is independent of success: a successful result may have no
/// value, and a failed one may still carry a partial value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueResult<T> {
    messages: MessageCollection,
    value: Option<T>,
}

impl<T> Default for ValueResult<T> {
    fn default() -> Self {
        Self {
            messages: MessageCollection::new(),
            value: None,
        }
    }
}

impl<T> ValueResult<T> {
    /// Successful result with no messages and no value.
    pub fn success() -> Self {
        Self::default()
    }

    /// Successful result with no messages holding `value`.
    pub fn success_with(value: T) -> Self {
        Self {
            messages: MessageCollection::new(),
            value: Some(value),
        }
    }

    /// Result holding `messages` in order and no value.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Missing`] naming `messages` when the list is empty,
    /// the same rule as [`OperationResult::failure`](crate::OperationResult::failure).
    pub fn failure<I>(messages: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = Message>,
    {
        let messages: MessageCollection = messages.into_iter().collect();
        if messages.is_empty() {
            return Err(ArgumentError::missing("messages"));
        }
        Ok(Self {
            messages,
            value: None,
        })
    }

    /// Failed result holding one message captured from `error`.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::from_message(Message::from_error(error))
    }

    /// Failed result holding one `Error` problem-details message.
    pub fn from_problem_details(problem: ProblemDetails) -> Self {
        Self::from_problem_details_with_severity(problem, Severity::Error)
    }

    /// Result holding one problem-details message of the given severity.
    pub fn from_problem_details_with_severity(problem: ProblemDetails, severity: Severity) -> Self {
        Self::from_message(Message::from_problem_details(problem, severity))
    }

    fn from_message(message: Message) -> Self {
        let mut result = Self::default();
        result.messages.push(message);
        result
    }

    /// Mutable access to the messages. The collection itself is never replaced.
    pub fn messages_mut(&mut self) -> &mut MessageCollection {
        &mut self.messages
    }

    /// The value, if one is set.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the value, if one is set.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Set the value, returning the previous one.
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Remove and return the value, leaving the slot empty.
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Whether a value is set.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Consume the result, keeping only the value.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Split into messages and value.
    pub fn into_parts(self) -> (MessageCollection, Option<T>) {
        (self.messages, self.value)
    }

    /// Bridge to `std::result::Result`.
    ///
    /// `Ok` with the (possibly absent) value when the result succeeded,
    /// otherwise `Err` with the messages. A partial value on a failed result
    /// is dropped.
    pub fn into_result(self) -> Result<Option<T>, MessageCollection> {
        if self.succeeded() {
            Ok(self.value)
        } else {
            Err(self.messages)
        }
    }

    /// Transform the value, keeping the messages.
    pub fn map_value<U, F>(self, f: F) -> ValueResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ValueResult {
            messages: self.messages,
            value: self.value.map(f),
        }
    }
}

impl<T> Outcome for ValueResult<T> {
    fn messages(&self) -> &MessageCollection {
        &self.messages
    }
}

impl<T> ConvertTarget for ValueResult<T> {
    fn from_messages(messages: MessageCollection) -> Self {
        Self {
            messages,
            value: None,
        }
    }
}
