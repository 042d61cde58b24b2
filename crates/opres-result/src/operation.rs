// SPDX-License-Identifier: MIT OR Apache-2.0
use opres_message::{ArgumentError, Message, MessageCollection, ProblemDetails, Severity};

use crate::{ConvertTarget, Outcome, ValueResult};

/// Result of an operation that produces no value.
///
/// Build one through the factories ([`success`](Self::success),
/// [`failure`](Self::failure), [`from_error`](Self::from_error),
/// [`from_problem_details`](Self::from_problem_details)); success is always
/// derived from the messages, see [`Outcome`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationResult {
    messages: MessageCollection,
}

impl OperationResult {
    /// Successful result with no messages.
    pub fn success() -> Self {
        Self::default()
    }

    /// Result holding `messages` in order.
    ///
    /// The result fails only if at least one message has `Error` severity.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Missing`] naming `messages` when the list is empty.
    pub fn failure<I>(messages: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = Message>,
    {
        let messages: MessageCollection = messages.into_iter().collect();
        if messages.is_empty() {
            return Err(ArgumentError::missing("messages"));
        }
        Ok(Self { messages })
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

    /// Consume the result, keeping its messages.
    pub fn into_messages(self) -> MessageCollection {
        self.messages
    }
}

impl Outcome for OperationResult {
    fn messages(&self) -> &MessageCollection {
        &self.messages
    }
}

impl ConvertTarget for OperationResult {
    fn from_messages(messages: MessageCollection) -> Self {
        Self { messages }
    }
}

impl<T> From<ValueResult<T>> for OperationResult {
    /// Drop the value and keep the messages.
    fn from(result: ValueResult<T>) -> Self {
        let (messages, _) = result.into_parts();
        Self { messages }
    }
}
