// SPDX-License-Identifier: MIT OR Apache-2.0
//! The [`Outcome`] capability shared by every result shape, plus the
//! conversion and continuation combinators built on it.

use std::fmt;

use opres_message::MessageCollection;

use crate::ValueResult;

/// Anything that carries a [`MessageCollection`] and derives success from it.
///
/// Success is never stored: a result succeeds exactly when none of its
/// messages has `Error` severity. Warnings and information messages do not
/// affect it, and an empty result always succeeds.
///
/// Implemented for [`OperationResult`](crate::OperationResult),
/// [`ValueResult`], and for shared or mutable references to either, so the
/// combinators work on owned and borrowed results alike.
pub trait Outcome {
    /// Messages produced by the operation.
    fn messages(&self) -> &MessageCollection;

    /// `true` when no message has `Error` severity.
    fn succeeded(&self) -> bool {
        !self.messages().has_error()
    }

    /// Negation of [`succeeded`](Outcome::succeeded).
    fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// Whether any message is present, whatever its severity.
    fn has_messages(&self) -> bool {
        !self.messages().is_empty()
    }

    /// Call `f` if the result succeeded, then hand the result back.
    fn on_success<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&Self),
    {
        if self.succeeded() {
            f(&self);
        }
        self
    }

    /// Call `f` if the result failed, then hand the result back.
    fn on_failure<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&Self),
    {
        if !self.succeeded() {
            f(&self);
        }
        self
    }

    /// Run whichever of the supplied reactions matches the outcome.
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// use opres_result::{OperationResult, Outcome, Reactions};
    ///
    /// let seen = Cell::new(None);
    /// OperationResult::success().on(
    ///     Reactions::new()
    ///         .success(|_| seen.set(Some("ok")))
    ///         .failure(|_| seen.set(Some("failed"))),
    /// );
    /// assert_eq!(seen.get(), Some("ok"));
    /// ```
    fn on(self, reactions: Reactions<'_, Self>) -> Self
    where
        Self: Sized,
    {
        let Reactions { success, failure } = reactions;
        let mut result = self;
        if let Some(f) = success {
            result = result.on_success(f);
        }
        if let Some(f) = failure {
            result = result.on_failure(f);
        }
        result
    }

    /// Build a result of another shape carrying a copy of these messages.
    ///
    /// The source is left untouched and the copy is independent of it. A
    /// value-carrying target starts without a value.
    fn convert_to<R>(&self) -> R
    where
        Self: Sized,
        R: ConvertTarget,
    {
        let messages = self.messages().clone();
        tracing::trace!(
            target: "opres.result",
            messages = messages.len(),
            succeeded = !messages.has_error(),
            target_shape = std::any::type_name::<R>(),
            "converting result"
        );
        R::from_messages(messages)
    }

    /// [`convert_to`](Outcome::convert_to) with a value-carrying target of `U`.
    fn convert_to_value<U>(&self) -> ValueResult<U>
    where
        Self: Sized,
    {
        self.convert_to()
    }
}

impl<R: Outcome + ?Sized> Outcome for &R {
    fn messages(&self) -> &MessageCollection {
        (**self).messages()
    }
}

impl<R: Outcome + ?Sized> Outcome for &mut R {
    fn messages(&self) -> &MessageCollection {
        (**self).messages()
    }
}

/// A result shape that [`Outcome::convert_to`] can produce.
pub trait ConvertTarget: Outcome + Sized {
    /// Wrap an already-owned collection. Any value slot starts empty.
    fn from_messages(messages: MessageCollection) -> Self;
}

/// Optional success and failure callbacks for [`Outcome::on`].
///
/// A branch without a callback is skipped.
pub struct Reactions<'a, R> {
    success: Option<Box<dyn FnOnce(&R) + 'a>>,
    failure: Option<Box<dyn FnOnce(&R) + 'a>>,
}

impl<'a, R> Reactions<'a, R> {
    /// No callbacks.
    pub fn new() -> Self {
        Self {
            success: None,
            failure: None,
        }
    }

    /// Callback for a successful result.
    #[must_use]
    pub fn success(mut self, f: impl FnOnce(&R) + 'a) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    /// Callback for a failed result.
    #[must_use]
    pub fn failure(mut self, f: impl FnOnce(&R) + 'a) -> Self {
        self.failure = Some(Box::new(f));
        self
    }
}

impl<R> Default for Reactions<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Reactions<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reactions")
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationResult;
    use opres_message::Message;
    use std::cell::Cell;

    fn failed() -> OperationResult {
        OperationResult::failure([Message::error("nope")]).unwrap()
    }

    #[test]
    fn on_success_runs_once_for_success() {
        let calls = Cell::new(0);
        OperationResult::success().on_success(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn on_success_skips_failure() {
        let calls = Cell::new(0);
        failed().on_success(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn on_failure_runs_once_for_failure() {
        let calls = Cell::new(0);
        failed().on_failure(|r| {
            assert!(r.has_messages());
            calls.set(calls.get() + 1);
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn on_failure_skips_success() {
        let calls = Cell::new(0);
        OperationResult::success().on_failure(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn combinators_return_the_same_result() {
        let original = failed();
        let returned = original
            .clone()
            .on_success(|_| {})
            .on_failure(|_| {});
        assert_eq!(returned, original);
    }

    #[test]
    fn borrowed_results_chain() {
        let result = failed();
        let hits = Cell::new(0);
        let back: &OperationResult = (&result)
            .on_failure(|_| hits.set(hits.get() + 1))
            .on_success(|_| hits.set(hits.get() + 10));
        assert!(std::ptr::eq(back, &result));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn on_with_no_reactions_is_a_no_op() {
        let result = failed().on(Reactions::new());
        assert!(result.failed());
    }

    #[test]
    fn on_runs_only_the_matching_branch() {
        let branch = Cell::new("");
        failed().on(
            Reactions::new()
                .success(|_| branch.set("success"))
                .failure(|_| branch.set("failure")),
        );
        assert_eq!(branch.get(), "failure");
    }

    #[test]
    fn on_shares_state_between_both_branches() {
        let seen = Cell::new(None);
        OperationResult::success().on(
            Reactions::new()
                .success(|_| seen.set(Some("ok")))
                .failure(|_| seen.set(Some("failed"))),
        );
        assert_eq!(seen.get(), Some("ok"));
    }

    #[test]
    fn reactions_debug_shows_presence() {
        let r: Reactions<'_, OperationResult> = Reactions::new().failure(|_| {});
        assert_eq!(format!("{r:?}"), "Reactions { success: false, failure: true }");
    }

    #[test]
    fn warnings_do_not_fail() {
        let mut result = OperationResult::success();
        result.messages_mut().push(Message::warning("careful"));
        result.messages_mut().push(Message::information("fyi"));
        assert!(result.succeeded());
        assert!(result.has_messages());
    }
}
