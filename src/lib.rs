// SPDX-License-Identifier: MIT OR Apache-2.0
//! operation-results
//!
//! Uniform operation results for expected failure paths. A result carries a
//! collection of severity-tagged messages and succeeds exactly when none of
//! them is an error.
//!
//! This crate re-exports the workspace members:
//!
//! - [`opres_message`]: [`Message`], [`Severity`], [`MessageCollection`],
//!   [`ProblemDetails`], [`ArgumentError`].
//! - [`opres_result`]: [`OperationResult`], [`ValueResult`], and the
//!   [`Outcome`] trait with its conversion and continuation combinators.
//!
//! ```
//! use operation_results::{Message, OperationResult, Outcome, Severity};
//!
//! let result = OperationResult::failure([
//!     Message::error("quota exceeded"),
//!     Message::warning("retry later"),
//! ])
//! .unwrap();
//!
//! assert!(!result.succeeded());
//! assert!(result.messages().has_warning());
//! assert!(!result.messages().has_severity(Severity::Information));
//! ```
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use opres_message::{
    self, ArgumentError, Details, Message, MessageBuilder, MessageCollection, MessageKind,
    ProblemDetails, Severity,
};
pub use opres_result::{self, ConvertTarget, OperationResult, Outcome, Reactions, ValueResult};
