// SPDX-License-Identifier: MIT OR Apache-2.0
//! Severity-tagged messages for operation results.
//!
//! A [`Message`] pairs a [`Severity`] with an insertion-ordered map of
//! details. Messages are collected in a [`MessageCollection`], which answers
//! whether any error, warning, or information message is present.
//!
//! Messages can be built directly, from any `serde::Serialize` value
//! ([`Message::from_object`]), from a `std::error::Error`
//! ([`Message::from_error`]), or from an RFC 7807 [`ProblemDetails`] payload.
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod error;
mod message;
mod problem;
mod severity;

pub use collection::MessageCollection;
pub use error::ArgumentError;
pub use message::{
    Details, MESSAGE_KEY, Message, MessageBuilder, MessageKind, SOURCES_KEY, TYPE_KEY,
};
pub use problem::ProblemDetails;
pub use severity::Severity;
