// SPDX-License-Identifier: MIT OR Apache-2.0
//! Operation results: success derived from structured messages.
//!
//! [`OperationResult`] and [`ValueResult`] hold a
//! [`MessageCollection`](opres_message::MessageCollection). A result
//! succeeds exactly when it holds no `Error` message; expected failures are
//! data, not `Err` values. The [`Outcome`] trait adds conversion between
//! result shapes and fluent success/failure hooks.
//!
//! ```
//! use opres_message::Message;
//! use opres_result::{OperationResult, Outcome, ValueResult};
//!
//! fn load() -> ValueResult<u32> {
//!     ValueResult::failure([Message::error("not found")]).unwrap()
//! }
//!
//! let loaded = load();
//! let outer: OperationResult = loaded.convert_to();
//! assert!(outer.failed());
//! ```
//!
//! Results are plain owned values. Nothing here is synchronised; share a
//! result across threads only behind the caller's own lock.
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod operation;
mod outcome;
mod value;

pub use operation::OperationResult;
pub use outcome::{ConvertTarget, Outcome, Reactions};
pub use value::ValueResult;
