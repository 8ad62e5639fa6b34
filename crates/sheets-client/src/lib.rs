//! Resilient data client for the mutabaah journal's spreadsheet backend.
//!
//! A single Apps Script deployment URL serves every action; this crate wraps
//! it with:
//! - a [`RetryPolicy`]-driven exponential-backoff loop for transient
//!   failures ([`retry::execute_with_policy`]),
//! - the `{status, data, message}` response envelope ([`ApiResponse`]),
//! - the [`JournalApi`] seam shared by the live [`SheetsClient`] and the
//!   offline [`MockBackend`].
//!
//! Failure semantics: a surfaced error always means "operation did not
//! complete"; there is no partial-write detection, so a submission that
//! times out after the backend recorded it is indistinguishable from one
//! that never landed.

pub mod api;
pub mod client;
pub mod envelope;
pub mod errors;
pub mod mock;
pub mod retry;

pub use api::JournalApi;
pub use client::{SheetsClient, SheetsClientConfig};
pub use envelope::{ApiResponse, ResponseStatus};
pub use errors::{ClientError, Result};
pub use mock::MockBackend;
pub use retry::{execute_with_policy, RetryPolicy};
