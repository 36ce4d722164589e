//! # API crate — remote user records
//!
//! Loads the user collection the directory view displays. There is a single
//! request, issued once at startup; the caller decides what to do with a
//! failure.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`fetch_users`] | GET the configured endpoint and decode the body. |
//! | [`decode_users`] | Decode a JSON body into [`store::User`]s. |
//! | [`FetchError`] | Transport, status, and decode failures. |

mod error;
mod users;

pub use error::FetchError;
pub use users::{decode_users, fetch_users};
