//! Error types for the gist operator repository.
//!
//! Every administrative verb fails with an [`AdminError`]; building a session
//! fails with a [`ConnectionError`].

mod admin_error;

pub use admin_error::{AdminError, ConnectionError, RemoteError};
