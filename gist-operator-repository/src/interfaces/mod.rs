//! Interface definitions for the search cluster's administrative API.
//!
//! The reconcilers only talk to these traits, so the cluster and the way
//! sessions are built can be swapped out in tests.

mod index_admin;
mod session_factory;

pub use index_admin::IndexAdmin;
pub use session_factory::SessionFactory;
