//! I/O side of the DanusKu client: the HTTP API, configuration, the search
//! debouncer, the pending-request poller, and the admin approval inbox.
//!
//! All mutations happen server-side; this crate only fetches, recomputes via
//! the `engine` crate, and re-fetches after server acknowledgments.

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod inbox;
pub mod poll;
pub mod view_state;

pub use api::DanusApi;
pub use error::ApiError;
