//! Deposit-status engine: pure view-model pipeline behind the admin
//! "Kelola User" screens.
//!
//! Everything here is a total function of its inputs. I/O, timers and error
//! surfaces live in the `client` crate; this crate only classifies,
//! aggregates, filters, sorts and paginates.

pub mod filter;
pub mod page;
pub mod remaining;
pub mod status;
pub mod summary;
pub mod view;

pub use filter::UserFilter;
pub use remaining::ClaimError;
pub use view::{compute_view, StatusCounts, ViewModel, ViewQuery};
