//! Shared DTOs for the DanusKu client: wire shapes of the remote API plus the
//! status enums the view layer works with.

pub mod envelope;
pub mod request;
pub mod setor;
pub mod stok;
pub mod users;
