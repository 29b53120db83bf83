//! Core model – friends, balances, and the two form models.
//!
//! Nothing in this module depends on any TUI or rendering crate, so every
//! type here can be driven directly from tests.

pub mod error;
pub mod forms;
pub mod friend;
pub mod text_field;
