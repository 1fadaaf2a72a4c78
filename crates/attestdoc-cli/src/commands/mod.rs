//! CLI command implementations.

pub mod extract;
pub mod inspect;
pub mod issue;
pub mod verify;
