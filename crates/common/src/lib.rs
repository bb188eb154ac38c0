//! Shared types for the token-gate service.

pub mod types;

pub use types::StatusResponse;
