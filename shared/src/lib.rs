//! Shared types for the order desk
//!
//! Order records, the status and platform vocabularies, filter criteria
//! and the error types used across the workspace.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Order, OrderItem};
pub use serde::{Deserialize, Serialize};
