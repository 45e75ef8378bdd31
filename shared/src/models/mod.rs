//! Data models
//!
//! Plain records shared by the derivation engine and the dashboard.

pub mod order;

// Re-exports
pub use order::{Order, OrderItem};
