//! Order vocabularies and filter criteria
//!
//! - [`status`]: lifecycle statuses, special triage buckets, badge metadata
//! - [`platform`]: sales channels and their icon/label/color
//! - [`filter`]: filter bar options and status tallies

pub mod filter;
pub mod platform;
pub mod status;

// Re-exports
pub use filter::{AmountRange, DateRange, FilterOptions, StatusCount};
pub use platform::{Platform, PlatformColor, PlatformIcon};
pub use status::{OrderStatus, Severity, SpecialStatus, StatusFilter, StatusTag};
