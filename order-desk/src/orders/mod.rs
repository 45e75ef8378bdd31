//! Order engine
//!
//! Everything here works on the immutable order collection:
//!
//! - [`filter`]: visible-row derivation
//! - [`tally`]: status strip counts
//! - [`selection`]: checked rows
//! - [`editor`]: detail panel VIEW/EDIT state
//! - [`sort`]: table column sort
//! - [`money`]: decimal amount helpers and currency display
//! - [`fixture`] / [`seed`]: where the collection comes from

pub mod editor;
pub mod filter;
pub mod fixture;
pub mod money;
pub mod seed;
pub mod selection;
pub mod sort;
pub mod tally;

// Re-exports
pub use editor::{EditField, EditorMode, OrderEditor};
pub use filter::visible_orders;
pub use fixture::{load_orders, orders_from_config, parse_orders};
pub use seed::seed_orders;
pub use selection::Selection;
pub use sort::{SortDirection, SortField, TableSort};
pub use tally::{special_counts, status_counts};
