//! Login list projection.
//!
//! Pure derivation from the combined upstream signals (login list, filter
//! text, sort order, sync status) to the render-ready row sequence. All
//! scheduling and side effects live in the application layer.

pub mod projection;
pub mod row;
pub mod sort;

pub use projection::{controls_enabled, project, ProjectionSnapshot};
pub use row::{DisplayRow, MISSING_USERNAME_LABEL};
pub use sort::SortOrder;
