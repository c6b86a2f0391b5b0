//! Core library for masonry ("Pinterest") grid layouts.
//!
//! - Engine: `compute_layout` places items column by column and returns one `Placement` per item
//! - Columns: round-robin assignment (default) or shortest-column packing
//! - Session: `LayoutSession` caches a layout until parameters or item count change
//! - Data model is serde-serializable; a JSON exporter is provided.
//!
//! Quick example:
//! ```
//! use masonry_grid_core::{ItemMeasurement, LayoutParameters, Rect, compute_layout};
//! # fn main() -> masonry_grid_core::Result<()> {
//! let params = LayoutParameters::new(2, 6.0, 320.0);
//! let out = compute_layout(10, &params, &mut |i: usize, _width: f64| {
//!     ItemMeasurement::new(100.0 + (i % 3) as f64 * 40.0, 24.0)
//! })?;
//! let visible = out.query(Rect::new(0.0, 0.0, 320.0, 480.0)).count();
//! println!("{} visible, height {}", visible, out.content_height);
//! # Ok(()) }
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod export;
pub mod measure;
pub mod model;
pub mod pipeline;
pub mod session;

pub use config::*;
pub use error::*;
pub use export::*;
pub use measure::*;
pub use model::*;
pub use pipeline::*;
pub use session::*;

/// Convenience prelude for common types and functions.
/// Importing `masonry_grid_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::column::{ColumnPicker, RoundRobinPicker, ShortestColumnPicker};
    pub use crate::config::{ColumnStrategy, Insets, LayoutParameters, LayoutParametersBuilder};
    pub use crate::measure::{ItemSpec, ItemSpecs, Measure};
    pub use crate::model::{ItemMeasurement, LayoutResult, LayoutStats, Placement, Rect, Size};
    pub use crate::session::LayoutSession;
    pub use crate::{MasonryError, compute_layout, query, total_size};
}
