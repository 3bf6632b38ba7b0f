//! MaxRects rectangle bin packing for texture atlases.
//!
//! - Packer: `MaxRectsBinPack` keeps maximal (possibly overlapping) free rectangles and places the
//!   globally best pending rectangle next, under one of six heuristics (BSSF/BLSF/BAF/BL/CP/LeftoverArea)
//! - Layout: `pack_pages` spreads a list of keyed sizes over as many pages as needed; `pack_best`
//!   tries every heuristic and keeps the tightest result
//! - Data model is serde-serializable.
//!
//! Quick example:
//! ```
//! use maxrects_core::{Heuristic, MaxRectsBinPack, Rect};
//!
//! let mut packer = MaxRectsBinPack::new(100, 100, false);
//! let mut rects = vec![Rect::sized(60, 40), Rect::sized(40, 30), Rect::sized(30, 70)];
//! let placed = packer.insert_rects(&mut rects, Heuristic::BestAreaFit);
//! assert_eq!(placed.len(), 3);
//! assert!(rects.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod packer;

pub use config::*;
pub use error::*;
pub use layout::*;
pub use model::*;
pub use packer::MaxRectsBinPack;

/// Convenience prelude for common types and functions.
/// Importing `maxrects_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{Heuristic, PackerConfig, PackerConfigBuilder, SortOrder};
    pub use crate::layout::{Layout, LayoutPage, Placement, pack_best, pack_pages};
    pub use crate::model::{Bin, PackStats, Rect};
    pub use crate::packer::MaxRectsBinPack;
}
