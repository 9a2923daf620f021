//! Layout calculation for banners
//!
//! This module holds all the geometry of the banner template:
//! - Background and panel rectangles
//! - Corner and intermediate mounting circles
//! - Per-line text baselines
//!
//! No I/O happens here; text widths come in through [`TextMetrics`].

mod circles;
mod panel;
mod plan;
mod text;
mod types;

pub use circles::*;
pub use panel::*;
pub use plan::*;
pub use text::*;
pub use types::*;
