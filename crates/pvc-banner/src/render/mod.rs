//! PDF rendering for banners
//!
//! This module is the only place that knows about printpdf:
//! - Converting layout millimeters to points
//! - Building rectangle, circle and text operations
//! - Serializing the single banner page

mod page;
mod shapes;

pub use page::*;
pub use shapes::*;
