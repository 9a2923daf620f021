pub mod color;
pub mod constants;
pub mod font;
mod generate;
pub mod layout;
mod options;
pub mod render;
mod types;

pub use color::{BannerColors, Cmyk, color_names, resolve_color};
pub use font::{FontChain, LoadedFont, load_font};
pub use generate::{GenerationReport, generate_banner, generate_banner_bytes, plan_banner};
pub use layout::{LayoutPlan, TextMetrics, compute_layout};
pub use options::*;
pub use types::*;
