//! Rasterizes a tree of SVG icons into themed 1x/2x/3x PNG assets.

pub mod config;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod paths;
pub mod raster;
pub mod recolor;

pub use config::{IconConfig, OutputSpec};
pub use error::{AssetError, ConfigError, RasterError, SetupError};
pub use generator::{GenerationReport, IconGenerator, IconRole, ItemOutcome, Variant};
pub use raster::{Rasterizer, ResvgRasterizer};
