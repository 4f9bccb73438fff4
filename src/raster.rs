/// SVG to PNG rasterization
///
/// The `Rasterizer` trait is the seam between the generator and the rendering
/// backend; `ResvgRasterizer` is the production implementation.
use crate::error::{RasterError, SetupError};
use resvg::{tiny_skia, usvg};

/// Minimal document rendered once at startup to prove the backend works
const PROBE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"><rect width="1" height="1" fill="black"/></svg>"#;

pub trait Rasterizer {
    /// Render `svg` into a PNG of exactly `width` x `height` pixels.
    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RasterError>;

    /// Fail fast before any work if the backend cannot render.
    fn check_available(&self) -> Result<(), SetupError> {
        self.rasterize(PROBE_SVG, 1, 1)
            .map(|_| ())
            .map_err(SetupError::MissingCapability)
    }
}

/// resvg-backed rasterizer
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RasterError> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RasterError::InvalidSize { width, height })?;

        // Stretch the viewport to the requested canvas on each axis
        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }
}
