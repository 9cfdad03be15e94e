//! Rendering: chart SVG documents and PNG rasterization

pub mod svg;

#[cfg(feature = "png")]
pub mod raster;

pub use svg::{render_svg, SvgOptions};

/// A rasterized chart.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}
