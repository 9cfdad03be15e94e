//! PNG rasterization of chart SVG via resvg.

use std::sync::{Arc, OnceLock};

use crate::rendering::RasterImage;
use crate::{Error, Result};

/// System fonts, loaded on first use and shared for the process lifetime.
fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            log::debug!("loaded {} font faces", db.len());
            Arc::new(db)
        })
        .clone()
}

/// Rasterize `svg`, scaled so the image is `width` pixels wide.
pub fn render_png(svg: &str, width: u32) -> Result<RasterImage> {
    if width == 0 {
        return Err(Error::RenderError("PNG width must be positive".into()));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb = font_database();
    opt.font_family = "sans-serif".to_string();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| Error::RenderError(format!("failed to parse SVG: {}", e)))?;

    let size = tree.size();
    let scale = width as f32 / size.width().max(1.0);
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::RenderError(format!("failed to allocate {}x{} pixmap", width, height)))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let png_data = pixmap
        .encode_png()
        .map_err(|e| Error::RenderError(format!("failed to encode PNG: {}", e)))?;
    Ok(RasterImage {
        width,
        height,
        png_data,
    })
}
