//! The reference drawing of the feeder and SVG rasterization.
//!
//! The drawing ships inside the binary as SVG so the browser and desktop
//! builds share a single asset and render it at any size.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Path of the drawing asset, relative to the crate root.
pub const DRAWING_PATH: &str = "assets/dimension-drawing.svg";

/// SVG source of the feeder drawing.
pub const DRAWING_SVG: &str = include_str!("../assets/dimension-drawing.svg");

/// Parses SVG source with the given font database.
pub fn parse_svg(svg: &str, fontdb: Option<Arc<usvg::fontdb::Database>>) -> Result<usvg::Tree> {
    let mut opt = usvg::Options::default();
    if let Some(db) = fontdb {
        opt.fontdb = db;
    }
    Ok(usvg::Tree::from_data(svg.as_bytes(), &opt)?)
}

/// Renders `tree` into a new pixmap scaled by `scale`.
///
/// The optional background is painted first; otherwise the pixmap starts transparent.
pub fn rasterize(
    tree: &usvg::Tree,
    scale: f32,
    background: Option<tiny_skia::Color>,
) -> Result<tiny_skia::Pixmap> {
    let size = tree.size();
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(Error::Pixmap { width, height })?;
    if let Some(color) = background {
        pixmap.fill(color);
    }

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Rasterizes the feeder drawing so its larger side is `max_side` pixels.
pub fn rasterize_drawing(max_side: u32) -> Result<tiny_skia::Pixmap> {
    let tree = parse_svg(DRAWING_SVG, None)?;
    let size = tree.size();
    let scale = max_side as f32 / size.width().max(size.height());
    rasterize(&tree, scale, None)
}
