use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::error::{CalwheelError, CalwheelResult};

/// Largest accepted output side in pixels.
const MAX_DIM: u32 = 16_384;

/// Rasterize a standalone SVG into a square PNG of `pixel_size` x `pixel_size`.
///
/// Text is shaped with the system fonts; labels whose glyphs are missing are skipped by
/// the rasterizer rather than failing the export.
pub fn rasterize_png(svg: &str, pixel_size: u32) -> CalwheelResult<Vec<u8>> {
    if pixel_size == 0 || pixel_size > MAX_DIM {
        return Err(CalwheelError::export(format!(
            "png size must be within 1..={MAX_DIM}, got {pixel_size}"
        )));
    }

    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let rgba = rasterize_tree(&tree, pixel_size)?;
    encode_png(rgba, pixel_size)
}

fn rasterize_tree(tree: &usvg::Tree, pixel_size: u32) -> CalwheelResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(pixel_size, pixel_size)
        .ok_or_else(|| CalwheelError::export("failed to allocate png pixmap"))?;

    let sx = pixel_size as f32 / tree.size().width();
    let sy = pixel_size as f32 / tree.size().height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba);
    Ok(rgba)
}

fn encode_png(rgba: Vec<u8>, pixel_size: u32) -> CalwheelResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(pixel_size, pixel_size, rgba)
        .ok_or_else(|| CalwheelError::export("pixel buffer does not match png size"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
