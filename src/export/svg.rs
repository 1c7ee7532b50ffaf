use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CalwheelError, CalwheelResult};

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Turn the markup of [`crate::Wheel::render_svg`] into a standalone SVG document.
///
/// Prepends the XML declaration and declares the SVG and XLink namespaces on the root
/// element unless already present. Input that has no `<svg` root is returned with only
/// the declaration added.
pub fn to_standalone_svg(svg: &str) -> String {
    let body = svg.trim_start();
    let body = body
        .strip_prefix(XML_DECLARATION)
        .map(str::trim_start)
        .unwrap_or(body);

    let mut out = String::with_capacity(body.len() + 160);
    out.push_str(XML_DECLARATION);
    out.push('\n');

    let Some(root) = body.find("<svg") else {
        out.push_str(body);
        return out;
    };
    let tag_end = body[root..].find('>').map_or(body.len(), |i| root + i);
    let open_tag = &body[root..tag_end];

    let split = root + "<svg".len();
    out.push_str(&body[..split]);
    if !open_tag.contains("xmlns=") {
        out.push_str(&format!(r#" xmlns="{SVG_NS}""#));
    }
    if !open_tag.contains("xmlns:xlink=") {
        out.push_str(&format!(r#" xmlns:xlink="{XLINK_NS}""#));
    }
    out.push_str(&body[split..]);
    out
}

/// Write a standalone SVG document to `path`, creating parent directories.
pub fn write_standalone_svg(path: impl AsRef<Path>, svg: &str) -> CalwheelResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, to_standalone_svg(svg))
        .with_context(|| format!("write svg '{}'", path.display()))
        .map_err(CalwheelError::from)
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
