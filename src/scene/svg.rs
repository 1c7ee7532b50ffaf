//! SVG markup for a composed [`WheelScene`].
//!
//! Pure string building, no IO. The root element carries only a `viewBox`; see
//! [`crate::to_standalone_svg`] for a file-ready document.

use std::fmt::Write as _;

use crate::{
    foundation::math::fmt_num,
    scene::primitive::{Label, LayerKind, Line, Paint, Primitive, Tooltip, WheelScene, Wedge},
};

/// Escape the five XML special characters for attribute values and text.
pub(crate) fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// SVG fragment for `scene`, without an XML declaration.
pub fn write_scene(scene: &WheelScene) -> String {
    let mut out = String::with_capacity(64 * 1024);
    let size = scene.size;
    let half = scene.size / 2.0;
    let _ = write!(out, r#"<svg viewBox="0 0 {size} {size}">"#);

    let mut transform = format!("translate({half},{half})");
    if let Some(deg) = scene.rotation_deg {
        let _ = write!(transform, " rotate({})", fmt_num(deg));
    }
    let _ = write!(out, r#"<g transform="{transform}">"#);
    for layer in scene.layers.iter().filter(|l| l.kind != LayerKind::Tooltip) {
        if layer.primitives.is_empty() {
            continue;
        }
        let _ = write!(out, r#"<g data-layer="{}">"#, layer.kind.name());
        for p in &layer.primitives {
            write_primitive(&mut out, p);
        }
        out.push_str("</g>");
    }
    out.push_str("</g>");

    // Kept out of the rotated group so the box stays upright.
    if let Some(tooltip) = scene.tooltip() {
        let _ = write!(
            out,
            r#"<g transform="translate({half},{half})" data-layer="{}">"#,
            LayerKind::Tooltip.name()
        );
        write_tooltip(&mut out, tooltip);
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    out
}

fn write_primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Wedge(w) => write_wedge(out, w),
        Primitive::Guide(g) => {
            let _ = write!(
                out,
                r#"<path id="{}" fill="none" d="{}"/>"#,
                xml_escape(&g.id),
                g.d
            );
        }
        Primitive::Label(l) => write_label(out, l),
        Primitive::Line(l) => write_line(out, l),
        Primitive::Tooltip(t) => write_tooltip(out, t),
    }
}

fn write_paint(out: &mut String, paint: &Paint) {
    if let Some(fill) = &paint.fill {
        let _ = write!(out, r#" fill="{}""#, xml_escape(fill));
    }
    if let Some(stroke) = &paint.stroke {
        let _ = write!(out, r#" stroke="{}""#, xml_escape(stroke));
    }
    if let Some(w) = paint.stroke_width {
        let _ = write!(out, r#" stroke-width="{w}""#);
    }
    if let Some(o) = paint.opacity {
        let _ = write!(out, r#" opacity="{o}""#);
    }
}

fn write_event_uid(out: &mut String, uid: Option<&str>) {
    if let Some(uid) = uid {
        let _ = write!(out, r#" data-event-uid="{}""#, xml_escape(uid));
    }
}

fn write_wedge(out: &mut String, w: &Wedge) {
    let _ = write!(out, r#"<path d="{}""#, w.d);
    write_paint(out, &w.paint);
    if w.passive {
        out.push_str(r#" pointer-events="none""#);
    }
    write_event_uid(out, w.event_uid.as_deref());
    out.push_str("/>");
}

fn write_label(out: &mut String, l: &Label) {
    let _ = write!(
        out,
        r#"<text font-size="{}" text-anchor="{}""#,
        l.font_size,
        l.anchor.as_str()
    );
    if l.centered_baseline {
        out.push_str(r#" dominant-baseline="middle""#);
    }
    if let Some(fill) = &l.fill {
        let _ = write!(out, r#" fill="{}""#, xml_escape(fill));
    }
    write_event_uid(out, l.event_uid.as_deref());
    let _ = write!(
        out,
        r##"><textPath href="#{}" startOffset="{}">{}</textPath></text>"##,
        xml_escape(&l.guide_id),
        l.start_offset,
        xml_escape(&l.text)
    );
}

fn write_line(out: &mut String, l: &Line) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
        fmt_num(l.from.x),
        fmt_num(l.from.y),
        fmt_num(l.to.x),
        fmt_num(l.to.y),
        xml_escape(&l.stroke),
        l.stroke_width,
        l.opacity
    );
}

fn write_tooltip(out: &mut String, t: &Tooltip) {
    out.push_str(
        r#"<g><rect x="-120" y="-70" width="240" height="140" fill="white" stroke="black" opacity="0.9"/>"#,
    );
    for (i, line) in t.lines.iter().enumerate() {
        let y = -50 + 20 * i as i64;
        let _ = write!(
            out,
            r#"<text x="0" y="{y}" text-anchor="middle" font-size="14" fill="black">{}</text>"#,
            xml_escape(line)
        );
    }
    out.push_str("</g>");
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
