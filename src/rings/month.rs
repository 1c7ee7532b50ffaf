use chrono::Datelike;
use tracing::trace;

use crate::{
    calendar::spans::MonthSpans,
    geometry::arc::{fat_arc, needs_large_arc, thin_arc},
    rings::{RenderContext, season::Season},
    scene::primitive::{Guide, Label, Paint, Primitive, TextAnchor, Wedge},
};

/// Gap between the outermost ring and the month names.
const LABEL_GAP: f64 = 5.0;

/// Season-tinted wedge per calendar month, with the month name outside the rings.
pub fn month_ring(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let style = ctx.style;
    let band = style.month_band();
    if !band.is_visible() {
        trace!("month ring suppressed");
        return Vec::new();
    }
    let label_radius = style.week_outer_radius.max(style.month_outer_radius) + LABEL_GAP;

    let mut out = Vec::new();
    for span in MonthSpans::new(&ctx.range) {
        let start = ctx.mapper.angle_of(span.start);
        let end = ctx.mapper.angle_of(span.end);
        let large = needs_large_arc(start, end);
        out.push(Primitive::Wedge(Wedge {
            d: fat_arc(
                ctx.center(),
                band.inner,
                band.outer,
                start,
                end,
                style.reverse,
                large,
            ),
            paint: Paint::fill(Season::of(span.start).month_fill()),
            passive: false,
            event_uid: None,
        }));

        if style.month_font_size > 0.0 {
            let guide_id = format!("month-{}", span.first_day().format("%Y%m%d"));
            let (text_start, text_end) = ctx.text_angles(start, end);
            out.push(Primitive::Guide(Guide {
                id: guide_id.clone(),
                d: thin_arc(ctx.center(), label_radius, text_start, text_end, large),
            }));
            out.push(Primitive::Label(Label {
                guide_id,
                text: ctx.locale.month_name(span.start.month()).to_string(),
                font_size: style.month_font_size,
                anchor: if style.reverse {
                    TextAnchor::End
                } else {
                    TextAnchor::Start
                },
                start_offset: if style.reverse { "100%" } else { "0%" },
                centered_baseline: false,
                fill: None,
                event_uid: None,
            }));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/rings/month.rs"]
mod tests;
