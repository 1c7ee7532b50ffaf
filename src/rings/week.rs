use tracing::trace;

use crate::{
    calendar::{spans::WeekSpans, week::WeekScheme},
    geometry::arc::{fat_arc, needs_large_arc, thin_arc},
    rings::RenderContext,
    scene::primitive::{Guide, Label, Paint, Primitive, TextAnchor, Wedge},
};

const OUTLINE: &str = "#333";
const OUTLINE_OPACITY: f64 = 0.7;

/// Outlined segment per week with its two-digit week number centered in the band.
pub fn week_ring(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let style = ctx.style;
    let band = style.week_band();
    if !band.is_visible() {
        trace!("week ring suppressed");
        return Vec::new();
    }
    let scheme = WeekScheme::new(style.iso_weeks, ctx.locale.week);

    let mut out = Vec::new();
    for span in WeekSpans::new(&ctx.range, scheme) {
        let start = ctx.mapper.angle_of(span.start);
        let end = ctx.mapper.angle_of(span.end);
        let large = needs_large_arc(start, end);
        let mut paint = Paint::default()
            .with_stroke(OUTLINE, None)
            .with_opacity(OUTLINE_OPACITY);
        paint.fill = Some("none".to_string());
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
            paint,
            passive: false,
            event_uid: None,
        }));

        if style.week_font_size > 0.0 {
            let day = span.first_day();
            let guide_id = format!("week-{}", day.format("%Y%m%d"));
            let (text_start, text_end) = ctx.text_angles(start, end);
            out.push(Primitive::Guide(Guide {
                id: guide_id.clone(),
                d: thin_arc(ctx.center(), band.mid(), text_start, text_end, large),
            }));
            out.push(Primitive::Label(Label {
                guide_id,
                text: scheme.label(day),
                font_size: style.week_font_size,
                anchor: TextAnchor::Middle,
                start_offset: "50%",
                centered_baseline: true,
                fill: None,
                event_uid: None,
            }));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/rings/week.rs"]
mod tests;
