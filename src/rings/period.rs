//! Translucent overlays marking the elapsed and the remaining part of the range.

use chrono::NaiveDateTime;
use tracing::trace;

use crate::{
    geometry::arc::{fat_arc, needs_large_arc},
    rings::RenderContext,
    scene::primitive::{Paint, Primitive, Wedge},
};

fn overlay(
    ctx: &RenderContext<'_>,
    color: &str,
    opacity: f64,
    inner: f64,
    outer: f64,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Primitive {
    let start = ctx.mapper.angle_of(from);
    let end = ctx.mapper.angle_of(to);
    Primitive::Wedge(Wedge {
        d: fat_arc(
            ctx.center(),
            inner,
            outer,
            start,
            end,
            ctx.style.reverse,
            needs_large_arc(start, end),
        ),
        paint: Paint::fill(color).with_opacity(opacity),
        passive: true,
        event_uid: None,
    })
}

/// Overlay color, when one is set with a positive opacity and now lies in the range.
fn overlay_color<'c>(
    ctx: &RenderContext<'_>,
    color: Option<&'c str>,
    opacity: f64,
) -> Option<&'c str> {
    let color = color.filter(|c| !c.is_empty()).filter(|_| opacity > 0.0)?;
    if !ctx.now_in_range() {
        trace!(now = %ctx.now, "now outside range, no period overlay");
        return None;
    }
    Some(color)
}

/// Pie from the center to the date ring over `[range start, now]`.
pub fn past_overlay(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let style = ctx.style;
    let Some(color) = overlay_color(ctx, style.past_color.as_deref(), style.past_color_opacity)
    else {
        return Vec::new();
    };
    vec![overlay(
        ctx,
        color,
        style.past_color_opacity,
        0.0,
        style.date_inner_radius,
        ctx.range.start,
        ctx.now,
    )]
}

/// Band across every ring over `[now, range end]`.
pub fn future_overlay(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let style = ctx.style;
    let Some(color) =
        overlay_color(ctx, style.future_color.as_deref(), style.future_color_opacity)
    else {
        return Vec::new();
    };
    vec![overlay(
        ctx,
        color,
        style.future_color_opacity,
        style.inner_extent(),
        style.outer_extent(),
        ctx.now,
        ctx.range.end,
    )]
}

#[cfg(test)]
#[path = "../../tests/unit/rings/period.rs"]
mod tests;
