use tracing::trace;

use crate::{
    foundation::math::polar,
    rings::RenderContext,
    scene::primitive::{Line, Primitive},
};

const STROKE: &str = "#ff1493";
const STROKE_WIDTH: f64 = 3.0;
const OPACITY: f64 = 0.8;

/// Radial marker at "now", across every ring.
pub fn today_indicator(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let style = ctx.style;
    if !style.show_today_indicator {
        return Vec::new();
    }
    if !ctx.now_in_range() {
        trace!(now = %ctx.now, "now outside range, no today indicator");
        return Vec::new();
    }
    let angle = ctx.mapper.angle_of(ctx.now);
    vec![Primitive::Line(Line {
        from: polar(ctx.center(), style.inner_extent(), angle),
        to: polar(ctx.center(), style.outer_extent(), angle),
        stroke: STROKE.to_string(),
        stroke_width: STROKE_WIDTH,
        opacity: OPACITY,
    })]
}

#[cfg(test)]
#[path = "../../tests/unit/rings/today.rs"]
mod tests;
