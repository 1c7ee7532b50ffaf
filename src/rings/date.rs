use chrono::{Datelike, Weekday};
use tracing::trace;

use crate::{
    calendar::spans::DayIter,
    foundation::math::polar,
    rings::{RenderContext, season::Season},
    scene::primitive::{Line, Primitive},
};

/// One radial tick per day of the range.
pub fn date_ring(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let band = ctx.style.date_band();
    if !band.is_visible() {
        trace!("date ring suppressed");
        return Vec::new();
    }
    let today = ctx.now.date();
    DayIter::new(&ctx.range)
        .map(|day| {
            let angle = ctx.mapper.angle_of_day(day);
            let summer = Season::of_month(day.month()) == Season::Summer;
            let (stroke, stroke_width, opacity) = if day == today {
                ("#ff69b4", 2.0, 1.0)
            } else if day.weekday() == Weekday::Sun {
                (if summer { "#000080" } else { "blue" }, 1.0, 0.5)
            } else {
                (if summer { "#cccccc" } else { "white" }, 1.0, 0.5)
            };
            Primitive::Line(Line {
                from: polar(ctx.center(), band.inner, angle),
                to: polar(ctx.center(), band.outer, angle),
                stroke: stroke.to_string(),
                stroke_width,
                opacity,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/rings/date.rs"]
mod tests;
