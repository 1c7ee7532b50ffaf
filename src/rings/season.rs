use chrono::{Datelike, NaiveDateTime};
use tracing::trace;

use crate::{
    calendar::spans::MonthSpans,
    geometry::arc::{fat_arc, needs_large_arc},
    rings::RenderContext,
    scene::primitive::{Paint, Primitive, Wedge},
};

/// Meteorological season of a month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    /// December through February.
    Winter,
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Fall,
}

impl Season {
    /// Season of a 1-based month.
    pub fn of_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Season of the month `t` falls in.
    pub fn of(t: NaiveDateTime) -> Self {
        Self::of_month(t.month())
    }

    /// Translucent tint of the month ring.
    pub fn month_fill(self) -> &'static str {
        match self {
            Self::Winter => "rgba(173, 216, 230, 0.6)",
            Self::Spring => "rgba(144, 238, 144, 0.6)",
            Self::Summer => "rgba(255, 255, 200, 0.7)",
            Self::Fall => "rgba(255, 218, 185, 0.6)",
        }
    }

    /// Solid color of the background wedges.
    pub fn background(self) -> &'static str {
        match self {
            Self::Winter => "#add8e6",
            Self::Spring => "#90ee90",
            Self::Summer => "#ffffe0",
            Self::Fall => "#ffdab9",
        }
    }
}

const BACKGROUND_OPACITY: f64 = 0.08;

/// Faint full-depth wedge per month, beneath every ring.
pub fn seasonal_background(ctx: &RenderContext<'_>) -> Vec<Primitive> {
    let style = ctx.style;
    if !style.any_ring_visible() {
        trace!("no visible ring, skipping seasonal background");
        return Vec::new();
    }
    let outer = style.outer_extent();
    MonthSpans::new(&ctx.range)
        .map(|span| {
            let start = ctx.mapper.angle_of(span.start);
            let end = ctx.mapper.angle_of(span.end);
            Primitive::Wedge(Wedge {
                d: fat_arc(
                    ctx.center(),
                    0.0,
                    outer,
                    start,
                    end,
                    style.reverse,
                    needs_large_arc(start, end),
                ),
                paint: Paint::fill(Season::of(span.start).background())
                    .with_opacity(BACKGROUND_OPACITY),
                passive: true,
                event_uid: None,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/rings/season.rs"]
mod tests;
