//! One generator per ring. Each is a pure function of a [`RenderContext`] and returns the
//! primitives of its layer; the composer stacks them in paint order.

pub(crate) mod date;
pub(crate) mod events;
pub(crate) mod month;
pub(crate) mod period;
pub(crate) mod season;
pub(crate) mod today;
pub(crate) mod tooltip;
pub(crate) mod week;

use chrono::NaiveDateTime;

use crate::{
    foundation::math::Point,
    geometry::angle::AngleMapper,
    model::{
        locale::Locale,
        range::{DateRange, NormalizedRange},
        style::WheelStyleConfig,
    },
};

/// Per-render inputs shared by all ring generators.
///
/// Built once per render by the composer and borrowed by each generator; nothing keeps it
/// past the render that created it.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// The range, expanded to day boundaries.
    pub range: NormalizedRange,
    /// Style of this render.
    pub style: &'a WheelStyleConfig,
    /// Month names and week rules.
    pub locale: &'a Locale,
    /// Date to angle mapping for `range` under the style's direction and offset.
    pub mapper: AngleMapper,
    /// The instant treated as "now" for today/past/future decisions.
    pub now: NaiveDateTime,
}

impl<'a> RenderContext<'a> {
    /// Normalize `range` and build its angle mapper.
    pub fn new(
        range: &DateRange,
        style: &'a WheelStyleConfig,
        locale: &'a Locale,
        now: NaiveDateTime,
    ) -> Self {
        let range = range.normalized();
        Self {
            range,
            style,
            locale,
            mapper: AngleMapper::new(&range, style.reverse, style.angle_offset_deg),
            now,
        }
    }

    /// Rings are drawn around the origin; the root group moves it to the viewBox center.
    pub fn center(&self) -> Point {
        Point::ORIGIN
    }

    /// Whether now lies in the range, both ends included.
    pub fn now_in_range(&self) -> bool {
        self.range.contains(self.now)
    }

    /// Text guides always run in increasing angle so labels read clockwise.
    pub(crate) fn text_angles(&self, start: f64, end: f64) -> (f64, f64) {
        if self.style.reverse {
            (end, start)
        } else {
            (start, end)
        }
    }
}
