use crate::{
    foundation::{
        error::{CalwheelError, CalwheelResult},
        math::deg_to_rad,
    },
    model::category::is_hex_color,
};

/// Flat style snapshot consumed by one render.
///
/// Radii are in SVG user units measured from the wheel center. For every
/// inner/outer pair, `inner >= outer` suppresses that ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelStyleConfig {
    /// Inner edge of the date ring.
    pub date_inner_radius: f64,
    /// Outer edge of the date ring.
    pub date_outer_radius: f64,
    /// Inner edge of lane 1; further lanes stack inwards from here.
    pub event_inner_radius: f64,
    /// Inner edge of the month ring.
    pub month_inner_radius: f64,
    /// Outer edge of the month ring.
    pub month_outer_radius: f64,
    /// Inner edge of the week ring.
    pub week_inner_radius: f64,
    /// Outer edge of the week ring.
    pub week_outer_radius: f64,

    /// Space between adjacent lanes.
    pub lane_gap: f64,
    /// Radial width of one lane; 0 or less hides the event ring.
    pub lane_width: f64,

    /// Where the range starts, in degrees; -90 puts it at twelve o'clock.
    pub angle_offset_deg: f64,
    /// Floor for the angular span of event arcs; never below 1 degree.
    pub minimum_visible_angle_deg: f64,
    /// Counterclockwise when true.
    pub reverse: bool,

    /// Event label size; 0 hides event labels.
    pub event_font_size: f64,
    /// Month name size; 0 hides month names.
    pub month_font_size: f64,
    /// Week number size; 0 hides week numbers.
    pub week_font_size: f64,

    /// ISO week numbers instead of locale week numbers.
    pub iso_weeks: bool,
    /// Width and height of the square viewBox.
    pub size: f64,

    /// Draw the marker line at now.
    pub show_today_indicator: bool,
    /// Rotate the wheel so that now sits at the angle offset.
    pub align_wheel_to_today: bool,

    /// Fill of the band from now to the range end; `None` disables it.
    pub future_color: Option<String>,
    /// Fill of the pie from the range start to now; `None` disables it.
    pub past_color: Option<String>,
    /// Must be positive for the future overlay to be drawn.
    pub future_color_opacity: f64,
    /// Must be positive for the past overlay to be drawn.
    pub past_color_opacity: f64,
}

/// Radial extent of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    /// Radius nearer the center.
    pub inner: f64,
    /// Radius farther from the center.
    pub outer: f64,
}

impl RingBand {
    /// Band from `inner` to `outer`.
    pub fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    /// Whether the band has positive width.
    pub fn is_visible(self) -> bool {
        self.inner < self.outer
    }

    /// Radius halfway across the band.
    pub fn mid(self) -> f64 {
        (self.inner + self.outer) / 2.0
    }
}

impl WheelStyleConfig {
    /// Default style for a wheel of `size` x `size` user units.
    pub fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        let month_outer_radius = half * 0.9;
        let month_inner_radius = 230.0;
        let radius_adj = half * 0.02;
        let lane_width = half * 0.04;
        Self {
            date_inner_radius: month_inner_radius + radius_adj / 2.0,
            date_outer_radius: month_outer_radius - radius_adj / 2.0,
            event_inner_radius: month_outer_radius - radius_adj - lane_width,
            month_inner_radius,
            month_outer_radius,
            week_inner_radius: half * 0.9,
            week_outer_radius: half * 0.93,
            lane_gap: (lane_width / 3.0).ceil(),
            lane_width,
            angle_offset_deg: -90.0,
            minimum_visible_angle_deg: 0.0,
            reverse: false,
            event_font_size: 12.0,
            month_font_size: 24.0,
            week_font_size: 12.0,
            iso_weeks: false,
            size,
            show_today_indicator: true,
            align_wheel_to_today: false,
            future_color: None,
            past_color: Some("#666666".to_string()),
            future_color_opacity: 0.5,
            past_color_opacity: 0.3,
        }
    }

    /// Band of the month ring.
    pub fn month_band(&self) -> RingBand {
        RingBand::new(self.month_inner_radius, self.month_outer_radius)
    }

    /// Band of the week ring.
    pub fn week_band(&self) -> RingBand {
        RingBand::new(self.week_inner_radius, self.week_outer_radius)
    }

    /// Band of the date ring.
    pub fn date_band(&self) -> RingBand {
        RingBand::new(self.date_inner_radius, self.date_outer_radius)
    }

    /// The event ring has no explicit outer radius; it is hidden by a non-positive lane width.
    pub fn event_ring_visible(&self) -> bool {
        self.lane_width > 0.0
    }

    /// False when every ring is suppressed and the wheel draws nothing.
    pub fn any_ring_visible(&self) -> bool {
        self.month_band().is_visible()
            || self.week_band().is_visible()
            || self.date_band().is_visible()
            || self.event_ring_visible()
    }

    /// Outermost radius any ring reaches.
    pub fn outer_extent(&self) -> f64 {
        self.week_outer_radius
            .max(self.date_outer_radius)
            .max(self.event_inner_radius)
            .max(self.month_outer_radius)
    }

    /// Innermost radius any ring starts at.
    pub fn inner_extent(&self) -> f64 {
        self.week_inner_radius
            .min(self.date_inner_radius)
            .min(self.event_inner_radius)
            .min(self.month_inner_radius)
    }

    /// [`Self::minimum_visible_angle_deg`] in radians.
    pub fn minimum_visible_angle_rad(&self) -> f64 {
        deg_to_rad(self.minimum_visible_angle_deg)
    }

    /// Reject non-finite or negative sizes, opacities outside `[0, 1]` and malformed colors.
    pub fn validate(&self) -> CalwheelResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(CalwheelError::validation("style size must be finite and > 0"));
        }
        for (name, value) in [
            ("dateInnerRadius", self.date_inner_radius),
            ("dateOuterRadius", self.date_outer_radius),
            ("eventInnerRadius", self.event_inner_radius),
            ("monthInnerRadius", self.month_inner_radius),
            ("monthOuterRadius", self.month_outer_radius),
            ("weekInnerRadius", self.week_inner_radius),
            ("weekOuterRadius", self.week_outer_radius),
            ("laneGap", self.lane_gap),
            ("laneWidth", self.lane_width),
            ("eventFontSize", self.event_font_size),
            ("monthFontSize", self.month_font_size),
            ("weekFontSize", self.week_font_size),
            ("minimumVisibleAngleDeg", self.minimum_visible_angle_deg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalwheelError::validation(format!(
                    "style {name} must be finite and >= 0"
                )));
            }
        }
        if !self.angle_offset_deg.is_finite() {
            return Err(CalwheelError::validation("style angleOffsetDeg must be finite"));
        }
        for (name, value) in [
            ("futureColorOpacity", self.future_color_opacity),
            ("pastColorOpacity", self.past_color_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CalwheelError::validation(format!(
                    "style {name} must be within [0, 1]"
                )));
            }
        }
        for (name, color) in [
            ("futureColor", &self.future_color),
            ("pastColor", &self.past_color),
        ] {
            if let Some(c) = color
                && !is_hex_color(c)
            {
                return Err(CalwheelError::validation(format!(
                    "style {name} must be #rgb or #rrggbb, got '{c}'"
                )));
            }
        }
        Ok(())
    }
}

impl Default for WheelStyleConfig {
    fn default() -> Self {
        Self::for_size(1000.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/style.rs"]
mod tests;
