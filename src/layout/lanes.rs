use crate::model::style::{RingBand, WheelStyleConfig};

/// Radial band of event lane `lane`.
///
/// Lane 1 starts at `event_inner_radius`; every further lane moves inwards by one lane
/// width plus gap. Lanes are assigned by the user and never re-packed here, so two events
/// sharing a lane and overlapping in time are drawn on top of each other. Lane 0 is
/// treated as lane 1.
///
/// The inner edge never goes below the center. A lane reaching past it is cut to a pie
/// slice; a lane entirely past it comes back as an empty band.
pub fn lane_band(lane: u32, style: &WheelStyleConfig) -> RingBand {
    let steps = f64::from(lane.max(1) - 1);
    let inner = style.event_inner_radius - steps * (style.lane_width + style.lane_gap);
    RingBand::new(inner.max(0.0), inner + style.lane_width)
}

/// Highest lane whose band keeps a positive width after clamping to the center.
pub fn deepest_drawable_lane(style: &WheelStyleConfig) -> u32 {
    let pitch = style.lane_width + style.lane_gap;
    if pitch <= 0.0 || style.event_inner_radius + style.lane_width <= 0.0 {
        return 0;
    }
    let extra = ((style.event_inner_radius + style.lane_width) / pitch).ceil() - 1.0;
    (extra.max(0.0) as u32).saturating_add(1)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/lanes.rs"]
mod tests;
