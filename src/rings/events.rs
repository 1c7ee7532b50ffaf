use tracing::trace;

use crate::{
    foundation::math::deg_to_rad,
    geometry::arc::{fat_arc, needs_large_arc, thin_arc},
    layout::lanes::{deepest_drawable_lane, lane_band},
    model::{
        category::{Category, resolve_colors},
        event::CalendarEvent,
        style::RingBand,
    },
    rings::RenderContext,
    scene::primitive::{Guide, Label, Paint, Primitive, TextAnchor, Wedge},
};

const STROKE: &str = "#2f3640";
const STROKE_WIDTH: f64 = 0.5;

/// Angular and radial placement of one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventArc {
    /// Start angle in radians.
    pub start: f64,
    /// End angle, at least the visibility floor away from `start`.
    pub end: f64,
    /// Radial band of the event's lane.
    pub band: RingBand,
}

/// Smallest span an event is drawn with, in radians. Never below one degree.
pub fn visibility_floor(ctx: &RenderContext<'_>) -> f64 {
    ctx.style.minimum_visible_angle_rad().max(deg_to_rad(1.0))
}

/// Place `event` on its lane, widening spans below the visibility floor in the ring's
/// direction of travel.
pub fn layout_event(ctx: &RenderContext<'_>, event: &CalendarEvent) -> EventArc {
    let start = ctx.mapper.angle_of(event.start);
    let mut end = ctx.mapper.angle_of(event.end);
    let floor = visibility_floor(ctx);
    if (end - start).abs() < floor {
        end = start + floor * ctx.mapper.direction();
    }
    EventArc {
        start,
        end,
        band: lane_band(event.lane, ctx.style),
    }
}

/// Strip everything but `[A-Za-z0-9_-]` so the uid can live in an element id.
fn sanitize_id(uid: &str) -> String {
    uid.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// One category-colored arc per event on its lane, labelled with the subject.
pub fn event_ring(
    ctx: &RenderContext<'_>,
    events: &[CalendarEvent],
    categories: &[Category],
) -> Vec<Primitive> {
    let style = ctx.style;
    if !style.event_ring_visible() {
        trace!("event ring suppressed");
        return Vec::new();
    }
    let deepest = deepest_drawable_lane(style);

    let mut out = Vec::with_capacity(events.len() * 3);
    for event in events {
        let arc = layout_event(ctx, event);
        if event.lane.max(1) > deepest || !arc.band.is_visible() {
            trace!(uid = %event.uid, lane = event.lane, "lane past the center, skipped");
            continue;
        }
        let large = needs_large_arc(arc.start, arc.end);
        let colors = resolve_colors(categories, event);
        out.push(Primitive::Wedge(Wedge {
            d: fat_arc(
                ctx.center(),
                arc.band.inner,
                arc.band.outer,
                arc.start,
                arc.end,
                style.reverse,
                large,
            ),
            paint: Paint::fill(colors.fill).with_stroke(STROKE, Some(STROKE_WIDTH)),
            passive: false,
            event_uid: Some(event.uid.clone()),
        }));

        if style.event_font_size > 0.0 {
            let guide_id = format!("event-label-{}", sanitize_id(&event.uid));
            let (text_start, text_end) = ctx.text_angles(arc.start, arc.end);
            out.push(Primitive::Guide(Guide {
                id: guide_id.clone(),
                d: thin_arc(ctx.center(), arc.band.mid(), text_start, text_end, large),
            }));
            out.push(Primitive::Label(Label {
                guide_id,
                text: event.subject.clone(),
                font_size: style.event_font_size,
                anchor: TextAnchor::Middle,
                start_offset: "50%",
                centered_baseline: true,
                fill: Some(colors.font.to_string()),
                event_uid: Some(event.uid.clone()),
            }));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/rings/events.rs"]
mod tests;
