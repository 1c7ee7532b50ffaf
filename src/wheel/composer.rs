use chrono::NaiveDateTime;
use tracing::debug;

use crate::{
    foundation::math::rad_to_deg,
    model::{
        category::Category, document::WheelDocument, event::CalendarEvent, locale::Locale,
        palette::Palette, range::DateRange, style::WheelStyleConfig,
    },
    rings::{
        RenderContext, date::date_ring, events::event_ring, month::month_ring,
        period::{future_overlay, past_overlay},
        season::seasonal_background,
        today::today_indicator,
        tooltip::tooltip,
        week::week_ring,
    },
    scene::{
        primitive::{Layer, LayerKind, Primitive, WheelScene},
        svg::write_scene,
    },
};

/// Everything one render reads. Borrowed for the duration of [`Wheel::compose`].
#[derive(Clone, Copy, Debug)]
pub struct WheelInput<'a> {
    /// Events to draw; those outside the range land off the visible turn.
    pub events: &'a [CalendarEvent],
    /// Color lookup for events.
    pub categories: &'a [Category],
    /// Dates mapped onto one turn.
    pub range: DateRange,
    /// Ring geometry and toggles.
    pub style: &'a WheelStyleConfig,
    /// Month names and week rules.
    pub locale: &'a Locale,
    /// Carried for hosts that pick event colors from a palette; rings do not read it.
    pub palette: &'a Palette,
    /// The instant treated as now.
    pub now: NaiveDateTime,
}

impl<'a> WheelInput<'a> {
    /// Borrow a document's data; the locale and palette fall back to their defaults.
    pub fn from_document(doc: &'a WheelDocument, now: NaiveDateTime) -> Self {
        Self {
            events: &doc.events,
            categories: &doc.categories,
            range: doc.range,
            style: &doc.style,
            locale: doc.locale(),
            palette: doc.palette(),
            now,
        }
    }
}

/// Stateful wheel: stacks the ring layers and tracks which event the pointer is over.
#[derive(Clone, Debug, Default)]
pub struct Wheel {
    hovered: Option<String>,
}

impl Wheel {
    /// Wheel with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the event arc carrying `uid`.
    pub fn pointer_enter(&mut self, uid: impl Into<String>) {
        self.hovered = Some(uid.into());
    }

    /// Pointer left the hovered arc; the tooltip goes away.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Uid of the hovered event.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Build all layers in paint order.
    ///
    /// Layers that have nothing to draw are kept empty, so every [`LayerKind`] is present.
    #[tracing::instrument(
        level = "debug",
        skip(self, input),
        fields(events = input.events.len(), hovered = ?self.hovered)
    )]
    pub fn compose(&self, input: &WheelInput<'_>) -> WheelScene {
        let ctx = RenderContext::new(&input.range, input.style, input.locale, input.now);

        let layers: Vec<Layer> = LayerKind::PAINT_ORDER
            .into_iter()
            .map(|kind| Layer {
                kind,
                primitives: self.layer_primitives(kind, &ctx, input),
            })
            .collect();

        debug!(
            background = layers[0].primitives.len(),
            months = layers[1].primitives.len(),
            past = layers[2].primitives.len(),
            future = layers[3].primitives.len(),
            weeks = layers[4].primitives.len(),
            dates = layers[5].primitives.len(),
            today = layers[6].primitives.len(),
            events = layers[7].primitives.len(),
            tooltip = layers[8].primitives.len(),
            "wheel composed"
        );

        WheelScene {
            size: input.style.size,
            rotation_deg: today_rotation(&ctx),
            layers,
        }
    }

    /// [`Wheel::compose`] followed by SVG serialization.
    pub fn render_svg(&self, input: &WheelInput<'_>) -> String {
        write_scene(&self.compose(input))
    }

    fn layer_primitives(
        &self,
        kind: LayerKind,
        ctx: &RenderContext<'_>,
        input: &WheelInput<'_>,
    ) -> Vec<Primitive> {
        match kind {
            LayerKind::SeasonalBackground => seasonal_background(ctx),
            LayerKind::Months => month_ring(ctx),
            LayerKind::PastOverlay => past_overlay(ctx),
            LayerKind::FutureOverlay => future_overlay(ctx),
            LayerKind::Weeks => week_ring(ctx),
            LayerKind::Dates => date_ring(ctx),
            LayerKind::TodayIndicator => today_indicator(ctx),
            LayerKind::Events => event_ring(ctx, input.events, input.categories),
            LayerKind::Tooltip => self
                .hovered
                .as_deref()
                .and_then(|uid| input.events.iter().find(|e| e.uid == uid))
                .map(|event| vec![tooltip(event, input.categories)])
                .unwrap_or_default(),
        }
    }
}

/// Rotation in degrees that brings "now" to the offset angle, if alignment is on.
fn today_rotation(ctx: &RenderContext<'_>) -> Option<f64> {
    if !ctx.style.align_wheel_to_today {
        return None;
    }
    Some(-rad_to_deg(ctx.mapper.angle_of(ctx.now) - ctx.mapper.offset()))
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/composer.rs"]
mod tests;
