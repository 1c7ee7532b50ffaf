use crate::foundation::math::Point;

/// Fill/stroke attributes shared by drawable shapes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Paint {
    /// Fill color; `None` writes `fill="none"`.
    pub fill: Option<String>,
    /// Stroke color; `None` omits the stroke.
    pub stroke: Option<String>,
    /// Stroke width; `None` leaves the SVG default.
    pub stroke_width: Option<f64>,
    /// Whole-shape opacity.
    pub opacity: Option<f64>,
}

impl Paint {
    /// Filled, unstroked paint.
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// Add a stroke.
    pub fn with_stroke(mut self, color: impl Into<String>, width: Option<f64>) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = width;
        self
    }

    /// Set the whole-shape opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// A filled or outlined ring segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Wedge {
    /// SVG path data.
    pub d: String,
    /// How the path is drawn.
    pub paint: Paint,
    /// Excluded from hit testing.
    pub passive: bool,
    /// Set on event arcs; hovering them drives the tooltip.
    pub event_uid: Option<String>,
}

/// Invisible path that a [`Label`] follows.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Guide {
    /// Element id labels refer to.
    pub id: String,
    /// SVG path data.
    pub d: String,
}

/// Horizontal alignment of a label on its guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TextAnchor {
    /// `start`
    Start,
    /// `middle`
    Middle,
    /// `end`
    End,
}

impl TextAnchor {
    /// Value of the SVG `text-anchor` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Text laid out along a [`Guide`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Label {
    /// [`Guide::id`] of the path to follow.
    pub guide_id: String,
    /// Displayed text.
    pub text: String,
    /// Font size in user units.
    pub font_size: f64,
    /// Alignment relative to `start_offset`.
    pub anchor: TextAnchor,
    /// Position along the guide, e.g. `"50%"`.
    pub start_offset: &'static str,
    /// Center glyphs vertically on the guide.
    pub centered_baseline: bool,
    /// Text color; `None` inherits.
    pub fill: Option<String>,
    /// Set on event labels.
    pub event_uid: Option<String>,
}

/// Straight radial stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Line {
    /// Inner end.
    pub from: Point,
    /// Outer end.
    pub to: Point,
    /// Stroke color.
    pub stroke: String,
    /// Stroke width in user units.
    pub stroke_width: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

/// Info box drawn at the wheel center for the hovered event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Tooltip {
    /// Text rows, top to bottom.
    pub lines: Vec<String>,
}

/// Anything a ring generator can emit.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Primitive {
    /// Ring segment or pie slice.
    Wedge(Wedge),
    /// Text path, only ever referenced.
    Guide(Guide),
    /// Text on a guide.
    Label(Label),
    /// Radial tick or marker.
    Line(Line),
    /// Hover info box.
    Tooltip(Tooltip),
}

/// Fixed back-to-front paint order of the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LayerKind {
    /// Faint per-month season wedges.
    SeasonalBackground,
    /// Month segments and names.
    Months,
    /// Pie from the range start to now.
    PastOverlay,
    /// Band from now to the range end.
    FutureOverlay,
    /// Week outlines and numbers.
    Weeks,
    /// Day ticks.
    Dates,
    /// Marker at now.
    TodayIndicator,
    /// Event arcs and labels.
    Events,
    /// Hovered event info.
    Tooltip,
}

impl LayerKind {
    /// Every kind, back to front.
    pub const PAINT_ORDER: [LayerKind; 9] = [
        LayerKind::SeasonalBackground,
        LayerKind::Months,
        LayerKind::PastOverlay,
        LayerKind::FutureOverlay,
        LayerKind::Weeks,
        LayerKind::Dates,
        LayerKind::TodayIndicator,
        LayerKind::Events,
        LayerKind::Tooltip,
    ];

    /// Id of the layer's SVG group.
    pub fn name(self) -> &'static str {
        match self {
            Self::SeasonalBackground => "seasonal-background",
            Self::Months => "months",
            Self::PastOverlay => "past",
            Self::FutureOverlay => "future",
            Self::Weeks => "weeks",
            Self::Dates => "dates",
            Self::TodayIndicator => "today",
            Self::Events => "events",
            Self::Tooltip => "tooltip",
        }
    }
}

/// Primitives of one [`LayerKind`], in emission order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Which layer this is.
    pub kind: LayerKind,
    /// Contents, back to front.
    pub primitives: Vec<Primitive>,
}

impl Layer {
    /// Wedges of this layer.
    pub fn wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Wedge(w) => Some(w),
            _ => None,
        })
    }

    /// Labels of this layer.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(l) => Some(l),
            _ => None,
        })
    }

    /// Lines of this layer.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(l) => Some(l),
            _ => None,
        })
    }
}

/// A composed wheel: layers in paint order plus the root transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WheelScene {
    /// Side of the square viewBox.
    pub size: f64,
    /// Whole-wheel rotation in degrees, when aligned to today.
    pub rotation_deg: Option<f64>,
    /// One entry per [`LayerKind`], in [`LayerKind::PAINT_ORDER`].
    pub layers: Vec<Layer>,
}

impl WheelScene {
    /// Primitives of `kind`; empty if the layer is missing.
    pub fn layer(&self, kind: LayerKind) -> &[Primitive] {
        self.layers
            .iter()
            .find(|l| l.kind == kind)
            .map(|l| l.primitives.as_slice())
            .unwrap_or(&[])
    }

    /// The layer of `kind` itself.
    pub fn layer_ref(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Number of wedges in `kind`.
    pub fn wedge_count(&self, kind: LayerKind) -> usize {
        self.layer_ref(kind).map_or(0, |l| l.wedges().count())
    }

    /// Tooltip of the hovered event, if any.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.layer(LayerKind::Tooltip).iter().find_map(|p| match p {
            Primitive::Tooltip(t) => Some(t),
            _ => None,
        })
    }
}
