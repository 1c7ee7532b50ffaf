//! Calwheel renders an annual calendar as a wheel of concentric SVG rings.
//!
//! A date range is mapped onto one full turn. Around it sit rings for months, ISO or
//! locale weeks, individual days and user events on numbered lanes, plus overlays for
//! the elapsed and remaining part of the range and a marker for "now".
//!
//! The render path is pure: build a [`WheelInput`], call [`Wheel::compose`] for a
//! [`WheelScene`] or [`Wheel::render_svg`] for markup. Errors only arise at the edges
//! (document loading, `.ics` import, export, persistence) and are reported as
//! [`CalwheelError`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod calendar;
pub(crate) mod export;
pub(crate) mod geometry;
pub(crate) mod import;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod rings;
pub(crate) mod scene;
pub(crate) mod store;
pub(crate) mod wheel;

pub use crate::foundation::error::{CalwheelError, CalwheelResult};
pub use crate::foundation::math::{Point, Vec2, fmt_num, polar};

pub use crate::calendar::spans::{DateSpan, DayIter, MonthSpans, WeekSpans};
pub use crate::calendar::week::WeekScheme;
pub use crate::geometry::angle::{AngleMapper, angle_of};
pub use crate::geometry::arc::{fat_arc, needs_large_arc, thin_arc};
pub use crate::layout::lanes::{deepest_drawable_lane, lane_band};
pub use crate::model::category::{
    Category, DEFAULT_EVENT_FILL, DEFAULT_EVENT_FONT, ResolvedColors, default_categories,
    find_category, new_category, remove_category, resolve_colors,
};
pub use crate::model::document::WheelDocument;
pub use crate::model::event::{
    CalendarEvent, copy_event, local_datetime, new_event, remove_event, sort_events,
};
pub use crate::model::example::example_events;
pub use crate::model::locale::{Locale, WeekRules};
pub use crate::model::palette::Palette;
pub use crate::model::range::{DateRange, NormalizedRange, end_of_day, start_of_day};
pub use crate::model::style::{RingBand, WheelStyleConfig};
pub use crate::rings::RenderContext;
pub use crate::rings::events::{EventArc, layout_event, visibility_floor};
pub use crate::rings::season::Season;
pub use crate::scene::primitive::{
    Guide, Label, Layer, LayerKind, Line, Paint, Primitive, TextAnchor, Tooltip, Wedge,
    WheelScene,
};
pub use crate::scene::svg::write_scene;
pub use crate::wheel::composer::{Wheel, WheelInput};

pub use crate::export::raster::rasterize_png;
pub use crate::export::svg::{to_standalone_svg, write_standalone_svg};
pub use crate::import::ics::{merge_events, parse_ics};
pub use crate::store::json::JsonFileRepository;
pub use crate::store::{StateRepository, Validate};
