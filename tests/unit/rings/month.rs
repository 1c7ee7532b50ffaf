use super::*;
use crate::{
    model::{
        locale::{EN_US, FI},
        style::WheelStyleConfig,
    },
    rings::test_support::{at, ctx},
};

fn wedges(prims: &[Primitive]) -> Vec<&Wedge> {
    prims
        .iter()
        .filter_map(|p| match p {
            Primitive::Wedge(w) => Some(w),
            _ => None,
        })
        .collect()
}

fn labels(prims: &[Primitive]) -> Vec<&Label> {
    prims
        .iter()
        .filter_map(|p| match p {
            Primitive::Label(l) => Some(l),
            _ => None,
        })
        .collect()
}

#[test]
fn twelve_tinted_segments_with_names() {
    let style = WheelStyleConfig::default();
    let prims = month_ring(&ctx(&style, &EN_US, at(2026, 1, 1)));
    let w = wedges(&prims);
    assert_eq!(w.len(), 12);
    assert_eq!(w[0].paint.fill.as_deref(), Some("rgba(173, 216, 230, 0.6)"));
    assert_eq!(w[6].paint.fill.as_deref(), Some("rgba(255, 255, 200, 0.7)"));

    let l = labels(&prims);
    assert_eq!(l.len(), 12);
    assert_eq!(l[0].text, "January");
    assert_eq!(l[0].guide_id, "month-20260101");
    assert_eq!(l[0].anchor, TextAnchor::Start);
    assert_eq!(l[0].start_offset, "0%");
}

#[test]
fn localized_and_reversed_labels() {
    let mut style = WheelStyleConfig::default();
    style.reverse = true;
    let prims = month_ring(&ctx(&style, &FI, at(2026, 1, 1)));
    let l = labels(&prims);
    assert_eq!(l[5].text, "kesäkuu");
    assert_eq!(l[5].anchor, TextAnchor::End);
    assert_eq!(l[5].start_offset, "100%");
}

#[test]
fn zero_font_size_drops_labels_only() {
    let mut style = WheelStyleConfig::default();
    style.month_font_size = 0.0;
    let prims = month_ring(&ctx(&style, &EN_US, at(2026, 1, 1)));
    assert_eq!(prims.len(), 12);
    assert!(labels(&prims).is_empty());
}

#[test]
fn suppressed_when_radii_collapse() {
    let mut style = WheelStyleConfig::default();
    style.month_inner_radius = style.month_outer_radius;
    assert!(month_ring(&ctx(&style, &EN_US, at(2026, 1, 1))).is_empty());
}
