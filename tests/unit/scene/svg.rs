use super::*;
use crate::{
    foundation::math::Point,
    scene::primitive::{Guide, Layer, TextAnchor},
};

fn scene_with(layers: Vec<Layer>, rotation_deg: Option<f64>) -> WheelScene {
    WheelScene {
        size: 100.0,
        rotation_deg,
        layers,
    }
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(xml_escape(r#"a<b>&"c"'"#), "a&lt;b&gt;&amp;&quot;c&quot;&apos;");
}

#[test]
fn empty_scene_has_root_group_only() {
    let svg = write_scene(&scene_with(vec![], None));
    assert_eq!(
        svg,
        r#"<svg viewBox="0 0 100 100"><g transform="translate(50,50)"></g></svg>"#
    );
}

#[test]
fn rotation_is_appended_to_root_transform() {
    let svg = write_scene(&scene_with(vec![], Some(-42.5)));
    assert!(svg.contains(r#"transform="translate(50,50) rotate(-42.500)""#));
}

#[test]
fn primitives_render_with_attributes() {
    let layers = vec![
        Layer {
            kind: LayerKind::Dates,
            primitives: vec![Primitive::Line(Line {
                from: Point::new(1.0, 2.0),
                to: Point::new(3.0, 4.0),
                stroke: "blue".to_string(),
                stroke_width: 1.0,
                opacity: 0.5,
            })],
        },
        Layer {
            kind: LayerKind::Events,
            primitives: vec![
                Primitive::Wedge(Wedge {
                    d: "M 0 0 Z".to_string(),
                    paint: Paint::fill("#fff").with_stroke("#2f3640", Some(0.5)),
                    passive: false,
                    event_uid: Some("a&b".to_string()),
                }),
                Primitive::Guide(Guide {
                    id: "event-label-a_b".to_string(),
                    d: "M 0 0".to_string(),
                }),
                Primitive::Label(Label {
                    guide_id: "event-label-a_b".to_string(),
                    text: "Fish & <chips>".to_string(),
                    font_size: 12.0,
                    anchor: TextAnchor::Middle,
                    start_offset: "50%",
                    centered_baseline: true,
                    fill: Some("#000000".to_string()),
                    event_uid: Some("a&b".to_string()),
                }),
            ],
        },
    ];
    let svg = write_scene(&scene_with(layers, None));
    assert!(svg.contains(
        r#"<line x1="1.000" y1="2.000" x2="3.000" y2="4.000" stroke="blue" stroke-width="1" opacity="0.5"/>"#
    ));
    assert!(svg.contains(
        r##"<path d="M 0 0 Z" fill="#fff" stroke="#2f3640" stroke-width="0.5" data-event-uid="a&amp;b"/>"##
    ));
    assert!(svg.contains(r#"<path id="event-label-a_b" fill="none" d="M 0 0"/>"#));
    assert!(svg.contains(r##"<textPath href="#event-label-a_b" startOffset="50%">Fish &amp; &lt;chips&gt;</textPath>"##));
    assert!(svg.find(r#"data-layer="dates""#) < svg.find(r#"data-layer="events""#));
}

#[test]
fn tooltip_sits_outside_rotated_group() {
    let layers = vec![Layer {
        kind: LayerKind::Tooltip,
        primitives: vec![Primitive::Tooltip(Tooltip {
            lines: vec!["Subject: a".to_string(), "Lane: 1".to_string()],
        })],
    }];
    let svg = write_scene(&scene_with(layers, Some(10.0)));
    let rotated_end = svg.find("</g>").unwrap();
    let tooltip_at = svg.find(r#"data-layer="tooltip""#).unwrap();
    assert!(tooltip_at > rotated_end);
    assert!(svg.contains(r#"<text x="0" y="-30" text-anchor="middle" font-size="14" fill="black">Lane: 1</text>"#));
    assert!(svg.ends_with("</g></g></svg>"));
}
