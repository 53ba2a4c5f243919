use epicurve_rs::figure::{
    Axis, AxisKind, Coord, FIGURE_JSON_SCHEMA_V1, Figure, Layout, Title, Trace, Visibility,
};
use serde_json::json;

fn sample_figure() -> Figure {
    let trace = Trace::scatter()
        .with_name("Alpha")
        .with_x(vec![Coord::Int(0), Coord::Int(1)])
        .with_y(vec![Coord::Num(10.0), Coord::Num(20.0)])
        .with_visible(Visibility::LegendOnly);
    let layout = Layout::new()
        .with_title(Title::new("sample"))
        .with_yaxis(Axis::default().with_kind(AxisKind::Log));
    Figure::new(vec![trace], layout)
}

#[test]
fn contract_round_trips() {
    let figure = sample_figure();
    let payload = figure.to_json_contract_v1_pretty().expect("serialize");
    let parsed = Figure::from_json_compat_str(&payload).expect("parse");
    assert_eq!(parsed, figure);
}

#[test]
fn bare_figure_json_is_accepted() {
    let figure = sample_figure();
    let bare = serde_json::to_string(&figure).expect("serialize");
    let parsed = Figure::from_json_compat_str(&bare).expect("parse");
    assert_eq!(parsed, figure);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = json!({
        "schema_version": FIGURE_JSON_SCHEMA_V1 + 1,
        "figure": { "layout": {} },
    })
    .to_string();
    assert!(Figure::from_json_compat_str(&payload).is_err());
}

#[test]
fn visibility_serializes_in_dashboard_form() {
    let value = serde_json::to_value(Visibility::Visible).expect("serialize");
    assert_eq!(value, json!(true));
    let value = serde_json::to_value(Visibility::Hidden).expect("serialize");
    assert_eq!(value, json!(false));
    let value = serde_json::to_value(Visibility::LegendOnly).expect("serialize");
    assert_eq!(value, json!("legendonly"));

    let parsed: Visibility = serde_json::from_value(json!("legendonly")).expect("parse");
    assert_eq!(parsed, Visibility::LegendOnly);
    assert!(serde_json::from_value::<Visibility>(json!("sometimes")).is_err());
}

#[test]
fn coords_serialize_untagged() {
    let value = serde_json::to_value(vec![
        Coord::Int(3),
        Coord::Num(1.5),
        Coord::Label("01 Mar 2020".to_owned()),
    ])
    .expect("serialize");
    assert_eq!(value, json!([3, 1.5, "01 Mar 2020"]));
}

#[test]
fn unset_trace_fields_stay_out_of_the_json() {
    let trace = Trace::bar().with_name("bare");
    let value = serde_json::to_value(&trace).expect("serialize");
    let object = value.as_object().expect("object");

    assert_eq!(object.get("type"), Some(&json!("bar")));
    assert!(!object.contains_key("x"));
    assert!(!object.contains_key("marker"));
    assert!(!object.contains_key("visible"));
    assert!(!object.contains_key("locations"));
}

#[test]
fn axis_kind_serializes_as_type() {
    let axis = Axis::default().with_kind(AxisKind::Log);
    let value = serde_json::to_value(&axis).expect("serialize");
    assert_eq!(value, json!({ "type": "log" }));
}
