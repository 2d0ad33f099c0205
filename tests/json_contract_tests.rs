use dashboard_charts::api::{CHART_REQUEST_JSON_SCHEMA_V1, ChartOptions, ChartRequest};
use dashboard_charts::render::{RecordingSurface, palette};
use dashboard_charts::{ChartData, ChartError, ChartKind};

#[test]
fn bare_request_parses_with_defaults_for_omitted_options() {
    let request = ChartRequest::from_json_compat_str(
        r#"{ "kind": "bar", "data": { "shape": "series", "values": [4.0, 8.0, 6.0] } }"#,
    )
    .expect("parse");
    assert_eq!(request.kind, ChartKind::Bar);
    assert_eq!(request.data, ChartData::series(vec![4.0, 8.0, 6.0]));
    assert_eq!(request.options, ChartOptions::new());

    let mut surface = RecordingSurface::new(200, 100);
    request.draw(&mut surface).expect("draw");
    assert_eq!(surface.filled_rects().len(), 3);
}

#[test]
fn versioned_contract_round_trips() {
    let request = ChartRequest::new(
        ChartKind::GroupedBar,
        ChartData::MultiSeries(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
        ChartOptions::new().with_fill_color(palette::ALT_BLUE),
    );
    let json = request.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_REQUEST_JSON_SCHEMA_V1}")));
    assert!(json.contains("\"grouped_bar\""));

    let parsed = ChartRequest::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, request);

    let bare = request.to_json_pretty().expect("bare");
    assert_eq!(ChartRequest::from_json_compat_str(&bare).expect("bare parse"), request);
}

#[test]
fn banded_series_and_points_parse_from_tagged_json() {
    let line = ChartRequest::from_json_compat_str(
        r##"{
            "kind": "line",
            "data": {
                "shape": "banded_series",
                "values": {
                    "series": [1.0, 2.0],
                    "band": [{ "lower": 0.5, "upper": 1.5 }, { "lower": 1.5, "upper": 2.5 }]
                }
            },
            "options": { "stroke_color": "#88a1ff" }
        }"##,
    )
    .expect("line");
    assert!(matches!(line.data, ChartData::BandedSeries { .. }));
    assert_eq!(line.options.stroke_color, Some(palette::ALT_BLUE));

    let scatter = ChartRequest::from_json_compat_str(
        r#"{
            "kind": "scatter",
            "data": { "shape": "points", "values": [{ "x": 1.0, "y": 2.0 }] }
        }"#,
    )
    .expect("scatter");
    assert_eq!(scatter.data.sample_count(), 1);
}

#[test]
fn unsupported_schema_and_garbage_are_rejected() {
    let future = r#"{
        "schema_version": 2,
        "request": { "kind": "bar", "data": { "shape": "series", "values": [1.0] } }
    }"#;
    let err = ChartRequest::from_json_compat_str(future).expect_err("future schema");
    assert!(matches!(
        err,
        ChartError::InvalidData(ref message) if message.contains("schema version")
    ));

    assert!(ChartRequest::from_json_compat_str("{ not json").is_err());
    assert!(ChartRequest::from_json_compat_str(r#"{ "kind": "pie", "data": [] }"#).is_err());
}
