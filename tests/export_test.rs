//! Integration tests for the exporter API: writing, configuration and
//! concurrent use.

use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use geokml::{GeoJson, KmlConfig, KmlExporter};

const SAMPLE: &str = r##"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature",
         "properties": {"title": "Harbour", "notes": "Quay & pier", "stroke": "#0000ff"},
         "geometry": {"type": "LineString", "coordinates": [[10.5, 59.9], [10.6, 59.95]]}},
        {"type": "Feature",
         "properties": {"title": "Light", "marker-symbol": "lighthouse"},
         "geometry": {"type": "Point", "coordinates": [10.7, 59.8, 12]}}
    ]
}"##;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn test_export_to_file() {
    init_tracing();
    let geojson: GeoJson = SAMPLE.parse().unwrap();
    let exporter = KmlExporter::new();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    exporter.export(&geojson, file.as_file_mut()).unwrap();
    file.flush().unwrap();

    let written = fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, exporter.convert(&geojson).unwrap());
    assert!(written.starts_with(r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document>"#));
    assert!(!written.starts_with("<?xml"));
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let exporter = KmlExporter::new().with_config(KmlConfig {
        enable_styling: true,
        ..KmlConfig::default()
    });
    let geojson: GeoJson = r##"{"type": "Feature", "properties": {"fill-opacity": 7},
        "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 1], [0, 0]]]}}"##
        .parse()
        .unwrap();

    let mut out = Vec::new();
    assert!(exporter.export(&geojson, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_config_loaded_from_json() {
    init_tracing();
    let config = KmlConfig::from_json(
        r#"{"nameProperty": "title", "descriptionProperty": "notes", "enableStyling": true}"#,
    )
    .unwrap();
    let kml = KmlExporter::new()
        .with_config(config)
        .convert_str(SAMPLE)
        .unwrap();

    assert!(kml.contains("<name>Harbour</name><description>Quay &amp; pier</description>"));
    assert!(kml.contains("<coordinates>10.7, 59.8, 12</coordinates>"));
    assert!(kml.contains("<styleUrl>#l-s_0000ff</styleUrl>"));
    assert!(kml.contains("<styleUrl>#m-ms_lighthouse</styleUrl>"));
    assert!(!kml.contains(r#"<Data name="title">"#));
}

#[test]
fn test_convert_bytes_windows_1252() {
    let mut bytes = br#"{"type": "Feature", "properties": {"name": "Caf"#.to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(br#""}, "geometry": {"type": "Point", "coordinates": [0, 0]}}"#);

    let kml = KmlExporter::new().convert_bytes(&bytes).unwrap();
    assert!(kml.contains("<name>Café</name>"));
}

#[test]
fn test_concurrent_conversions_are_independent() {
    let exporter = Arc::new(KmlExporter::new().with_config(KmlConfig {
        enable_styling: true,
        ..KmlConfig::default()
    }));
    let expected = exporter.convert_str(SAMPLE).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let exporter = Arc::clone(&exporter);
            thread::spawn(move || exporter.convert_str(SAMPLE).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
