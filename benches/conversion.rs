//! Benchmarks for the GeoJSON to KML pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use geokml::{
    Feature, FeatureCollection, GeoJson, Geometry, KmlConfig, KmlExporter, Position, Properties,
};

/// A synthetic collection mixing points, lines and holed polygons.
fn sample_collection(features: usize) -> GeoJson {
    let ring = |offset: f64| -> Vec<Position> {
        (0..64)
            .map(|i| {
                let t = i as f64 / 64.0 * std::f64::consts::TAU;
                vec![offset + t.cos(), offset + t.sin()]
            })
            .collect()
    };

    let collection: FeatureCollection = (0..features)
        .map(|i| {
            let mut props = Properties::new();
            props.insert("name".into(), format!("feature {i}").into());
            props.insert("index".into(), i.into());
            let stroke = if i % 2 == 0 { "#ff0000" } else { "#0000ff" };
            props.insert("stroke".into(), stroke.into());

            let offset = i as f64;
            let geometry = match i % 3 {
                0 => Geometry::point(vec![offset, offset]),
                1 => Geometry::line_string(ring(offset)),
                _ => Geometry::polygon(vec![ring(offset), ring(offset + 0.25)]),
            };
            Feature::new(geometry).with_properties(props)
        })
        .collect();

    collection.into()
}

fn bench_convert(c: &mut Criterion) {
    let geojson = sample_collection(1_000);
    let exporter = KmlExporter::new();

    c.bench_function("convert_1000_features", |b| {
        b.iter(|| exporter.convert(&geojson).unwrap());
    });
}

fn bench_convert_styled(c: &mut Criterion) {
    let geojson = sample_collection(1_000);
    let exporter = KmlExporter::new().with_config(KmlConfig {
        enable_styling: true,
        ..KmlConfig::default()
    });

    c.bench_function("convert_1000_features_styled", |b| {
        b.iter(|| exporter.convert(&geojson).unwrap());
    });
}

fn bench_parse_and_convert(c: &mut Criterion) {
    let json = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"foo": "bar"},
         "geometry": {"type": "MultiPolygon", "coordinates": [[
            [[0, 2], [1, 2], [2, 2], [0, 2]],
            [[0, 3], [1, 3], [2, 3], [0, 3]]
         ]]}}
    ]}"#;
    let exporter = KmlExporter::new();

    c.bench_function("parse_and_convert_small", |b| {
        b.iter(|| exporter.convert_str(json).unwrap());
    });
}

criterion_group!(
    benches,
    bench_convert,
    bench_convert_styled,
    bench_parse_and_convert
);
criterion_main!(benches);
