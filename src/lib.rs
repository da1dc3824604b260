//! # geokml
//!
//! A fast, lightweight library for converting GeoJSON to KML.
//!
//! ## Features
//!
//! - All seven GeoJSON geometry types, including nested geometry collections
//! - Placemark `name`, `description` and `TimeStamp` from configurable properties
//! - Remaining properties written as `ExtendedData`
//! - Optional simplestyle support: marker, line and polygon `<Style>`s, each
//!   defined once per document and shared through `<styleUrl>`
//!
//! ## Quick Start
//!
//! ```
//! use geokml::geojson_to_kml;
//!
//! let kml = geojson_to_kml(r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "properties": {"foo": "bar"},
//!         "geometry": {"type": "Point", "coordinates": [0, 2]}
//!     }]
//! }"#)?;
//!
//! assert_eq!(
//!     kml,
//!     concat!(
//!         r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Placemark>"#,
//!         r#"<ExtendedData><Data name="foo"><value>bar</value></Data></ExtendedData>"#,
//!         "<Point><coordinates>0, 2</coordinates></Point>",
//!         "</Placemark></Document></kml>"
//!     )
//! );
//! # Ok::<(), geokml::Error>(())
//! ```
//!
//! ## Styling
//!
//! Styles are off by default. Enable them through [`KmlConfig`]:
//!
//! ```
//! use geokml::{KmlConfig, KmlExporter};
//!
//! let exporter = KmlExporter::new().with_config(KmlConfig {
//!     enable_styling: true,
//!     ..KmlConfig::default()
//! });
//! let kml = exporter.convert_str(r##"{
//!     "type": "Feature",
//!     "properties": {"stroke": "#ff0000"},
//!     "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
//! }"##)?;
//! assert!(kml.contains(r#"<Style id="l-s_ff0000">"#));
//! assert!(kml.contains("<styleUrl>#l-s_ff0000</styleUrl>"));
//! # Ok::<(), geokml::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod style;
pub(crate) mod util;
pub mod xml;

pub use error::{Error, Result};
pub use export::{KmlConfig, KmlExporter};
pub use model::{Feature, FeatureCollection, GeoJson, Geometry, Position, Properties};
pub use style::hex_to_kml_color;

/// Convert a GeoJSON object to a KML document with the default configuration.
pub fn to_kml(geojson: &GeoJson) -> Result<String> {
    KmlExporter::new().convert(geojson)
}

/// Parse GeoJSON text and convert it with the default configuration.
pub fn geojson_to_kml(json: &str) -> Result<String> {
    KmlExporter::new().convert_str(json)
}
