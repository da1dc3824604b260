//! KML export.
//!
//! Provides [`KmlExporter`] and the mapping stages it drives:
//! geometry → KML geometry, feature → Placemark, collection → Document.
//!
//! # Architecture
//!
//! The exporter uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `convert()` returns the KML document as a string
//! - `export()` writes it to any `Write` destination
//!
//! # Example
//!
//! ```
//! use geokml::export::{KmlConfig, KmlExporter};
//!
//! let exporter = KmlExporter::new().with_config(KmlConfig {
//!     enable_styling: true,
//!     ..KmlConfig::default()
//! });
//! let kml = exporter.convert_str(r#"{"type": "Point", "coordinates": [1, 2]}"#)?;
//! assert!(kml.contains("<coordinates>1, 2</coordinates>"));
//! # Ok::<(), geokml::Error>(())
//! ```

use std::io::Write;

use serde::Deserialize;

use crate::error::Result;
use crate::model::GeoJson;
use crate::util::decode_text;
use crate::xml::Element;

mod document;
mod geometry;
mod placemark;

pub use document::{KML_NAMESPACE, assemble_document};
pub use geometry::{format_position, format_positions, geometry_to_kml};
pub use placemark::{MappedFeature, feature_to_kml};

/// Configuration for KML export.
///
/// Deserializes from JSON with camelCase keys; missing keys take their
/// default values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KmlConfig {
    /// Property written as the Placemark `<name>`.
    pub name_property: String,
    /// Property written as the Placemark `<description>`.
    pub description_property: String,
    /// Property written as `<TimeStamp><when>`.
    pub timestamp_property: String,
    /// Emit `<Style>` definitions and `<styleUrl>` references from
    /// simplestyle properties.
    pub enable_styling: bool,
    /// Drop features whose geometry is invalid or whose properties are null,
    /// instead of writing a Placemark without them.
    pub skip_invalid_features: bool,
    /// Deepest GeometryCollection nesting accepted as valid.
    pub max_collection_depth: usize,
}

impl Default for KmlConfig {
    fn default() -> Self {
        Self {
            name_property: "name".to_string(),
            description_property: "description".to_string(),
            timestamp_property: "timestamp".to_string(),
            enable_styling: false,
            skip_invalid_features: false,
            max_collection_depth: 32,
        }
    }
}

impl KmlConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// GeoJSON to KML exporter.
///
/// Holds only configuration, so one exporter can be shared across threads;
/// every conversion tracks its own styles.
#[derive(Debug, Clone, Default)]
pub struct KmlExporter {
    config: KmlConfig,
}

impl KmlExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: KmlConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &KmlConfig {
        &self.config
    }

    /// Build the KML element tree for a GeoJSON object.
    pub fn document(&self, geojson: &GeoJson) -> Result<Element> {
        match geojson {
            GeoJson::FeatureCollection(fc) => assemble_document(&fc.features, &self.config),
            single => {
                let fc = single.clone().into_feature_collection();
                assemble_document(&fc.features, &self.config)
            }
        }
    }

    /// Convert a GeoJSON object to a KML document string.
    pub fn convert(&self, geojson: &GeoJson) -> Result<String> {
        Ok(self.document(geojson)?.to_xml())
    }

    /// Parse GeoJSON text and convert it.
    pub fn convert_str(&self, json: &str) -> Result<String> {
        let geojson: GeoJson = json.parse()?;
        self.convert(&geojson)
    }

    /// Decode raw GeoJSON bytes (UTF-8 with or without BOM, UTF-16 with BOM,
    /// or Windows-1252) and convert them.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String> {
        self.convert_str(&decode_text(bytes))
    }

    /// Convert and write the KML document to `writer`.
    ///
    /// Nothing is written if the conversion fails.
    pub fn export<W: Write>(&self, geojson: &GeoJson, writer: &mut W) -> Result<()> {
        let kml = self.convert(geojson)?;
        writer.write_all(kml.as_bytes())?;
        Ok(())
    }
}
