//! Features, collections, and the GeoJSON root object.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use super::geometry::{Geometry, geometry_from_value, lenient_geometry};
use crate::error::{Error, Result};

/// Feature properties, in document order.
pub type Properties = serde_json::Map<String, Value>;

/// A GeoJSON Feature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<Geometry>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            properties: None,
            geometry: Some(geometry),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Any GeoJSON root object.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    FeatureCollection(FeatureCollection),
    Feature(Feature),
    Geometry(Geometry),
}

impl GeoJson {
    /// Dispatch on the root `type` member.
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidGeoJson("root object has no \"type\" member".into()))?;

        match kind {
            "FeatureCollection" => Ok(GeoJson::FeatureCollection(
                FeatureCollection::deserialize(value)?,
            )),
            "Feature" => Ok(GeoJson::Feature(Feature::deserialize(value)?)),
            _ => Ok(GeoJson::Geometry(geometry_from_value(value))),
        }
    }

    /// Normalize to a feature collection.
    ///
    /// A bare feature becomes a one-element collection; a bare geometry is
    /// wrapped in a feature with empty properties.
    pub fn into_feature_collection(self) -> FeatureCollection {
        match self {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(f) => FeatureCollection::new(vec![f]),
            GeoJson::Geometry(g) => {
                FeatureCollection::new(vec![Feature::new(g).with_properties(Properties::new())])
            }
        }
    }
}

impl FromStr for GeoJson {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(fc: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(fc)
    }
}

impl From<Feature> for GeoJson {
    fn from(f: Feature) -> Self {
        GeoJson::Feature(f)
    }
}

impl From<Geometry> for GeoJson {
    fn from(g: Geometry) -> Self {
        GeoJson::Geometry(g)
    }
}
