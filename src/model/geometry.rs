//! GeoJSON geometry objects.

use serde::{Deserialize, Deserializer};

/// A single position: longitude, latitude and optional altitude.
pub type Position = Vec<f64>;

/// A GeoJSON geometry.
///
/// Coordinate-bearing variants hold `Option` so that a geometry with a valid
/// type tag but no `coordinates` member can still be represented (and later
/// rejected by [`Geometry::is_valid`]). Unrecognized type tags deserialize to
/// [`Geometry::Unknown`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(default)]
        coordinates: Option<Position>,
    },
    LineString {
        #[serde(default)]
        coordinates: Option<Vec<Position>>,
    },
    Polygon {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Position>>>,
    },
    MultiPoint {
        #[serde(default)]
        coordinates: Option<Vec<Position>>,
    },
    MultiLineString {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Position>>>,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Vec<Position>>>>,
    },
    GeometryCollection {
        #[serde(default)]
        geometries: Option<Vec<Geometry>>,
    },
    #[serde(other)]
    Unknown,
}

impl Geometry {
    pub fn point(coordinates: Position) -> Self {
        Geometry::Point {
            coordinates: Some(coordinates),
        }
    }

    pub fn line_string(coordinates: Vec<Position>) -> Self {
        Geometry::LineString {
            coordinates: Some(coordinates),
        }
    }

    pub fn polygon(rings: Vec<Vec<Position>>) -> Self {
        Geometry::Polygon {
            coordinates: Some(rings),
        }
    }

    pub fn collection(geometries: Vec<Geometry>) -> Self {
        Geometry::GeometryCollection {
            geometries: Some(geometries),
        }
    }

    /// The GeoJSON type tag, or `"Unknown"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
            Geometry::Unknown => "Unknown",
        }
    }

    /// Point or MultiPoint.
    pub fn is_point(&self) -> bool {
        matches!(self, Geometry::Point { .. } | Geometry::MultiPoint { .. })
    }

    /// LineString or MultiLineString.
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            Geometry::LineString { .. } | Geometry::MultiLineString { .. }
        )
    }

    /// Polygon or MultiPolygon.
    pub fn is_polygon(&self) -> bool {
        matches!(self, Geometry::Polygon { .. } | Geometry::MultiPolygon { .. })
    }

    /// Check that the geometry can be mapped.
    ///
    /// A geometry is valid when its type is known and it carries coordinates,
    /// or when it is a GeometryCollection whose members are all valid.
    /// Collections nested more than `max_depth` levels deep are invalid.
    pub fn is_valid(&self, max_depth: usize) -> bool {
        match self {
            Geometry::Point { coordinates } => coordinates.is_some(),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                coordinates.is_some()
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                coordinates.is_some()
            }
            Geometry::MultiPolygon { coordinates } => coordinates.is_some(),
            Geometry::GeometryCollection { geometries } => match geometries {
                Some(members) if max_depth > 0 => {
                    members.iter().all(|g| g.is_valid(max_depth - 1))
                }
                _ => false,
            },
            Geometry::Unknown => false,
        }
    }
}

/// Deserialize an optional geometry without failing the enclosing feature.
///
/// Geometries that do not match any known shape (missing `type`, wrongly
/// nested coordinates, non-numeric positions) become [`Geometry::Unknown`].
pub(crate) fn lenient_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(geometry_from_value))
}

pub(crate) fn geometry_from_value(value: serde_json::Value) -> Geometry {
    Geometry::deserialize(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "malformed geometry treated as unknown");
        Geometry::Unknown
    })
}
