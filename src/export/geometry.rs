//! GeoJSON geometry to KML geometry elements.
//!
//! Positions are written with their components joined by `", "` and one
//! position per line. Multi-geometries and geometry collections become a
//! `MultiGeometry` wrapping one element per member.

use crate::model::{Geometry, Position};
use crate::xml::{Element, text_element};

const COMPONENT_SEPARATOR: &str = ", ";
const POSITION_SEPARATOR: &str = "\n";

/// Map a geometry to its KML element.
///
/// Returns `None` for geometries that produce no output: unknown types,
/// missing coordinates, polygons without rings and empty multi-geometries.
pub fn geometry_to_kml(geometry: &Geometry) -> Option<Element> {
    match geometry {
        Geometry::Point {
            coordinates: Some(position),
        } => Some(point(position)),
        Geometry::LineString {
            coordinates: Some(positions),
        } => Some(line_string(positions)),
        Geometry::Polygon {
            coordinates: Some(rings),
        } => polygon(rings),
        Geometry::MultiPoint {
            coordinates: Some(points),
        } => multi_geometry(points.iter().map(|p| Some(point(p)))),
        Geometry::MultiLineString {
            coordinates: Some(lines),
        } => multi_geometry(lines.iter().map(|l| Some(line_string(l)))),
        Geometry::MultiPolygon {
            coordinates: Some(polygons),
        } => multi_geometry(polygons.iter().map(|rings| polygon(rings))),
        Geometry::GeometryCollection {
            geometries: Some(members),
        } => Some(
            Element::new("MultiGeometry")
                .with_children(members.iter().filter_map(geometry_to_kml)),
        ),
        _ => None,
    }
}

fn point(position: &[f64]) -> Element {
    Element::new("Point").with_child(text_element("coordinates", format_position(position)))
}

fn line_string(positions: &[Position]) -> Element {
    Element::new("LineString")
        .with_child(text_element("coordinates", format_positions(positions)))
}

fn polygon(rings: &[Vec<Position>]) -> Option<Element> {
    let (outer, inner) = rings.split_first()?;
    let mut polygon = Element::new("Polygon").with_child(boundary("outerBoundaryIs", outer));
    for ring in inner {
        polygon.push(boundary("innerBoundaryIs", ring));
    }
    Some(polygon)
}

fn boundary(name: &str, ring: &[Position]) -> Element {
    Element::new(name).with_child(
        Element::new("LinearRing")
            .with_child(text_element("coordinates", format_positions(ring))),
    )
}

fn multi_geometry(members: impl ExactSizeIterator<Item = Option<Element>>) -> Option<Element> {
    if members.len() == 0 {
        return None;
    }
    Some(Element::new("MultiGeometry").with_children(members.flatten()))
}

/// Format one position as `lon, lat[, alt]`.
pub fn format_position(position: &[f64]) -> String {
    position
        .iter()
        // -0 is written as 0
        .map(|&c| (if c == 0.0 { 0.0 } else { c }).to_string())
        .collect::<Vec<_>>()
        .join(COMPONENT_SEPARATOR)
}

/// Format a sequence of positions, one per line.
pub fn format_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|p| format_position(p))
        .collect::<Vec<_>>()
        .join(POSITION_SEPARATOR)
}
