//! Feature to `Placemark` mapping.

use serde_json::{Map, Value};

use super::KmlConfig;
use super::geometry::geometry_to_kml;
use crate::error::Result;
use crate::model::value::{truthy, value_text};
use crate::model::{Feature, Geometry};
use crate::style::{
    StyleKind, StyleRegistry, has_marker_style, has_polygon_and_line_style, marker_style,
    polygon_and_line_style, style_hash,
};
use crate::xml::{Element, text_element};

/// One feature's contribution to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedFeature {
    /// A `<Style>` definition first needed by this feature.
    pub style: Option<Element>,
    pub placemark: Element,
}

/// Map a feature to a `Placemark`.
///
/// Placemark children are written in the order name, description,
/// ExtendedData, TimeStamp, geometry, styleUrl. Returns `Ok(None)` when the
/// feature is dropped under [`KmlConfig::skip_invalid_features`].
///
/// `registry` must be shared by every feature of one document: a style
/// definition is only returned the first time its id is seen.
pub fn feature_to_kml(
    feature: &Feature,
    config: &KmlConfig,
    registry: &mut StyleRegistry,
) -> Result<Option<MappedFeature>> {
    let geometry = feature
        .geometry
        .as_ref()
        .filter(|g| g.is_valid(config.max_collection_depth));

    match (&feature.geometry, geometry) {
        (Some(invalid), None) => {
            tracing::warn!(geometry = invalid.type_name(), "invalid geometry, not written")
        }
        (None, _) => tracing::debug!("feature has no geometry"),
        _ => {}
    }

    let geometry_element = geometry.and_then(geometry_to_kml);
    if let Some(empty) = geometry.filter(|_| geometry_element.is_none()) {
        tracing::debug!(geometry = empty.type_name(), "geometry has nothing to write");
    }

    if config.skip_invalid_features
        && (geometry_element.is_none() || feature.properties.is_none())
    {
        tracing::warn!("skipping feature without valid geometry or properties");
        return Ok(None);
    }

    let mut placemark = Element::new("Placemark");
    let mut style = None;
    let mut style_url = None;

    if let Some(props) = &feature.properties {
        let name = truthy(props, &config.name_property);
        let description = truthy(props, &config.description_property);
        let timestamp = truthy(props, &config.timestamp_property);

        if let Some(name) = name {
            placemark.push(text_element("name", value_text(name)));
        }
        if let Some(description) = description {
            placemark.push(text_element("description", value_text(description)));
        }

        let consumed = [
            name.map(|_| config.name_property.as_str()),
            description.map(|_| config.description_property.as_str()),
            timestamp.map(|_| config.timestamp_property.as_str()),
        ];
        placemark.push(extended_data(props, &consumed));

        if let Some(when) = timestamp {
            placemark
                .push(Element::new("TimeStamp").with_child(text_element("when", value_text(when))));
        }

        if config.enable_styling
            && geometry_element.is_some()
            && let Some(geometry) = geometry
        {
            (style, style_url) = resolve_style(props, geometry, registry)?;
        }
    }

    if let Some(element) = geometry_element {
        placemark.push(element);
    }

    if let Some(id) = style_url {
        placemark.push(text_element("styleUrl", format!("#{id}")));
    }

    Ok(Some(MappedFeature { style, placemark }))
}

/// `<ExtendedData>` holding every property not already written as a
/// name, description or timestamp.
fn extended_data(props: &Map<String, Value>, consumed: &[Option<&str>]) -> Element {
    let data = props
        .iter()
        .filter(|(key, _)| !consumed.contains(&Some(key.as_str())))
        .map(|(key, value)| {
            Element::new("Data")
                .with_attr("name", key.as_str())
                .with_child(text_element("value", value_text(value)))
        });
    Element::new("ExtendedData").with_children(data)
}

/// Work out the style reference for a feature and, if this is the first
/// feature using it, the style definition.
///
/// Points use marker styles; lines and polygons use line/poly styles.
/// Geometry collections are never styled.
fn resolve_style(
    props: &Map<String, Value>,
    geometry: &Geometry,
    registry: &mut StyleRegistry,
) -> Result<(Option<Element>, Option<String>)> {
    let kind = if geometry.is_point() && has_marker_style(props) {
        StyleKind::Marker
    } else if (geometry.is_line() || geometry.is_polygon()) && has_polygon_and_line_style(props) {
        StyleKind::LineAndPolygon
    } else {
        return Ok((None, None));
    };
    let Some(id) = style_hash(props, kind) else {
        return Ok((None, None));
    };

    let definition = match (kind, registry.register(&id)) {
        (_, false) => None,
        (StyleKind::Marker, true) => Some(marker_style(props, &id)),
        (StyleKind::LineAndPolygon, true) => Some(polygon_and_line_style(props, &id)?),
    };

    Ok((definition, Some(id)))
}
