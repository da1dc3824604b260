//! `<Style>` definitions for markers, lines and polygons.
//!
//! Styling follows the simplestyle property names (`marker-color`,
//! `stroke`, `fill-opacity`, ...). Points get an `IconStyle` pointing at a
//! hosted marker image; lines and polygons get a `LineStyle` and, when a
//! fill is given, a `PolyStyle`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Map, Value};

use super::color::{DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR, hex_to_kml_color};
use crate::error::Result;
use crate::model::value::{present, truthy, value_f64, value_text};
use crate::xml::{Element, text_element};

const MARKER_BASE_URL: &str = "https://api.tiles.mapbox.com/v3/marker/";
const DEFAULT_MARKER_SIZE: &str = "medium";
const DEFAULT_MARKER_COLOR: &str = "7e7e7e";
const DEFAULT_LINE_WIDTH: &str = "2";

/// Characters escaped inside a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const LINE_AND_POLYGON_KEYS: [&str; 5] = [
    "stroke",
    "stroke-opacity",
    "stroke-width",
    "fill",
    "fill-opacity",
];

/// Whether the properties ask for a custom marker.
pub fn has_marker_style(props: &Map<String, Value>) -> bool {
    ["marker-size", "marker-symbol", "marker-color"]
        .iter()
        .any(|key| truthy(props, key).is_some())
}

/// Whether the properties carry any line or polygon styling.
pub fn has_polygon_and_line_style(props: &Map<String, Value>) -> bool {
    LINE_AND_POLYGON_KEYS
        .iter()
        .any(|key| present(props, key).is_some())
}

/// Build an icon style for point features.
pub fn marker_style(props: &Map<String, Value>, id: &str) -> Element {
    let icon = Element::new("Icon").with_child(text_element("href", icon_url(props)));
    let hot_spot = Element::new("hotSpot")
        .with_attr("xunits", "fraction")
        .with_attr("yunits", "fraction")
        .with_attr("x", "0.5")
        .with_attr("y", "0.5");

    Element::new("Style").with_attr("id", id).with_child(
        Element::new("IconStyle")
            .with_child(icon)
            .with_child(hot_spot),
    )
}

/// Marker image URL: `pin-{size initial}[-{symbol}]+{color}.png`.
fn icon_url(props: &Map<String, Value>) -> String {
    let size = truthy(props, "marker-size")
        .map(value_text)
        .unwrap_or_else(|| DEFAULT_MARKER_SIZE.to_string());
    let size_initial: String = size.chars().take(1).collect();

    let symbol = truthy(props, "marker-symbol")
        .map(|v| format!("-{}", utf8_percent_encode(&value_text(v), PATH_SEGMENT)))
        .unwrap_or_default();

    let color = truthy(props, "marker-color")
        .map(|v| value_text(v).replace('#', ""))
        .unwrap_or_else(|| DEFAULT_MARKER_COLOR.to_string());

    format!(
        "{MARKER_BASE_URL}pin-{}{}+{}.png",
        utf8_percent_encode(&size_initial, PATH_SEGMENT),
        symbol,
        utf8_percent_encode(&color, PATH_SEGMENT)
    )
}

/// Build a line style, plus a polygon style when a fill is given.
///
/// Fails if `stroke-opacity` or `fill-opacity` is outside `[0, 1]`.
pub fn polygon_and_line_style(props: &Map<String, Value>, id: &str) -> Result<Element> {
    let stroke = kml_color(props, "stroke", "stroke-opacity", DEFAULT_STROKE_COLOR)?;
    let width = present(props, "stroke-width")
        .map(value_text)
        .unwrap_or_else(|| DEFAULT_LINE_WIDTH.to_string());

    let mut style = Element::new("Style").with_attr("id", id).with_child(
        Element::new("LineStyle")
            .with_child(text_element("color", stroke))
            .with_child(text_element("width", width)),
    );

    if truthy(props, "fill").is_some() || truthy(props, "fill-opacity").is_some() {
        let fill = kml_color(props, "fill", "fill-opacity", DEFAULT_FILL_COLOR)?;
        style.push(Element::new("PolyStyle").with_child(text_element("color", fill)));
    }

    Ok(style)
}

/// Resolve a color/opacity property pair, falling back to `fallback` when the
/// color is missing or malformed. A missing opacity counts as fully opaque.
fn kml_color(
    props: &Map<String, Value>,
    color_key: &str,
    opacity_key: &str,
    fallback: &str,
) -> Result<String> {
    let opacity = present(props, opacity_key).and_then(value_f64).unwrap_or(1.0);
    // An empty color still goes through the codec so the opacity is checked.
    let hex = present(props, color_key)
        .and_then(Value::as_str)
        .unwrap_or_default();
    Ok(hex_to_kml_color(hex, opacity)?.unwrap_or_else(|| fallback.to_string()))
}
