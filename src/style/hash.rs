//! Style identifiers derived from simplestyle properties.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use crate::model::value::{present, value_text};

/// Which kind of `<Style>` an id names.
///
/// Points get marker styles and lines/polygons get line/poly styles, so the
/// same properties on different geometries must not share a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Marker,
    LineAndPolygon,
}

impl StyleKind {
    fn prefix(self) -> &'static str {
        match self {
            StyleKind::Marker => "m",
            StyleKind::LineAndPolygon => "l",
        }
    }
}

/// Styling properties in hash order: key, tag, whether it holds a color.
const HASH_FIELDS: [(&str, &str, bool); 8] = [
    ("marker-symbol", "ms", false),
    ("marker-color", "mc", true),
    ("marker-size", "mz", false),
    ("stroke", "s", true),
    ("stroke-width", "sw", false),
    ("stroke-opacity", "so", false),
    ("fill", "f", true),
    ("fill-opacity", "fo", false),
];

/// Build the style id for a feature's properties.
///
/// Features with the same values for the styling properties get the same
/// id, which is what lets one `<Style>` definition serve all of them.
/// Distinct values always give distinct ids: each field is written as
/// `-{tag}_{value}` with the value percent-encoded over the alphanumerics
/// and `%` spelled `_`, so neither `-` nor `_` can leak out of a value.
/// A color's first `#` is dropped, matching the color codec.
///
/// Returns `None` when no styling property is set.
///
/// # Examples
///
/// ```
/// use geokml::style::{StyleKind, style_hash};
/// use serde_json::json;
///
/// let props = json!({"stroke": "#ff0000", "stroke-width": 1.5, "name": "x"});
/// assert_eq!(
///     style_hash(props.as_object().unwrap(), StyleKind::LineAndPolygon).as_deref(),
///     Some("l-s_ff0000-sw_1_2E5")
/// );
/// ```
pub fn style_hash(props: &serde_json::Map<String, Value>, kind: StyleKind) -> Option<String> {
    let mut hash = String::from(kind.prefix());
    for (key, tag, is_color) in &HASH_FIELDS {
        let Some(value) = present(props, key) else {
            continue;
        };
        let mut text = value_text(value);
        if *is_color {
            text = text.replacen('#', "", 1);
        }
        hash.push('-');
        hash.push_str(tag);
        hash.push('_');
        for chunk in utf8_percent_encode(&text, NON_ALPHANUMERIC) {
            hash.push_str(&chunk.replace('%', "_"));
        }
    }
    (hash.len() > kind.prefix().len()).then_some(hash)
}
