//! KML styling from simplestyle feature properties.
//!
//! This module contains:
//! - Hex/opacity to KML `aabbggrr` color conversion
//! - Style ids used to share one `<Style>` between identical features
//! - Marker and line/polygon `<Style>` builders
//! - The per-document registry of emitted styles

mod builder;
mod color;
mod hash;
mod registry;

pub use builder::{
    has_marker_style, has_polygon_and_line_style, marker_style, polygon_and_line_style,
};
pub use color::{DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR, hex_to_kml_color};
pub use hash::{StyleKind, style_hash};
pub use registry::StyleRegistry;
