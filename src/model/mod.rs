//! GeoJSON input model.
//!
//! This module contains:
//! - Geometry variants and validity checks
//! - Features, feature collections and the root object dispatch
//! - Helpers for reading loosely typed property values

mod feature;
mod geometry;
pub mod value;

pub use feature::{Feature, FeatureCollection, GeoJson, Properties};
pub use geometry::{Geometry, Position};
