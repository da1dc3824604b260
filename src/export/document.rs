//! Document assembly: features in, `<kml>` element out.

use super::KmlConfig;
use super::placemark::feature_to_kml;
use crate::error::Result;
use crate::model::Feature;
use crate::style::StyleRegistry;
use crate::xml::Element;

/// KML 2.2 namespace.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Assemble the `<kml><Document>` tree for a list of features.
///
/// Each style definition is placed directly before the first Placemark that
/// uses it. Style ids are unique within the document.
pub fn assemble_document(features: &[Feature], config: &KmlConfig) -> Result<Element> {
    let mut registry = StyleRegistry::new();
    let mut document = Element::new("Document");
    let mut placemarks = 0usize;

    for feature in features {
        let Some(mapped) = feature_to_kml(feature, config, &mut registry)? else {
            continue;
        };
        if let Some(style) = mapped.style {
            document.push(style);
        }
        document.push(mapped.placemark);
        placemarks += 1;
    }

    tracing::debug!(
        features = features.len(),
        placemarks,
        styles = registry.len(),
        "assembled KML document"
    );

    Ok(Element::new("kml")
        .with_attr("xmlns", KML_NAMESPACE)
        .with_child(document))
}
