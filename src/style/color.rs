//! Hex color to KML color conversion.

use crate::error::{Error, Result};

/// Fallback line color when `stroke` is missing or malformed.
pub const DEFAULT_STROKE_COLOR: &str = "ff555555";
/// Fallback polygon color when `fill` is missing or malformed.
pub const DEFAULT_FILL_COLOR: &str = "88555555";

/// Convert a CSS-style hex color and an opacity into a KML `aabbggrr` color.
///
/// The color may carry a leading `#` and may use the 3-digit shorthand.
/// Returns `Ok(None)` when the color has any other length; the characters
/// themselves are not checked. Fails when `opacity` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use geokml::hex_to_kml_color;
///
/// assert_eq!(hex_to_kml_color("#123", 1.0).unwrap().as_deref(), Some("ff332211"));
/// assert_eq!(hex_to_kml_color("aaccdd", 0.5).unwrap().as_deref(), Some("7fddccaa"));
/// assert_eq!(hex_to_kml_color("ab", 1.0).unwrap(), None);
/// assert!(hex_to_kml_color("123", 1.1).is_err());
/// ```
pub fn hex_to_kml_color(hex_color: &str, opacity: f64) -> Result<Option<String>> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(Error::InvalidOpacity(opacity));
    }

    let hex = hex_color.replacen('#', "", 1).to_ascii_lowercase();
    if !hex.is_ascii() {
        return Ok(None);
    }

    let (r, g, b) = match hex.len() {
        3 => (
            hex[0..1].repeat(2),
            hex[1..2].repeat(2),
            hex[2..3].repeat(2),
        ),
        6 => (
            hex[0..2].to_string(),
            hex[2..4].to_string(),
            hex[4..6].to_string(),
        ),
        _ => return Ok(None),
    };

    let alpha = (opacity * 255.0).floor() as u8;
    Ok(Some(format!("{alpha:02x}{b}{g}{r}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shorthand_colors() {
        assert_eq!(hex_to_kml_color("123", 1.0).unwrap().unwrap(), "ff332211");
        assert_eq!(hex_to_kml_color("123", 0.5).unwrap().unwrap(), "7f332211");
        assert_eq!(hex_to_kml_color("123", 0.05).unwrap().unwrap(), "0c332211");
    }

    #[test]
    fn test_full_colors() {
        assert_eq!(hex_to_kml_color("aaccdd", 1.0).unwrap().unwrap(), "ffddccaa");
        assert_eq!(hex_to_kml_color("#AACCDD", 0.0).unwrap().unwrap(), "00ddccaa");
    }

    #[test]
    fn test_only_first_hash_removed() {
        assert_eq!(hex_to_kml_color("1#23", 1.0).unwrap().as_deref(), Some("ff332211"));
        assert_eq!(hex_to_kml_color("##123", 1.0).unwrap(), None);
    }

    #[test]
    fn test_invalid_opacity() {
        assert!(matches!(
            hex_to_kml_color("123", -0.1),
            Err(Error::InvalidOpacity(_))
        ));
        assert!(matches!(
            hex_to_kml_color("123", 1.1),
            Err(Error::InvalidOpacity(_))
        ));
        assert!(hex_to_kml_color("123", f64::NAN).is_err());
    }

    #[test]
    fn test_malformed_length_is_none() {
        assert_eq!(hex_to_kml_color("ab", 1.0).unwrap(), None);
        assert_eq!(hex_to_kml_color("", 1.0).unwrap(), None);
        assert_eq!(hex_to_kml_color("abcdabcd", 1.0).unwrap(), None);
        assert_eq!(hex_to_kml_color("ééé", 1.0).unwrap(), None);
    }

    #[test]
    fn test_digits_not_validated() {
        assert_eq!(hex_to_kml_color("zzz", 1.0).unwrap().unwrap(), "ffzzzzzz");
    }

    proptest! {
        #[test]
        fn prop_output_is_eight_lowercase_chars(
            color in "[0-9a-fA-F]{6}",
            opacity in 0.0f64..=1.0,
        ) {
            let kml = hex_to_kml_color(&color, opacity).unwrap().unwrap();
            prop_assert_eq!(kml.len(), 8);
            prop_assert_eq!(kml.to_ascii_lowercase(), kml.clone());
            let lower = color.to_ascii_lowercase();
            prop_assert_eq!(&kml[2..4], &lower[4..6]);
            prop_assert_eq!(&kml[6..8], &lower[0..2]);
        }

        #[test]
        fn prop_out_of_range_opacity_fails(opacity in prop_oneof![-10.0f64..-0.0001, 1.0001f64..10.0]) {
            prop_assert!(hex_to_kml_color("abc", opacity).is_err());
        }
    }
}
