//! Input decoding helpers.

use std::borrow::Cow;

/// Decode raw GeoJSON bytes to a string.
///
/// This function:
/// 1. Sniffs a BOM and decodes UTF-8 (BOM stripped) or UTF-16
/// 2. Falls back to Windows-1252 when the bytes are not valid UTF-8
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8 without
/// a BOM.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    tracing::debug!(
        detected = encoding.name(),
        "input is not valid UTF-8, decoding as windows-1252"
    );
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
