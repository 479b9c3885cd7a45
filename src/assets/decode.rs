use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::foundation::error::{PrintframeError, PrintframeResult};

/// MIME type of every composited output.
pub const PNG_MIME: &str = "image/png";

/// Decode an encoded image (PNG, JPEG, ... or a `data:` URI) into straight-alpha RGBA8.
///
/// `what` names the input in error messages (e.g. `"photo"`, `"frame"`).
pub fn decode_image(bytes: &[u8], what: &str) -> PrintframeResult<image::RgbaImage> {
    let owned;
    let raw = if bytes.starts_with(b"data:") {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| PrintframeError::decode(format!("{what}: data URI is not UTF-8: {e}")))?;
        owned = parse_data_uri(text)
            .map_err(|e| PrintframeError::decode(format!("{what}: {e}")))?
            .1;
        owned.as_slice()
    } else {
        bytes
    };

    let dyn_img = image::load_from_memory(raw)
        .map_err(|e| PrintframeError::decode(format!("{what}: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read only the pixel dimensions of an encoded image.
pub fn image_dimensions(bytes: &[u8]) -> PrintframeResult<(u32, u32)> {
    let reader = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PrintframeError::decode(format!("sniff image format: {e}")))?;
    reader
        .into_dimensions()
        .map_err(|e| PrintframeError::decode(format!("read image dimensions: {e}")))
}

/// Split a base64 `data:` URI into its MIME type and decoded payload.
pub fn parse_data_uri(uri: &str) -> PrintframeResult<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| PrintframeError::decode("data URI must start with 'data:'"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| PrintframeError::decode("data URI is missing ','"))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or_else(|| PrintframeError::decode("only base64 data URIs are supported"))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| PrintframeError::decode(format!("data URI base64: {e}")))?;
    Ok((mime.to_owned(), bytes))
}

/// Wrap bytes in a base64 `data:` URI.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
