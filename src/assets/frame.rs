use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::decode::{encode_data_uri, image_dimensions, parse_data_uri};
use crate::foundation::error::{PrintframeError, PrintframeResult};
use crate::foundation::math::{aspect_of, usable_aspect};

/// Id prefix of user-uploaded frames.
pub const CUSTOM_FRAME_PREFIX: &str = "custom-";

/// A decorative overlay that can be composited over a photo.
///
/// The serialized field names (`id`, `name`, `src`, `aspect`) match the records already
/// persisted by existing frame stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameAsset {
    /// Stable identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Relative asset path or a base64 `data:` URI.
    #[serde(rename = "src")]
    pub source: String,
    /// Frame `width / height`, used to size the output canvas.
    #[serde(
        rename = "aspect",
        default = "default_aspect",
        deserialize_with = "deserialize_aspect"
    )]
    pub aspect_ratio: f64,
}

fn default_aspect() -> f64 {
    1.0
}

// Stored records may carry `null` (a NaN written as JSON) or a non-positive ratio.
fn deserialize_aspect<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.and_then(usable_aspect).unwrap_or_else(default_aspect))
}

/// Frames that ship with every installation.
pub fn builtin_frames() -> Vec<FrameAsset> {
    vec![
        FrameAsset::new("frame-classic", "Classic White", "frames/frame1.png", 4.0 / 5.0),
        FrameAsset::new("frame-polaroid", "Polaroid", "frames/frame2.png", 1.0),
        FrameAsset::new("frame-instagram", "Instagram Mockup", "frames/frame3.png", 1.08),
    ]
}

impl FrameAsset {
    /// Build a frame record. Unusable aspect ratios fall back to `1.0`.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        source: impl Into<String>,
        aspect_ratio: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            source: source.into(),
            aspect_ratio: usable_aspect(aspect_ratio).unwrap_or(1.0),
        }
    }

    /// Turn an uploaded image file into a custom frame.
    ///
    /// The payload is kept inline as a `data:` URI. The aspect ratio comes from the decoded
    /// pixel dimensions and defaults to `1.0` when they cannot be read.
    pub fn from_upload(file_name: &str, bytes: &[u8]) -> Self {
        let mime = image::guess_format(bytes)
            .map(|f| f.to_mime_type())
            .unwrap_or("image/png");
        let aspect = match image_dimensions(bytes) {
            Ok((w, h)) => aspect_of(w, h).unwrap_or(1.0),
            Err(e) => {
                tracing::warn!(file_name, error = %e, "frame upload not decodable, assuming square");
                1.0
            }
        };
        Self::new(
            format!("{CUSTOM_FRAME_PREFIX}{}", uuid::Uuid::new_v4()),
            file_name,
            encode_data_uri(mime, bytes),
            aspect,
        )
    }

    /// Whether this frame was uploaded by a user rather than shipped built-in.
    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_FRAME_PREFIX)
    }

    /// Load the encoded image bytes, resolving relative paths against `assets_root`.
    pub fn load_bytes(&self, assets_root: &Path) -> PrintframeResult<Vec<u8>> {
        if self.source.starts_with("data:") {
            return Ok(parse_data_uri(&self.source)?.1);
        }
        let rel = normalize_rel_path(&self.source)?;
        let path = assets_root.join(rel);
        std::fs::read(&path).map_err(|e| {
            PrintframeError::storage(format!("read frame '{}': {e}", path.display()))
        })
    }
}

/// Normalize and validate asset-root-relative paths.
///
/// The result uses `/` separators, drops `.` segments, and rejects absolute paths or parent
/// traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> PrintframeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PrintframeError::validation("frame paths must be relative"));
    }
    if s.is_empty() {
        return Err(PrintframeError::validation("frame path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PrintframeError::validation(
                "frame paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PrintframeError::validation(
            "frame path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frame.rs"]
mod tests;
