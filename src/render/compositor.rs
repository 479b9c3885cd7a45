use std::io::Cursor;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::assets::decode::{PNG_MIME, decode_image, encode_data_uri};
use crate::foundation::core::{CropRegion, Rgba8};
use crate::foundation::error::{PrintframeError, PrintframeResult};
use crate::foundation::math::{aspect_of, height_for_aspect, usable_aspect};
use crate::render::composite::{
    over_in_place, premultiply, premultiply_in_place, unpremultiply_in_place,
};

/// Output width used when the caller does not choose one.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 2000;

/// Largest canvas, in pixels, [`output_size`] accepts.
pub const MAX_OUTPUT_PIXELS: u64 = 100_000_000;

/// Options for [`compose`].
#[derive(Clone, Copy, Debug)]
pub struct ComposeOpts {
    /// Output width in pixels; must be > 0.
    pub output_width: u32,
    /// Frame `width / height`. When `None` (or not finite and positive) it is derived from the
    /// decoded frame, falling back to `1.0`.
    pub frame_aspect: Option<f64>,
    /// Canvas fill drawn before the photo.
    pub background: Rgba8,
    /// Resampling filter for both layers. Defaults to bilinear ([`FilterType::Triangle`]).
    pub filter: FilterType,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            frame_aspect: None,
            background: Rgba8::WHITE,
            filter: FilterType::Triangle,
        }
    }
}

/// A flattened, PNG-encoded composite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
}

impl ComposedImage {
    /// `data:image/png;base64,...` form of the PNG.
    pub fn to_data_uri(&self) -> String {
        encode_data_uri(PNG_MIME, &self.png)
    }
}

/// Decode `photo` and `frame`, then render the cropped photo under the frame.
///
/// Layers are drawn background, photo, frame, in that order. The crop is checked before
/// anything is decoded; `None` fails with [`PrintframeError::PreconditionNotMet`].
#[tracing::instrument(
    skip(photo, frame),
    fields(photo_len = photo.len(), frame_len = frame.len())
)]
pub fn compose(
    photo: &[u8],
    crop: Option<CropRegion>,
    frame: &[u8],
    opts: &ComposeOpts,
) -> PrintframeResult<ComposedImage> {
    let crop =
        crop.ok_or_else(|| PrintframeError::precondition("no crop region established"))?;
    check_output_width(opts.output_width)?;

    let photo = decode_image(photo, "photo")?;
    let frame = decode_image(frame, "frame")?;
    compose_images(&photo, crop, &frame, opts)
}

/// [`compose`] over already-decoded straight-alpha images.
pub fn compose_images(
    photo: &RgbaImage,
    crop: CropRegion,
    frame: &RgbaImage,
    opts: &ComposeOpts,
) -> PrintframeResult<ComposedImage> {
    let raster = render_raster(photo, crop, frame, opts)?;
    let (width, height) = raster.dimensions();

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(raster)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| PrintframeError::encode(format!("encode composite png: {e}")))?;

    Ok(ComposedImage { width, height, png })
}

/// Render the composite without encoding it.
pub fn render_raster(
    photo: &RgbaImage,
    crop: CropRegion,
    frame: &RgbaImage,
    opts: &ComposeOpts,
) -> PrintframeResult<RgbaImage> {
    check_output_width(opts.output_width)?;
    let (width, height) = output_size(opts.output_width, opts.frame_aspect, frame)?;

    let (pw, ph) = photo.dimensions();
    let src = crop.clamp_to(pw, ph).ok_or_else(|| {
        PrintframeError::validation(format!(
            "crop region {crop:?} lies outside the {pw}x{ph} photo"
        ))
    })?;
    if src != crop {
        tracing::debug!(?crop, clamped = ?src, "crop region clamped to photo bounds");
    }
    tracing::debug!(width, height, ?src, "compositing");

    let bg = premultiply(opts.background.to_array());
    let pixels = (width as usize)
        .checked_mul(height as usize)
        .filter(|n| n.checked_mul(4).is_some())
        .ok_or_else(|| PrintframeError::validation("canvas buffer size overflow"))?;
    let mut canvas = bg.repeat(pixels);

    let photo_crop = imageops::crop_imm(photo, src.x, src.y, src.width, src.height).to_image();
    let photo_layer = scaled_premul_layer(photo_crop, width, height, opts.filter);
    over_in_place(&mut canvas, photo_layer.as_raw())?;

    let frame_layer = scaled_premul_layer(frame.clone(), width, height, opts.filter);
    over_in_place(&mut canvas, frame_layer.as_raw())?;

    unpremultiply_in_place(&mut canvas);
    RgbaImage::from_raw(width, height, canvas)
        .ok_or_else(|| PrintframeError::encode("canvas buffer does not match output size"))
}

/// Output canvas size for `output_width` and the frame's aspect ratio.
///
/// Canvases larger than [`MAX_OUTPUT_PIXELS`] are rejected before anything is allocated.
pub fn output_size(
    output_width: u32,
    frame_aspect: Option<f64>,
    frame: &RgbaImage,
) -> PrintframeResult<(u32, u32)> {
    check_output_width(output_width)?;
    let aspect = frame_aspect
        .and_then(usable_aspect)
        .or_else(|| aspect_of(frame.width(), frame.height()))
        .unwrap_or(1.0);
    let height = height_for_aspect(output_width, aspect).ok_or_else(|| {
        PrintframeError::validation(format!(
            "output height for width {output_width} at aspect {aspect} is too large"
        ))
    })?;
    if u64::from(output_width) * u64::from(height) > MAX_OUTPUT_PIXELS {
        return Err(PrintframeError::validation(format!(
            "output canvas {output_width}x{height} exceeds {MAX_OUTPUT_PIXELS} pixels"
        )));
    }
    Ok((output_width, height))
}

fn check_output_width(output_width: u32) -> PrintframeResult<()> {
    if output_width == 0 {
        return Err(PrintframeError::validation("output width must be > 0"));
    }
    Ok(())
}

// Resampling happens on premultiplied pixels so transparent texels do not bleed color.
fn scaled_premul_layer(
    mut layer: RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> RgbaImage {
    premultiply_in_place(&mut layer);
    if layer.dimensions() == (width, height) {
        return layer;
    }
    imageops::resize(&layer, width, height, filter)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
