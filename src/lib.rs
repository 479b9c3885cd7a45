//! printframe is the core of a photo print customizer.
//!
//! It covers the two pieces with real logic in them:
//!
//! - Price resolution: [`resolve`] maps a category, print size and quantity to a unit price
//!   through a [`RateTable`] of quantity brackets (`"10-15"`, `"1000+"`, `"<15"`).
//! - Compositing: [`compose`] crops a photo, scales it onto a canvas sized by the frame's
//!   aspect ratio, draws the frame overlay on top and returns a PNG.
//!
//! Custom frames are persisted through a [`FrameRepository`], and [`OrderPayload`] bundles the
//! composite and the price for the external order-intake service.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod order;
mod pricing;
mod render;

pub use crate::foundation::core::{CropRegion, Rgba8};
pub use crate::foundation::error::{ErrorKind, PrintframeError, PrintframeResult};

pub use crate::pricing::bracket::{Bracket, BracketRange};
pub use crate::pricing::resolver::{PriceBreakdown, price_or_zero, quote, resolve};
pub use crate::pricing::table::{Category, RateTable, SizeRates};

pub use crate::assets::decode::{
    PNG_MIME, decode_image, encode_data_uri, image_dimensions, parse_data_uri,
};
pub use crate::assets::frame::{CUSTOM_FRAME_PREFIX, FrameAsset, builtin_frames};
pub use crate::assets::repository::{
    FRAME_STORE_KEY, FrameRepository, InMemoryFrameRepository, JsonFileFrameRepository,
    all_frames, find_frame,
};

pub use crate::render::compositor::{
    ComposeOpts, ComposedImage, DEFAULT_OUTPUT_WIDTH, MAX_OUTPUT_PIXELS, compose, compose_images,
    output_size, render_raster,
};
pub use image::imageops::FilterType;

pub use crate::order::payload::{CustomerDetails, OrderPayload};
