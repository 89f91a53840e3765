//! QR symbol rendering
//!
//! Encoding is delegated to the `qrcode` crate, which picks the smallest
//! version for the payload. Rasterization draws the module grid with a fixed
//! pixel size and quiet zone, and the image is encoded as PNG with `image`.

mod options;
mod raster;

pub use options::{
    Color, ErrorCorrection, RenderOptions, MAX_BORDER, MAX_IMAGE_SIDE, MAX_MODULE_SIZE,
};
pub use raster::{encode, encode_and_render, rasterize, render_terminal, to_png};
