//! QR encoding and rasterization to PNG

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage};
use qrcode::types::QrError;
use qrcode::{Color as Module, QrCode, Version};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ErrorCorrection, RenderOptions};
use crate::error::{ExportError, Result};
use crate::output::write_atomic;

/// Encode text into the smallest QR symbol that holds it at the given level
pub fn encode(text: &str, level: ErrorCorrection) -> Result<QrCode> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), level.into()).map_err(
        |e| match e {
            QrError::DataTooLong => ExportError::PayloadTooLarge {
                len: text.len(),
                level,
            },
            other => ExportError::UnexpectedEncoding(other.to_string()),
        },
    )?;

    debug!(
        version = version_number(code.version()),
        modules = code.width(),
        level = %level,
        "Encoded payload of {} bytes",
        text.len()
    );
    Ok(code)
}

fn version_number(version: Version) -> i16 {
    match version {
        Version::Normal(v) | Version::Micro(v) => v,
    }
}

/// Draw the symbol as a two-color image with the configured quiet zone
pub fn rasterize(code: &QrCode, options: &RenderOptions) -> RgbImage {
    let modules = code.width() as u32;
    let border = options.border;
    let module_size = options.module_size;
    let side = (modules + 2 * border) * module_size;
    let colors = code.to_colors();

    let dark = Rgb(options.foreground.0);
    let light = Rgb(options.background.0);

    ImageBuffer::from_fn(side, side, |px, py| {
        let mx = px / module_size;
        let my = py / module_size;
        let inside = (border..border + modules).contains(&mx)
            && (border..border + modules).contains(&my);

        if inside && colors[((my - border) * modules + (mx - border)) as usize] == Module::Dark {
            dark
        } else {
            light
        }
    })
}

/// Encode an image as PNG bytes
pub fn to_png(image: RgbImage) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| ExportError::UnexpectedEncoding(e.to_string()))?;
    Ok(png_bytes)
}

/// Encode `text` as a QR code, rasterize it and write the PNG to `output_path`.
///
/// The file is only touched after encoding succeeded and is replaced
/// atomically; an existing file at the path is overwritten.
pub fn encode_and_render(
    text: &str,
    output_path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<PathBuf> {
    let output_path = output_path.as_ref();
    options.validate()?;

    let code = encode(text, options.error_correction)?;
    options.image_side(code.width() as u32)?;
    let png_bytes = to_png(rasterize(&code, options))?;

    write_atomic(output_path, &png_bytes)?;
    debug!("Wrote {} byte PNG to {:?}", png_bytes.len(), output_path);

    Ok(output_path.to_path_buf())
}

/// Render the symbol with Unicode blocks for display in a terminal.
///
/// Dark modules are drawn as spaces so the code reads correctly on dark
/// terminal backgrounds.
pub fn render_terminal(text: &str, level: ErrorCorrection) -> Result<String> {
    let code = encode(text, level)?;

    Ok(code
        .render()
        .dark_color(' ')
        .light_color('\u{2588}')
        .quiet_zone(true)
        .module_dimensions(2, 1)
        .build())
}
