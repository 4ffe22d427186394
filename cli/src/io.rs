//! Conversion between decoded images and row-aligned BGR(A) frames.
//!
//! - `to_frame`: copy a decoded image into a frame, swapping red and blue.
//! - `to_image`: the inverse, dropping row padding.
//! - `save`: write an image to disk, creating the parent directory.
use std::fs;
use std::path::Path;

use directional_canvas::layout::{Bgra, Components, Geometry};
use directional_canvas::Frame;
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageBuffer, ImageError, ImageFormat};

use crate::error::ToolError;

/// Lay out the decoded image as rows of blue-first texels.
///
/// Gray images keep a single component, 8-bit RGB becomes BGR, everything else is converted
/// to 8-bit RGBA first and becomes BGRA.
pub fn to_frame(image: DynamicImage, row_alignment: usize) -> Result<Frame, ToolError> {
    let (width, height) = (image.width(), image.height());
    let (components, raw) = match image {
        DynamicImage::ImageLuma8(gray) => (Components::Index, gray.into_raw()),
        DynamicImage::ImageRgb8(rgb) => (Components::Bgr, rgb.into_raw()),
        other => (Components::Bgra, other.into_rgba8().into_raw()),
    };

    let geometry = Geometry::with_row_alignment(width, height, components, row_alignment)?;
    let mut frame = Frame::new(geometry);

    let (row_len, stride) = (geometry.row_len(), geometry.stride());
    if row_len > 0 {
        let rows = frame.as_bytes_mut().chunks_mut(stride);
        for (src, dst) in raw.chunks_exact(row_len).zip(rows) {
            let dst = &mut dst[..row_len];
            dst.copy_from_slice(src);
            swap_red_blue(dst, components);
        }
    }

    Ok(frame)
}

/// Pack the rows of a frame into an image, swapping red and blue back.
///
/// With `opaque`, the alpha of a four component frame is replaced by `0xff`.
pub fn to_image(frame: &Frame, opaque: bool) -> Result<DynamicImage, ToolError> {
    let geometry = frame.geometry();
    let (width, height) = (geometry.width(), geometry.height());
    let (row_len, stride) = (geometry.row_len(), geometry.stride());

    let mut raw = Vec::with_capacity(geometry.byte_len());
    if row_len > 0 {
        for row in frame.as_bytes().chunks(stride) {
            raw.extend_from_slice(&row[..row_len]);
        }
    }

    let components = geometry.components();
    swap_red_blue(&mut raw, components);

    if opaque && components.has_alpha() {
        for texel in bytemuck::cast_slice_mut::<u8, Bgra>(&mut raw) {
            texel.a = 0xff;
        }
    }

    let image = match components {
        Components::Index => {
            ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageLuma8)
        }
        Components::Bgr => ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
        Components::Bgra => {
            ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgba8)
        }
    };

    image.ok_or_else(|| {
        let mismatch = ParameterError::from_kind(ParameterErrorKind::DimensionMismatch);
        ToolError::Encode(ImageError::Parameter(mismatch))
    })
}

pub fn save(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), ToolError> {
    let failed = |source: ImageError| ToolError::Save {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| failed(ImageError::IoError(err)))?;
        }
    }

    image.save_with_format(path, format).map_err(failed)
}

/// Swap the first and third byte of each texel in a packed row.
fn swap_red_blue(row: &mut [u8], components: Components) {
    match components {
        Components::Index => {}
        Components::Bgr => {
            for texel in bytemuck::cast_slice_mut::<u8, [u8; 3]>(row) {
                texel.swap(0, 2);
            }
        }
        Components::Bgra => {
            for texel in bytemuck::cast_slice_mut::<u8, Bgra>(row) {
                core::mem::swap(&mut texel.b, &mut texel.r);
            }
        }
    }
}
