//! The directional edge filter.
//!
//! Each output pixel is the difference between the column of three pixels to its left and the
//! column of three pixels to its right:
//!
//! ```text
//!  +1   .  -1
//!  +1   .  -1
//!  +1   .  -1
//! ```
//!
//! The center column, including the pixel itself, does not contribute. Samples outside the
//! image are transparent black. All four channels, alpha included, take part in the same signed
//! sum which is clamped into `0..=255` exactly once, after all six samples are combined.
use core::fmt;

use directional_texel::layout::{Geometry, LayoutError};
use directional_texel::{BufferTooSmall, PixelBuf, PixelsMut, PixelsRef, WideColor};
use log::{debug, trace};

/// Offsets of the samples added to the sum.
const LEFT: [(i64, i64); 3] = [(-1, -1), (-1, 0), (-1, 1)];
/// Offsets of the samples subtracted from the sum.
const RIGHT: [(i64, i64); 3] = [(1, -1), (1, 0), (1, 1)];

/// Error that occurs when the input of a filter pass is rejected.
///
/// No pass is started when an error is returned, and no partially filtered output is ever
/// produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterError {
    inner: Cause,
}

/// The category of a [`FilterError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The pixel layout can not be addressed: an unsupported number of components per pixel, a
    /// stride shorter than a row, or an output of another geometry than the input.
    InvalidGeometry,
    /// A buffer is shorter than `stride * height` bytes.
    BufferTooSmall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cause {
    Layout(LayoutError),
    Buffer(BufferTooSmall),
    Mismatch { input: Geometry, output: Geometry },
}

/// Filter a decoded pixel buffer.
///
/// The input is interpreted under the geometry and never modified. The returned buffer is newly
/// allocated, exactly `geometry.byte_len()` bytes long, and shares the geometry of the input.
/// Bytes of row padding are zero.
///
/// # Usage
///
/// ```
/// use directional_canvas::filter;
/// use directional_canvas::layout::{Components, Geometry};
///
/// // Three opaque pixels in a row: white, gray, black.
/// let geometry = Geometry::packed(3, 1, Components::Bgra)?;
/// let input = [
///     0xff, 0xff, 0xff, 0xff,
///     0x80, 0x80, 0x80, 0xff,
///     0x00, 0x00, 0x00, 0xff,
/// ];
///
/// let output = filter(&input, &geometry)?;
/// // The middle pixel sees white to its left and black to its right.
/// assert_eq!(&output[4..8], &[0xff, 0xff, 0xff, 0x00]);
/// # Ok::<(), directional_canvas::FilterError>(())
/// ```
pub fn filter(input: &[u8], geometry: &Geometry) -> Result<Vec<u8>, FilterError> {
    let input = PixelsRef::new(*geometry, input)?;
    let mut output = PixelBuf::new(*geometry);
    run(&input, &mut output.as_pixels_mut());
    Ok(output.into_bytes())
}

/// Filter into pixels provided by the caller.
///
/// Both views must have the same geometry. Every pixel of the output is overwritten; the bytes
/// of row padding are left as they are.
pub fn filter_into(input: &PixelsRef<'_>, output: &mut PixelsMut<'_>) -> Result<(), FilterError> {
    if input.geometry() != output.geometry() {
        return Err(FilterError::rejected(Cause::Mismatch {
            input: *input.geometry(),
            output: *output.geometry(),
        }));
    }

    run(input, output);
    Ok(())
}

/// The signed sum of one output pixel, before clamping.
///
/// Adds the three pixels in the column left of `(x, y)` and subtracts the three pixels in the
/// column to its right. The coordinate itself need not be inside the image.
pub fn directional_sum(input: &PixelsRef<'_>, x: i64, y: i64) -> WideColor {
    let sample = |(dx, dy): (i64, i64)| input.read(x + dx, y + dy);
    let left: WideColor = LEFT.into_iter().map(sample).sum();
    let right: WideColor = RIGHT.into_iter().map(sample).sum();
    left - right
}

/// Filter a pixel buffer, owned result.
pub(crate) fn filtered(input: &PixelBuf) -> PixelBuf {
    let mut output = PixelBuf::new(*input.geometry());
    run(&input.as_pixels(), &mut output.as_pixels_mut());
    output
}

fn run(input: &PixelsRef<'_>, output: &mut PixelsMut<'_>) {
    let geometry = input.geometry();
    debug!(
        "directional filter over {}x{} {:?} pixels, stride {}",
        geometry.width(),
        geometry.height(),
        geometry.components(),
        geometry.stride(),
    );

    for y in 0..i64::from(geometry.height()) {
        for x in 0..i64::from(geometry.width()) {
            let color = directional_sum(input, x, y).clamp();
            output.write(x, y, color);
        }
    }

    debug!("directional filter done, {} bytes", geometry.byte_len());
}

impl FilterError {
    fn rejected(cause: impl Into<Cause>) -> Self {
        let inner = cause.into();
        trace!("directional filter rejected its input: {inner:?}");
        FilterError { inner }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.inner {
            Cause::Layout(_) | Cause::Mismatch { .. } => ErrorKind::InvalidGeometry,
            Cause::Buffer(_) => ErrorKind::BufferTooSmall,
        }
    }
}

impl From<LayoutError> for Cause {
    fn from(err: LayoutError) -> Self {
        Cause::Layout(err)
    }
}

impl From<BufferTooSmall> for Cause {
    fn from(err: BufferTooSmall) -> Self {
        Cause::Buffer(err)
    }
}

impl From<LayoutError> for FilterError {
    fn from(err: LayoutError) -> Self {
        FilterError::rejected(err)
    }
}

impl From<BufferTooSmall> for FilterError {
    fn from(err: BufferTooSmall) -> Self {
        FilterError::rejected(err)
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Cause::Layout(err) => write!(f, "invalid pixel geometry: {err}"),
            Cause::Buffer(err) => write!(f, "{err}"),
            Cause::Mismatch { input, output } => write!(
                f,
                "output geometry {}x{} (stride {}) does not match input {}x{} (stride {})",
                output.width(),
                output.height(),
                output.stride(),
                input.width(),
                input.height(),
                input.stride(),
            ),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner {
            Cause::Layout(err) => Some(err),
            Cause::Buffer(err) => Some(err),
            Cause::Mismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directional_texel::layout::Components;
    use directional_texel::Bgra;

    #[test]
    fn center_column_is_ignored() {
        let geometry = Geometry::packed(3, 3, Components::Bgra).unwrap();
        let mut input = PixelBuf::new(geometry);
        let mut pixels = input.as_pixels_mut();
        for y in 0..3 {
            pixels.write(1, y, Bgra::new(0xff, 0xff, 0xff, 0xff));
        }

        assert_eq!(directional_sum(&input.as_pixels(), 1, 1), WideColor::TRANSPARENT);
    }

    #[test]
    fn sum_is_left_minus_right() {
        let geometry = Geometry::packed(3, 3, Components::Bgr).unwrap();
        let mut input = PixelBuf::new(geometry);
        let mut pixels = input.as_pixels_mut();
        for y in 0..3 {
            pixels.write(0, y, Bgra::new(10, 20, 30, 0));
            pixels.write(2, y, Bgra::new(1, 2, 3, 0));
        }

        // Without alpha bytes every sample is opaque, alpha cancels out.
        let sum = directional_sum(&input.as_pixels(), 1, 1);
        assert_eq!(sum, WideColor::new(0, 81, 54, 27));

        // Only the top two rows exist around the top edge.
        let sum = directional_sum(&input.as_pixels(), 1, 0);
        assert_eq!(sum, WideColor::new(0, 54, 36, 18));
    }

    #[test]
    fn clamp_late() {
        // Left column sums to 3 * 200 = 600, right column to 3 * 150 = 450. Clamping each partial
        // sum would yield 255 - 255 = 0, the late clamp yields 150.
        let geometry = Geometry::packed(3, 3, Components::Bgr).unwrap();
        let mut input = PixelBuf::new(geometry);
        let mut pixels = input.as_pixels_mut();
        for y in 0..3 {
            pixels.write(0, y, Bgra::new(200, 0, 0, 0));
            pixels.write(2, y, Bgra::new(150, 0, 0, 0));
        }

        let output = filtered(&input);
        assert_eq!(output.as_pixels().read(1, 1).b, 150);
    }

    #[test]
    fn mismatched_output() {
        let geometry = Geometry::packed(2, 2, Components::Bgr).unwrap();
        let other = Geometry::new(2, 2, 8, Components::Bgr).unwrap();
        let input = PixelBuf::new(geometry);
        let mut output = PixelBuf::new(other);

        let err = filter_into(&input.as_pixels(), &mut output.as_pixels_mut()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
    }

    #[test]
    fn short_input() {
        let geometry = Geometry::packed(2, 2, Components::Bgra).unwrap();
        let err = filter(&[0; 15], &geometry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
        assert!(std::error::Error::source(&err).is_some());
    }
}
