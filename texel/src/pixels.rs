//! Bounds-checked access to the pixels of a byte buffer.
//!
//! The reference types bind a [`Geometry`] to a byte slice that is long enough to hold it. They
//! do not copy, the bytes stay owned by the caller. All pixel access goes through signed
//! coordinates so that neighbourhoods of border pixels can be sampled without special cases:
//! every coordinate outside the raster reads as [`WideColor::TRANSPARENT`] and ignores writes.
use core::fmt;

use crate::color::{Bgra, WideColor};
use crate::layout::Geometry;

/// A reference to the pixels of a byte buffer.
#[derive(Clone, Copy)]
pub struct PixelsRef<'data> {
    geometry: Geometry,
    data: &'data [u8],
}

/// A reference to the mutable pixels of a byte buffer.
///
/// # Usage
///
/// ```
/// use directional_texel::layout::{Components, Geometry};
/// use directional_texel::{Bgra, PixelsMut};
///
/// let geometry = Geometry::packed(2, 2, Components::Bgr)?;
/// let mut data = vec![0u8; geometry.byte_len()];
/// let mut pixels = PixelsMut::new(geometry, &mut data).unwrap();
///
/// pixels.write(1, 1, Bgra::new(1, 2, 3, 4));
/// // Silently ignored.
/// pixels.write(2, 1, Bgra::new(1, 2, 3, 4));
///
/// // There is no alpha to store.
/// assert_eq!(data, [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3]);
/// # use directional_texel::layout::LayoutError;
/// # Ok::<(), LayoutError>(())
/// ```
pub struct PixelsMut<'data> {
    geometry: Geometry,
    data: &'data mut [u8],
}

/// Error when a byte buffer is shorter than its geometry requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferTooSmall {
    required: usize,
    actual: usize,
}

impl<'data> PixelsRef<'data> {
    /// View bytes under a certain geometry.
    ///
    /// Any bytes beyond [`Geometry::byte_len`] are not part of the view.
    pub fn new(geometry: Geometry, content: &'data [u8]) -> Result<Self, BufferTooSmall> {
        let data = content
            .get(..geometry.byte_len())
            .ok_or_else(|| BufferTooSmall::new(&geometry, content.len()))?;
        Ok(PixelsRef { geometry, data })
    }

    /// The caller guarantees the content is exactly as long as the geometry requires.
    pub(crate) fn with_exact(geometry: Geometry, data: &'data [u8]) -> Self {
        debug_assert_eq!(data.len(), geometry.byte_len());
        PixelsRef { geometry, data }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The bytes under the geometry, including row padding.
    pub fn as_bytes(&self) -> &'data [u8] {
        self.data
    }

    /// Read one pixel, widened for arithmetic.
    ///
    /// Coordinates outside the image read as transparent black. A pixel without an alpha byte
    /// reads as opaque, and the sole byte of an `Index` pixel reads as its blue channel.
    pub fn read(&self, x: i64, y: i64) -> WideColor {
        read_at(&self.geometry, self.data, x, y)
    }
}

impl<'data> PixelsMut<'data> {
    /// View bytes mutably under a certain geometry.
    pub fn new(geometry: Geometry, content: &'data mut [u8]) -> Result<Self, BufferTooSmall> {
        let actual = content.len();
        let data = content
            .get_mut(..geometry.byte_len())
            .ok_or_else(|| BufferTooSmall::new(&geometry, actual))?;
        Ok(PixelsMut { geometry, data })
    }

    pub(crate) fn with_exact(geometry: Geometry, data: &'data mut [u8]) -> Self {
        debug_assert_eq!(data.len(), geometry.byte_len());
        PixelsMut { geometry, data }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Borrow this as a reference to the pixels.
    pub fn as_ref(&self) -> PixelsRef<'_> {
        PixelsRef {
            geometry: self.geometry,
            data: &*self.data,
        }
    }

    /// Convert this into a reference of the full lifetime.
    pub fn into_ref(self) -> PixelsRef<'data> {
        PixelsRef {
            geometry: self.geometry,
            data: self.data,
        }
    }

    /// See [`PixelsRef::read`].
    pub fn read(&self, x: i64, y: i64) -> WideColor {
        read_at(&self.geometry, self.data, x, y)
    }

    /// Store one pixel.
    ///
    /// Writes to coordinates outside the image are ignored. Only the bytes that exist for the
    /// components of the geometry are written: alpha is dropped for `Bgr`, and an `Index` pixel
    /// only stores blue.
    pub fn write(&mut self, x: i64, y: i64, color: Bgra) {
        let Some(idx) = self.geometry.pixel_offset(x, y) else {
            return;
        };

        let components = self.geometry.components();
        let texel = &mut self.data[idx..idx + components.count()];
        texel[0] = color.b;

        if components.has_color() {
            texel[1] = color.g;
            texel[2] = color.r;
        }

        if components.has_alpha() {
            texel[3] = color.a;
        }
    }
}

fn read_at(geometry: &Geometry, data: &[u8], x: i64, y: i64) -> WideColor {
    let Some(idx) = geometry.pixel_offset(x, y) else {
        return WideColor::TRANSPARENT;
    };

    let components = geometry.components();
    let texel = &data[idx..idx + components.count()];

    let (g, r) = if components.has_color() {
        (texel[1], texel[2])
    } else {
        (0, 0)
    };

    let a = if components.has_alpha() { texel[3] } else { 0xff };

    WideColor::from(Bgra::new(texel[0], g, r, a))
}

impl BufferTooSmall {
    fn new(geometry: &Geometry, actual: usize) -> Self {
        BufferTooSmall {
            required: geometry.byte_len(),
            actual,
        }
    }

    /// The number of bytes the geometry requires.
    pub fn required(&self) -> usize {
        self.required
    }

    /// The length of the buffer that was offered.
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer of {} bytes is too small, the geometry requires {} bytes",
            self.actual, self.required
        )
    }
}

impl core::error::Error for BufferTooSmall {}
