//! A byte-buffer based image descriptor.
use directional_texel::layout::Geometry;
use directional_texel::{Bgra, PixelBuf, PixelsMut, PixelsRef};

use crate::filter::{self, FilterError};

/// An owned buffer of BGR(A) pixels with its geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    inner: PixelBuf,
}

impl Frame {
    /// Create a zeroed frame by its geometry.
    ///
    /// # Usage
    ///
    /// ```
    /// use directional_canvas::Frame;
    /// use directional_canvas::layout::{Components, Geometry};
    ///
    /// // Rows of bitmaps are usually padded to 4 bytes.
    /// let geometry = Geometry::with_row_alignment(31, 32, Components::Bgr, 4)?;
    /// let frame = Frame::new(geometry);
    ///
    /// assert_eq!(frame.as_bytes().len(), 96 * 32);
    /// # use directional_canvas::layout::LayoutError;
    /// # Ok::<(), LayoutError>(())
    /// ```
    pub fn new(geometry: Geometry) -> Self {
        Frame {
            inner: PixelBuf::new(geometry),
        }
    }

    /// Take ownership of decoded pixel bytes.
    ///
    /// Fails with [`ErrorKind::BufferTooSmall`] if the bytes can not hold the geometry. Bytes
    /// past `geometry.byte_len()` are dropped.
    ///
    /// [`ErrorKind::BufferTooSmall`]: crate::ErrorKind::BufferTooSmall
    pub fn with_bytes(geometry: Geometry, bytes: Vec<u8>) -> Result<Self, FilterError> {
        let inner = PixelBuf::with_bytes(geometry, bytes).map_err(|(err, _)| err)?;
        Ok(Frame { inner })
    }

    /// Get a reference to the geometry of this frame.
    pub fn geometry(&self) -> &Geometry {
        self.inner.geometry()
    }

    /// Return this frame's pixels as a byte slice, including any row padding.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.inner.as_bytes_mut()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_bytes()
    }

    pub fn pixels(&self) -> PixelsRef<'_> {
        self.inner.as_pixels()
    }

    pub fn pixels_mut(&mut self) -> PixelsMut<'_> {
        self.inner.as_pixels_mut()
    }

    /// The pixels as texels, for packed 4-component frames.
    pub fn as_bgra(&self) -> Option<&[Bgra]> {
        self.inner.as_bgra()
    }

    /// The pixels as mutable texels, for packed 4-component frames.
    pub fn as_bgra_mut(&mut self) -> Option<&mut [Bgra]> {
        self.inner.as_bgra_mut()
    }

    /// Run the directional filter, into a new frame of the same geometry.
    pub fn filtered(&self) -> Frame {
        Frame {
            inner: filter::filtered(&self.inner),
        }
    }
}
