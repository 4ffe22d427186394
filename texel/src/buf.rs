use alloc::vec;
use alloc::vec::Vec;

use crate::color::Bgra;
use crate::layout::{Components, Geometry};
use crate::pixels::{BufferTooSmall, PixelsMut, PixelsRef};

/// An owned byte buffer of exactly the size of its geometry.
///
/// The inner invariant is that `data.len() == geometry.byte_len()`, which makes the pixel views
/// infallible.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuf {
    geometry: Geometry,
    data: Vec<u8>,
}

impl PixelBuf {
    /// Allocate a zeroed buffer for a geometry.
    ///
    /// # Panics
    /// When allocation of memory fails.
    pub fn new(geometry: Geometry) -> Self {
        PixelBuf {
            geometry,
            data: vec![0; geometry.byte_len()],
        }
    }

    /// Take ownership of decoded bytes.
    ///
    /// The buffer is truncated to the length required by the geometry. It is returned unmodified
    /// as part of the error when it is too short.
    pub fn with_bytes(
        geometry: Geometry,
        mut data: Vec<u8>,
    ) -> Result<Self, (BufferTooSmall, Vec<u8>)> {
        let too_small = PixelsRef::new(geometry, &data).err();
        if let Some(err) = too_small {
            return Err((err, data));
        }

        data.truncate(geometry.byte_len());
        Ok(PixelBuf { geometry, data })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_pixels(&self) -> PixelsRef<'_> {
        PixelsRef::with_exact(self.geometry, &self.data)
    }

    pub fn as_pixels_mut(&mut self) -> PixelsMut<'_> {
        PixelsMut::with_exact(self.geometry, &mut self.data)
    }

    /// View the bytes as `Bgra` texels.
    ///
    /// Returns `Some` only for 4-component pixels in rows without padding.
    pub fn as_bgra(&self) -> Option<&[Bgra]> {
        if !self.is_packed_bgra() {
            return None;
        }

        bytemuck::try_cast_slice(&self.data).ok()
    }

    /// View the bytes as mutable `Bgra` texels, see [`Self::as_bgra`].
    pub fn as_bgra_mut(&mut self) -> Option<&mut [Bgra]> {
        if !self.is_packed_bgra() {
            return None;
        }

        bytemuck::try_cast_slice_mut(&mut self.data).ok()
    }

    fn is_packed_bgra(&self) -> bool {
        self.geometry.components() == Components::Bgra
            && self.geometry.stride() == self.geometry.row_len()
    }
}

#[test]
fn reuse_decoded_bytes() {
    let geometry = Geometry::packed(2, 1, Components::Bgr).unwrap();

    let buf = PixelBuf::with_bytes(geometry, vec![1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6]);

    let (err, data) = PixelBuf::with_bytes(geometry, vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.required(), 6);
    assert_eq!(data, [1, 2, 3]);
}

#[test]
fn bgra_texels() {
    let geometry = Geometry::packed(2, 2, Components::Bgra).unwrap();
    let mut buf = PixelBuf::new(geometry);

    buf.as_bgra_mut().unwrap()[3] = Bgra::new(1, 2, 3, 4);
    assert_eq!(&buf.as_bytes()[12..], &[1, 2, 3, 4]);

    let padded = Geometry::new(2, 2, 12, Components::Bgra).unwrap();
    assert!(PixelBuf::new(padded).as_bgra().is_none());

    let rgb = Geometry::packed(4, 1, Components::Bgr).unwrap();
    assert!(PixelBuf::new(rgb).as_bgra().is_none());
}
