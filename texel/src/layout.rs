//! Describes how pixels are placed in a byte buffer.
//!
//! A [`Geometry`] is validated once, when it is constructed. Holding one certifies that a row of
//! pixels fits into the stride and that the whole raster, `stride * height` bytes, can be
//! addressed on the current architecture. It does not certify anything about a particular
//! buffer, that check happens when bytes are bound to it, see [`PixelsRef::new`].
//!
//! [`PixelsRef::new`]: crate::PixelsRef::new
use core::fmt;

/// The number and order of byte components in a single pixel.
///
/// Components are always stored blue first. There is no other order: a decoder that produces
/// red-first data must swizzle before describing its buffer with this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Components {
    /// A single intensity or palette index byte, read as the blue channel of an opaque pixel.
    Index = 1,
    /// Blue, green and red bytes of an opaque pixel.
    Bgr = 3,
    /// Blue, green, red and alpha bytes.
    Bgra = 4,
}

/// A validated layout of a raster of pixels with padded rows.
///
/// The stride is the number of bytes from the start of one row to the start of the next. It may
/// exceed the bytes occupied by the pixels of a row, the remainder is padding that is never read
/// as pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// The number of pixels along our width.
    width: u32,
    /// The number of pixels along our height.
    height: u32,
    /// The number of bytes per row.
    stride: usize,
    components: Components,
    /// The total number of bytes, as proof of calculation basically.
    total: usize,
}

/// Error that occurs when constructing a [`Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutError {
    kind: LayoutErrorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutErrorKind {
    UnsupportedComponents(usize),
    StrideTooShort { stride: usize, row: usize },
    BadRowAlignment(usize),
    OutOfMemory,
}

impl Components {
    /// Classify a raw count of bytes per pixel.
    ///
    /// Only counts of 1, 3 and 4 are pixel formats we can address.
    pub const fn from_count(count: usize) -> Result<Self, LayoutError> {
        match count {
            1 => Ok(Components::Index),
            3 => Ok(Components::Bgr),
            4 => Ok(Components::Bgra),
            other => Err(LayoutError {
                kind: LayoutErrorKind::UnsupportedComponents(other),
            }),
        }
    }

    /// The number of bytes of one pixel.
    pub const fn count(self) -> usize {
        self as u8 as usize
    }

    /// Whether green and red are stored next to the blue byte.
    pub const fn has_color(self) -> bool {
        !matches!(self, Components::Index)
    }

    /// Whether the fourth byte stores alpha.
    ///
    /// Pixels without alpha are read as fully opaque.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Components::Bgra)
    }
}

impl Geometry {
    /// Validate a geometry with an explicit row stride.
    ///
    /// This fails if the stride is too short to hold a row of `width` pixels, or if the raster
    /// does not fit into the address space.
    pub fn new(
        width: u32,
        height: u32,
        stride: usize,
        components: Components,
    ) -> Result<Self, LayoutError> {
        let row = Self::row_bytes(width, components)?;

        if stride < row {
            return Err(LayoutErrorKind::StrideTooShort { stride, row }.into());
        }

        let height_usize = usize::try_from(height).map_err(LayoutError::out_of_memory)?;
        let total = stride
            .checked_mul(height_usize)
            .ok_or(LayoutErrorKind::OutOfMemory)?;

        Ok(Geometry {
            width,
            height,
            stride,
            components,
            total,
        })
    }

    /// Validate a geometry given as a raw count of bytes per pixel.
    ///
    /// This is how a decoder usually reports its buffers. See [`Components::from_count`].
    pub fn with_component_count(
        width: u32,
        height: u32,
        stride: usize,
        count: usize,
    ) -> Result<Self, LayoutError> {
        Self::new(width, height, stride, Components::from_count(count)?)
    }

    /// A geometry with rows directly following each other, without padding.
    pub fn packed(width: u32, height: u32, components: Components) -> Result<Self, LayoutError> {
        let row = Self::row_bytes(width, components)?;
        Self::new(width, height, row, components)
    }

    /// A geometry whose rows start at multiples of `align` bytes.
    ///
    /// Device independent bitmaps pad each row to 4 bytes, for example a row of three `Bgr`
    /// pixels then occupies 12 instead of 9 bytes. The alignment must be a power of two.
    pub fn with_row_alignment(
        width: u32,
        height: u32,
        components: Components,
        align: usize,
    ) -> Result<Self, LayoutError> {
        if !align.is_power_of_two() {
            return Err(LayoutErrorKind::BadRowAlignment(align).into());
        }

        let row = Self::row_bytes(width, components)?;
        let stride = row
            .checked_next_multiple_of(align)
            .ok_or(LayoutErrorKind::OutOfMemory)?;
        Self::new(width, height, stride, components)
    }

    fn row_bytes(width: u32, components: Components) -> Result<usize, LayoutError> {
        let width = usize::try_from(width).map_err(LayoutError::out_of_memory)?;
        width
            .checked_mul(components.count())
            .ok_or(LayoutErrorKind::OutOfMemory.into())
    }

    /// The number of pixels along the width.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The number of pixels along the height.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The number of bytes from one row to the next.
    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn components(&self) -> Components {
        self.components
    }

    /// The number of bytes actually occupied by pixels in each row.
    pub const fn row_len(&self) -> usize {
        // Does not overflow, checked on construction.
        self.width as usize * self.components.count()
    }

    /// The number of bytes a buffer of this geometry must at least hold.
    pub const fn byte_len(&self) -> usize {
        self.total
    }

    /// Check if a signed coordinate refers to a pixel in the raster.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// The byte offset of the first component of a pixel.
    ///
    /// Returns `None` for any coordinate outside the raster.
    pub fn pixel_offset(&self, x: i64, y: i64) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }

        // Both coordinates are non-negative and in bounds, the offset lies within `total`.
        let (x, y) = (x as usize, y as usize);
        Some(self.stride * y + self.components.count() * x)
    }
}

impl LayoutError {
    fn out_of_memory(_: core::num::TryFromIntError) -> Self {
        LayoutErrorKind::OutOfMemory.into()
    }

    /// The unsupported count of components per pixel, if that was the cause of the error.
    pub fn unsupported_components(&self) -> Option<usize> {
        match self.kind {
            LayoutErrorKind::UnsupportedComponents(count) => Some(count),
            _ => None,
        }
    }
}

impl core::error::Error for LayoutError {}

impl From<LayoutErrorKind> for LayoutError {
    fn from(kind: LayoutErrorKind) -> Self {
        LayoutError { kind }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LayoutErrorKind::UnsupportedComponents(count) => {
                write!(f, "unsupported number of components per pixel: {count}")
            }
            LayoutErrorKind::StrideTooShort { stride, row } => {
                write!(f, "row stride of {stride} bytes can not hold a row of {row} bytes")
            }
            LayoutErrorKind::BadRowAlignment(align) => {
                write!(f, "row alignment {align} is not a power of two")
            }
            LayoutErrorKind::OutOfMemory => f.write_str("layout does not fit into memory"),
        }
    }
}

#[test]
fn component_counts() {
    assert_eq!(Components::from_count(1), Ok(Components::Index));
    assert_eq!(Components::from_count(3), Ok(Components::Bgr));
    assert_eq!(Components::from_count(4), Ok(Components::Bgra));

    for bad in [0, 2, 5, 8] {
        let err = Components::from_count(bad).unwrap_err();
        assert_eq!(err.unsupported_components(), Some(bad));
    }

    assert!(!Components::Bgr.has_alpha());
    assert!(!Components::Index.has_color());
    assert_eq!(Components::Bgra.count(), 4);
}

#[test]
fn stride_validation() {
    let geometry = Geometry::new(3, 2, 9, Components::Bgr).expect("Exactly one row");
    assert_eq!(geometry.byte_len(), 18);
    assert_eq!(geometry.row_len(), 9);

    let padded = Geometry::new(3, 2, 16, Components::Bgr).expect("Padding is allowed");
    assert_eq!(padded.byte_len(), 32);
    assert_eq!(padded.row_len(), 9);

    let err = Geometry::new(3, 2, 8, Components::Bgr).unwrap_err();
    assert_eq!(err.unsupported_components(), None);

    assert!(Geometry::new(1, u32::MAX, usize::MAX, Components::Index).is_err());
    assert!(Geometry::with_component_count(3, 2, 12, 2).is_err());
}

#[test]
fn row_alignment() {
    let geometry = Geometry::with_row_alignment(3, 1, Components::Bgr, 4).unwrap();
    assert_eq!(geometry.stride(), 12);

    let geometry = Geometry::with_row_alignment(4, 1, Components::Bgr, 4).unwrap();
    assert_eq!(geometry.stride(), 12);

    let geometry = Geometry::with_row_alignment(5, 1, Components::Index, 4).unwrap();
    assert_eq!(geometry.stride(), 8);

    assert!(Geometry::with_row_alignment(5, 1, Components::Index, 3).is_err());
    assert!(Geometry::with_row_alignment(5, 1, Components::Index, 0).is_err());
}

#[test]
fn offsets() {
    let geometry = Geometry::new(4, 3, 20, Components::Bgra).unwrap();
    assert_eq!(geometry.pixel_offset(0, 0), Some(0));
    assert_eq!(geometry.pixel_offset(3, 0), Some(12));
    assert_eq!(geometry.pixel_offset(1, 2), Some(44));

    assert_eq!(geometry.pixel_offset(-1, 0), None);
    assert_eq!(geometry.pixel_offset(0, -1), None);
    assert_eq!(geometry.pixel_offset(4, 0), None);
    assert_eq!(geometry.pixel_offset(0, 3), None);
}

#[test]
fn empty_raster() {
    let geometry = Geometry::packed(0, 0, Components::Bgra).unwrap();
    assert_eq!(geometry.byte_len(), 0);
    assert!(!geometry.contains(0, 0));
}
