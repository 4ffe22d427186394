//! A directional edge filter for decoded pixel buffers.
//!
//! The filter approximates a horizontal gradient. Every output pixel is the sum of the three
//! pixels in the column to its left minus the three pixels in the column to its right, clamped
//! per channel. Vertical edges light up, flat areas turn transparent black.
//!
//! # Usage
//!
//! Filtering a buffer handed over by a decoder is as easy as:
//! 1. Describing the buffer with a geometry of width, height, stride and components
//! 2. Calling [`filter`] on the bytes
//!
//! ```
//! use directional_canvas::filter;
//! use directional_canvas::layout::Geometry;
//!
//! // A decoder reports a 2x2 image of 24 bits per pixel, rows padded to 8 bytes.
//! let geometry = Geometry::with_component_count(2, 2, 8, 3)?;
//! let decoded = vec![0x40; geometry.byte_len()];
//!
//! let output = filter(&decoded, &geometry)?;
//! assert_eq!(output.len(), decoded.len());
//! # Ok::<(), directional_canvas::FilterError>(())
//! ```
//!
//! Owned buffers are also possible:
//! 1. Allocate a [`Frame`] for the geometry
//! 2. Initialize its pixels
//! 3. Call [`Frame::filtered`]
//!
//! ```
//! use directional_canvas::Frame;
//! use directional_canvas::layout::{Bgra, Components, Geometry};
//!
//! let geometry = Geometry::packed(3, 3, Components::Bgra)?;
//! let mut frame = Frame::new(geometry);
//!
//! // A vertical white line in the left column.
//! let mut pixels = frame.pixels_mut();
//! for y in 0..3 {
//!     pixels.write(0, y, Bgra::new(0xff, 0xff, 0xff, 0xff));
//! }
//!
//! let edges = frame.filtered();
//! assert_eq!(edges.pixels().read(1, 1).clamp(), Bgra::new(0xff, 0xff, 0xff, 0xff));
//! # use directional_canvas::layout::LayoutError;
//! # Ok::<(), LayoutError>(())
//! ```
#![deny(unsafe_code)]

mod filter;
mod frame;

#[cfg(test)]
mod tests;

pub use self::filter::{directional_sum, filter, filter_into, ErrorKind, FilterError};
pub use self::frame::Frame;

pub mod layout {
    pub use directional_texel::layout::{Components, Geometry, LayoutError};
    pub use directional_texel::{Bgra, BufferTooSmall, PixelsMut, PixelsRef, WideColor};
}
