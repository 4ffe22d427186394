// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `directional` developers
//! # Texel
//!
//! Pixel buffer geometry and bounds-checked access to packed BGR(A) pixels.
//!
//! This library is strictly `no_std`. It describes a flat byte buffer as a raster of pixels
//! with a row stride, and offers read and write access to single pixels through signed
//! coordinates. Reading outside of the raster never fails, it yields a transparent black pixel
//! instead, which is the border policy the directional filter relies on.
//!
//! Samples read from a buffer are widened into a [`WideColor`] which permits unclamped signed
//! arithmetic. The result is narrowed back into a [`Bgra`] texel by clamping each channel.
//!
//! ## Usage
//!
//! ```
//! use directional_texel::layout::{Components, Geometry};
//! use directional_texel::{Bgra, PixelsMut, PixelsRef, WideColor};
//!
//! let geometry = Geometry::packed(2, 1, Components::Bgra)?;
//! let mut data = vec![0u8; geometry.byte_len()];
//!
//! let mut pixels = PixelsMut::new(geometry, &mut data[..]).expect("sized for the geometry");
//! pixels.write(0, 0, Bgra::new(0x10, 0x20, 0x30, 0xff));
//!
//! let pixels = PixelsRef::new(geometry, &data[..]).expect("sized for the geometry");
//! let sum = pixels.read(0, 0) + pixels.read(0, 0);
//! assert_eq!(sum, WideColor::new(0x1fe, 0x60, 0x40, 0x20));
//!
//! // Out of bounds is transparent black.
//! assert_eq!(pixels.read(-1, 0), WideColor::TRANSPARENT);
//! # use directional_texel::layout::LayoutError;
//! # Ok::<(), LayoutError>(())
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod buf;
mod color;
pub mod layout;
mod pixels;

pub use self::buf::PixelBuf;
pub use self::color::{Bgra, WideColor};
pub use self::pixels::{BufferTooSmall, PixelsMut, PixelsRef};
