use crate::layout::{Bgra, Components, Geometry, LayoutError};
use crate::{filter, ErrorKind, FilterError, Frame};

const WHITE: Bgra = Bgra::new(0xff, 0xff, 0xff, 0xff);
const BLACK: Bgra = Bgra::new(0x00, 0x00, 0x00, 0xff);

/// Some deterministic noise, covering the full byte range.
fn noise(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn deterministic() -> Result<(), FilterError> {
    let geometry = Geometry::with_row_alignment(17, 9, Components::Bgr, 4)?;
    let input = noise(geometry.byte_len());

    let first = filter(&input, &geometry)?;
    let second = filter(&input, &geometry)?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn geometry_preserved() -> Result<(), FilterError> {
    for components in [Components::Index, Components::Bgr, Components::Bgra] {
        let geometry = Geometry::new(5, 7, 32, components)?;
        // Extra bytes after the raster are not part of the output.
        let input = noise(geometry.byte_len() + 3);

        let output = filter(&input, &geometry)?;
        assert_eq!(output.len(), 32 * 7, "for {components:?}");

        let frame = Frame::with_bytes(geometry, input)?;
        let filtered = frame.filtered();
        assert_eq!(filtered.geometry(), &geometry);
        assert_eq!(filtered.as_bytes(), &output[..]);
    }

    Ok(())
}

#[test]
fn single_pixel_is_transparent() -> Result<(), LayoutError> {
    let geometry = Geometry::packed(1, 1, Components::Bgra)?;
    for input in [[0xff; 4], [0x12, 0x34, 0x56, 0x78], [0; 4]] {
        assert_eq!(filter(&input, &geometry).unwrap(), [0; 4]);
    }

    let geometry = Geometry::packed(1, 1, Components::Bgr)?;
    assert_eq!(filter(&[0xff; 3], &geometry).unwrap(), [0; 3]);

    let geometry = Geometry::packed(1, 1, Components::Index)?;
    assert_eq!(filter(&[0xff], &geometry).unwrap(), [0]);

    Ok(())
}

#[test]
fn clamp_boundaries() -> Result<(), LayoutError> {
    let geometry = Geometry::packed(3, 3, Components::Bgr)?;

    let mut frame = Frame::new(geometry);
    let mut pixels = frame.pixels_mut();
    for y in 0..3 {
        pixels.write(0, y, Bgra::new(0xff, 0, 0, 0));
        pixels.write(2, y, Bgra::new(0, 0, 0, 0));
    }

    // Raw sum of 765 clamps down.
    let sum = crate::directional_sum(&frame.pixels(), 1, 1);
    assert_eq!(sum.b, 765);
    assert_eq!(frame.filtered().pixels().read(1, 1).b, 0xff);

    let mut pixels = frame.pixels_mut();
    for y in 0..3 {
        pixels.write(0, y, Bgra::new(0, 0, 0, 0));
        pixels.write(2, y, Bgra::new(0xff, 0, 0, 0));
    }

    // Raw sum of -765 clamps up.
    let sum = crate::directional_sum(&frame.pixels(), 1, 1);
    assert_eq!(sum.b, -765);
    assert_eq!(frame.filtered().pixels().read(1, 1).b, 0);

    Ok(())
}

#[test]
fn no_alpha_byte_for_bgr() -> Result<(), FilterError> {
    // Padding of one byte per row, which must stay zero even with saturated input.
    let geometry = Geometry::new(3, 3, 10, Components::Bgr)?;
    let mut input = vec![0xff; geometry.byte_len()];
    for y in 0..3 {
        input[10 * y..10 * y + 3].fill(0);
    }

    let output = filter(&input, &geometry)?;
    for y in 0..3 {
        assert_eq!(output[10 * y + 9], 0, "padding of row {y}");
    }

    // The middle column sees black on its left and white on its right.
    assert_eq!(&output[3..6], &[0, 0, 0]);
    // The left column sees nothing on its left and white on its right.
    assert_eq!(&output[0..3], &[0, 0, 0]);
    // The right column sees white on its left and nothing on its right.
    assert_eq!(&output[6..9], &[0xff, 0xff, 0xff]);

    Ok(())
}

#[test]
fn alpha_follows_the_same_arithmetic() -> Result<(), LayoutError> {
    let geometry = Geometry::packed(3, 2, Components::Bgra)?;
    let mut frame = Frame::new(geometry);

    let mut pixels = frame.pixels_mut();
    pixels.write(0, 0, Bgra::new(0, 0, 0, 100));
    pixels.write(0, 1, Bgra::new(0, 0, 0, 100));
    pixels.write(2, 0, Bgra::new(0, 0, 0, 30));

    let output = frame.filtered();
    let pixels = output.pixels();
    // 100 + 100 - 30 on the top row, the bottom row has no row below.
    assert_eq!(pixels.read(1, 0).a, 170);
    assert_eq!(pixels.read(1, 1).a, 170);

    // Fully opaque neighbours on both sides cancel out.
    let mut frame = Frame::new(geometry);
    frame.as_bgra_mut().unwrap().fill(BLACK);
    assert_eq!(frame.filtered().as_bgra().unwrap()[1].a, 0);

    Ok(())
}

#[test]
fn white_left_black_right() -> Result<(), LayoutError> {
    let geometry = Geometry::packed(3, 3, Components::Bgra)?;
    let mut frame = Frame::new(geometry);

    let mut pixels = frame.pixels_mut();
    pixels.write(0, 1, WHITE);
    pixels.write(2, 1, BLACK);

    // White in color, while the opaque alpha of both neighbours cancels out.
    let output = frame.filtered();
    let expected = Bgra::new(0xff, 0xff, 0xff, 0x00);
    assert_eq!(output.pixels().read(1, 1).clamp(), expected);
    assert_eq!(output.as_bgra().unwrap()[4], expected);

    Ok(())
}

#[test]
fn rejects_bad_geometry() {
    let err: FilterError = Geometry::with_component_count(4, 4, 16, 2).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidGeometry);

    let err: FilterError = Geometry::with_component_count(4, 4, 11, 3).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidGeometry);

    let geometry = Geometry::packed(4, 4, Components::Bgr).unwrap();
    let err = Frame::with_bytes(geometry, vec![0; 47]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
}

#[test]
fn input_unchanged() -> Result<(), FilterError> {
    let geometry = Geometry::packed(8, 8, Components::Bgra)?;
    let input = noise(geometry.byte_len());
    let copy = input.clone();

    let _ = filter(&input, &geometry)?;
    assert_eq!(input, copy);

    Ok(())
}
