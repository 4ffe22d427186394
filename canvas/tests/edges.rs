use directional_canvas::layout::{Bgra, Components, Geometry};
use directional_canvas::{filter, filter_into, Frame};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Left half white, right half black, both opaque.
fn step_edge(width: u32, height: u32, components: Components) -> Frame {
    let geometry = Geometry::with_row_alignment(width, height, components, 4).unwrap();
    let mut frame = Frame::new(geometry);

    let mut pixels = frame.pixels_mut();
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            let v = if x < i64::from(width / 2) { 0xff } else { 0x00 };
            pixels.write(x, y, Bgra::new(v, v, v, 0xff));
        }
    }

    frame
}

#[test]
fn vertical_step_edge() {
    init_logging();
    let frame = step_edge(8, 5, Components::Bgr);
    let edges = frame.filtered();
    let pixels = edges.pixels();

    for y in 0..5 {
        for x in 0..8 {
            let px = pixels.read(x, y).clamp();
            // Columns 3 and 4 straddle the step, column 0 has nothing on its left.
            let expected = if x == 3 || x == 4 { 0xff } else { 0x00 };
            assert_eq!(px.b, expected, "at {x},{y}");
            assert_eq!(px.b, px.g);
            assert_eq!(px.g, px.r);
        }
    }
}

#[test]
fn mirrored_step_is_dark() {
    init_logging();
    let geometry = Geometry::packed(6, 3, Components::Index).unwrap();
    // Dark on the left, bright on the right: the sum is negative and clamps to zero everywhere
    // except at the right border, where only the bright left column remains.
    let input: Vec<u8> = [0, 0, 0, 200, 200, 200].repeat(3);

    let output = filter(&input, &geometry).unwrap();
    for row in output.chunks(6) {
        assert_eq!(row, &[0, 0, 0, 0, 0, 255]);
    }
}

#[test]
fn into_reused_output() {
    init_logging();
    let frame = step_edge(16, 16, Components::Bgra);
    let mut into = Frame::new(*frame.geometry());
    into.as_bytes_mut().fill(0x5a);

    filter_into(&frame.pixels(), &mut into.pixels_mut()).unwrap();
    assert_eq!(into, frame.filtered());
}

#[test]
fn borders_use_transparent_black() {
    init_logging();
    // A uniform gray image: the interior cancels out, the borders do not.
    let geometry = Geometry::packed(4, 4, Components::Bgra).unwrap();
    let mut frame = Frame::new(geometry);
    frame.as_bgra_mut().unwrap().fill(Bgra::new(0x10, 0x10, 0x10, 0x10));

    let edges = frame.filtered();
    let texels = edges.as_bgra().unwrap();

    // Interior columns see equal neighbours on both sides.
    for y in 0..4 {
        assert_eq!(texels[y * 4 + 1], Bgra::new(0, 0, 0, 0));
        assert_eq!(texels[y * 4 + 2], Bgra::new(0, 0, 0, 0));
    }

    // The rightmost column only has a left neighbour column: 3 samples inside, 2 at corners.
    assert_eq!(texels[3], Bgra::new(0x20, 0x20, 0x20, 0x20));
    assert_eq!(texels[7], Bgra::new(0x30, 0x30, 0x30, 0x30));
    // The leftmost column only has a right neighbour column, its sum is negative.
    assert_eq!(texels[4], Bgra::new(0, 0, 0, 0));
}
