use directional_canvas::layout::{Bgra, Components, Geometry, LayoutError};
use directional_canvas::Frame;

const SZ_W: u32 = 640;
const SZ_H: u32 = 480;

/// Shows the filter on an opaque disk: its left and right rims light up.
///
/// This example exists, in part, so that we can run `perf`.
fn main() -> Result<(), LayoutError> {
    let geometry = Geometry::packed(SZ_W, SZ_H, Components::Bgra)?;
    let mut frame = Frame::new(geometry);

    let (cx, cy, radius) = (SZ_W as i64 / 2, SZ_H as i64 / 2, SZ_H as i64 / 3);
    let mut pixels = frame.pixels_mut();
    for y in 0..i64::from(SZ_H) {
        for x in 0..i64::from(SZ_W) {
            let (dx, dy) = (x - cx, y - cy);
            let color = if dx * dx + dy * dy <= radius * radius {
                Bgra::new(0x20, 0x80, 0xe0, 0xff)
            } else {
                Bgra::new(0x00, 0x00, 0x00, 0xff)
            };
            pixels.write(x, y, color);
        }
    }

    let edges = frame.filtered();

    if std::env::var_os("DIRECTIONAL_SKIP_IO").is_none() {
        // `image::save` expects RgbA, swap the channels of each texel.
        let texels = edges.as_bgra().unwrap();
        let container: Vec<u8> = texels
            .iter()
            // The sum of opaque alpha cancels out, show the edges opaque.
            .flat_map(|px| [px.r, px.g, px.b, 0xff])
            .collect();

        let image =
            image::ImageBuffer::<image::Rgba<_>, _>::from_raw(SZ_W, SZ_H, container).unwrap();

        let output = concat!(env!("CARGO_MANIFEST_DIR"), "/../filtered.png");
        image.save(output).unwrap();
    }

    Ok(())
}
