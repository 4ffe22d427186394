//! Benchmarks the directional filter over the supported pixel layouts.
use brunch::Bench;

use directional_canvas::layout::{Components, Geometry, LayoutError};
use directional_canvas::{filter_into, Frame};

struct Filter {
    components: Components,
    row_alignment: usize,
    sz: u32,
}

impl Filter {
    fn name(&self) -> String {
        format!(
            "filter({:?}, align {}, {})",
            self.components, self.row_alignment, self.sz
        )
    }

    fn prepare(self) -> Result<impl FnMut(), LayoutError> {
        let geometry =
            Geometry::with_row_alignment(self.sz, self.sz, self.components, self.row_alignment)?;

        let mut from = Frame::new(geometry);
        from.as_bytes_mut()
            .iter_mut()
            .enumerate()
            .for_each(|(idx, b)| *b = (idx % 251) as u8);

        let mut into = Frame::new(geometry);

        Ok(move || filter_into(&from.pixels(), &mut into.pixels_mut()).unwrap())
    }
}

fn main() {
    let tests = [
        Filter {
            components: Components::Index,
            row_alignment: 4,
            sz: 128,
        },
        Filter {
            components: Components::Bgr,
            row_alignment: 1,
            sz: 128,
        },
        // Bitmap rows, padded.
        Filter {
            components: Components::Bgr,
            row_alignment: 4,
            sz: 127,
        },
        Filter {
            components: Components::Bgra,
            row_alignment: 4,
            sz: 128,
        },
        Filter {
            components: Components::Bgra,
            row_alignment: 4,
            sz: 512,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|filter| {
        Bench::new(format!("directional::filter::main::{}", filter.name()))
            .run(filter.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
