use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

/// A color with signed, unbounded channels.
///
/// Sums and differences of several 8-bit samples leave the range `0..=255` easily. This type
/// holds such intermediate values without loss; narrow it back into a texel with
/// [`WideColor::clamp`] once all arithmetic is done. Clamping in between would change the
/// result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WideColor {
    pub a: i32,
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// One 8-bit pixel in memory order: blue, green, red, alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl WideColor {
    /// Fully transparent black, what is read from outside of an image.
    pub const TRANSPARENT: Self = WideColor::new(0, 0, 0, 0);

    /// Create a color from its channels, alpha first.
    pub const fn new(a: i32, r: i32, g: i32, b: i32) -> Self {
        WideColor { a, r, g, b }
    }

    /// Narrow each channel independently into `0..=255`.
    pub fn clamp(self) -> Bgra {
        fn channel(value: i32) -> u8 {
            // In range after the clamp, the cast is lossless.
            value.clamp(0, 255) as u8
        }

        Bgra {
            b: channel(self.b),
            g: channel(self.g),
            r: channel(self.r),
            a: channel(self.a),
        }
    }
}

impl Bgra {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Bgra { b, g, r, a }
    }
}

impl From<Bgra> for WideColor {
    fn from(px: Bgra) -> Self {
        WideColor::new(px.a.into(), px.r.into(), px.g.into(), px.b.into())
    }
}

impl Add for WideColor {
    type Output = WideColor;

    fn add(self, rhs: WideColor) -> WideColor {
        WideColor {
            a: self.a + rhs.a,
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Sub for WideColor {
    type Output = WideColor;

    fn sub(self, rhs: WideColor) -> WideColor {
        WideColor {
            a: self.a - rhs.a,
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl AddAssign for WideColor {
    fn add_assign(&mut self, rhs: WideColor) {
        *self = *self + rhs;
    }
}

impl SubAssign for WideColor {
    fn sub_assign(&mut self, rhs: WideColor) {
        *self = *self - rhs;
    }
}

impl Sum for WideColor {
    fn sum<I: Iterator<Item = WideColor>>(iter: I) -> WideColor {
        iter.fold(WideColor::TRANSPARENT, Add::add)
    }
}

#[test]
fn clamp_each_channel() {
    let color = WideColor::new(765, -765, 128, 255);
    assert_eq!(color.clamp(), Bgra::new(255, 128, 0, 255));

    let color = WideColor::new(0, 256, -1, 0);
    assert_eq!(color.clamp(), Bgra::new(0, 0, 255, 0));
}

#[test]
fn signed_arithmetic() {
    let white = WideColor::from(Bgra::new(255, 255, 255, 255));
    let black = WideColor::from(Bgra::new(0, 0, 0, 255));

    let sum: WideColor = [white, white, white].into_iter().sum();
    assert_eq!(sum, WideColor::new(765, 765, 765, 765));

    let mut diff = black;
    diff -= white;
    assert_eq!(diff, WideColor::new(0, -255, -255, -255));

    diff += white;
    assert_eq!(diff, black);
}

#[test]
fn memory_order() {
    let pixels = [Bgra::new(1, 2, 3, 4), Bgra::new(5, 6, 7, 8)];
    assert_eq!(bytemuck::cast_slice::<Bgra, u8>(&pixels), &[1, 2, 3, 4, 5, 6, 7, 8]);
}
