use std::ops::DerefMut;

use crate::util::math::Vec2;

use super::ImageBuffer;

impl<C: DerefMut<Target = [u8]>> ImageBuffer<C> {
    /// Draw a single-pixel-wide line from `p0` to `p1` (Bresenham).
    ///
    /// Pixels outside the image are clipped.
    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2, color: u8) {
        let mut x0 = p0.x().floor() as isize;
        let mut y0 = p0.y().floor() as isize;
        let x1 = p1.x().floor() as isize;
        let y1 = p1.y().floor() as isize;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    #[inline]
    fn plot(&mut self, x: isize, y: isize, color: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width() && y < self.height() {
            self[(x, y)] = color;
        }
    }
}
