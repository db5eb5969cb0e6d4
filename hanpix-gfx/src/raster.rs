//! Shape rasterization
//!
//! [`Draw`] is a blanket extension trait over [`Plane`]: any panel driver
//! that can set a pixel gets lines, rectangles, triangles and circles for
//! free. All algorithms are integer-only.
//!
//! Coordinate policy: line endpoints are clamped to the last valid
//! column/row (a line run off the edge is clipped to the boundary, not
//! dropped), rectangle extents are truncated to stay on-panel, and
//! everything ultimately funnels through the plane's bounds-checked
//! `set_pixel`.

use crate::plane::Plane;

/// Bounds-checked pixel write with signed coordinates
///
/// Circle and glyph rasterization produce transiently negative coordinates
/// near the panel edges; those pixels are clipped here.
pub(crate) fn pixel_signed<P: Plane + ?Sized>(plane: &mut P, x: i32, y: i32, color: P::Color) {
    if x >= 0 && y >= 0 {
        plane.set_pixel(x as u16, y as u16, color);
    }
}

/// Shape drawing over any [`Plane`]
pub trait Draw: Plane {
    /// Draw a straight line between two points
    ///
    /// Endpoints are clamped to the panel extents. Horizontal and vertical
    /// segments are filled directly; everything else runs Bresenham's
    /// integer algorithm.
    fn draw_line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Self::Color) {
        let last_x = (self.width() - 1) as i32;
        let last_y = (self.height() - 1) as i32;
        let mut x0 = (x0 as i32).min(last_x);
        let mut y0 = (y0 as i32).min(last_y);
        let mut x1 = (x1 as i32).min(last_x);
        let mut y1 = (y1 as i32).min(last_y);

        // Canonicalize endpoint order so that drawing A->B and B->A
        // rasterizes the same pixel set.
        if (x0, y0) > (x1, y1) {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = if dx > dy { dx } else { -dy } / 2;

        if dx == 0 {
            if y1 < y0 {
                core::mem::swap(&mut y0, &mut y1);
            }
            // Vertical line
            for y in y0..=y1 {
                self.set_pixel(x0 as u16, y as u16, color);
            }
            return;
        }

        if dy == 0 {
            if x1 < x0 {
                core::mem::swap(&mut x0, &mut x1);
            }
            // Horizontal line
            for x in x0..=x1 {
                self.set_pixel(x as u16, y0 as u16, color);
            }
            return;
        }

        loop {
            self.set_pixel(x0 as u16, y0 as u16, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x0 += sx;
            }
            if e2 < dy {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draw a rectangle outline with corner `(x, y)` and extent `(w, h)`
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Self::Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let (w, h) = self.truncate_extent(x, y, w, h);

        self.draw_line(x, y, x + w, y, color); // top
        self.draw_line(x, y + h, x + w, y + h, color); // bottom
        self.draw_line(x, y, x, y + h, color); // left
        self.draw_line(x + w, y, x + w, y + h, color); // right
    }

    /// Fill a rectangle, endpoints inclusive on both axes
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Self::Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let (w, h) = self.truncate_extent(x, y, w, h);

        for i in 0..=h {
            self.draw_line(x, y + i, x + w, y + i, color);
        }
    }

    /// Truncate a rectangle extent so `(x + w, y + h)` stays on the panel
    #[doc(hidden)]
    fn truncate_extent(&mut self, x: u16, y: u16, w: u16, h: u16) -> (u16, u16) {
        let w = if x as u32 + w as u32 >= self.width() as u32 {
            self.width() - x
        } else {
            w
        };
        let h = if y as u32 + h as u32 >= self.height() as u32 {
            self.height() - y
        } else {
            h
        };
        (w, h)
    }

    /// Draw a triangle outline
    fn draw_triangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        x3: u16,
        y3: u16,
        color: Self::Color,
    ) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x3, y3, color);
        self.draw_line(x3, y3, x1, y1, color);
    }

    /// Fill a triangle
    ///
    /// Sweeps along the dominant axis of the edge `(x1,y1)->(x2,y2)` and
    /// draws a chord from the sweep point to `(x3,y3)` at every step. The
    /// overdraw is heavy compared to a scanline fill but the pixel output
    /// is bit-compatible with the panel libraries this mirrors.
    fn fill_triangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        x3: u16,
        y3: u16,
        color: Self::Color,
    ) {
        let delta_x = (x2 as i32 - x1 as i32).abs();
        let delta_y = (y2 as i32 - y1 as i32).abs();
        let mut x = x1 as i32;
        let mut y = y1 as i32;

        let (mut xinc1, mut xinc2) = if x2 >= x1 { (1, 1) } else { (-1, -1) };
        let (mut yinc1, mut yinc2) = if y2 >= y1 { (1, 1) } else { (-1, -1) };

        let (den, mut num, numadd, numpixels);
        if delta_x >= delta_y {
            xinc1 = 0;
            yinc2 = 0;
            den = delta_x;
            num = delta_x / 2;
            numadd = delta_y;
            numpixels = delta_x;
        } else {
            xinc2 = 0;
            yinc1 = 0;
            den = delta_y;
            num = delta_y / 2;
            numadd = delta_x;
            numpixels = delta_y;
        }

        for _ in 0..=numpixels {
            self.draw_line(x.max(0) as u16, y.max(0) as u16, x3, y3, color);

            num += numadd;
            if num >= den {
                num -= den;
                x += xinc1;
                y += yinc1;
            }
            x += xinc2;
            y += yinc2;
        }
    }

    /// Draw a circle outline with the midpoint algorithm
    fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, color: Self::Color) {
        let x0 = x0 as i32;
        let y0 = y0 as i32;
        let mut f = 1 - r as i32;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r as i32;
        let mut x = 0;
        let mut y = r as i32;

        while x <= y {
            pixel_signed(self, x0 + x, y0 + y, color);
            pixel_signed(self, x0 - x, y0 + y, color);
            pixel_signed(self, x0 + x, y0 - y, color);
            pixel_signed(self, x0 - x, y0 - y, color);

            pixel_signed(self, x0 + y, y0 + x, color);
            pixel_signed(self, x0 - y, y0 + x, color);
            pixel_signed(self, x0 + y, y0 - x, color);
            pixel_signed(self, x0 - y, y0 - x, color);

            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;
        }
    }

    /// Fill a circle
    ///
    /// Same decision variable as [`Draw::draw_circle`], with the 8
    /// symmetric pixels replaced by 4 horizontal chords per step, so the
    /// stroked pixel set is always a subset of the filled one.
    fn fill_circle(&mut self, x0: i16, y0: i16, r: i16, color: Self::Color) {
        let x0 = x0 as i32;
        let y0 = y0 as i32;
        let mut f = 1 - r as i32;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r as i32;
        let mut x = 0;
        let mut y = r as i32;

        while x <= y {
            self.chord(x0 - x, x0 + x, y0 + y, color);
            self.chord(x0 - x, x0 + x, y0 - y, color);
            self.chord(x0 - y, x0 + y, y0 + x, color);
            self.chord(x0 - y, x0 + y, y0 - x, color);

            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;
        }
    }

    /// Horizontal chord with signed, clipped endpoints
    #[doc(hidden)]
    fn chord(&mut self, xa: i32, xb: i32, y: i32, color: Self::Color) {
        if y < 0 || xb < 0 {
            return;
        }
        self.draw_line(xa.max(0) as u16, y as u16, xb as u16, y as u16, color);
    }
}

// Every plane can draw shapes
impl<P: Plane + ?Sized> Draw for P {}

#[cfg(test)]
pub(crate) mod test_plane {
    use crate::plane::{Cursor, Mono, Plane, TextPlane};

    /// In-memory plane for rasterizer and text tests
    pub struct TestPlane {
        pub width: u16,
        pub height: u16,
        pub bits: [[bool; 64]; 64],
        pub cursor: Cursor,
    }

    impl TestPlane {
        pub fn new(width: u16, height: u16) -> Self {
            assert!(width <= 64 && height <= 64);
            TestPlane {
                width,
                height,
                bits: [[false; 64]; 64],
                cursor: Cursor::default(),
            }
        }

        pub fn lit(&self) -> usize {
            self.bits
                .iter()
                .flatten()
                .filter(|&&b| b)
                .count()
        }
    }

    impl Plane for TestPlane {
        type Color = Mono;

        fn width(&self) -> u16 {
            self.width
        }

        fn height(&self) -> u16 {
            self.height
        }

        fn set_pixel(&mut self, x: u16, y: u16, color: Mono) {
            if x >= self.width || y >= self.height {
                return;
            }
            self.bits[y as usize][x as usize] = color == Mono::On;
        }
    }

    impl TextPlane for TestPlane {
        fn cursor(&self) -> Cursor {
            self.cursor
        }

        fn set_cursor(&mut self, cursor: Cursor) {
            self.cursor = cursor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_plane::TestPlane;
    use super::*;
    use crate::plane::Mono;
    use proptest::prelude::*;

    #[test]
    fn set_pixel_out_of_bounds_is_noop() {
        let mut p = TestPlane::new(32, 16);
        p.set_pixel(32, 0, Mono::On);
        p.set_pixel(0, 16, Mono::On);
        p.set_pixel(400, 400, Mono::On);
        assert_eq!(p.lit(), 0);
    }

    #[test]
    fn horizontal_line_is_inclusive_and_order_free() {
        let mut a = TestPlane::new(32, 16);
        a.draw_line(3, 5, 10, 5, Mono::On);
        assert_eq!(a.lit(), 8);

        let mut b = TestPlane::new(32, 16);
        b.draw_line(10, 5, 3, 5, Mono::On);
        assert_eq!(a.bits, b.bits);
    }

    #[test]
    fn line_clamps_to_panel_edge() {
        let mut p = TestPlane::new(16, 16);
        // Runs off the right edge; must clip to column 15, not vanish.
        p.draw_line(10, 3, 200, 3, Mono::On);
        assert!(p.bits[3][15]);
        assert!(p.bits[3][10]);
        assert_eq!(p.lit(), 6);
    }

    #[test]
    fn filled_rect_covers_inclusive_bounds() {
        let mut p = TestPlane::new(64, 64);
        p.fill_rect(10, 10, 20, 20, Mono::On);
        assert_eq!(p.lit(), 21 * 21);
        assert!(p.bits[10][10] && p.bits[30][30]);
        assert!(!p.bits[9][10] && !p.bits[31][30]);
    }

    #[test]
    fn rect_extent_truncates_at_edge() {
        let mut p = TestPlane::new(16, 16);
        p.fill_rect(12, 12, 50, 50, Mono::On);
        assert_eq!(p.lit(), 4 * 4);
    }

    #[test]
    fn stroked_circle_has_8_fold_symmetry() {
        let mut p = TestPlane::new(64, 64);
        p.draw_circle(32, 32, 10, Mono::On);
        for y in 0..64i32 {
            for x in 0..64i32 {
                if p.bits[y as usize][x as usize] {
                    let dx = x - 32;
                    let dy = y - 32;
                    for (rx, ry) in [
                        (dx, dy),
                        (-dx, dy),
                        (dx, -dy),
                        (-dx, -dy),
                        (dy, dx),
                        (-dy, dx),
                        (dy, -dx),
                        (-dy, -dx),
                    ] {
                        assert!(
                            p.bits[(32 + ry) as usize][(32 + rx) as usize],
                            "missing reflection of ({x},{y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn stroke_is_subset_of_fill() {
        let mut stroke = TestPlane::new(64, 64);
        stroke.draw_circle(30, 30, 12, Mono::On);
        let mut fill = TestPlane::new(64, 64);
        fill.fill_circle(30, 30, 12, Mono::On);
        for y in 0..64 {
            for x in 0..64 {
                if stroke.bits[y][x] {
                    assert!(fill.bits[y][x], "({x},{y}) stroked but not filled");
                }
            }
        }
    }

    #[test]
    fn filled_triangle_covers_outline() {
        let mut outline = TestPlane::new(64, 64);
        outline.draw_triangle(5, 5, 40, 12, 20, 45, Mono::On);
        let mut fill = TestPlane::new(64, 64);
        fill.fill_triangle(5, 5, 40, 12, 20, 45, Mono::On);
        for y in 0..64 {
            for x in 0..64 {
                if outline.bits[y][x] {
                    assert!(fill.bits[y][x], "({x},{y}) on outline but not filled");
                }
            }
        }
        assert!(fill.bits[20][21]); // interior point
    }

    proptest! {
        #[test]
        fn line_endpoint_order_is_irrelevant(
            x0 in 0u16..40, y0 in 0u16..40, x1 in 0u16..40, y1 in 0u16..40
        ) {
            let mut fwd = TestPlane::new(40, 40);
            fwd.draw_line(x0, y0, x1, y1, Mono::On);
            let mut rev = TestPlane::new(40, 40);
            rev.draw_line(x1, y1, x0, y0, Mono::On);
            prop_assert_eq!(fwd.bits, rev.bits);
        }

        #[test]
        fn line_endpoints_always_set(
            x0 in 0u16..40, y0 in 0u16..40, x1 in 0u16..40, y1 in 0u16..40
        ) {
            let mut p = TestPlane::new(40, 40);
            p.draw_line(x0, y0, x1, y1, Mono::On);
            prop_assert!(p.bits[y0 as usize][x0 as usize]);
            prop_assert!(p.bits[y1 as usize][x1 as usize]);
        }

        #[test]
        fn out_of_bounds_pixels_never_draw(x in 0u16..1000, y in 0u16..1000) {
            let mut p = TestPlane::new(40, 40);
            p.set_pixel(x, y, Mono::On);
            let inside = x < 40 && y < 40;
            prop_assert_eq!(p.lit(), inside as usize);
        }
    }
}
