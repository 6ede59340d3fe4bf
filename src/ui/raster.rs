//! World-space shape rasterizer for the terminal.
//!
//! Shapes are given in world units and scaled onto a pixel grid that is as
//! wide as the target area in cells and twice as tall: each terminal cell
//! shows two stacked pixels with an upper half block (`▀`), foreground for the
//! top pixel and background for the bottom one.
//!
//! Pixel `(px, py)` covers the world rectangle starting at
//! `(px * ux, py * uy)`; a shape fills every pixel whose center it contains.
//! Shapes smaller than a pixel still mark the pixel under their center so thin
//! details (eyes, spikes) do not vanish at small terminal sizes.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const HALF_BLOCK: char = '\u{2580}'; // ▀

pub struct PixelCanvas {
    width: usize,
    height: usize,
    /// World units per pixel.
    ux: f64,
    uy: f64,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    /// Canvas for a `cols` x `rows` cell area showing a `world_width` x
    /// `world_height` world, cleared to `background`.
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64, background: Color) -> Self {
        let width = cols as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            ux: world_width / width.max(1) as f64,
            uy: world_height / height.max(1) as f64,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, px: usize, py: usize) -> Option<Color> {
        (px < self.width && py < self.height).then(|| self.pixels[py * self.width + px])
    }

    fn put(&mut self, px: i64, py: i64, color: Color) {
        if px >= 0 && py >= 0 && (px as usize) < self.width && (py as usize) < self.height {
            self.pixels[py as usize * self.width + px as usize] = color;
        }
    }

    /// World point of a pixel's center.
    fn center(&self, px: i64, py: i64) -> (f64, f64) {
        ((px as f64 + 0.5) * self.ux, (py as f64 + 0.5) * self.uy)
    }

    /// Inclusive pixel bounds covering a world-space box, unclipped.
    fn bounds(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> (i64, i64, i64, i64) {
        (
            (x0 / self.ux).floor() as i64,
            (y0 / self.uy).floor() as i64,
            (x1 / self.ux).ceil() as i64,
            (y1 / self.uy).ceil() as i64,
        )
    }

    /// Fill every pixel whose center satisfies `inside`, falling back to the
    /// pixel under `fallback` when none does.
    fn fill_where(
        &mut self,
        (x0, y0, x1, y1): (f64, f64, f64, f64),
        fallback: (f64, f64),
        color: Color,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        let (px0, py0, px1, py1) = self.bounds(x0, y0, x1, y1);
        let px0 = px0.max(0);
        let py0 = py0.max(0);
        let px1 = px1.min(self.width as i64 - 1);
        let py1 = py1.min(self.height as i64 - 1);

        let mut hit = false;
        for py in py0..=py1 {
            for px in px0..=px1 {
                let (wx, wy) = self.center(px, py);
                if inside(wx, wy) {
                    self.put(px, py, color);
                    hit = true;
                }
            }
        }

        if !hit {
            let px = (fallback.0 / self.ux).floor() as i64;
            let py = (fallback.1 / self.uy).floor() as i64;
            self.put(px, py, color);
        }
    }

    /// Axis-aligned rectangle with top-left `(x, y)`.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.fill_where(
            (x, y, x + w, y + h),
            (x + w / 2.0, y + h / 2.0),
            color,
            |wx, wy| wx >= x && wx < x + w && wy >= y && wy < y + h,
        );
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        self.fill_where(
            (cx - radius, cy - radius, cx + radius, cy + radius),
            (cx, cy),
            color,
            |wx, wy| (wx - cx).powi(2) + (wy - cy).powi(2) <= r2,
        );
    }

    pub fn fill_triangle(&mut self, a: (f64, f64), b: (f64, f64), c: (f64, f64), color: Color) {
        let edge = |p: (f64, f64), q: (f64, f64), x: f64, y: f64| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        let min_x = a.0.min(b.0).min(c.0);
        let max_x = a.0.max(b.0).max(c.0);
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);
        let centroid = ((a.0 + b.0 + c.0) / 3.0, (a.1 + b.1 + c.1) / 3.0);

        self.fill_where((min_x, min_y, max_x, max_y), centroid, color, |x, y| {
            let e0 = edge(a, b, x, y);
            let e1 = edge(b, c, x, y);
            let e2 = edge(c, a, x, y);
            // Either winding order
            (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
        });
    }

    /// Full-width horizontal line centered on `y`, at least one pixel thick.
    pub fn hline(&mut self, y: f64, thickness: f64, color: Color) {
        let top = ((y - thickness / 2.0) / self.uy).round() as i64;
        let bottom = ((y + thickness / 2.0) / self.uy).round() as i64;
        for py in top..bottom.max(top + 1) {
            for px in 0..self.width as i64 {
                self.put(px, py, color);
            }
        }
    }

    /// Convert to one `Line` per cell row, merging runs of equal colors.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height / 2);

        for row in 0..self.height / 2 {
            let top = &self.pixels[row * 2 * self.width..(row * 2 + 1) * self.width];
            let bottom = &self.pixels[(row * 2 + 1) * self.width..(row * 2 + 2) * self.width];

            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut current: Option<(Color, Color)> = None;
            let mut text = String::new();

            for (&fg, &bg) in top.iter().zip(bottom) {
                if current != Some((fg, bg)) {
                    if let Some((cur_fg, cur_bg)) = current {
                        spans.push(Span::styled(
                            std::mem::take(&mut text),
                            Style::default().fg(cur_fg).bg(cur_bg),
                        ));
                    }
                    current = Some((fg, bg));
                }
                text.push(HALF_BLOCK);
            }
            if let Some((fg, bg)) = current {
                spans.push(Span::styled(text, Style::default().fg(fg).bg(bg)));
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::Blue;
    const FG: Color = Color::Red;

    /// 10x5 cells over a 100x100 world: 10x10 pixels, 10 world units each.
    fn canvas() -> PixelCanvas {
        PixelCanvas::new(10, 5, 100.0, 100.0, BG)
    }

    fn count(canvas: &PixelCanvas, color: Color) -> usize {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn test_dimensions_double_rows() {
        let c = canvas();
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 10);
        assert_eq!(c.pixel(10, 0), None);
        assert_eq!(c.pixel(0, 10), None);
    }

    #[test]
    fn test_fill_rect_covers_pixel_centers() {
        let mut c = canvas();
        c.fill_rect(20.0, 30.0, 30.0, 20.0, FG);
        assert_eq!(count(&c, FG), 3 * 2);
        assert_eq!(c.pixel(2, 3), Some(FG));
        assert_eq!(c.pixel(4, 4), Some(FG));
        assert_eq!(c.pixel(5, 4), Some(BG));
        assert_eq!(c.pixel(2, 5), Some(BG));
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut c = canvas();
        c.fill_rect(-50.0, 90.0, 80.0, 500.0, FG);
        assert_eq!(count(&c, FG), 3);
        assert_eq!(c.pixel(0, 9), Some(FG));
        assert_eq!(c.pixel(2, 9), Some(FG));
    }

    #[test]
    fn test_fully_offscreen_shapes_draw_nothing() {
        let mut c = canvas();
        c.fill_rect(-80.0, 10.0, 30.0, 30.0, FG);
        c.fill_circle(500.0, 500.0, 10.0, FG);
        c.fill_triangle((-30.0, 0.0), (-20.0, 5.0), (-25.0, 10.0), FG);
        assert_eq!(count(&c, FG), 0);
    }

    #[test]
    fn test_tiny_shapes_mark_center_pixel() {
        let mut c = canvas();
        c.fill_circle(52.0, 52.0, 2.0, FG);
        assert_eq!(count(&c, FG), 1);
        assert_eq!(c.pixel(5, 5), Some(FG));

        let mut c = canvas();
        c.fill_triangle((31.0, 11.0), (33.0, 12.0), (31.0, 14.0), FG);
        assert_eq!(count(&c, FG), 1);
        assert_eq!(c.pixel(3, 1), Some(FG));
    }

    #[test]
    fn test_circle_is_round() {
        let mut c = canvas();
        c.fill_circle(50.0, 50.0, 30.0, FG);
        // Center pixels filled, bounding-box corners not
        assert_eq!(c.pixel(4, 4), Some(FG));
        assert_eq!(c.pixel(5, 5), Some(FG));
        assert_eq!(c.pixel(2, 2), Some(BG));
        assert_eq!(c.pixel(7, 7), Some(BG));
    }

    #[test]
    fn test_triangle_either_winding() {
        let mut cw = canvas();
        cw.fill_triangle((0.0, 0.0), (100.0, 0.0), (0.0, 100.0), FG);
        let mut ccw = canvas();
        ccw.fill_triangle((0.0, 0.0), (0.0, 100.0), (100.0, 0.0), FG);
        assert_eq!(count(&cw, FG), count(&ccw, FG));
        // Lower-left half including the diagonal
        assert_eq!(count(&cw, FG), 55);
        assert_eq!(cw.pixel(9, 9), Some(BG));
    }

    #[test]
    fn test_hline_spans_width() {
        let mut c = canvas();
        c.hline(45.0, 4.0, FG);
        assert_eq!(count(&c, FG), 10);
        assert!((0..10).all(|x| c.pixel(x, 4) == Some(FG)));

        // Thinner than a pixel still draws a full row
        let mut c = canvas();
        c.hline(50.0, 1.0, FG);
        assert_eq!(count(&c, FG), 10);
        assert!((0..10).all(|x| c.pixel(x, 5) == Some(FG)));
    }

    #[test]
    fn test_to_lines_pairs_rows_and_merges_runs() {
        let mut c = canvas();
        // Top pixel row 0 red over first half
        c.fill_rect(0.0, 0.0, 50.0, 10.0, FG);
        let lines = c.to_lines();
        assert_eq!(lines.len(), 5);

        let first = &lines[0];
        assert_eq!(first.spans.len(), 2);
        assert_eq!(first.spans[0].content, "▀▀▀▀▀");
        assert_eq!(first.spans[0].style.fg, Some(FG));
        assert_eq!(first.spans[0].style.bg, Some(BG));
        assert_eq!(first.spans[1].style.fg, Some(BG));

        // Untouched rows are a single span
        assert_eq!(lines[4].spans.len(), 1);
        assert_eq!(lines[4].width(), 10);
    }
}
