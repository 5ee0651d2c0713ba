//! Adapter helpers between pipeline marks and the plotters crate.

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::encode::Mark;
use crate::style::Rgb;

/// Stroke width of series lines, in pixels.
pub const LINE_WIDTH: u32 = 2;

pub fn rgb_color(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Round a plot-space coordinate to a backend pixel.
#[inline]
pub fn px(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Draw one mark onto `area`, whose origin is the plot area's top-left corner.
pub fn draw_mark<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, mark: &Mark) -> Result<()> {
    match mark {
        Mark::Bar {
            x,
            y,
            width,
            height,
            color,
            ..
        } => area.draw(&Rectangle::new(
            [px(*x, *y), px(x + width, y + height)],
            rgb_color(*color).filled(),
        )),
        Mark::Path { points, color, .. } => area.draw(&PathElement::new(
            points.iter().map(|(x, y)| px(*x, *y)).collect::<Vec<_>>(),
            rgb_color(*color).stroke_width(LINE_WIDTH),
        )),
        Mark::Point {
            x, y, radius, color, ..
        } => area.draw(&Circle::new(
            px(*x, *y),
            radius.round().max(1.0) as i32,
            rgb_color(*color).filled(),
        )),
    }
    .map_err(|e| anyhow!("{:?}", e))
}
