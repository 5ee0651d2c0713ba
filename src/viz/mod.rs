//! Rendering surfaces: turn an [`EncodedChart`] into **SVG**.
//!
//! - Marks come fully positioned from the pipeline; this module only draws them
//! - Axes use the pipeline's tick positions and labels (SI values, plain years)
//! - Legend is the shared palette grid, drawn inside the plot area's top-left corner
//! - [`page`] composes the three charts into one HTML document

pub mod adapter;
pub mod legend;
pub mod page;

use crate::encode::EncodedChart;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontFamily, FontTransform};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_svg::SVGBackend;

use std::path::Path;

use adapter::{draw_mark, px};
use legend::draw_legend;

const TICK_LEN: i32 = 6;
const TICK_FONT_PX: u32 = 10;
const TITLE_FONT_PX: u32 = 12;

/// Anything that can present an encoded chart.
pub trait Surface {
    fn draw(&mut self, chart: &EncodedChart) -> Result<()>;
}

/// Renders into an in-memory SVG document; the last drawn chart wins.
#[derive(Debug, Default)]
pub struct SvgSurface {
    svg: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.svg
    }

    pub fn into_string(self) -> String {
        self.svg
    }
}

impl Surface for SvgSurface {
    fn draw(&mut self, chart: &EncodedChart) -> Result<()> {
        let mut buf = String::new();
        {
            let size = (chart.frame.width, chart.frame.height);
            let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
            draw_chart(root, chart)?;
        }
        self.svg = buf;
        Ok(())
    }
}

/// Convenience: render one chart to an SVG string.
pub fn render_svg(chart: &EncodedChart) -> Result<String> {
    let mut surface = SvgSurface::new();
    surface.draw(chart)?;
    Ok(surface.into_string())
}

/// Render one chart straight to an `.svg` file.
pub fn render_svg_file<P: AsRef<Path>>(chart: &EncodedChart, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    let size = (chart.frame.width, chart.frame.height);
    let root = SVGBackend::new(out_path, size).into_drawing_area();
    draw_chart(root, chart)
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &EncodedChart) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let margin = chart.frame.margin;
    let (w, h) = (chart.plot_width.round() as i32, chart.plot_height.round() as i32);
    let plot = root.margin(
        margin.top as i32,
        margin.bottom as i32,
        margin.left as i32,
        margin.right as i32,
    );

    for mark in &chart.marks {
        draw_mark(&plot, mark)?;
    }

    draw_axes(&plot, chart, w, h)?;
    draw_legend(&plot, &chart.legend)?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Bottom and left axes with ticks, labels and titles, relative to the plot area.
fn draw_axes<DB: DrawingBackend>(
    plot: &DrawingArea<DB, Shift>,
    chart: &EncodedChart,
    w: i32,
    h: i32,
) -> Result<()> {
    let x_label_style: TextStyle = TextStyle::from((FontFamily::SansSerif, TICK_FONT_PX))
        .pos(Pos::new(HPos::Center, VPos::Top));
    let y_label_style: TextStyle = TextStyle::from((FontFamily::SansSerif, TICK_FONT_PX))
        .pos(Pos::new(HPos::Right, VPos::Center));
    let title_style: TextStyle = TextStyle::from((FontFamily::SansSerif, TITLE_FONT_PX))
        .pos(Pos::new(HPos::Center, VPos::Center));

    // x axis
    plot.draw(&PathElement::new(vec![(0, h), (w, h)], BLACK))
        .map_err(|e| anyhow!("{:?}", e))?;
    for tick in &chart.x_axis.ticks {
        let (x, _) = px(tick.position, 0.0);
        plot.draw(&PathElement::new(vec![(x, h), (x, h + TICK_LEN)], BLACK))
            .map_err(|e| anyhow!("{:?}", e))?;
        plot.draw(&Text::new(
            tick.label.as_str(),
            (x, h + TICK_LEN + 3),
            x_label_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    // y axis
    plot.draw(&PathElement::new(vec![(0, 0), (0, h)], BLACK))
        .map_err(|e| anyhow!("{:?}", e))?;
    for tick in &chart.y_axis.ticks {
        let (_, y) = px(0.0, tick.position);
        plot.draw(&PathElement::new(vec![(-TICK_LEN, y), (0, y)], BLACK))
            .map_err(|e| anyhow!("{:?}", e))?;
        plot.draw(&Text::new(
            tick.label.as_str(),
            (-TICK_LEN - 3, y),
            y_label_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    // titles: x centered under the tick labels, y rotated along the left edge
    let margin = chart.frame.margin;
    plot.draw(&Text::new(
        chart.x_axis.title.as_str(),
        (w / 2, h + margin.bottom as i32 - 10),
        title_style.clone(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    plot.draw(&Text::new(
        chart.y_axis.title.as_str(),
        (-(margin.left as i32) + 15, h / 2),
        title_style.transform(FontTransform::Rotate270),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
