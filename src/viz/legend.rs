//! Color legend: a grid of swatches with short labels, built from the palette.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};

use super::adapter::rgb_color;
use crate::style::{CategoryPalette, Rgb};

/// One placed legend entry, coordinates relative to the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Rgb,
    /// Top-left corner of the swatch.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Left edge / vertical center of the label text.
    pub text_x: f64,
    pub text_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub items: Vec<LegendItem>,
}

/// Grid parameters. Defaults: 20px swatches, two columns 90px apart, rows 30px
/// apart, anchored 10px inside the plot's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendBuilder {
    origin: (f64, f64),
    swatch: f64,
    columns: usize,
    column_pitch: f64,
    row_pitch: f64,
    label_gap: f64,
}

impl Default for LegendBuilder {
    fn default() -> Self {
        Self {
            origin: (10.0, 10.0),
            swatch: 20.0,
            columns: 2,
            column_pitch: 90.0,
            row_pitch: 30.0,
            label_gap: 10.0,
        }
    }
}

impl LegendBuilder {
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn swatch(mut self, px: f64) -> Self {
        self.swatch = px;
        self
    }

    /// Columns per row (at least 1).
    pub fn columns(mut self, n: usize) -> Self {
        self.columns = n.max(1);
        self
    }

    pub fn column_pitch(mut self, px: f64) -> Self {
        self.column_pitch = px;
        self
    }

    pub fn row_pitch(mut self, px: f64) -> Self {
        self.row_pitch = px;
        self
    }

    pub fn label_gap(mut self, px: f64) -> Self {
        self.label_gap = px;
        self
    }

    /// Lay out the palette's legend entries row-major.
    pub fn build(&self, palette: &CategoryPalette) -> Legend {
        self.build_items(palette.legend_entries())
    }

    pub fn build_items(&self, entries: Vec<(String, Rgb)>) -> Legend {
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, color))| {
                let (row, col) = (i / self.columns, i % self.columns);
                let x = self.origin.0 + col as f64 * self.column_pitch;
                let y = self.origin.1 + row as f64 * self.row_pitch;
                LegendItem {
                    label,
                    color,
                    x,
                    y,
                    size: self.swatch,
                    text_x: x + self.swatch + self.label_gap,
                    text_y: y + self.swatch / 2.0,
                }
            })
            .collect();
        Legend { items }
    }
}

impl Legend {
    pub fn builder() -> LegendBuilder {
        LegendBuilder::default()
    }
}

/// Draw swatches and labels onto the plot area.
pub fn draw_legend<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, legend: &Legend) -> Result<()> {
    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, 12)).pos(Pos::new(HPos::Left, VPos::Center));
    for item in &legend.items {
        let (x0, y0) = (item.x.round() as i32, item.y.round() as i32);
        let s = item.size.round() as i32;
        area.draw(&Rectangle::new(
            [(x0, y0), (x0 + s, y0 + s)],
            rgb_color(item.color).filled(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        area.draw(&Text::new(
            item.label.as_str(),
            (item.text_x.round() as i32, item.text_y.round() as i32),
            label_style.clone(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
