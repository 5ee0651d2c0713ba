use crate::style::Rgb;
use serde::{Deserialize, Serialize};

/// A resolved visual primitive in plot-area pixels (origin top-left, y down).
///
/// Marks are built fresh on every encode and handed to a surface as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mark {
    /// One sub-bar of a grouped bar chart.
    Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
        category: String,
        ordinal: i32,
        value: f64,
    },
    /// One series polyline, straight segments between consecutive points.
    Path {
        points: Vec<(f64, f64)>,
        color: Rgb,
        category: String,
    },
    /// One scatter dot.
    Point {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgb,
        category: String,
        ordinal: i32,
        value: f64,
    },
}

impl Mark {
    pub fn color(&self) -> Rgb {
        match self {
            Mark::Bar { color, .. } | Mark::Path { color, .. } | Mark::Point { color, .. } => *color,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Mark::Bar { category, .. }
            | Mark::Path { category, .. }
            | Mark::Point { category, .. } => category,
        }
    }
}
