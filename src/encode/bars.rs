//! Grouped-bar sub-layout: one band per year, one sub-bar per category.

use crate::models::Record;
use crate::style::CategoryPalette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::mark::Mark;
use super::scale::{BandScale, LinearScale};

/// One sub-bar position inside its year's band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub ordinal: i32,
    pub category: String,
    /// Offset from the band's left edge.
    pub sub_x: f64,
    pub width: f64,
    pub value: f64,
}

/// Lay out sub-bars for every (distinct ordinal, category) pair.
///
/// Ordinals ascend; within an ordinal, slots follow `categories` order left to
/// right. A missing combination yields a zero-value slot rather than a gap, so
/// every band has the same number of sub-bars. When a pair occurs more than once
/// the first record wins.
pub fn layout_grouped_bars(records: &[Record], categories: &[&str], band_width: f64) -> Vec<BarSlot> {
    if categories.is_empty() {
        return Vec::new();
    }
    let ordinals: BTreeSet<i32> = records.iter().map(|r| r.ordinal).collect();
    let width = band_width / categories.len() as f64;

    let mut out = Vec::with_capacity(ordinals.len() * categories.len());
    for ordinal in ordinals {
        for (idx, category) in categories.iter().enumerate() {
            let value = records
                .iter()
                .find(|r| r.ordinal == ordinal && r.category == *category)
                .map(|r| r.value)
                .unwrap_or(0.0);
            out.push(BarSlot {
                ordinal,
                category: (*category).to_string(),
                sub_x: idx as f64 * width,
                width,
                value,
            });
        }
    }
    out
}

/// Category order for the bar chart: the palette's known categories first, then
/// any other category in order of first appearance.
pub fn bar_categories<'a>(records: &'a [Record], palette: &'a CategoryPalette) -> Vec<&'a str> {
    let mut out = palette.known_categories();
    for r in records {
        if !out.contains(&r.category.as_str()) {
            out.push(r.category.as_str());
        }
    }
    out
}

/// Turn slots into positioned bar marks.
pub fn bar_marks(
    slots: &[BarSlot],
    x: &BandScale,
    y: &LinearScale,
    palette: &CategoryPalette,
) -> Vec<Mark> {
    let baseline = y.apply(0.0);
    slots
        .iter()
        .filter_map(|s| {
            let band_x = x.position(s.ordinal)?;
            let top = y.apply(s.value);
            Some(Mark::Bar {
                x: band_x + s.sub_x,
                y: top.min(baseline),
                width: s.width,
                height: (baseline - top).abs(),
                color: palette.color_for(&s.category),
                category: s.category.clone(),
                ordinal: s.ordinal,
                value: s.value,
            })
        })
        .collect()
}
