//! Line chart grouping: one polyline per category.

use crate::models::Record;
use crate::style::CategoryPalette;
use serde::{Deserialize, Serialize};

use super::mark::Mark;
use super::scale::LinearScale;

/// Points of one category, ascending by ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub category: String,
    pub points: Vec<(i32, f64)>,
}

/// Group records by category.
///
/// This stage does the sorting: points are stably sorted by ordinal inside each
/// series, so callers may pass records in any order. Series appear in order of
/// their category's first occurrence. Every record lands in exactly one series.
pub fn group_by_series(records: &[Record]) -> Vec<Series> {
    let mut out: Vec<Series> = Vec::new();
    for r in records {
        match out.iter_mut().find(|s| s.category == r.category) {
            Some(series) => series.points.push((r.ordinal, r.value)),
            None => out.push(Series {
                category: r.category.clone(),
                points: vec![(r.ordinal, r.value)],
            }),
        }
    }
    for series in out.iter_mut() {
        series.points.sort_by_key(|(ordinal, _)| *ordinal);
    }
    out
}

/// One series per requested category, in the given order; categories without
/// records get an empty series.
pub fn series_for(records: &[Record], categories: &[&str]) -> Vec<Series> {
    let mut grouped = group_by_series(records);
    categories
        .iter()
        .map(|c| match grouped.iter().position(|s| s.category == *c) {
            Some(i) => grouped.swap_remove(i),
            None => Series {
                category: (*c).to_string(),
                points: Vec::new(),
            },
        })
        .collect()
}

/// Project each non-empty series into a path mark.
pub fn path_marks(
    series: &[Series],
    x: &LinearScale,
    y: &LinearScale,
    palette: &CategoryPalette,
) -> Vec<Mark> {
    series
        .iter()
        .filter(|s| !s.points.is_empty())
        .map(|s| Mark::Path {
            points: s
                .points
                .iter()
                .map(|(ordinal, value)| (x.apply(*ordinal as f64), y.apply(*value)))
                .collect(),
            color: palette.color_for(&s.category),
            category: s.category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_within_series_and_keeps_first_seen_order() {
        let recs = vec![
            Record::new("Korea", 2010, 3.0),
            Record::new("Japan", 2000, 1.0),
            Record::new("Korea", 1990, 2.0),
        ];
        let s = group_by_series(&recs);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].category, "Korea");
        assert_eq!(s[0].points, vec![(1990, 2.0), (2010, 3.0)]);
        assert_eq!(s[1].points, vec![(2000, 1.0)]);
    }

    #[test]
    fn absent_category_is_empty_series_and_no_path() {
        let recs = vec![Record::new("Japan", 2000, 1.0)];
        let s = series_for(&recs, &["China", "Japan"]);
        assert_eq!(s[0].category, "China");
        assert!(s[0].points.is_empty());
        assert_eq!(s[1].points.len(), 1);

        let x = LinearScale::new((1970.0, 2020.0), (0.0, 500.0));
        let y = LinearScale::new((0.0, 2.0), (100.0, 0.0));
        let marks = path_marks(&s, &x, &y, &CategoryPalette::default());
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].category(), "Japan");
        match &marks[0] {
            Mark::Path { points, .. } => assert_eq!(points, &vec![(300.0, 50.0)]),
            other => panic!("unexpected mark {other:?}"),
        }
    }
}
