use crate::models::Record;
use crate::style::CategoryPalette;

use super::mark::Mark;
use super::scale::LinearScale;

/// Radius of every scatter dot. Not data-encoded: the population chart places
/// dots by year and value only.
pub const POINT_RADIUS: f64 = 1.5;

/// One point mark per record, in input order. Repeated (category, ordinal)
/// pairs are kept as separate marks.
pub fn map_points(
    records: &[Record],
    x: &LinearScale,
    y: &LinearScale,
    palette: &CategoryPalette,
) -> Vec<Mark> {
    records
        .iter()
        .map(|r| Mark::Point {
            x: x.apply(r.ordinal as f64),
            y: y.apply(r.value),
            radius: POINT_RADIUS,
            color: palette.color_for(&r.category),
            category: r.category.clone(),
            ordinal: r.ordinal,
            value: r.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_per_record_even_duplicates() {
        let recs = vec![
            Record::new("Japan", 1980, 10.0),
            Record::new("Japan", 1980, 10.0),
            Record::new("Peru", 2020, 0.0),
        ];
        let x = LinearScale::new((1970.0, 2020.0), (0.0, 100.0));
        let y = LinearScale::new((0.0, 20.0), (50.0, 0.0));
        let palette = CategoryPalette::default();
        let marks = map_points(&recs, &x, &y, &palette);
        assert_eq!(marks.len(), 3);
        assert_eq!(marks[0], marks[1]);
        match &marks[2] {
            Mark::Point { x, y, radius, color, .. } => {
                assert_eq!((*x, *y, *radius), (100.0, 50.0, POINT_RADIUS));
                assert_eq!(*color, palette.fallback_color());
            }
            other => panic!("unexpected mark {other:?}"),
        }
    }
}
