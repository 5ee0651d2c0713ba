use econ_charts::encode::{ChartSpec, Frame, encode_chart};
use econ_charts::models::Record;
use econ_charts::style::CategoryPalette;
use econ_charts::viz::{self, Surface, SvgSurface};
use std::fs;
use tempfile::tempdir;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn bar_svg_has_one_rect_per_bar_plus_legend() {
    let records = vec![
        Record::new("Japan", 2000, 39169.4),
        Record::new("Korea", 2000, 12256.9),
        Record::new("Japan", 2010, 44968.2),
    ];
    let palette = CategoryPalette::default();
    let chart = encode_chart(&ChartSpec::bar(), &records, &Frame::default(), &palette).unwrap();
    assert_eq!(chart.marks.len(), 8);

    let svg = viz::render_svg(&chart).unwrap();
    // background + bars + five legend swatches
    assert_eq!(count(&svg, "<rect"), 1 + 8 + 5);
    assert!(svg.contains("Jpn") && svg.contains("Sing"));
    assert!(svg.contains("GDP per Capita"));
    assert!(svg.to_lowercase().contains("#e69f00"));
}

#[test]
fn scatter_svg_has_one_circle_per_record() {
    let records = vec![
        Record::new("China", 1970, 8.18e8),
        Record::new("China", 2020, 1.41e9),
        Record::new("Indonesia", 2020, 2.72e8),
        Record::new("Brazil", 2020, 2.13e8),
    ];
    let chart = encode_chart(
        &ChartSpec::scatter(),
        &records,
        &Frame::default(),
        &CategoryPalette::default(),
    )
    .unwrap();
    let mut surface = SvgSurface::new();
    surface.draw(&chart).unwrap();
    let svg = surface.as_str();
    assert_eq!(count(svg, "<circle"), records.len());
    for year in ["1970", "1980", "1990", "2000", "2010", "2020"] {
        assert!(svg.contains(year), "missing tick label {year}");
    }
    // fallback blue for Brazil
    assert!(svg.to_lowercase().contains("#0072b2"));
}

#[test]
fn line_svg_written_to_file() {
    let records = vec![
        Record::new("Japan", 1970, 2.13e11),
        Record::new("Japan", 2010, 5.76e12),
        Record::new("Korea", 1970, 9.0e9),
        Record::new("Korea", 2010, 1.14e12),
    ];
    let chart = encode_chart(
        &ChartSpec::line(),
        &records,
        &Frame::new(640, 300),
        &CategoryPalette::default(),
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("line-chart.svg");
    viz::render_svg_file(&chart, &path).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("640") && svg.contains("300"));
    assert!(svg.contains("GDP"));
    // y ticks use SI labels
    assert!(chart.y_axis.ticks.iter().any(|t| t.label == "8.0T"));
    assert!(svg.contains("8.0T"));
}
