//! Encoding pipeline: records → domain → scales → marks, axes and legend.
//!
//! - Grouped bars: band scale over the years, one sub-bar per category
//! - Lines: one path per category over a fixed 1970–2020 linear year scale
//! - Scatter: one fixed-radius dot per record over the same year scale
//! - One category palette drives mark colors and the legend of every chart
//!
//! ```rust
//! use econ_charts::encode::{ChartSpec, Frame, encode_chart};
//! use econ_charts::models::Record;
//! use econ_charts::style::CategoryPalette;
//!
//! let records = vec![
//!     Record::new("Japan", 2000, 30000.0),
//!     Record::new("Korea", 2000, 20000.0),
//! ];
//! let chart = encode_chart(&ChartSpec::bar(), &records, &Frame::default(), &CategoryPalette::default())?;
//! assert_eq!(chart.marks.len(), 4); // Japan, Korea, Indonesia (0), China (0)
//! # Ok::<(), econ_charts::error::EncodeError>(())
//! ```

pub mod bars;
pub mod domain;
pub mod format;
pub mod frame;
pub mod mark;
pub mod points;
pub mod scale;
pub mod series;

pub use bars::{BarSlot, bar_categories, layout_grouped_bars};
pub use domain::{Domain, DomainOptions, compute_domain};
pub use frame::{Frame, Margin};
pub use mark::Mark;
pub use points::{POINT_RADIUS, map_points};
pub use scale::{BandScale, LinearScale};
pub use series::{Series, group_by_series};

use crate::error::EncodeError;
use crate::models::{DatasetId, Record};
use crate::style::CategoryPalette;
use crate::viz::legend::Legend;
use serde::{Deserialize, Serialize};

use format::{format_si, format_year};
use scale::BAND_PADDING;

/// Tick count requested from linear scales.
const AXIS_TICKS: usize = 10;

/// The three chart layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    GroupedBar,
    Line,
    Scatter,
}

/// Per-chart constants: which dataset, how to pad the domain, how to tick the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset: DatasetId,
    /// Id of the page element the chart is mounted in.
    pub container: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub headroom: f64,
    pub nice: bool,
    pub ordinal_range: Option<(i32, i32)>,
    /// Fixed x tick values; `None` lets the scale pick them.
    pub x_ticks: Option<Vec<i32>>,
}

impl ChartSpec {
    /// GDP per capita, grouped by year.
    pub fn bar() -> Self {
        Self {
            kind: ChartKind::GroupedBar,
            dataset: DatasetId::GdpPerCapita,
            container: "bar-chart",
            x_title: "Year",
            y_title: "GDP per Capita",
            headroom: 1.0,
            nice: true,
            ordinal_range: None,
            x_ticks: None,
        }
    }

    /// GDP, one line per country.
    pub fn line() -> Self {
        Self {
            kind: ChartKind::Line,
            dataset: DatasetId::Gdp,
            container: "line-chart",
            x_title: "Year",
            y_title: "GDP",
            headroom: 1.5,
            nice: false,
            ordinal_range: Some((1970, 2020)),
            x_ticks: None,
        }
    }

    /// Population, one dot per observation.
    pub fn scatter() -> Self {
        Self {
            kind: ChartKind::Scatter,
            dataset: DatasetId::Population,
            container: "scatterplot",
            x_title: "Year",
            y_title: "Population",
            headroom: 1.5,
            nice: false,
            ordinal_range: Some((1970, 2020)),
            x_ticks: Some(vec![1970, 1980, 1990, 2000, 2010, 2020]),
        }
    }

    /// All three charts in page order.
    pub fn all() -> Vec<Self> {
        vec![Self::bar(), Self::line(), Self::scatter()]
    }

    pub fn domain_options(&self) -> DomainOptions {
        DomainOptions {
            headroom: self.headroom,
            nice: self.nice,
            ordinal_range: self.ordinal_range,
        }
    }
}

/// One axis tick: pixel offset along the axis and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<Tick>,
}

/// Everything a surface needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedChart {
    pub kind: ChartKind,
    pub container: String,
    pub frame: Frame,
    pub plot_width: f64,
    pub plot_height: f64,
    pub domain: Domain,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub marks: Vec<Mark>,
    pub legend: Legend,
}

/// Run the full pipeline for one chart.
pub fn encode_chart(
    spec: &ChartSpec,
    records: &[Record],
    frame: &Frame,
    palette: &CategoryPalette,
) -> Result<EncodedChart, EncodeError> {
    let (plot_width, plot_height) = frame.plot_size()?;
    let domain = compute_domain(records, &spec.domain_options())?;
    let y = LinearScale::new((domain.value_min, domain.value_max), (plot_height, 0.0));

    let (marks, x_ticks): (Vec<Mark>, Vec<Tick>) = match spec.kind {
        ChartKind::GroupedBar => {
            let x = BandScale::new(
                records.iter().map(|r| r.ordinal),
                (0.0, plot_width),
                BAND_PADDING,
            );
            let categories = bar_categories(records, palette);
            let slots = layout_grouped_bars(records, &categories, x.band_width());
            let half = x.band_width() / 2.0;
            let ticks = x
                .domain()
                .iter()
                .filter_map(|o| {
                    Some(Tick {
                        position: x.position(*o)? + half,
                        label: o.to_string(),
                    })
                })
                .collect();
            (bars::bar_marks(&slots, &x, &y, palette), ticks)
        }
        ChartKind::Line | ChartKind::Scatter => {
            let x = LinearScale::new(
                (domain.ordinal_min as f64, domain.ordinal_max as f64),
                (0.0, plot_width),
            );
            let outside = records
                .iter()
                .filter(|r| r.ordinal < domain.ordinal_min || r.ordinal > domain.ordinal_max)
                .count();
            if outside > 0 {
                log::warn!(
                    "{}: {} record(s) outside {}..={} are drawn past the x axis",
                    spec.container,
                    outside,
                    domain.ordinal_min,
                    domain.ordinal_max
                );
            }
            let tick_values: Vec<f64> = match &spec.x_ticks {
                Some(fixed) => fixed.iter().map(|t| *t as f64).collect(),
                None => x.ticks(AXIS_TICKS),
            };
            let ticks = tick_values
                .into_iter()
                .map(|t| Tick {
                    position: x.apply(t),
                    label: format_year(t),
                })
                .collect();
            let marks = if spec.kind == ChartKind::Line {
                series::path_marks(&group_by_series(records), &x, &y, palette)
            } else {
                map_points(records, &x, &y, palette)
            };
            (marks, ticks)
        }
    };

    let y_ticks: Vec<Tick> = y
        .ticks(AXIS_TICKS)
        .into_iter()
        .map(|v| Tick {
            position: y.apply(v),
            label: format_si(v, 2),
        })
        .collect();

    log::debug!(
        "{}: {} records -> {} marks, values 0..{}",
        spec.container,
        records.len(),
        marks.len(),
        domain.value_max
    );

    Ok(EncodedChart {
        kind: spec.kind,
        container: spec.container.to_string(),
        frame: *frame,
        plot_width,
        plot_height,
        domain,
        x_axis: Axis {
            title: spec.x_title.to_string(),
            ticks: x_ticks,
        },
        y_axis: Axis {
            title: spec.y_title.to_string(),
            ticks: y_ticks,
        },
        marks,
        legend: Legend::builder().build(palette),
    })
}
