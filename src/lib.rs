//! econ_charts
//!
//! Encode GDP, GDP per capita and population datasets into three charts
//! (grouped bars, lines, scatter) and render them as SVG. Pairs with the
//! `econ-charts` CLI.
//!
//! ### Features
//! - Load datasets from a directory or over HTTP
//! - Test-visible scale math: linear and band scales, nice rounding, ticks
//! - One swappable category palette for marks and legends
//! - SVG output per chart, plus a single HTML page with all three
//!
//! ### Example
//! ```no_run
//! use econ_charts::{CategoryPalette, FileSource, Frame, build_page};
//!
//! let source = FileSource::new("data");
//! let page = build_page(&source, &Frame::default(), &CategoryPalette::default());
//! page.write_svgs("out".as_ref())?;
//! page.write_html("out/index.html".as_ref())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod encode;
pub mod error;
pub mod models;
pub mod source;
pub mod style;
pub mod viz;

pub use encode::{ChartKind, ChartSpec, EncodedChart, Frame, Mark, encode_chart};
pub use error::{EncodeError, LoadError};
pub use models::{DatasetId, Record};
pub use source::{DataSource, FileSource, HttpSource};
pub use style::CategoryPalette;
pub use viz::page::{ChartOutcome, Page, build_page};
pub use viz::{Surface, SvgSurface, render_svg, render_svg_file};
