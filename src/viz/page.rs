//! Compose the three charts into one page.
//!
//! Each chart is loaded, encoded and rendered on its own. A failure is logged
//! and recorded, and the remaining charts still render; the failed chart's
//! container stays empty.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::render_svg;
use crate::encode::{ChartSpec, Frame, encode_chart};
use crate::source::DataSource;
use crate::style::CategoryPalette;

/// Result of one chart's load → encode → render run.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Rendered { container: String, svg: String },
    Failed { container: String, error: String },
}

impl ChartOutcome {
    pub fn container(&self) -> &str {
        match self {
            ChartOutcome::Rendered { container, .. } | ChartOutcome::Failed { container, .. } => {
                container
            }
        }
    }

    pub fn svg(&self) -> Option<&str> {
        match self {
            ChartOutcome::Rendered { svg, .. } => Some(svg.as_str()),
            ChartOutcome::Failed { .. } => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, ChartOutcome::Rendered { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub charts: Vec<ChartOutcome>,
}

/// Run every chart preset against `source`. Never fails as a whole.
pub fn build_page(source: &dyn DataSource, frame: &Frame, palette: &CategoryPalette) -> Page {
    let charts = ChartSpec::all()
        .iter()
        .map(|spec| match render_one(source, spec, frame, palette) {
            Ok(svg) => ChartOutcome::Rendered {
                container: spec.container.to_string(),
                svg,
            },
            Err(e) => {
                log::error!("Error loading the data: {:#}", e);
                ChartOutcome::Failed {
                    container: spec.container.to_string(),
                    error: format!("{:#}", e),
                }
            }
        })
        .collect();
    Page { charts }
}

fn render_one(
    source: &dyn DataSource,
    spec: &ChartSpec,
    frame: &Frame,
    palette: &CategoryPalette,
) -> Result<String> {
    let records = source
        .load(spec.dataset)
        .with_context(|| format!("{} ({})", spec.container, spec.dataset))?;
    let chart = encode_chart(spec, &records, frame, palette)
        .with_context(|| format!("encode {}", spec.container))?;
    render_svg(&chart).with_context(|| format!("render {}", spec.container))
}

impl Page {
    pub fn rendered(&self) -> usize {
        self.charts.iter().filter(|c| c.is_rendered()).count()
    }

    /// One HTML document with a `<div id=..>` per chart, inline SVG inside.
    pub fn to_html(&self) -> String {
        let mut html = String::from(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Economic indicators</title>\n</head>\n<body>\n",
        );
        for chart in &self.charts {
            html.push_str(&format!("<div id=\"{}\">\n", chart.container()));
            if let Some(svg) = chart.svg() {
                html.push_str(strip_xml_prolog(svg));
                html.push('\n');
            }
            html.push_str("</div>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write `<container>.svg` for every rendered chart; returns the written paths.
    pub fn write_svgs(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("create {}", out_dir.display()))?;
        let mut written = Vec::new();
        for chart in &self.charts {
            if let Some(svg) = chart.svg() {
                let path = out_dir.join(format!("{}.svg", chart.container()));
                std::fs::write(&path, svg).with_context(|| format!("write {}", path.display()))?;
                written.push(path);
            }
        }
        Ok(written)
    }

    pub fn write_html(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_html()).with_context(|| format!("write {}", path.display()))
    }
}

/// Drop a leading `<?xml ...?>` declaration; it is not allowed inside HTML.
fn strip_xml_prolog(svg: &str) -> &str {
    match svg.strip_prefix("<?xml").and_then(|rest| rest.find("?>").map(|end| &rest[end + 2..])) {
        Some(body) => body.trim_start(),
        None => svg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(outcomes: Vec<ChartOutcome>) -> Page {
        Page { charts: outcomes }
    }

    #[test]
    fn failed_chart_leaves_empty_container() {
        let p = page(vec![
            ChartOutcome::Rendered {
                container: "bar-chart".into(),
                svg: "<?xml version=\"1.0\"?><svg></svg>".into(),
            },
            ChartOutcome::Failed {
                container: "line-chart".into(),
                error: "missing".into(),
            },
        ]);
        let html = p.to_html();
        assert!(html.contains("<div id=\"bar-chart\">\n<svg></svg>\n</div>"));
        assert!(html.contains("<div id=\"line-chart\">\n</div>"));
        assert!(!html.contains("<?xml"));
        assert_eq!(p.rendered(), 1);
    }
}
