use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use econ_charts::encode::compute_domain;
use econ_charts::encode::format::{format_grouped, map_locale};
use econ_charts::{CategoryPalette, ChartSpec, DataSource, FileSource, Frame, HttpSource, build_page};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "econ-charts",
    version,
    about = "Render GDP, GDP per capita and population charts as SVG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the three datasets and write one SVG per chart (and optionally an HTML page).
    Render(RenderArgs),
    /// Print the computed domain of every chart.
    Domain(DomainArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Directory holding gdp_per_capita.json, gdp.json and population.json.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Load datasets over HTTP from this base URL instead of --data-dir.
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output directory for the SVG files.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
    /// Width of each chart (default 960).
    #[arg(long, default_value_t = 960)]
    width: u32,
    /// Height of each chart (default 350).
    #[arg(long, default_value_t = 350)]
    height: u32,
    /// JSON file with a custom category palette.
    #[arg(long)]
    palette: Option<PathBuf>,
    /// Also write index.html with all three charts inline.
    #[arg(long, default_value_t = false)]
    page: bool,
}

#[derive(Args, Debug)]
struct DomainArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Locale for thousands separators (e.g. en, de, fr).
    #[arg(long, default_value = "en")]
    locale: String,
}

fn open_source(args: &SourceArgs) -> Result<Box<dyn DataSource>> {
    Ok(match &args.base_url {
        Some(url) => Box::new(HttpSource::new(url.as_str())?),
        None => Box::new(FileSource::new(&args.data_dir)),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Domain(args) => cmd_domain(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let source = open_source(&args.source)?;
    let palette = match &args.palette {
        Some(path) => CategoryPalette::from_json_file(path)?,
        None => CategoryPalette::default(),
    };
    let frame = Frame::new(args.width, args.height);

    let page = build_page(source.as_ref(), &frame, &palette);
    for path in page.write_svgs(&args.out_dir)? {
        eprintln!("Wrote chart to {}", path.display());
    }
    if args.page {
        let path = args.out_dir.join("index.html");
        page.write_html(&path)?;
        eprintln!("Wrote page to {}", path.display());
    }

    if page.rendered() == 0 {
        anyhow::bail!("no chart could be rendered");
    }
    Ok(())
}

fn cmd_domain(args: DomainArgs) -> Result<()> {
    let source = open_source(&args.source)?;
    let locale = map_locale(&args.locale);
    let mut printed = 0usize;
    for spec in ChartSpec::all() {
        let records = match source.load(spec.dataset) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Error loading the data: {}", e);
                continue;
            }
        };
        let d = match compute_domain(&records, &spec.domain_options()) {
            Ok(d) => d,
            Err(e) => {
                log::error!("{}: {}", spec.container, e);
                continue;
            }
        };
        println!(
            "{}  {}  years={}..={}  values={}..={}",
            spec.container,
            spec.dataset.value_field(),
            d.ordinal_min,
            d.ordinal_max,
            format_grouped(d.value_min, locale),
            format_grouped(d.value_max, locale)
        );
        printed += 1;
    }
    if printed == 0 {
        anyhow::bail!("no chart domain could be computed");
    }
    Ok(())
}
