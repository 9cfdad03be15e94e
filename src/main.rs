use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use devchart::{CalendarWindow, ChartConfig, Generator, SourceInput, Summary, View};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Daily,
    Weekly,
}

impl From<ViewArg> for View {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Daily => View::Daily,
            ViewArg::Weekly => View::Weekly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "devchart",
    version,
    about = "Render GitHub and GitLab contributions as one calendar chart"
)]
struct Cli {
    /// GitHub username
    #[arg(long)]
    github: Option<String>,

    /// GitLab username
    #[arg(long)]
    gitlab: Option<String>,

    /// Read the GitHub contributions page from a file instead of fetching it
    #[arg(long, value_name = "PATH")]
    github_file: Option<PathBuf>,

    /// Read the GitLab calendar JSON from a file instead of fetching it
    #[arg(long, value_name = "PATH")]
    gitlab_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ViewArg::Daily)]
    view: ViewArg,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (stdout when omitted; required for PNG)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// End the calendar on this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Attribution text in the bottom-right corner
    #[arg(long)]
    footer: Option<String>,

    /// Request timeout in milliseconds (0 disables it)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_weeks: u32,
    #[serde(flatten)]
    summary: &'a Summary,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ChartConfig> {
    let mut config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    if let Some(footer) = &cli.footer {
        config.footer = Some(footer.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    config.validate()?;
    Ok(config)
}

/// A file wins over fetching for the same source.
fn source_input<'a>(user: Option<&'a str>, file: Option<&Path>) -> Option<SourceInput<'a>> {
    match file {
        Some(path) => Some(SourceInput::Payload(
            std::fs::read_to_string(path).map_err(devchart::Error::from),
        )),
        None => user.map(SourceInput::User),
    }
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
fn render_png(svg: &str, config: &ChartConfig) -> anyhow::Result<Vec<u8>> {
    Ok(devchart::rendering::raster::render_png(svg, config.png_width)?.png_data)
}

#[cfg(not(feature = "png"))]
fn render_png(_svg: &str, _config: &ChartConfig) -> anyhow::Result<Vec<u8>> {
    bail!("devchart was built without PNG support (enable the `png` feature)")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.github.is_none() && cli.gitlab.is_none() && cli.github_file.is_none() && cli.gitlab_file.is_none() {
        bail!("nothing to chart: pass --github and/or --gitlab (or their --*-file variants)");
    }
    if cli.format == Format::Png && cli.output.is_none() {
        bail!("PNG output needs --output <PATH>");
    }

    let config = load_config(&cli)?;
    let window = match cli.today {
        Some(today) => CalendarWindow::ending(today),
        None => CalendarWindow::today(),
    };

    let generator = Generator::new(config.clone())?;
    let chart = generator
        .generate_from(
            window,
            source_input(cli.github.as_deref(), cli.github_file.as_deref()),
            source_input(cli.gitlab.as_deref(), cli.gitlab_file.as_deref()),
        )
        .await;
    for (kind, err) in &chart.failures {
        eprintln!("warning: can't load {} activity ({}); showing it as empty", kind, err);
    }

    let view = View::from(cli.view);
    let bytes = match cli.format {
        Format::Svg => chart.to_svg(view, &config).into_bytes(),
        Format::Png => render_png(&chart.to_svg(view, &config), &config)?,
        Format::Json => {
            let summary = chart.summary(view, &config.palette);
            let report = JsonReport {
                start_date: window.start_date,
                end_date: window.end_date,
                total_weeks: window.total_weeks,
                summary: &summary,
            };
            serde_json::to_vec_pretty(&report)?
        }
    };

    write_output(cli.output.as_deref(), &bytes)
}
