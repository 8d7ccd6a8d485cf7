mod commands;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use bodymap::config::BodyMapConfig;
use bodymap::marker::Marker;
use bodymap::viewport::{Point, SurfaceMetrics, ViewportState};
use bodymap::zones::{BodyView, Granularity};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::commands::CliError;

#[derive(Parser, Debug)]
#[command(name = "bodymap-cli", about = "Body map zone classification and viewport geometry")]
struct Cli {
    /// JSON file with body map tunables; defaults apply when omitted.
    #[arg(long, env = "BODYMAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a diagram point.
    Classify(ClassifyArgs),
    /// Dump a region table in lookup order.
    Regions(RegionsArgs),
    /// Project a viewport onto a surface and the overview.
    Project(ProjectArgs),
    /// List markers within a radius of a point.
    Near(NearArgs),
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    x: f64,
    y: f64,
    #[arg(long, default_value = "FRONT", value_parser = parse_view)]
    view: BodyView,
    /// Overrides the configured granularity.
    #[arg(long, value_parser = parse_granularity)]
    granularity: Option<Granularity>,
}

#[derive(Args, Debug)]
struct RegionsArgs {
    #[arg(long, default_value = "FRONT", value_parser = parse_view)]
    view: BodyView,
    #[arg(long, default_value = "coarse", value_parser = parse_granularity)]
    granularity: Granularity,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_y: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    left: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    top: f64,
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    /// Screen point to map into the diagram, as `x,y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    screen: Option<Point>,
}

#[derive(Args, Debug)]
struct NearArgs {
    x: f64,
    y: f64,
    #[arg(long, default_value = "-", help = "Markers JSON file path, or - for stdin")]
    markers: String,
    #[arg(long, value_parser = parse_view)]
    view: Option<BodyView>,
    /// Overrides the configured radius.
    #[arg(long)]
    radius: Option<f64>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let output = match cli.command {
        Command::Classify(args) => commands::classify(&config, Point::new(args.x, args.y), args.view, args.granularity),
        Command::Regions(args) => commands::regions(args.view, args.granularity)?,
        Command::Project(args) => {
            let state = ViewportState { zoom: args.zoom, pan_x: args.pan_x, pan_y: args.pan_y };
            let metrics = SurfaceMetrics::new(args.left, args.top, args.width, args.height);
            commands::project(&config, state, metrics, args.screen)?
        }
        Command::Near(args) => {
            let markers: Vec<Marker> = serde_json::from_str(&read_input(&args.markers)?)?;
            commands::near(&config, &markers, Point::new(args.x, args.y), args.view, args.radius)
        }
    };
    print_json(&output)
}

fn load_config(path: Option<&PathBuf>) -> Result<BodyMapConfig, CliError> {
    let Some(path) = path else {
        return Ok(BodyMapConfig::default());
    };
    let config = BodyMapConfig::from_json(&fs::read_to_string(path)?)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn parse_view(raw: &str) -> Result<BodyView, String> {
    BodyView::parse(raw).ok_or_else(|| format!("unknown view `{raw}`; expected FRONT or BACK"))
}

fn parse_granularity(raw: &str) -> Result<Granularity, String> {
    Granularity::parse(raw).ok_or_else(|| format!("unknown granularity `{raw}`; expected fine or coarse"))
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw.split_once(',').ok_or_else(|| format!("expected `x,y`, got `{raw}`"))?;
    let x: f64 = x.trim().parse().map_err(|err| format!("bad x in `{raw}`: {err}"))?;
    let y: f64 = y.trim().parse().map_err(|err| format!("bad y in `{raw}`: {err}"))?;
    Ok(Point::new(x, y))
}
