use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "strata: isometric calendar of GitHub and Gitea activity",
    long_about = None
)]
pub struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Render the calendar as an SVG document")]
    Render(RenderArgs),
    #[command(about = "Print the fused day records as JSON")]
    Fuse(WindowArgs),
    #[command(about = "Print the tooltip for a point in frame space, or `idle`")]
    Hover(HoverArgs),
    #[command(about = "Print the latest events from both platforms")]
    History(HistoryArgs),
}

/// Inputs shared by every calendar command.
#[derive(Args, Debug, Default)]
pub struct WindowArgs {
    /// GitHub contributions payload (`{"contributions": [...]}`).
    #[arg(long)]
    pub github: Option<PathBuf>,

    /// Gitea heatmap payload (`[{"timestamp", "contributions"}]`).
    #[arg(long)]
    pub gitea: Option<PathBuf>,

    /// Last day of the window, YYYY-MM-DD.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Number of days in the window.
    #[arg(long)]
    pub days: Option<i64>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HoverArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    #[arg(long, allow_negative_numbers = true)]
    pub x: f32,

    #[arg(long, allow_negative_numbers = true)]
    pub y: f32,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// GitHub public events payload.
    #[arg(long)]
    pub github_events: Option<PathBuf>,

    /// Gitea commit list for one repository, as NAME=FILE. Repeatable.
    #[arg(long = "gitea-repo", value_parser = parse_repo_file)]
    pub gitea_repos: Vec<(String, PathBuf)>,

    /// Account prefix stripped from GitHub repo names.
    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub limit: Option<usize>,
}

fn parse_repo_file(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=FILE, got `{s}`")),
    }
}
