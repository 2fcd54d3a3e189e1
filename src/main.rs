#![forbid(unsafe_code)]

mod cli;
mod config;

use std::error::Error;
use std::fs;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use strata_calendar::history::{merge_recent, parse_public_events, parse_repo_commits};
use strata_calendar::provider::{JsonFileProvider, StaticProvider};
use strata_calendar::{ActivityProvider, DayRecord, Source, collect_sources, fuse};
use strata_hit::HitMapper;
use strata_render::{render_frame, write_svg};

use cli::{Cli, Commands, HistoryArgs, HoverArgs, RenderArgs, WindowArgs};
use config::{AppConfig, load_config};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Render(args) => run_render(&cfg, &args),
        Commands::Fuse(args) => run_fuse(&cfg, &args),
        Commands::Hover(args) => run_hover(&cfg, &args),
        Commands::History(args) => run_history(&cfg, &args),
    }
}

fn provider_for(
    cfg: &AppConfig,
    source: Source,
    path: Option<&std::path::PathBuf>,
) -> Box<dyn ActivityProvider> {
    match path {
        Some(p) => Box::new(
            JsonFileProvider::new(source, p.clone()).with_format(cfg.sources.format_for(source)),
        ),
        None => Box::new(StaticProvider {
            source,
            result: Err("no payload file configured".to_string()),
        }),
    }
}

/// Loads both sources and fuses them over the configured window. Flags win
/// over the config file.
fn load_records(cfg: &AppConfig, args: &WindowArgs) -> Result<Vec<DayRecord>, Box<dyn Error>> {
    let github = provider_for(cfg, Source::GitHub, args.github.as_ref().or(cfg.sources.github.as_ref()));
    let gitea = provider_for(cfg, Source::Gitea, args.gitea.as_ref().or(cfg.sources.gitea.as_ref()));
    let providers: [&dyn ActivityProvider; 2] = [github.as_ref(), gitea.as_ref()];
    let sources = collect_sources(providers);

    let end: NaiveDate = args
        .end
        .or(cfg.window.end)
        .unwrap_or_else(|| Utc::now().date_naive());
    let days = args.days.unwrap_or(cfg.window.days);
    log::info!(target: "strata", "window end={} days={}", end, days);
    Ok(fuse(&sources, end, days)?)
}

fn run_render(cfg: &AppConfig, args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let records = load_records(cfg, &args.window)?;
    let frame = render_frame(&records, &cfg.frame_options());
    let svg = write_svg(&frame, &records, &cfg.palette(), &cfg.svg_options());
    match &args.out {
        Some(path) => {
            fs::write(path, svg)?;
            log::info!(target: "strata", "wrote {} prisms to {}", frame.len(), path.display());
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn run_fuse(cfg: &AppConfig, args: &WindowArgs) -> Result<(), Box<dyn Error>> {
    let records = load_records(cfg, args)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn run_hover(cfg: &AppConfig, args: &HoverArgs) -> Result<(), Box<dyn Error>> {
    let records = load_records(cfg, &args.window)?;
    let frame = render_frame(&records, &cfg.frame_options());
    let mut mapper = HitMapper::new(frame, records);
    mapper.pointer_move(args.x, args.y);
    match mapper.tooltip() {
        Some(tip) => println!("{}", serde_json::to_string_pretty(&tip)?),
        None => println!("idle"),
    }
    Ok(())
}

fn run_history(cfg: &AppConfig, args: &HistoryArgs) -> Result<(), Box<dyn Error>> {
    let owner = args.owner.as_deref().unwrap_or(&cfg.history.owner);
    let limit = args.limit.unwrap_or(cfg.history.limit);

    let mut feeds = Vec::new();
    if let Some(path) = &args.github_events {
        let events = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| parse_public_events(&s, owner).map_err(|e| e.to_string()));
        feeds.push(events.unwrap_or_else(|e| {
            log::warn!(target: "provider", "github events {} unavailable: {}", path.display(), e);
            Vec::new()
        }));
    }
    for (repo, path) in &args.gitea_repos {
        let commits = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| parse_repo_commits(&s, repo).map_err(|e| e.to_string()));
        feeds.push(commits.unwrap_or_else(|e| {
            log::warn!(target: "provider", "gitea commits for {} unavailable: {}", repo, e);
            Vec::new()
        }));
    }

    for ev in merge_recent(feeds, limit) {
        println!("{}  {:<6}  {}", ev.at.format("%Y-%m-%d %H:%M"), ev.source.label(), ev.headline());
    }
    Ok(())
}
