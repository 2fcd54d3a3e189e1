use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use strata_calendar::{PayloadFormat, Source, WeekStart, history::DEFAULT_HISTORY_LIMIT};
use strata_geom::Rgb;
use strata_iso::IsoProjector;
use strata_render::{FrameOptions, Palette, Shading, SvgOptions};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)] pub window: WindowSection,
    #[serde(default)] pub sources: SourcesSection,
    #[serde(default)] pub projection: ProjectionSection,
    #[serde(default)] pub palette: PaletteSection,
    #[serde(default)] pub svg: SvgSection,
    #[serde(default)] pub history: HistorySection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WindowSection {
    #[serde(default = "default_days")] pub days: i64,
    /// Last day shown; today (UTC) when unset.
    #[serde(default)] pub end: Option<NaiveDate>,
    #[serde(default)] pub week_start: WeekStart,
}
/// Today plus the 365 days before it.
pub const DEFAULT_APP_WINDOW_DAYS: i64 = 366;
fn default_days() -> i64 { DEFAULT_APP_WINDOW_DAYS }
impl Default for WindowSection { fn default() -> Self { Self { days: default_days(), end: None, week_start: WeekStart::default() } } }

/// Payload files, one per platform. A missing or unreadable file counts as a
/// failed source. Formats default to each platform's native payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SourcesSection {
    #[serde(default)] pub github: Option<PathBuf>,
    #[serde(default)] pub gitea: Option<PathBuf>,
    #[serde(default)] pub github_format: Option<PayloadFormat>,
    #[serde(default)] pub gitea_format: Option<PayloadFormat>,
}

impl SourcesSection {
    pub fn format_for(&self, source: Source) -> PayloadFormat {
        let set = match source {
            Source::GitHub => self.github_format,
            Source::Gitea => self.gitea_format,
        };
        set.unwrap_or_else(|| PayloadFormat::native_for(source))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectionSection {
    #[serde(default = "default_half_width")] pub half_width: f32,
    #[serde(default = "default_half_height")] pub half_height: f32,
    #[serde(default = "default_max_height")] pub max_height: f32,
}
fn default_half_width() -> f32 { 12.0 }
fn default_half_height() -> f32 { 7.0 }
fn default_max_height() -> f32 { 50.0 }
impl Default for ProjectionSection { fn default() -> Self { Self { half_width: default_half_width(), half_height: default_half_height(), max_height: default_max_height() } } }

#[derive(Clone, Debug, Deserialize)]
pub struct PaletteSection {
    #[serde(default = "default_github")] pub github: Rgb,
    #[serde(default = "default_gitea")] pub gitea: Rgb,
    #[serde(default = "default_ground")] pub ground: Rgb,
    #[serde(default = "default_left_darken")] pub left_darken: f32,
    #[serde(default = "default_right_darken")] pub right_darken: f32,
}
fn default_github() -> Rgb { Rgb::new(0x2d, 0xa4, 0x4e) }
fn default_gitea() -> Rgb { Rgb::new(0xff, 0x4d, 0x00) }
fn default_ground() -> Rgb { Rgb::new(0x22, 0x22, 0x22) }
fn default_left_darken() -> f32 { 0.4 }
fn default_right_darken() -> f32 { 0.7 }
impl Default for PaletteSection { fn default() -> Self { Self { github: default_github(), gitea: default_gitea(), ground: default_ground(), left_darken: default_left_darken(), right_darken: default_right_darken() } } }

#[derive(Clone, Debug, Deserialize)]
pub struct SvgSection {
    #[serde(default = "default_svg_width")] pub width: f32,
    #[serde(default = "default_svg_height")] pub height: f32,
    #[serde(default = "default_origin_x")] pub origin_x: f32,
    #[serde(default = "default_origin_y")] pub origin_y: f32,
    #[serde(default = "default_legend")] pub legend: bool,
}
fn default_svg_width() -> f32 { 1000.0 }
fn default_svg_height() -> f32 { 600.0 }
fn default_origin_x() -> f32 { 220.0 }
fn default_origin_y() -> f32 { 100.0 }
fn default_legend() -> bool { true }
impl Default for SvgSection { fn default() -> Self { Self { width: default_svg_width(), height: default_svg_height(), origin_x: default_origin_x(), origin_y: default_origin_y(), legend: default_legend() } } }

#[derive(Clone, Debug, Deserialize)]
pub struct HistorySection {
    #[serde(default = "default_limit")] pub limit: usize,
    /// Account whose `owner/` prefix is stripped from public event repo names.
    #[serde(default)] pub owner: String,
}
fn default_limit() -> usize { DEFAULT_HISTORY_LIMIT }
impl Default for HistorySection { fn default() -> Self { Self { limit: default_limit(), owner: String::new() } } }

impl AppConfig {
    pub fn palette(&self) -> Palette {
        let p = &self.palette;
        Palette {
            gitea: p.gitea,
            github: p.github,
            ground: p.ground,
            shading: Shading { left: p.left_darken, right: p.right_darken },
        }
    }

    pub fn frame_options(&self) -> FrameOptions {
        FrameOptions {
            projector: IsoProjector::new(self.projection.half_width, self.projection.half_height),
            max_height: self.projection.max_height,
            week_start: self.window.week_start,
            palette: self.palette(),
        }
    }

    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            width: self.svg.width,
            height: self.svg.height,
            origin_x: self.svg.origin_x,
            origin_y: self.svg.origin_y,
            legend: self.svg.legend,
        }
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, String> {
    let s = std::fs::read_to_string(path).map_err(|e| format!("read error: {}", e))?;
    toml::from_str(&s).map_err(|e| format!("parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_APP_WINDOW_DAYS};
    use chrono::{Duration, NaiveDate};
    use strata_calendar::{PayloadFormat, Source, SourceData, WeekStart, fuse};
    use strata_geom::Rgb;
    use strata_render::{FrameOptions, SvgOptions};

    #[test]
    fn empty_file_matches_library_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.window.days, 366);
        assert!(cfg.window.end.is_none());
        assert_eq!(cfg.frame_options(), FrameOptions::default());
        assert_eq!(cfg.svg_options(), SvgOptions::default());
        assert_eq!(cfg.history.limit, 10);
    }

    #[test]
    fn sections_override_individual_fields() {
        let cfg: AppConfig = toml::from_str(
            r##"
            [window]
            days = 366
            end = "2024-06-30"
            week_start = "monday"

            [palette]
            github = "#0969da"

            [svg]
            legend = false
            "##,
        )
        .unwrap();
        assert_eq!(cfg.window.days, 366);
        assert_eq!(cfg.window.end, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(cfg.window.week_start, WeekStart::Monday);
        assert_eq!(cfg.palette.github, Rgb::new(0x09, 0x69, 0xda));
        assert_eq!(cfg.palette.gitea, Rgb::new(0xff, 0x4d, 0x00));
        assert!(!cfg.svg.legend);
        assert_eq!(cfg.svg.width, 1000.0);
    }

    #[test]
    fn default_window_reaches_back_a_full_year() {
        let cfg = AppConfig::default();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let records = fuse(&SourceData::new(), end, cfg.window.days).unwrap();
        assert_eq!(records.first().map(|r| r.date), Some(end - Duration::days(365)));
        assert_eq!(records.last().map(|r| r.date), Some(end));
    }

    #[test]
    fn payload_formats_default_to_native_and_can_be_overridden() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.sources.format_for(Source::GitHub), PayloadFormat::Contributions);
        assert_eq!(cfg.sources.format_for(Source::Gitea), PayloadFormat::Heatmap);

        let cfg: AppConfig = toml::from_str("[sources]\ngitea_format = \"contributions\"\n").unwrap();
        assert_eq!(cfg.sources.format_for(Source::Gitea), PayloadFormat::Contributions);
        assert_eq!(cfg.sources.format_for(Source::GitHub), PayloadFormat::Contributions);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let r: Result<AppConfig, _> = toml::from_str("[palette]\ngitea = \"orange\"\n");
        assert!(r.is_err());
    }

    #[test]
    fn sample_config_parses() {
        let cfg: AppConfig = toml::from_str(include_str!("../assets/strata.toml")).unwrap();
        assert_eq!(cfg.frame_options(), FrameOptions::default());
        assert_eq!(cfg.window.days, DEFAULT_APP_WINDOW_DAYS);
    }
}
