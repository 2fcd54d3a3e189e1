//! Shared constants for strata-render. Centralizes the chart's magic numbers.

use strata_geom::Rgb;

// Height encoding
pub(crate) const DEFAULT_MAX_HEIGHT: f32 = 50.0; // pixels for the busiest day
pub(crate) const EMPTY_DOMAIN_MAX: u32 = 5; // scale domain when every day is zero

// Colors
pub(crate) const GITEA_COLOR: Rgb = Rgb::new(0xff, 0x4d, 0x00);
pub(crate) const GITHUB_COLOR: Rgb = Rgb::new(0x2d, 0xa4, 0x4e);
pub(crate) const GROUND_COLOR: Rgb = Rgb::new(0x22, 0x22, 0x22);

// Side-face darkening steps; the right face faces away from the light
pub(crate) const LEFT_DARKEN: f32 = 0.4;
pub(crate) const RIGHT_DARKEN: f32 = 0.7;

// SVG canvas
pub(crate) const SVG_WIDTH: f32 = 1000.0;
pub(crate) const SVG_HEIGHT: f32 = 600.0;
pub(crate) const SVG_ORIGIN_X: f32 = 220.0;
pub(crate) const SVG_ORIGIN_Y: f32 = 100.0;
