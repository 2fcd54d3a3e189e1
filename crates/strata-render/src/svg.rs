//! Standalone SVG document for a frame: one `<g>` per activity prism carrying a
//! `<title>` tooltip, flat ground tiles as bare paths.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use strata_calendar::{DayRecord, Source};
use strata_geom::Polygon;

use crate::constants::{SVG_HEIGHT, SVG_ORIGIN_X, SVG_ORIGIN_Y, SVG_WIDTH};
use crate::frame::Frame;
use crate::palette::Palette;
use crate::prism::PrismKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    pub width: f32,
    pub height: f32,
    /// Where frame coordinate (0, 0) lands on the canvas.
    pub origin_x: f32,
    pub origin_y: f32,
    pub legend: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: SVG_WIDTH,
            height: SVG_HEIGHT,
            origin_x: SVG_ORIGIN_X,
            origin_y: SVG_ORIGIN_Y,
            legend: true,
        }
    }
}

pub fn write_svg(frame: &Frame, records: &[DayRecord], palette: &Palette, opts: &SvgOptions) -> String {
    let mut out = String::with_capacity(256 + frame.len() * 192);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        num(opts.width),
        num(opts.height)
    );

    if opts.legend {
        write_legend(&mut out, palette);
    }

    let _ = writeln!(
        out,
        r#"  <g transform="translate({}, {})">"#,
        num(opts.origin_x),
        num(opts.origin_y)
    );
    for prism in &frame.prisms {
        match prism.kind {
            PrismKind::Ground => {
                let _ = writeln!(
                    out,
                    r#"    <path d="{}" fill="{}"/>"#,
                    path_data(&prism.faces.top),
                    prism.fill()
                );
            }
            PrismKind::Activity(_) => {
                out.push_str("    <g>\n");
                for (_, poly, fill) in prism.polygons() {
                    let _ = writeln!(out, r#"      <path d="{}" fill="{}"/>"#, path_data(poly), fill);
                }
                if let Some(title) = records.get(prism.record).and_then(|r| prism.title(r)) {
                    let _ = writeln!(out, "      <title>{}</title>", escape(&title));
                }
                out.push_str("    </g>\n");
            }
        }
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

fn write_legend(out: &mut String, palette: &Palette) {
    out.push_str("  <g class=\"legend\" font-family=\"monospace\" font-size=\"12\">\n");
    // Top of the stack first, as a reader scans the column.
    for (i, source) in Source::ALL.iter().rev().enumerate() {
        let x = 20 + i * 90;
        let _ = writeln!(
            out,
            r#"    <rect x="{}" y="20" width="10" height="10" fill="{}"/><text x="{}" y="30" fill="{}">{}</text>"#,
            x,
            palette.base(*source),
            x + 15,
            palette.base(*source),
            source.label()
        );
    }
    out.push_str("  </g>\n");
}

/// `M x y L x y ... Z` for a closed polygon.
pub(crate) fn path_data(poly: &Polygon) -> String {
    let mut d = String::with_capacity(poly.len() * 16);
    for (i, p) in poly.points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{}{} {}", cmd, num(p.x), num(p.y));
    }
    d.push_str(" Z");
    d
}

// Up to two decimals, trailing zeros dropped; never prints "-0".
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
