use strata_calendar::{DayRecord, GridCell, GriddedRecord, Source};
use strata_geom::{Polygon, Rgb, Vec2};
use strata_iso::{FaceKind, IsoProjector, PrismFaces};

use crate::palette::{Palette, ShadedColors};
use crate::scale::HeightScale;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrismKind {
    /// One source's share of a day's column.
    Activity(Source),
    /// Flat tile for a day with no activity at all.
    Ground,
}

/// One drawable prism. Regenerated on every render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPrism {
    /// Index of the originating record in the fused set.
    pub record: usize,
    pub kind: PrismKind,
    pub cell: GridCell,
    /// Back corner of the prism's bottom diamond, already raised by `lift`.
    pub base: Vec2,
    /// Height of the prisms stacked beneath this one.
    pub lift: f32,
    pub height: f32,
    pub faces: PrismFaces,
    pub colors: ShadedColors,
}

impl RenderPrism {
    #[inline]
    pub fn fill(&self) -> Rgb {
        self.colors.top
    }

    /// Faces with their fills, in paint order.
    pub fn polygons(&self) -> impl Iterator<Item = (FaceKind, &Polygon, Rgb)> + '_ {
        self.faces
            .iter_draw_order()
            .map(|(k, poly)| (k, poly, self.colors.get(k)))
    }

    /// True if `p` lies on any painted face.
    pub fn contains(&self, p: Vec2) -> bool {
        self.faces.iter_draw_order().any(|(_, poly)| poly.contains(p))
    }

    /// Hover title, e.g. `GitHub: 3 on Mon Jan 01 2024`. Ground tiles have none.
    pub fn title(&self, record: &DayRecord) -> Option<String> {
        match self.kind {
            PrismKind::Activity(s) => Some(format!(
                "{}: {} on {}",
                s.label(),
                record.count(s),
                record.date_label()
            )),
            PrismKind::Ground => None,
        }
    }
}

/// Prisms for one record: a ground tile if the day is empty, otherwise one
/// prism per nonzero source, bottom of the stack first. Each prism is raised by
/// the heights already stacked beneath it.
pub fn render_record(
    gridded: GriddedRecord,
    record: &DayRecord,
    projector: &IsoProjector,
    scale: &HeightScale,
    palette: &Palette,
) -> Vec<RenderPrism> {
    let origin = projector.project_cell(gridded.cell);

    if record.counts.is_zero() {
        return vec![RenderPrism {
            record: gridded.index,
            kind: PrismKind::Ground,
            cell: gridded.cell,
            base: origin,
            lift: 0.0,
            height: 0.0,
            faces: projector.faces(origin, 0.0),
            colors: palette.shade_ground(),
        }];
    }

    let mut out = Vec::with_capacity(Source::ALL.len());
    let mut lift = 0.0f32;
    for (source, count) in record.counts.iter() {
        if count == 0 {
            continue;
        }
        let height = scale.height(count);
        let base = origin.raised(lift);
        out.push(RenderPrism {
            record: gridded.index,
            kind: PrismKind::Activity(source),
            cell: gridded.cell,
            base,
            lift,
            height,
            faces: projector.faces(base, height),
            colors: palette.shade_source(source),
        });
        lift += height;
    }
    out
}
