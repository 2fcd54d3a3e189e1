use serde::{Deserialize, Serialize};
use strata_calendar::{DayRecord, WeekStart, grid};
use strata_geom::{Polygon, Rect, Rgb};
use strata_iso::{FaceKind, IsoProjector, order};

use crate::constants::DEFAULT_MAX_HEIGHT;
use crate::palette::Palette;
use crate::prism::{RenderPrism, render_record};
use crate::scale::HeightScale;

/// Position of a prism in a frame's paint order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrismId(pub usize);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameOptions {
    pub projector: IsoProjector,
    /// Pixel height of the busiest day's full column.
    pub max_height: f32,
    pub week_start: WeekStart,
    pub palette: Palette,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            projector: IsoProjector::default(),
            max_height: DEFAULT_MAX_HEIGHT,
            week_start: WeekStart::default(),
            palette: Palette::default(),
        }
    }
}

/// One face ready for rasterization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawPolygon<'a> {
    pub prism: PrismId,
    pub face: FaceKind,
    pub points: &'a Polygon,
    pub fill: Rgb,
}

/// Every prism of one render pass, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub prisms: Vec<RenderPrism>,
    pub scale: HeightScale,
}

impl Frame {
    #[inline]
    pub fn len(&self) -> usize {
        self.prisms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prisms.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PrismId) -> Option<&RenderPrism> {
        self.prisms.get(id.0)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (PrismId, &RenderPrism)> + '_ {
        self.prisms.iter().enumerate().map(|(i, p)| (PrismId(i), p))
    }

    /// All faces in paint order: prisms back to front, and within a prism
    /// right, left, top.
    pub fn polygons(&self) -> impl Iterator<Item = DrawPolygon<'_>> + '_ {
        self.iter().flat_map(|(id, prism)| {
            prism.polygons().map(move |(face, points, fill)| DrawPolygon {
                prism: id,
                face,
                points,
                fill,
            })
        })
    }

    /// Screen extent of everything drawn, or `None` for an empty frame.
    pub fn bounds(&self) -> Option<Rect> {
        self.polygons()
            .filter_map(|d| d.points.bounds())
            .reduce(|a, b| a.union(&b))
    }
}

/// Full pass: grid the records, order them back to front, fit the height
/// scale to this data set and emit every prism.
pub fn render_frame(records: &[DayRecord], opts: &FrameOptions) -> Frame {
    let scale = HeightScale::from_records(records, opts.max_height);
    let cells = order(grid(records, opts.week_start));

    let mut prisms = Vec::with_capacity(records.len());
    for g in cells {
        let Some(rec) = records.get(g.index) else {
            continue;
        };
        prisms.extend(render_record(g, rec, &opts.projector, &scale, &opts.palette));
    }

    log::debug!(
        target: "render",
        "frame records={} prisms={} domain_max={}",
        records.len(),
        prisms.len(),
        scale.domain_max
    );
    Frame { prisms, scale }
}
