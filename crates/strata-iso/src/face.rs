use strata_geom::Polygon;

/// Visible faces of an isometric prism.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FaceKind {
    Top = 0,
    Left = 1,
    Right = 2,
}

impl FaceKind {
    /// Paint order within one prism: sides first, top last.
    pub const DRAW_ORDER: [FaceKind; 3] = [FaceKind::Right, FaceKind::Left, FaceKind::Top];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Faces of one prism. Side faces are absent for a flat (height 0) tile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrismFaces {
    pub top: Polygon,
    pub left: Option<Polygon>,
    pub right: Option<Polygon>,
}

impl PrismFaces {
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn get(&self, kind: FaceKind) -> Option<&Polygon> {
        match kind {
            FaceKind::Top => Some(&self.top),
            FaceKind::Left => self.left.as_ref(),
            FaceKind::Right => self.right.as_ref(),
        }
    }

    /// Present faces in paint order.
    pub fn iter_draw_order(&self) -> impl Iterator<Item = (FaceKind, &Polygon)> + '_ {
        FaceKind::DRAW_ORDER
            .iter()
            .filter_map(move |&k| self.get(k).map(|p| (k, p)))
    }
}
