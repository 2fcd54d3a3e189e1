use crate::{Rect, Vec2};

/// Closed polygon given as an ordered vertex list; the last vertex connects back
/// to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding rectangle, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let mut r = Rect::new(first, first);
        for p in &self.points[1..] {
            r.min.x = r.min.x.min(p.x);
            r.min.y = r.min.y.min(p.y);
            r.max.x = r.max.x.max(p.x);
            r.max.y = r.max.y.max(p.y);
        }
        Some(r)
    }

    /// Even-odd containment test. Polygons with fewer than three vertices
    /// (including the zero-height side faces) contain nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        match self.bounds() {
            Some(b) if b.contains(p) => {}
            _ => return false,
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::Polygon;
    use crate::Vec2;

    fn diamond() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(12.0, 7.0),
            Vec2::new(0.0, 14.0),
            Vec2::new(-12.0, 7.0),
        ])
    }

    #[test]
    fn diamond_contains_center_not_corners_outside() {
        let d = diamond();
        assert!(d.contains(Vec2::new(0.0, 7.0)));
        assert!(d.contains(Vec2::new(5.0, 7.0)));
        assert!(!d.contains(Vec2::new(11.0, 1.0)));
        assert!(!d.contains(Vec2::new(0.0, 20.0)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)]);
        assert!(!line.contains(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let b = diamond().bounds().expect("non-empty");
        assert_eq!(b.min, Vec2::new(-12.0, 0.0));
        assert_eq!(b.max, Vec2::new(12.0, 14.0));
        assert!(Polygon::default().bounds().is_none());
    }
}
