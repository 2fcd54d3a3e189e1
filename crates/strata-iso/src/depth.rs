//! Painter's ordering for the isometric grid.
//!
//! Increasing `column + row` strictly increases a tile's screen y, so drawing in
//! ascending `column + row` paints nearer tiles over farther ones. Tiles sharing
//! a diagonal never overlap; they keep their input order so output is stable.

use strata_calendar::{GridCell, GriddedRecord};

/// Anything placed on the grid.
pub trait Gridded {
    fn cell(&self) -> GridCell;
}

impl Gridded for GridCell {
    #[inline]
    fn cell(&self) -> GridCell {
        *self
    }
}

impl Gridded for GriddedRecord {
    #[inline]
    fn cell(&self) -> GridCell {
        self.cell
    }
}

/// Back-to-front order by `column + row`; ties keep their relative order.
pub fn order<T: Gridded>(mut items: Vec<T>) -> Vec<T> {
    // sort_by_key is stable
    items.sort_by_key(|it| it.cell().depth());
    items
}

#[cfg(test)]
mod tests {
    use super::order;
    use strata_calendar::GridCell;

    #[test]
    fn lower_diagonal_first_ties_stable() {
        let cells = vec![GridCell::new(2, 0), GridCell::new(0, 0), GridCell::new(1, 1)];
        let out = order(cells);
        assert_eq!(
            out,
            vec![GridCell::new(0, 0), GridCell::new(2, 0), GridCell::new(1, 1)]
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(order(Vec::<GridCell>::new()).is_empty());
    }
}
