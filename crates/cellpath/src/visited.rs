use cellpath_core::{Point, Region};

/// Dense per-cell visited flags over a [`Region`].
///
/// Allocated once and cleared at the start of every query. Cells are marked
/// when they are enqueued, which keeps any cell from entering a frontier
/// twice within one query.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    region: Region,
    cells: Vec<bool>,
}

impl VisitedSet {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            cells: vec![false; region.area()],
        }
    }

    /// Clear every flag.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    #[inline]
    pub(crate) fn is_set(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize) {
        self.cells[idx] = true;
    }

    /// Whether `p` has been visited, or `None` if `p` is outside the region.
    #[inline]
    pub fn get(&self, p: Point) -> Option<bool> {
        self.region.index(p).map(|i| self.cells[i])
    }

    /// Number of visited cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// Visited cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        let region = self.region;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(i, _)| region.point(i))
    }
}
