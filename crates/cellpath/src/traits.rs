use cellpath_core::Point;

/// Neighbor rule: which cells are adjacent to a given cell.
///
/// Implementations must be pure and deterministic. The order in which
/// neighbors are appended decides which of several equally scored cells is
/// explored first.
///
/// Any `Fn(Point, &mut Vec<Point>)` closure is a neighbor rule.
pub trait Moves {
    /// Append candidate neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn moves(&self, p: Point, buf: &mut Vec<Point>);
}

impl<F: Fn(Point, &mut Vec<Point>)> Moves for F {
    #[inline]
    fn moves(&self, p: Point, buf: &mut Vec<Point>) {
        self(p, buf)
    }
}

/// Traversal predicate: whether a cell may be entered.
///
/// Any `Fn(Point) -> bool` closure is a predicate.
pub trait Traversable {
    fn can_enter(&self, p: Point) -> bool;
}

impl<F: Fn(Point) -> bool> Traversable for F {
    #[inline]
    fn can_enter(&self, p: Point) -> bool {
        self(p)
    }
}

/// Predicate under which every cell is traversable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Open;

impl Traversable for Open {
    #[inline]
    fn can_enter(&self, _: Point) -> bool {
        true
    }
}
