use std::collections::VecDeque;

use cellpath_core::{Point, Region, RegionError};

use crate::config::CostConfig;
use crate::error::Error;
use crate::frontier::Frontier;
use crate::movement::Movement;
use crate::node::SearchTree;
use crate::traits::{Moves, Open, Traversable};
use crate::visited::VisitedSet;

// ---------------------------------------------------------------------------
// Rules: the read-only inputs of one query
// ---------------------------------------------------------------------------

pub(crate) struct Rules<'a, M: ?Sized, P: ?Sized> {
    pub(crate) region: Region,
    pub(crate) moves: &'a M,
    pub(crate) passable: &'a P,
    pub(crate) config: CostConfig,
}

impl<M: Moves + ?Sized, P: Traversable + ?Sized> Rules<'_, M, P> {
    /// Flat index of `p` if it is in bounds and may be entered.
    #[inline]
    pub(crate) fn enterable(&self, p: Point) -> Option<usize> {
        let i = self.region.index(p)?;
        self.passable.can_enter(p).then_some(i)
    }

    /// Congestion penalty of `p`. `buf` is scratch space.
    pub(crate) fn local_cost(&self, p: Point, buf: &mut Vec<Point>) -> u32 {
        buf.clear();
        self.moves.moves(p, buf);
        buf.iter().fold(0u32, |cost, &q| {
            let penalty = if !self.region.contains(q) {
                self.config.edge_penalty
            } else if self.passable.can_enter(q) {
                0
            } else {
                self.config.blocked_penalty
            };
            cost.saturating_add(penalty)
        })
    }
}

// ---------------------------------------------------------------------------
// Reusable per-query state
// ---------------------------------------------------------------------------

pub(crate) struct SearchState {
    pub(crate) visited: VisitedSet,
    pub(crate) tree: SearchTree,
    pub(crate) frontier: Frontier,
    pub(crate) queue: VecDeque<Point>,
    // scratch buffers for neighbor queries
    pub(crate) nbuf: Vec<Point>,
    pub(crate) cbuf: Vec<Point>,
}

impl SearchState {
    fn new(region: Region) -> Self {
        Self {
            visited: VisitedSet::new(region),
            tree: SearchTree::default(),
            frontier: Frontier::default(),
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
            cbuf: Vec::with_capacity(8),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.visited.reset();
        self.tree.clear();
        self.frontier.clear();
        self.queue.clear();
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Pathfinding engine over one bounded [`Region`].
///
/// The engine is polymorphic over a neighbor rule `M` ([`Moves`]) and a
/// default traversal predicate `T` ([`Traversable`]). It owns the visited
/// set, node arena and frontier, and reuses them across queries; each query
/// clears them first, so no state leaks from one query into the next.
///
/// Queries take `&mut self`. Concurrent searches need one engine each.
///
/// # Cost model
///
/// Path search is best-first on `step + manhattan(cell, goal)`, where each
/// edge costs 1 plus the [local cost](Self::local_cost) of the entered cell.
/// The local cost steers routes away from crowded neighborhoods. It also
/// means the Manhattan heuristic is not admissible, so routes are not
/// guaranteed to be the shortest ones. Use [`CostConfig::UNIFORM`] for plain
/// unit costs.
///
/// # Traversal predicate
///
/// The predicate is only consulted for cells being expanded into. The start
/// cell is never checked, so a search from a blocked cell still starts
/// there, and `find_path(c, c)` always yields the single-cell path `[c]`.
pub struct Engine<M = Movement, T = Open> {
    pub(crate) region: Region,
    pub(crate) moves: M,
    pub(crate) passable: T,
    pub(crate) config: CostConfig,
    pub(crate) state: SearchState,
}

impl<M: Moves, T: Traversable> Engine<M, T> {
    /// Create an engine with the default [`CostConfig`].
    pub fn new(region: Region, moves: M, passable: T) -> Self {
        Self::with_config(region, moves, passable, CostConfig::default())
    }

    pub fn with_config(region: Region, moves: M, passable: T, config: CostConfig) -> Self {
        Self {
            region,
            moves,
            passable,
            config,
            state: SearchState::new(region),
        }
    }

    /// Replace the region, reallocating the visited set.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        self.state.visited = VisitedSet::new(region);
        self.state.reset();
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn config(&self) -> CostConfig {
        self.config
    }

    pub fn set_config(&mut self, config: CostConfig) {
        self.config = config;
    }

    #[inline]
    pub fn moves(&self) -> &M {
        &self.moves
    }

    /// The default traversal predicate.
    #[inline]
    pub fn passable(&self) -> &T {
        &self.passable
    }

    /// Whether `p` lies inside the engine's region.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.region.contains(p)
    }

    /// Whether the last query visited `p`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `p` is outside the region.
    pub fn has_visited(&self, p: Point) -> Result<bool, Error> {
        self.state.visited.get(p).ok_or(Error::OutOfBounds {
            point: p,
            region: self.region,
        })
    }

    /// Visited state left by the last query.
    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.state.visited
    }

    /// Cells visited by the last query, in row-major order.
    pub fn visited_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.state.visited.iter()
    }

    pub fn visited_count(&self) -> usize {
        self.state.visited.count()
    }

    /// Congestion penalty of entering `p` under `passable`: the configured
    /// penalty for every blocked or out-of-bounds neighbor of `p`.
    pub fn local_cost<P: Traversable + ?Sized>(&self, p: Point, passable: &P) -> u32 {
        let mut buf = Vec::with_capacity(8);
        self.rules(passable).local_cost(p, &mut buf)
    }

    pub(crate) fn rules<'a, P: Traversable + ?Sized>(&'a self, passable: &'a P) -> Rules<'a, M, P> {
        Rules {
            region: self.region,
            moves: &self.moves,
            passable,
            config: self.config,
        }
    }
}

impl<M: Moves> Engine<M, Open> {
    /// Engine whose default predicate lets every cell be entered. Obstacles
    /// can still be given per query with `find_path_with` / `walk_all_with`.
    pub fn open(region: Region, moves: M) -> Self {
        Self::new(region, moves, Open)
    }
}

impl<T: Traversable> Engine<Movement, T> {
    /// Engine over a `width`x`height` region anchored at (0, 0) with
    /// rectangular movement.
    pub fn rectangular(width: i32, height: i32, passable: T) -> Result<Self, RegionError> {
        Ok(Self::new(
            Region::from_size(width, height)?,
            Movement::Rectangular,
            passable,
        ))
    }
}
