//! Breadth-order flood traversal.

use cellpath_core::Point;
use log::{debug, trace};

use crate::engine::{Engine, Rules, SearchState};
use crate::traits::{Moves, Traversable};

impl<M: Moves, T: Traversable> Engine<M, T> {
    /// Mark every cell reachable from `start` as visited, using the default
    /// predicate.
    ///
    /// The start cell itself is marked without consulting the predicate. An
    /// out-of-bounds `start` leaves every cell unvisited. Read the result
    /// with [`has_visited`](Self::has_visited) or
    /// [`visited_cells`](Self::visited_cells).
    pub fn walk_all(&mut self, start: Point) {
        let rules = Rules {
            region: self.region,
            moves: &self.moves,
            passable: &self.passable,
            config: self.config,
        };
        self.state.flood(&rules, start);
    }

    /// Like [`walk_all`](Self::walk_all), with `passable` in place of the
    /// default predicate for this query only.
    pub fn walk_all_with<P: Traversable + ?Sized>(&mut self, start: Point, passable: &P) {
        let rules = Rules {
            region: self.region,
            moves: &self.moves,
            passable,
            config: self.config,
        };
        self.state.flood(&rules, start);
    }
}

impl SearchState {
    fn flood<M, P>(&mut self, rules: &Rules<'_, M, P>, start: Point)
    where
        M: Moves + ?Sized,
        P: Traversable + ?Sized,
    {
        trace!("walk_all: from {start}");
        self.reset();

        let Some(si) = rules.region.index(start) else {
            debug!("walk_all: start {start} outside {}", rules.region);
            return;
        };
        self.visited.set(si);
        self.queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = 1usize;

        while let Some(cp) = self.queue.pop_front() {
            nbuf.clear();
            rules.moves.moves(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rules.enterable(np) else {
                    continue;
                };
                if self.visited.is_set(ni) {
                    continue;
                }
                self.visited.set(ni);
                self.queue.push_back(np);
                reached += 1;
            }
        }

        self.nbuf = nbuf;
        debug!("walk_all: {reached} cells reachable from {start}");
    }
}
