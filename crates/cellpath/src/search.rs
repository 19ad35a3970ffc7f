//! Best-first path search.

use cellpath_core::Point;
use log::{debug, trace};

use crate::engine::{Engine, Rules, SearchState};
use crate::node::{Node, Path};
use crate::traits::{Moves, Traversable};

impl<M: Moves, T: Traversable> Engine<M, T> {
    /// Search a route from `start` to `goal` using the default predicate.
    ///
    /// Returns the reached goal with its chain of ancestors, or `None` if the
    /// frontier runs dry first. An out-of-bounds `start` yields `None`.
    pub fn find_path(&mut self, start: Point, goal: Point) -> Option<Path> {
        let rules = Rules {
            region: self.region,
            moves: &self.moves,
            passable: &self.passable,
            config: self.config,
        };
        self.state.best_first(&rules, start, goal)
    }

    /// Like [`find_path`](Self::find_path), with `passable` in place of the
    /// default predicate for this query only.
    pub fn find_path_with<P: Traversable + ?Sized>(
        &mut self,
        start: Point,
        goal: Point,
        passable: &P,
    ) -> Option<Path> {
        let rules = Rules {
            region: self.region,
            moves: &self.moves,
            passable,
            config: self.config,
        };
        self.state.best_first(&rules, start, goal)
    }
}

impl SearchState {
    fn best_first<M, P>(&mut self, rules: &Rules<'_, M, P>, start: Point, goal: Point) -> Option<Path>
    where
        M: Moves + ?Sized,
        P: Traversable + ?Sized,
    {
        trace!("find_path: {start} -> {goal}");
        self.reset();

        let Some(si) = rules.region.index(start) else {
            debug!("find_path: start {start} outside {}", rules.region);
            return None;
        };
        self.visited.set(si);
        let root = self.tree.push(Node::start(start, goal));
        self.frontier.push(root, self.tree.get(root).heuristic());

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut cbuf = std::mem::take(&mut self.cbuf);

        let found = loop {
            let Some(ci) = self.frontier.pop() else {
                break None;
            };
            let current = *self.tree.get(ci);
            if current.position() == goal {
                break Some(ci);
            }

            nbuf.clear();
            rules.moves.moves(current.position(), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rules.enterable(np) else {
                    continue;
                };
                if self.visited.is_set(ni) {
                    continue;
                }
                self.visited.set(ni);
                let cost = rules.local_cost(np, &mut cbuf);
                let child = Node::child(ci, &current, np, cost, goal);
                let id = self.tree.push(child);
                self.frontier.push(id, child.heuristic());
            }
        };

        self.nbuf = nbuf;
        self.cbuf = cbuf;

        match found {
            Some(id) => {
                let path = self.tree.extract(id);
                debug!(
                    "find_path: {start} -> {goal} in {} cells, {} nodes created, {} left open",
                    path.len(),
                    self.tree.len(),
                    self.frontier.len()
                );
                Some(path)
            }
            None => {
                debug!(
                    "find_path: no path {start} -> {goal} after {} nodes",
                    self.tree.len()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostConfig;
    use crate::distance::manhattan;
    use crate::movement::Movement;
    use crate::traits::Open;
    use cellpath_core::Region;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Consecutive cells are neighbors and every non-start cell may be
    /// entered.
    fn assert_sound<M: Moves>(moves: &M, passable: impl Fn(Point) -> bool, path: &[Point]) {
        let mut buf = Vec::new();
        for w in path.windows(2) {
            buf.clear();
            moves.moves(w[0], &mut buf);
            assert!(buf.contains(&w[1]), "{} -> {} is not a move", w[0], w[1]);
            assert!(passable(w[1]), "{} is blocked", w[1]);
        }
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let mut e = Engine::rectangular(5, 5, Open).unwrap();
        let path = e.find_path(p(0, 0), p(4, 4)).unwrap();
        let pts = path.points();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], p(0, 0));
        assert_eq!(pts[8], p(4, 4));
        assert_eq!(path.goal().depth(), 8);
        assert_sound(&Movement::Rectangular, |_| true, &pts);
    }

    #[test]
    fn open_grid_edges_match_manhattan() {
        let region = Region::from_size(5, 4).unwrap();
        let mut e = Engine::open(region, Movement::Rectangular);
        for a in region {
            for b in region {
                let pts = e.find_path(a, b).unwrap().points();
                assert_eq!(pts.len() as i32 - 1, manhattan(a, b), "{a} -> {b}");
                assert_sound(&Movement::Rectangular, |_| true, &pts);
            }
        }
    }

    #[test]
    fn wall_gap_forces_detour() {
        let wall = |q: Point| !(q.x == 2 && q.y != 4);
        let mut e = Engine::rectangular(5, 5, wall).unwrap();
        let pts = e.find_path(p(0, 0), p(4, 4)).unwrap().points();
        assert!(pts.contains(&p(2, 4)));
        assert_eq!(pts.first(), Some(&p(0, 0)));
        assert_eq!(pts.last(), Some(&p(4, 4)));
        assert_sound(&Movement::Rectangular, wall, &pts);
    }

    #[test]
    fn start_equals_goal() {
        let mut e = Engine::rectangular(5, 5, Open).unwrap();
        let path = e.find_path(p(2, 3), p(2, 3)).unwrap();
        assert_eq!(path.points(), vec![p(2, 3)]);
        assert!(path.goal().is_start());
        // Only the start cell was touched.
        assert_eq!(e.visited_count(), 1);
    }

    #[test]
    fn blocked_start_is_not_checked() {
        let blocked = |q: Point| q != p(0, 0);
        let mut e = Engine::rectangular(3, 1, blocked).unwrap();
        let pts = e.find_path(p(0, 0), p(2, 0)).unwrap().points();
        assert_eq!(pts, vec![p(0, 0), p(1, 0), p(2, 0)]);
        let single = e.find_path(p(0, 0), p(0, 0)).unwrap();
        assert_eq!(single.points(), vec![p(0, 0)]);
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let mut e = Engine::rectangular(3, 3, |q: Point| q != p(2, 2)).unwrap();
        assert!(e.find_path(p(0, 0), p(2, 2)).is_none());
    }

    #[test]
    fn disconnected_regions_have_no_path() {
        let wall = |q: Point| q.x != 2;
        let mut e = Engine::rectangular(5, 5, wall).unwrap();
        assert!(e.find_path(p(0, 0), p(4, 0)).is_none());
        // The whole left zone was explored before giving up.
        assert_eq!(e.visited_count(), 10);
    }

    #[test]
    fn out_of_bounds_start() {
        let mut e = Engine::rectangular(3, 3, Open).unwrap();
        assert!(e.find_path(p(-1, 0), p(1, 1)).is_none());
        assert_eq!(e.visited_count(), 0);
        assert!(e.find_path(p(0, 0), p(5, 5)).is_none());
    }

    #[test]
    fn far_goal_is_unreachable() {
        let mut e = Engine::rectangular(3, 3, Open).unwrap();
        assert!(e.find_path(p(0, 0), p(i32::MAX, i32::MAX)).is_none());
        assert_eq!(e.visited_count(), 9);
        assert!(e.find_path(p(2, 2), p(i32::MIN, i32::MIN)).is_none());
        assert!(e.find_path(p(i32::MIN, i32::MAX), p(0, 0)).is_none());
    }

    #[test]
    fn region_at_coordinate_limits() {
        let region = Region::new(p(i32::MAX - 6, i32::MIN + 1), 5, 5).unwrap();
        let mut e = Engine::open(region, Movement::Hexagonal);
        let start = region.origin();
        let goal = p(i32::MAX - 2, i32::MIN + 5);
        let pts = e.find_path(start, goal).unwrap().points();
        assert_eq!(pts.first(), Some(&start));
        assert_eq!(pts.last(), Some(&goal));
        assert_sound(&Movement::Hexagonal, |_| true, &pts);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let wall = |q: Point| !(q.x == 3 && q.y > 0) && q != p(1, 2);
        let mut e = Engine::rectangular(7, 6, wall).unwrap();
        let first = e.find_path(p(0, 5), p(6, 5)).unwrap();
        for _ in 0..3 {
            let again = e.find_path(p(0, 5), p(6, 5)).unwrap();
            assert_eq!(again, first);
        }
        assert_sound(&Movement::Rectangular, wall, &first.points());
    }

    #[test]
    fn no_state_leaks_between_queries() {
        let mut e = Engine::rectangular(6, 6, Open).unwrap();
        e.find_path(p(0, 0), p(5, 5)).unwrap();
        assert!(e.visited_count() > 1);
        e.find_path(p(3, 3), p(3, 3)).unwrap();
        let visited: Vec<_> = e.visited_cells().collect();
        assert_eq!(visited, vec![p(3, 3)]);
    }

    #[test]
    fn ties_go_to_first_discovered() {
        let mut e = Engine::rectangular(2, 2, Open).unwrap();
        // (1, 0) and (0, 1) score the same; +x is generated first.
        let pts = e.find_path(p(0, 0), p(1, 1)).unwrap().points();
        assert_eq!(pts, vec![p(0, 0), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn local_cost_accumulates_in_step() {
        let blocked = |q: Point| q != p(1, 1);
        let mut e = Engine::rectangular(3, 3, blocked).unwrap();
        let path = e.find_path(p(0, 0), p(2, 0)).unwrap();
        assert_eq!(path.points(), vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(path.goal().depth(), 2);
        // (1, 0) borders the blocked center.
        assert_eq!(path.nodes()[1].step(), 3);
        assert_eq!(path.step(), 4);
    }

    #[test]
    fn uniform_costs_count_edges() {
        let blocked = |q: Point| q != p(1, 1);
        let region = Region::from_size(3, 3).unwrap();
        let mut e = Engine::with_config(region, Movement::Rectangular, blocked, CostConfig::UNIFORM);
        let path = e.find_path(p(0, 0), p(2, 0)).unwrap();
        assert_eq!(path.step(), 2);
    }

    #[test]
    fn diagonal_moves_cut_corners() {
        let region = Region::from_size(5, 5).unwrap();
        let mut e = Engine::open(region, Movement::Diagonal);
        let pts = e.find_path(p(0, 0), p(4, 4)).unwrap().points();
        assert_eq!(pts, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3), p(4, 4)]);
    }

    #[test]
    fn hexagonal_path_is_sound() {
        let region = Region::from_size(6, 6).unwrap();
        let wall = |q: Point| !(q.y == 2 && q.x < 5);
        let mut e = Engine::new(region, Movement::Hexagonal, wall);
        let pts = e.find_path(p(0, 0), p(0, 5)).unwrap().points();
        assert!(pts.contains(&p(5, 2)));
        assert_sound(&Movement::Hexagonal, wall, &pts);
    }

    #[test]
    fn custom_moves_closure() {
        let knight = |q: Point, buf: &mut Vec<Point>| {
            for (dx, dy) in [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)] {
                buf.push(q.shift(dx, dy));
            }
        };
        let region = Region::from_size(4, 4).unwrap();
        let mut e = Engine::open(region, knight);
        let pts = e.find_path(p(0, 0), p(1, 2)).unwrap().points();
        assert_eq!(pts, vec![p(0, 0), p(1, 2)]);
        let far = e.find_path(p(0, 0), p(3, 3)).unwrap().points();
        assert_sound(&knight, |_| true, &far);
    }

    #[test]
    fn per_query_predicate_overrides_default() {
        let mut e = Engine::rectangular(5, 5, Open).unwrap();
        let direct = e.find_path(p(0, 0), p(4, 0)).unwrap();
        assert_eq!(direct.len(), 5);
        let wall = |q: Point| !(q.x == 2 && q.y != 4);
        let detour = e.find_path_with(p(0, 0), p(4, 0), &wall).unwrap();
        assert!(detour.points().contains(&p(2, 4)));
        assert_sound(&Movement::Rectangular, wall, &detour.points());
    }

    #[test]
    fn region_with_origin_offset() {
        let region = Region::new(p(-2, -2), 4, 4).unwrap();
        let mut e = Engine::open(region, Movement::Rectangular);
        let pts = e.find_path(p(-2, -2), p(1, 1)).unwrap().points();
        assert_eq!(pts.len(), 7);
        assert!(pts.iter().all(|&q| region.contains(q)));
        assert!(e.find_path(p(-2, -2), p(2, 1)).is_none());
    }

    #[test]
    fn path_length_bounded_by_depth() {
        let wall = |q: Point| (q.x + q.y) % 4 != 1 || q.y == 3;
        let mut e = Engine::rectangular(8, 8, wall).unwrap();
        if let Some(path) = e.find_path(p(0, 0), p(7, 7)) {
            assert_eq!(path.len(), path.goal().depth() + 1);
            assert!(path.goal().depth() as i32 <= path.step());
            assert_sound(&Movement::Rectangular, wall, &path.points());
        }
    }
}
