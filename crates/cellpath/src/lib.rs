//! Best-first pathfinding and flood fill over bounded 2D grids.
//!
//! An [`Engine`] is built once per [`Region`] from two pluggable rules:
//!
//! - a neighbor rule ([`Moves`]): one of the [`Movement`] built-ins
//!   (rectangular, diagonal, hexagonal) or any closure
//!   `Fn(Point, &mut Vec<Point>)`;
//! - a traversal predicate ([`Traversable`]): any closure
//!   `Fn(Point) -> bool`, or [`Open`].
//!
//! It answers two kinds of query:
//!
//! - **Path search** ([`Engine::find_path`]) returns a [`Path`]: the goal
//!   node with its ancestors, from which [`Path::points`] rebuilds the
//!   route. Search order is `step + manhattan(cell, goal)`, with a
//!   congestion penalty folded into `step` (see [`CostConfig`]).
//! - **Flood traversal** ([`Engine::walk_all`]) marks everything reachable
//!   from a start cell; read it back with [`Engine::has_visited`].
//!
//! ```
//! use cellpath::{Engine, Point};
//!
//! let wall = |p: Point| !(p.x == 2 && p.y != 4);
//! let mut engine = Engine::rectangular(5, 5, wall).unwrap();
//! let path = engine.find_path(Point::new(0, 0), Point::new(4, 4)).unwrap();
//! assert!(path.points().contains(&Point::new(2, 4)));
//! ```

mod config;
mod distance;
mod engine;
mod error;
mod flood;
mod frontier;
mod movement;
mod node;
mod search;
mod traits;
mod visited;

pub use cellpath_core::{Point, Region, RegionError};
pub use config::CostConfig;
pub use distance::manhattan;
pub use engine::Engine;
pub use error::Error;
pub use movement::Movement;
pub use node::{Node, NodeId, Path};
pub use traits::{Moves, Open, Traversable};
pub use visited::VisitedSet;
