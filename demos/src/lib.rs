//! Shared code of the `cellpath-demo` binary: ASCII maps, demo
//! configuration and text rendering of query results.
//!
//! Map legend: `#` is blocked, `S` marks the start, `G` the goal, anything
//! else is open floor. Row `n` of the text is `y = n`.

use std::fs;
use std::str::FromStr;

use cellpath::{CostConfig, Engine, Movement, Point, Region, RegionError};
use log::info;
use serde::Deserialize;
use thiserror::Error;

/// Map used when no map file is given.
pub const SAMPLE_MAP: &str = "\
S.........
.######...
......#...
####..#.##
......#...
.######.#.
........#G";

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("map line {line}: {reason}")]
    Map { line: usize, reason: String },

    #[error("map has no `{0}` marker")]
    MissingMarker(char),

    #[error(transparent)]
    Region(#[from] RegionError),
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Demo settings, loadable from TOML:
///
/// ```toml
/// movement = "hexagonal"
///
/// [cost]
/// blocked_penalty = 2
/// edge_penalty = 0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub movement: Movement,
    pub cost: CostConfig,
}

impl DemoConfig {
    pub fn load(path: &std::path::Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(text)?)
    }
}

// ---------------------------------------------------------------------------
// AsciiMap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AsciiMap {
    region: Region,
    blocked: Vec<bool>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl AsciiMap {
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Whether `p` is inside the map and not a wall.
    pub fn is_open(&self, p: Point) -> bool {
        self.region.index(p).is_some_and(|i| !self.blocked[i])
    }

    /// Draw the map with `overlay` deciding the glyph of open cells.
    /// Hexagonal maps shift odd rows by half a cell.
    pub fn render(&self, movement: Movement, overlay: impl Fn(Point) -> Option<char>) -> String {
        let mut out = String::with_capacity(self.region.area() * 2);
        for y in 0..self.region.height() {
            if movement == Movement::Hexagonal && y % 2 == 1 {
                out.push(' ');
            }
            for x in 0..self.region.width() {
                let p = Point::new(x, y);
                let c = if Some(p) == self.start {
                    'S'
                } else if Some(p) == self.goal {
                    'G'
                } else if !self.is_open(p) {
                    '#'
                } else {
                    overlay(p).unwrap_or('.')
                };
                out.push(c);
                if movement == Movement::Hexagonal {
                    out.push(' ');
                }
            }
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }
        out
    }
}

impl FromStr for AsciiMap {
    type Err = DemoError;

    fn from_str(text: &str) -> Result<Self, DemoError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let region = Region::from_size(width as i32, rows.len() as i32)?;

        let mut blocked = Vec::with_capacity(region.area());
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(DemoError::Map {
                    line: y + 1,
                    reason: format!("expected {width} columns, found {found}"),
                });
            }
            for (x, c) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let marker = match c {
                    'S' => Some(&mut start),
                    'G' => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if slot.replace(p).is_some() {
                        return Err(DemoError::Map {
                            line: y + 1,
                            reason: format!("second `{c}` marker"),
                        });
                    }
                }
                blocked.push(c == '#');
            }
        }

        Ok(Self {
            region,
            blocked,
            start,
            goal,
        })
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Route from `S` to `G`, drawn with `*`.
    Path,
    /// Everything reachable from `S`, drawn with `~`.
    Flood,
}

/// Run one query on `map` and render the result.
pub fn run_query(map: &AsciiMap, config: &DemoConfig, mode: Mode) -> Result<String, DemoError> {
    let start = map.start().ok_or(DemoError::MissingMarker('S'))?;
    let mut engine = Engine::with_config(
        map.region(),
        config.movement,
        |p: Point| map.is_open(p),
        config.cost,
    );

    match mode {
        Mode::Flood => {
            engine.walk_all(start);
            info!(
                "{} of {} cells reachable from {start}",
                engine.visited_count(),
                map.region().area()
            );
            let visited = engine.visited();
            Ok(map.render(config.movement, |p| {
                visited.get(p).unwrap_or(false).then_some('~')
            }))
        }
        Mode::Path => {
            let goal = map.goal().ok_or(DemoError::MissingMarker('G'))?;
            let Some(path) = engine.find_path(start, goal) else {
                info!("no path from {start} to {goal}");
                return Ok(format!("no path from {start} to {goal}\n"));
            };
            info!(
                "path {start} -> {goal}: {} cells, accumulated cost {}",
                path.len(),
                path.step()
            );
            let points = path.points();
            Ok(map.render(config.movement, |p| points.contains(&p).then_some('*')))
        }
    }
}
