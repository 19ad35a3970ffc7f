use cellpath_core::{Point, Region, RegionError};
use thiserror::Error;

/// Errors reported by the engine.
///
/// A search that finds no route is not an error: `find_path` returns `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Region(#[from] RegionError),

    #[error("cell {point} is outside region {region}")]
    OutOfBounds { point: Point, region: Region },

    #[error("unknown movement `{0}`, expected rectangular, diagonal or hexagonal")]
    UnknownMovement(String),
}
