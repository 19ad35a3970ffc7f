use thiserror::Error;

use crate::geom::Point;

/// Reasons a [`Region`](crate::Region) cannot be built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    #[error("region must have a positive area, got {width}x{height}")]
    Empty { width: i32, height: i32 },

    #[error("region {width}x{height} at {origin} reaches the limits of i32 coordinates")]
    Overflow {
        origin: Point,
        width: i32,
        height: i32,
    },
}
