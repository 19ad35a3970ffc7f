//! **cellpath-core**: geometry types shared by the *cellpath* crates.
//!
//! [`Point`] is an integer cell coordinate and [`Region`] a validated,
//! non-empty rectangle of cells with flat row-major indexing.

mod error;
pub mod geom;

pub use error::RegionError;
pub use geom::{Point, Region, RegionIter};
