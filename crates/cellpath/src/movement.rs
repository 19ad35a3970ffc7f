use std::fmt;
use std::str::FromStr;

use cellpath_core::Point;

use crate::error::Error;
use crate::traits::Moves;

const RECTANGULAR: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

// Cardinals first, then the four corners.
const DIAGONAL: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
];

const HEX_EVEN_ROW: [Point; 6] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(0, -1),
];

const HEX_ODD_ROW: [Point; 6] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(0, -1),
    Point::new(1, -1),
];

/// Built-in neighbor rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Movement {
    /// 4-way: +x, -x, +y, -y.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "rect"))]
    Rectangular,
    /// 8-way: the rectangular moves followed by the four diagonals.
    #[cfg_attr(feature = "serde", serde(alias = "diag"))]
    Diagonal,
    /// 6-way staggered hex grid in offset coordinates. Odd rows are shifted
    /// half a cell towards +x, so the diagonal neighbors depend on the
    /// parity of `y`.
    #[cfg_attr(feature = "serde", serde(alias = "hex"))]
    Hexagonal,
}

impl Movement {
    /// Relative offsets of the neighbors of `p`, in expansion order.
    pub fn offsets(self, p: Point) -> &'static [Point] {
        match self {
            Movement::Rectangular => &RECTANGULAR,
            Movement::Diagonal => &DIAGONAL,
            Movement::Hexagonal if p.y.rem_euclid(2) == 0 => &HEX_EVEN_ROW,
            Movement::Hexagonal => &HEX_ODD_ROW,
        }
    }

    /// Long lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Movement::Rectangular => "rectangular",
            Movement::Diagonal => "diagonal",
            Movement::Hexagonal => "hexagonal",
        }
    }
}

impl Moves for Movement {
    #[inline]
    fn moves(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.offsets(p).iter().map(|&d| p + d));
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Movement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangular" | "4" => Ok(Movement::Rectangular),
            "diag" | "diagonal" | "8" => Ok(Movement::Diagonal),
            "hex" | "hexagonal" | "6" => Ok(Movement::Hexagonal),
            _ => Err(Error::UnknownMovement(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn movement_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Movement::Hexagonal).unwrap(),
            "\"hexagonal\""
        );
        let m: Movement = serde_json::from_str("\"diag\"").unwrap();
        assert_eq!(m, Movement::Diagonal);
    }
}
