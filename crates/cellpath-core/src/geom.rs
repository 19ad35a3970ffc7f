//! Geometry primitives: [`Point`] and [`Region`].

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::RegionError;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major order, matching [`Region::iter`].
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A non-empty axis-aligned rectangle of cells: `origin` plus a positive
/// width and height.
///
/// A region can only be built through [`Region::new`] (or
/// [`Region::from_size`]), so its area is always at least one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RegionRepr", into = "RegionRepr")
)]
pub struct Region {
    origin: Point,
    width: i32,
    height: i32,
}

impl Region {
    /// Create a region with the given origin and size.
    ///
    /// Fails with [`RegionError::Empty`] if either dimension is zero or
    /// negative, and with [`RegionError::Overflow`] unless the ring of
    /// cells one step outside the region is representable, so that unit
    /// neighbor offsets of any cell inside never overflow `i32`.
    pub fn new(origin: Point, width: i32, height: i32) -> Result<Self, RegionError> {
        if width <= 0 || height <= 0 {
            return Err(RegionError::Empty { width, height });
        }
        let fits = |start: i32, len: i32| {
            start.checked_sub(1).is_some()
                && start
                    .checked_add(len)
                    .and_then(|end| end.checked_add(1))
                    .is_some()
        };
        if !fits(origin.x, width) || !fits(origin.y, height) {
            return Err(RegionError::Overflow {
                origin,
                width,
                height,
            });
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Create a region of the given size anchored at (0, 0).
    pub fn from_size(width: i32, height: i32) -> Result<Self, RegionError> {
        Self::new(Point::ZERO, width, height)
    }

    /// Minimum (inclusive) corner.
    #[inline]
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Maximum (exclusive) corner.
    #[inline]
    pub fn end(self) -> Point {
        self.origin.shift(self.width, self.height)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells in the region.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `p` lies inside the region.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let end = self.end();
        p.x >= self.origin.x && p.x < end.x && p.y >= self.origin.y && p.y < end.y
    }

    /// Row-major flat index of `p`, or `None` if `p` is outside.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.origin.x) as usize;
        let y = (p.y - self.origin.y) as usize;
        Some(x + y * self.width as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below
    /// [`area`](Self::area).
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new(
            (idx % w) as i32 + self.origin.x,
            (idx / w) as i32 + self.origin.y,
        )
    }

    /// Row-major iterator over every cell in the region.
    #[inline]
    pub fn iter(self) -> RegionIter {
        RegionIter {
            region: self,
            next: 0,
        }
    }
}

impl IntoIterator for Region {
    type Item = Point;
    type IntoIter = RegionIter;
    #[inline]
    fn into_iter(self) -> RegionIter {
        self.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.origin, self.end())
    }
}

/// Unchecked wire form of [`Region`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RegionRepr {
    #[serde(default)]
    origin: Point,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionRepr> for Region {
    type Error = RegionError;

    fn try_from(r: RegionRepr) -> Result<Self, RegionError> {
        Region::new(r.origin, r.width, r.height)
    }
}

#[cfg(feature = "serde")]
impl From<Region> for RegionRepr {
    fn from(r: Region) -> Self {
        Self {
            origin: r.origin,
            width: r.width,
            height: r.height,
        }
    }
}

// ---------------------------------------------------------------------------
// RegionIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionIter {
    region: Region,
    next: usize,
}

impl Iterator for RegionIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.region.area() {
            return None;
        }
        let p = self.region.point(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.region.area().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RegionIter {}
