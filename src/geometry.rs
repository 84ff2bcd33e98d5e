use crate::{Error, utils::round_half_up};
use std::{
    fmt,
    ops::{Add, Mul, Sub},
    str::FromStr,
};

pub type Scalar = f64;
pub const EPSILON: f64 = f64::EPSILON;
pub const PI: f64 = std::f64::consts::PI;

/// Default size of the grid (number of cells along each axis)
pub const DEFAULT_GRID_SIZE: i32 = 20;

/// Cell of the pixel grid
///
/// Points are ordered lexicographically, first by `x` then by `y`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to a pair of scalars
    #[inline]
    pub fn to_scalar(self) -> (Scalar, Scalar) {
        (self.x as Scalar, self.y as Scalar)
    }

    /// Round a pair of scalars to the nearest grid point
    #[inline]
    pub fn round(x: Scalar, y: Scalar) -> Self {
        Self::new(round_half_up(x), round_half_up(y))
    }

    /// Euclidean distance between two points
    pub fn dist(self, other: Self) -> Scalar {
        let (x0, y0) = self.to_scalar();
        let (x1, y1) = other.to_scalar();
        (x0 - x1).hypot(y0 - y1)
    }

    /// Rounded centroid of the points, `None` if there are no points
    pub fn centroid(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| {
            (sx + p.x as Scalar, sy + p.y as Scalar)
        });
        let count = points.len() as Scalar;
        Some(Point::round(sx / count, sy / count))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from(xy: (i32, i32)) -> Self {
        Self::new(xy.0, xy.1)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Self::Output {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Self::Output {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse point from `"x,y"` representation
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_ints(text)?;
        Ok(Point::new(x, y))
    }
}

/// Parse exactly `N` comma (or whitespace) separated integers
fn parse_ints<const N: usize>(text: &str) -> Result<[i32; N], Error> {
    let mut values = [0; N];
    let mut count = 0;
    let mut offset = 0;
    for chunk in text.split(|c: char| c == ',' || c.is_ascii_whitespace()) {
        if !chunk.is_empty() {
            if count == N {
                return Err(Error::parse(format!("expected {} values", N), offset));
            }
            values[count] = chunk
                .parse()
                .map_err(|_| Error::parse(format!("invalid integer {:?}", chunk), offset))?;
            count += 1;
        }
        offset += chunk.len() + 1;
    }
    if count != N {
        return Err(Error::parse(
            format!("expected {} values, found {}", N, count),
            text.len(),
        ));
    }
    Ok(values)
}

/// Square grid of `size x size` cells, valid coordinates are `0..size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid(pub i32);

impl Default for Grid {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    /// Number of cells along each axis
    #[inline]
    pub fn size(&self) -> i32 {
        self.0
    }

    /// Check if point lies inside of the grid
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (0..self.0).contains(&point.x) && (0..self.0).contains(&point.y)
    }

    /// Iterate over all cells of the grid in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.0.max(0);
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [size] = parse_ints(text)?;
        if size <= 0 {
            return Err(Error::parse("grid size must be positive", 0));
        }
        Ok(Grid(size))
    }
}

/// Axis aligned clipping window, all bounds are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl ClipRect {
    /// Create clip rectangle, fails if `xmin > xmax` or `ymin > ymax`
    pub fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Result<Self, Error> {
        let rect = Self {
            xmin,
            ymin,
            xmax,
            ymax,
        };
        if rect.is_valid() {
            Ok(rect)
        } else {
            Err(Error::InvalidClipRect)
        }
    }

    /// Rectangle covering the whole grid
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            xmin: 0,
            ymin: 0,
            xmax: grid.size() - 1,
            ymax: grid.size() - 1,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Determine if the point is inside of the rectangle (inclusive)
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.xmin <= point.x && point.x <= self.xmax && self.ymin <= point.y && point.y <= self.ymax
    }
}

impl FromStr for ClipRect {
    type Err = Error;

    /// Parse from `"xmin,ymin,xmax,ymax"`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [xmin, ymin, xmax, ymax] = parse_ints(text)?;
        ClipRect::new(xmin, ymin, xmax, ymax)
    }
}

/// Integer bounding box with sides directed along the axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    /// Point with minimal x and y values
    min: Point,
    /// Point with maximum x and y values
    max: Point,
}

impl BBox {
    /// Construct bounding box which includes points `p0` and `p1`
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            min: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            max: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// Smallest bounding box containing all the points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(BBox::new(*first, *first), |bbox, p| bbox.extend(*p)),
        )
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    /// Extend bounding box so it would contains provided point
    pub fn extend(&self, point: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Grow bounding box by `pad` cells in every direction
    pub fn pad(&self, pad: i32) -> Self {
        Self {
            min: Point::new(self.min.x - pad, self.min.y - pad),
            max: Point::new(self.max.x + pad, self.max.y + pad),
        }
    }

    /// Determine if the point is inside of the bounding box
    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}

/// 2D affine transformation
///
/// Stored as an array [m00, m01, m02, m10, m11, m12] but semantically corresponds to
/// a matrix:
/// ┌             ┐
/// │ m00 m01 m02 │
/// │ m10 m11 m12 │
/// │   0   0   1 │
/// └             ┘
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform([Scalar; 6]);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Apply this transformation to a pair of scalars
    pub fn apply_scalar(&self, x: Scalar, y: Scalar) -> (Scalar, Scalar) {
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        (x * m00 + y * m01 + m02, x * m10 + y * m11 + m12)
    }

    /// Apply this transformation to a grid point, result is rounded to the nearest cell
    pub fn apply(&self, point: Point) -> Point {
        let (x, y) = point.to_scalar();
        let (x, y) = self.apply_scalar(x, y);
        Point::round(x, y)
    }

    /// Apply translation by `[tx, ty]` before self
    pub fn translate(&self, tx: Scalar, ty: Scalar) -> Self {
        self.matmul(Self([1.0, 0.0, tx, 0.0, 1.0, ty]))
    }

    /// Apply scale transformation by `[sx, sy]` before self
    pub fn scale(&self, sx: Scalar, sy: Scalar) -> Self {
        self.matmul(Self([sx, 0.0, 0.0, 0.0, sy, 0.0]))
    }

    /// Apply rotation by `a` radians around the origin before self
    pub fn rotate(&self, a: Scalar) -> Self {
        let (sin, cos) = a.sin_cos();
        self.matmul(Self([cos, -sin, 0.0, sin, cos, 0.0]))
    }

    /// Apply rotation around point `p` by `a` radians before self
    pub fn rotate_around(&self, a: Scalar, p: Point) -> Self {
        let (px, py) = p.to_scalar();
        self.translate(px, py).rotate(a).translate(-px, -py)
    }

    /// Apply scale with fixed point `p` before self
    pub fn scale_around(&self, sx: Scalar, sy: Scalar, p: Point) -> Self {
        let (px, py) = p.to_scalar();
        self.translate(px, py).scale(sx, sy).translate(-px, -py)
    }

    /// Multiply transformations in matrix form
    pub fn matmul(&self, other: Transform) -> Self {
        let Self([s00, s01, s02, s10, s11, s12]) = self;
        let Self([o00, o01, o02, o10, o11, o12]) = other;

        // s00, s01, s02 | o00, o01, o02
        // s10, s11, s12 | o10, o11, o12
        // 0  , 0  , 1   | 0  , 0  , 1
        Self([
            s00 * o00 + s01 * o10,
            s00 * o01 + s01 * o11,
            s00 * o02 + s01 * o12 + s02,
            s10 * o00 + s11 * o10,
            s10 * o01 + s11 * o11,
            s10 * o02 + s11 * o12 + s12,
        ])
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, other: Transform) -> Self::Output {
        self.matmul(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_transform() {
        let tr = Transform::identity()
            .translate(1.0, 2.0)
            .rotate(PI / 2.0)
            .scale(3.0, 2.0);
        let (x, y) = tr.apply_scalar(1.0, 1.0);
        assert_approx_eq!(x, -1.0, 1e-9);
        assert_approx_eq!(y, 5.0, 1e-9);

        let tr = Transform::identity().rotate_around(PI, Point::new(5, 5));
        assert_eq!(tr.apply(Point::new(7, 5)), Point::new(3, 5));
        assert_eq!(tr.apply(Point::new(5, 5)), Point::new(5, 5));

        let tr = Transform::identity().scale_around(2.0, 3.0, Point::new(1, 1));
        assert_eq!(tr.apply(Point::new(2, 2)), Point::new(3, 4));
        assert_eq!(Transform::identity() * tr, tr);
    }

    #[test]
    fn test_point() -> Result<(), Error> {
        assert_eq!("3,4".parse::<Point>()?, Point::new(3, 4));
        assert_eq!(" -3 , 4 ".parse::<Point>()?, Point::new(-3, 4));
        assert!("3".parse::<Point>().is_err());
        assert!("3,4,5".parse::<Point>().is_err());
        assert!("a,4".parse::<Point>().is_err());
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
        assert_approx_eq!(Point::new(0, 0).dist(Point::new(3, 4)), 5.0);
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert_eq!(
            Point::centroid(&[Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)]),
            Some(Point::new(1, 1))
        );
        assert_eq!(Point::centroid(&[]), None);
        Ok(())
    }

    #[test]
    fn test_clip_rect() -> Result<(), Error> {
        let rect: ClipRect = "5,5,15,15".parse()?;
        assert_eq!(rect, ClipRect::new(5, 5, 15, 15)?);
        assert!(rect.contains(Point::new(5, 15)));
        assert!(!rect.contains(Point::new(4, 10)));
        assert!(matches!(
            "15,5,5,15".parse::<ClipRect>(),
            Err(Error::InvalidClipRect)
        ));
        assert_eq!(ClipRect::from_grid(Grid::default()).xmax, 19);
        Ok(())
    }

    #[test]
    fn test_grid() -> Result<(), Error> {
        let grid: Grid = "4".parse()?;
        assert_eq!(grid.cells().count(), 16);
        assert!(grid.contains(Point::new(3, 0)));
        assert!(!grid.contains(Point::new(4, 0)));
        assert!(!grid.contains(Point::new(0, -1)));
        assert!("0".parse::<Grid>().is_err());
        Ok(())
    }

    #[test]
    fn test_bbox() {
        let points = [Point::new(3, 7), Point::new(5, 2), Point::new(4, 4)];
        let bbox = BBox::from_points(&points).expect("non empty");
        assert_eq!(bbox.min(), Point::new(3, 2));
        assert_eq!(bbox.max(), Point::new(5, 7));
        assert!(!bbox.contains(Point::new(1, 1)));
        assert!(bbox.pad(2).contains(Point::new(1, 0)));
        assert!(BBox::from_points(&[]).is_none());
    }
}
