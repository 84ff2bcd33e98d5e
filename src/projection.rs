//! Illustrative projections of simple 3D wireframes onto the grid
//!
//! These are not a rendering pipeline, only the classical textbook formulas
//! producing grid points that can be connected with lines.
use crate::{Line, Point, Scalar, Shape};
use std::fmt;

/// Point in 3D space
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl Point3 {
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }
}

impl From<(Scalar, Scalar, Scalar)> for Point3 {
    fn from((x, y, z): (Scalar, Scalar, Scalar)) -> Self {
        Self::new(x, y, z)
    }
}

/// Projection from 3D space onto the grid plane
pub trait Projection {
    /// Name of the projection
    fn name(&self) -> String;

    /// Projected coordinates before rounding, `None` if the point can not be projected
    fn project_scalar(&self, point: Point3) -> Option<(Scalar, Scalar)>;

    /// Project point onto the nearest grid cell
    fn project(&self, point: Point3) -> Option<Point> {
        let (x, y) = self.project_scalar(point)?;
        if x.is_finite() && y.is_finite() {
            Some(Point::round(x, y))
        } else {
            None
        }
    }
}

/// Parallel projection along one of the axes, or isometric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orthographic {
    /// Drops `z`
    Front,
    /// Drops `y`
    Top,
    /// Drops `x`, depth becomes horizontal axis
    Side,
    /// Axes are 120 degrees apart
    Isometric,
}

impl Projection for Orthographic {
    fn name(&self) -> String {
        match self {
            Orthographic::Front => "front".to_owned(),
            Orthographic::Top => "top".to_owned(),
            Orthographic::Side => "side".to_owned(),
            Orthographic::Isometric => "isometric".to_owned(),
        }
    }

    fn project_scalar(&self, p: Point3) -> Option<(Scalar, Scalar)> {
        let projected = match self {
            Orthographic::Front => (p.x, p.y),
            Orthographic::Top => (p.x, p.z),
            Orthographic::Side => (p.z, p.y),
            Orthographic::Isometric => {
                let (sin, cos) = 30.0_f64.to_radians().sin_cos();
                ((p.x - p.z) * cos, p.y + (p.x + p.z) * sin)
            }
        };
        Some(projected)
    }
}

/// Oblique projection, depth is drawn at an `angle` and shortened by `scale`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Cavalier {
    /// 45 degrees, full depth
    Standard,
    /// 45 degrees, half depth
    Cabinet,
    /// Angle in degrees and depth scale
    Custom { angle: Scalar, scale: Scalar },
}

impl Cavalier {
    /// Angle in degrees and scale of the depth axis
    pub fn params(&self) -> (Scalar, Scalar) {
        match *self {
            Cavalier::Standard => (45.0, 1.0),
            Cavalier::Cabinet => (45.0, 0.5),
            Cavalier::Custom { angle, scale } => (angle, scale),
        }
    }
}

impl Projection for Cavalier {
    fn name(&self) -> String {
        match self {
            Cavalier::Standard => "cavalier".to_owned(),
            Cavalier::Cabinet => "cabinet".to_owned(),
            Cavalier::Custom { angle, scale } => format!("oblique({},{})", angle, scale),
        }
    }

    fn project_scalar(&self, p: Point3) -> Option<(Scalar, Scalar)> {
        let (angle, scale) = self.params();
        let (sin, cos) = angle.to_radians().sin_cos();
        Some((p.x + p.z * cos * scale, p.y + p.z * sin * scale))
    }
}

/// Number of vanishing points of a perspective projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VanishingPoints {
    #[default]
    One,
    Two,
    Three,
}

/// Perspective projection with a viewer at `viewer_distance` in front of the grid
///
/// Returns `None` for points on the plane of the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Perspective {
    pub kind: VanishingPoints,
    /// Field of view in degrees, only used by the three point projection
    pub fov: Scalar,
    pub viewer_distance: Scalar,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            kind: VanishingPoints::One,
            fov: 60.0,
            viewer_distance: 50.0,
        }
    }
}

impl Perspective {
    pub fn new(kind: VanishingPoints, viewer_distance: Scalar) -> Self {
        Self {
            kind,
            viewer_distance,
            ..Self::default()
        }
    }
}

/// Ratio `num / den`, `None` if denominator is zero
#[inline]
fn ratio(num: Scalar, den: Scalar) -> Option<Scalar> {
    if den.abs() < crate::EPSILON {
        None
    } else {
        Some(num / den)
    }
}

impl Projection for Perspective {
    fn name(&self) -> String {
        match self.kind {
            VanishingPoints::One => "one-point".to_owned(),
            VanishingPoints::Two => "two-point".to_owned(),
            VanishingPoints::Three => "three-point".to_owned(),
        }
    }

    fn project_scalar(&self, p: Point3) -> Option<(Scalar, Scalar)> {
        let d = self.viewer_distance;
        match self.kind {
            VanishingPoints::One => {
                let scale = ratio(d, d + p.z)?;
                Some((p.x * scale, p.y * scale))
            }
            VanishingPoints::Two => {
                let scale_x = ratio(2.0 * d, 2.0 * d + p.z + 0.3 * p.x)?;
                let scale_y = ratio(d, d + p.z)?;
                let depth = 45.0_f64.to_radians().cos() * 0.5;
                Some((p.x * scale_x + p.z * depth, p.y * scale_y))
            }
            VanishingPoints::Three => {
                let (vh, vv) = (1.5 * d, 2.0 * d);
                let scale_x = ratio(vh, vh + p.z + 0.2 * p.x)?;
                let scale_y = ratio(vv, vv + p.z + 0.3 * p.y.abs())?;
                let (sin, cos) = self.fov.to_radians().sin_cos();
                let tilt = if p.y > 10.0 { -0.1 * p.y } else { 0.1 * p.y };
                Some((
                    p.x * scale_x + p.z * cos * 0.3,
                    p.y * scale_y + p.z * sin * 0.2 + tilt,
                ))
            }
        }
    }
}

/// Edges of a cube as pairs of vertex indices
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Set of vertices connected by edges
pub trait Wireframe {
    fn vertices(&self) -> Vec<Point3>;

    fn edges(&self) -> Vec<(usize, usize)>;

    /// Project all edges, edges with an endpoint that can not be projected are skipped
    fn project_lines(&self, projection: &dyn Projection) -> Vec<Line> {
        let projected: Vec<_> = self
            .vertices()
            .into_iter()
            .map(|vertex| projection.project(vertex))
            .collect();
        self.edges()
            .into_iter()
            .filter_map(|(start, end)| {
                let p0 = (*projected.get(start)?)?;
                let p1 = (*projected.get(end)?)?;
                Some(Line::new(p0, p1))
            })
            .collect()
    }

    /// Projected edges as line shapes ready to be added to a scene
    fn project_shapes(&self, projection: &dyn Projection) -> Vec<Shape> {
        self.project_lines(projection)
            .into_iter()
            .map(Shape::Line)
            .collect()
    }
}

/// Axis aligned cube
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    pub center: Point3,
    pub size: Scalar,
}

impl Wireframe for Cube {
    /// Near face (`z - half`) first, counter-clockwise starting from the minimal corner
    fn vertices(&self) -> Vec<Point3> {
        let Point3 { x, y, z } = self.center;
        let h = self.size / 2.0;
        vec![
            Point3::new(x - h, y - h, z - h),
            Point3::new(x + h, y - h, z - h),
            Point3::new(x + h, y + h, z - h),
            Point3::new(x - h, y + h, z - h),
            Point3::new(x - h, y - h, z + h),
            Point3::new(x + h, y - h, z + h),
            Point3::new(x + h, y + h, z + h),
            Point3::new(x - h, y + h, z + h),
        ]
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        CUBE_EDGES.to_vec()
    }
}

/// Pyramid with an arbitrary base polygon
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pyramid {
    pub base: Vec<Point3>,
    pub apex: Point3,
}

impl Pyramid {
    /// Pyramid with a square base of side `size` centered at `center` on the `y` plane
    pub fn square(center: Point3, size: Scalar, height: Scalar) -> Self {
        let Point3 { x, y, z } = center;
        let h = size / 2.0;
        Self {
            base: vec![
                Point3::new(x - h, y, z - h),
                Point3::new(x + h, y, z - h),
                Point3::new(x + h, y, z + h),
                Point3::new(x - h, y, z + h),
            ],
            apex: Point3::new(x, y - height, z),
        }
    }
}

impl Wireframe for Pyramid {
    /// Base vertices followed by the apex
    fn vertices(&self) -> Vec<Point3> {
        let mut vertices = self.base.clone();
        vertices.push(self.apex);
        vertices
    }

    /// Closed base outline and an edge from every base vertex to the apex
    fn edges(&self) -> Vec<(usize, usize)> {
        let count = self.base.len();
        let outline = (0..count).map(|i| (i, (i + 1) % count));
        let sides = (0..count).map(|i| (i, count));
        outline.chain(sides).collect()
    }
}

/// All named projections with their default parameters
pub fn projections() -> Vec<Box<dyn Projection>> {
    vec![
        Box::new(Orthographic::Front),
        Box::new(Orthographic::Top),
        Box::new(Orthographic::Side),
        Box::new(Orthographic::Isometric),
        Box::new(Cavalier::Standard),
        Box::new(Cavalier::Cabinet),
        Box::new(Perspective::new(VanishingPoints::One, 50.0)),
        Box::new(Perspective::new(VanishingPoints::Two, 50.0)),
        Box::new(Perspective::new(VanishingPoints::Three, 50.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_orthographic() {
        let p = Point3::new(3.0, 4.0, 5.0);
        assert_eq!(Orthographic::Front.project(p), Some(Point::new(3, 4)));
        assert_eq!(Orthographic::Top.project(p), Some(Point::new(3, 5)));
        assert_eq!(Orthographic::Side.project(p), Some(Point::new(5, 4)));
        let (x, y) = Orthographic::Isometric
            .project_scalar(Point3::new(4.0, 0.0, 2.0))
            .expect("parallel projection");
        assert_approx_eq!(x, 2.0 * 3.0_f64.sqrt() / 2.0, 1e-9);
        assert_approx_eq!(y, 3.0, 1e-9);
    }

    #[test]
    fn test_cavalier() {
        let p = Point3::new(2.0, 3.0, 4.0);
        let (x, y) = Cavalier::Standard.project_scalar(p).expect("parallel");
        let offset = 4.0 * (0.5_f64).sqrt();
        assert_approx_eq!(x, 2.0 + offset, 1e-9);
        assert_approx_eq!(y, 3.0 + offset, 1e-9);
        let (x, _) = Cavalier::Cabinet.project_scalar(p).expect("parallel");
        assert_approx_eq!(x, 2.0 + offset / 2.0, 1e-9);
        let custom = Cavalier::Custom {
            angle: 90.0,
            scale: 1.0,
        };
        assert_eq!(custom.project(p), Some(Point::new(2, 7)));
        // no depth, no displacement
        assert_eq!(
            Cavalier::Standard.project(Point3::new(5.0, 6.0, 0.0)),
            Some(Point::new(5, 6))
        );
    }

    #[test]
    fn test_perspective() {
        let one = Perspective::new(VanishingPoints::One, 10.0);
        assert_eq!(one.project(Point3::new(4.0, 8.0, 10.0)), Some(Point::new(2, 4)));
        assert_eq!(one.project(Point3::new(4.0, 8.0, 0.0)), Some(Point::new(4, 8)));
        // point on the plane of the viewer
        assert_eq!(one.project(Point3::new(4.0, 8.0, -10.0)), None);

        let two = Perspective::new(VanishingPoints::Two, 10.0);
        let (x, y) = two
            .project_scalar(Point3::new(10.0, 6.0, 10.0))
            .expect("finite");
        let depth = 10.0 * (0.5_f64).sqrt() * 0.5;
        assert_approx_eq!(x, 10.0 * 20.0 / 33.0 + depth, 1e-9);
        assert_approx_eq!(y, 3.0, 1e-9);

        let three = Perspective {
            kind: VanishingPoints::Three,
            fov: 90.0,
            viewer_distance: 10.0,
        };
        let (x, y) = three
            .project_scalar(Point3::new(0.0, 20.0, 0.0))
            .expect("finite");
        assert_approx_eq!(x, 0.0, 1e-9);
        assert_approx_eq!(y, 20.0 * 20.0 / 26.0 - 2.0, 1e-9);
        assert_eq!(three.project(Point3::new(0.0, 0.0, 0.0)), Some(Point::new(0, 0)));
    }

    #[test]
    fn test_cube() {
        let cube = Cube {
            center: Point3::new(10.0, 10.0, 0.0),
            size: 6.0,
        };
        let vertices = cube.vertices();
        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[0], Point3::new(7.0, 7.0, -3.0));
        assert_eq!(vertices[6], Point3::new(13.0, 13.0, 3.0));

        // front view collapses both faces onto the same square
        let lines = cube.project_lines(&Orthographic::Front);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], Line::new((7, 7), (13, 7)));
        assert_eq!(lines[4], lines[0]);
        assert_eq!(lines[8].p0, lines[8].p1);

        for projection in projections() {
            assert_eq!(cube.project_shapes(projection.as_ref()).len(), 12);
        }
    }

    #[test]
    fn test_pyramid() {
        let pyramid = Pyramid::square(Point3::new(10.0, 15.0, 0.0), 8.0, 10.0);
        assert_eq!(pyramid.vertices().len(), 5);
        assert_eq!(pyramid.edges().len(), 8);
        let lines = pyramid.project_lines(&Orthographic::Front);
        assert_eq!(lines[4], Line::new((6, 15), (10, 5)));
        let top = pyramid.project_lines(&Orthographic::Top);
        assert_eq!(top[0], Line::new((6, -4), (14, -4)));
    }
}
