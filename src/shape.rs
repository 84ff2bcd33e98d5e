//! Geometric primitives that can be placed on the grid
use crate::{Point, Scalar};
use std::fmt;

/// Line segment between two grid points
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {:?} {:?}", self.p0, self.p1)
    }
}

impl Line {
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Start and end points of the line
    pub fn points(&self) -> [Point; 2] {
        [self.p0, self.p1]
    }

    /// Rounded midpoint of the line
    pub fn midpoint(&self) -> Point {
        let (x0, y0) = self.p0.to_scalar();
        let (x1, y1) = self.p1.to_scalar();
        Point::round((x0 + x1) / 2.0, (y0 + y1) / 2.0)
    }

    pub fn length(&self) -> Scalar {
        self.p0.dist(self.p1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: i32) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }
}

/// Axis aligned ellipse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    pub center: Point,
    pub rx: i32,
    pub ry: i32,
}

impl Ellipse {
    pub fn new(center: impl Into<Point>, rx: i32, ry: i32) -> Self {
        Self {
            center: center.into(),
            rx,
            ry,
        }
    }
}

/// Bezier curve of arbitrary degree, defined by its control points
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bezier {
    pub points: Vec<Point>,
}

/// Chain of line segments, last vertex is joined back to the first one
///
/// Rasterized like a polygon outline, but clipped segment by segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// Closed chain of line segments, last vertex is connected to the first one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    /// Axis aligned rectangle with corners `p0` and `p1`
    pub fn rect(p0: Point, p1: Point) -> Self {
        Self {
            points: vec![
                p0,
                Point::new(p1.x, p0.y),
                p1,
                Point::new(p0.x, p1.y),
            ],
        }
    }

    /// Edges of the polygon including the closing one
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        closed_edges(&self.points)
    }
}

/// Edges connecting consecutive points and the last point with the first one
pub(crate) fn closed_edges(points: &[Point]) -> impl Iterator<Item = Line> + '_ {
    let count = points.len();
    (0..count).map(move |index| Line::new(points[index], points[(index + 1) % count]))
}

/// Any shape that can be placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Shape {
    Pixel(Point),
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Bezier(Bezier),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Shape {
    /// Name of the shape kind
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Pixel(_) => "pixel",
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Bezier(_) => "bezier",
            Shape::Polyline(_) => "polyline",
            Shape::Polygon(_) => "polygon",
        }
    }

    /// Default pivot for rotation and fixed point for scaling
    ///
    /// Centroid of the vertices for vertex lists, center for circles and ellipses,
    /// midpoint for lines and the origin for an isolated pixel.
    pub fn anchor(&self) -> Point {
        match self {
            Shape::Pixel(_) => Point::default(),
            Shape::Line(line) => line.midpoint(),
            Shape::Circle(circle) => circle.center,
            Shape::Ellipse(ellipse) => ellipse.center,
            Shape::Bezier(Bezier { points })
            | Shape::Polyline(Polyline { points })
            | Shape::Polygon(Polygon { points }) => Point::centroid(points).unwrap_or_default(),
        }
    }

    /// Points defining the shape
    pub fn points(&self) -> Vec<Point> {
        match self {
            Shape::Pixel(point) => vec![*point],
            Shape::Line(line) => line.points().to_vec(),
            Shape::Circle(circle) => vec![circle.center],
            Shape::Ellipse(ellipse) => vec![ellipse.center],
            Shape::Bezier(Bezier { points })
            | Shape::Polyline(Polyline { points })
            | Shape::Polygon(Polygon { points }) => points.clone(),
        }
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Self::Pixel(point)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl From<Bezier> for Shape {
    fn from(bezier: Bezier) -> Self {
        Self::Bezier(bezier)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor() {
        assert_eq!(Shape::from(Line::new((0, 0), (3, 5))).anchor(), Point::new(2, 3));
        assert_eq!(Shape::from(Circle::new((4, 4), 2)).anchor(), Point::new(4, 4));
        let square = Polygon::rect(Point::new(2, 2), Point::new(6, 6));
        assert_eq!(Shape::from(square).anchor(), Point::new(4, 4));
        assert_eq!(Shape::from(Point::new(7, 7)).anchor(), Point::new(0, 0));
        let empty = Polyline { points: Vec::new() };
        assert_eq!(Shape::from(empty).anchor(), Point::new(0, 0));
    }

    #[test]
    fn test_polygon_edges() {
        let triangle = Polygon {
            points: vec![Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)],
        };
        let edges: Vec<_> = triangle.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Line::new((0, 4), (0, 0)));
    }
}
