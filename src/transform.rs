//! Affine transformations of shapes and containment predicates
use crate::{
    Bezier, Circle, Ellipse, Line, Point, Polygon, Polyline, Scalar, Shape, Transform,
    utils::{clamp, round_half_up},
};

/// Transformation applied to a shape
///
/// Missing pivot and fixed points are replaced with the anchor of the
/// transformed shape, see [`Shape::anchor`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Transformation {
    /// Counter-clockwise rotation by `degrees` around `pivot`
    Rotate {
        degrees: Scalar,
        #[cfg_attr(feature = "serde", serde(default))]
        pivot: Option<Point>,
    },
    /// Translation by an integer offset
    Translate { dx: i32, dy: i32 },
    /// Independent scale of both axes, `fixed` point stays in place
    Scale {
        sx: Scalar,
        sy: Scalar,
        #[cfg_attr(feature = "serde", serde(default))]
        fixed: Option<Point>,
    },
}

impl Transformation {
    /// Replace missing pivot or fixed point with `anchor`
    pub fn resolve(self, anchor: Point) -> Self {
        match self {
            Transformation::Rotate { degrees, pivot } => Transformation::Rotate {
                degrees,
                pivot: Some(pivot.unwrap_or(anchor)),
            },
            Transformation::Scale { sx, sy, fixed } => Transformation::Scale {
                sx,
                sy,
                fixed: Some(fixed.unwrap_or(anchor)),
            },
            translate => translate,
        }
    }

    /// Inverse transformation, exact for translations
    pub fn inverse(self) -> Option<Self> {
        match self {
            Transformation::Rotate { degrees, pivot } => Some(Transformation::Rotate {
                degrees: -degrees,
                pivot,
            }),
            Transformation::Translate { dx, dy } => {
                Some(Transformation::Translate { dx: -dx, dy: -dy })
            }
            Transformation::Scale { sx, sy, fixed } => {
                if sx.abs() < crate::EPSILON || sy.abs() < crate::EPSILON {
                    None
                } else {
                    Some(Transformation::Scale {
                        sx: 1.0 / sx,
                        sy: 1.0 / sy,
                        fixed,
                    })
                }
            }
        }
    }

    /// Apply transformation to a single point, missing anchor is the origin
    pub fn apply(&self, point: Point) -> Point {
        match *self {
            Transformation::Rotate { degrees, pivot } => {
                rotate_point(point, degrees, pivot.unwrap_or_default())
            }
            Transformation::Translate { dx, dy } => translate_point(point, dx, dy),
            Transformation::Scale { sx, sy, fixed } => {
                scale_point(point, sx, sy, fixed.unwrap_or_default())
            }
        }
    }
}

/// Rotate point counter-clockwise by `degrees` around `pivot`
pub fn rotate_point(point: Point, degrees: Scalar, pivot: Point) -> Point {
    Transform::identity()
        .rotate_around(degrees.to_radians(), pivot)
        .apply(point)
}

/// Move point by an integer offset
pub fn translate_point(point: Point, dx: i32, dy: i32) -> Point {
    point + Point::new(dx, dy)
}

/// Scale point relative to `fixed`
pub fn scale_point(point: Point, sx: Scalar, sy: Scalar, fixed: Point) -> Point {
    Transform::identity()
        .scale_around(sx, sy, fixed)
        .apply(point)
}

impl Shape {
    /// Apply transformation to the shape, producing a new shape
    ///
    /// Circles stay circles under non-uniform scale, with radius scaled by the
    /// average of the two factors. Ellipses stay axis aligned, rotation only moves
    /// their center.
    pub fn transform(&self, op: Transformation) -> Shape {
        let op = op.resolve(self.anchor());
        let map =
            |points: &[Point]| -> Vec<Point> { points.iter().map(|p| op.apply(*p)).collect() };
        match self {
            Shape::Pixel(point) => Shape::Pixel(op.apply(*point)),
            Shape::Line(line) => Shape::Line(Line::new(op.apply(line.p0), op.apply(line.p1))),
            Shape::Circle(circle) => {
                let radius = match op {
                    Transformation::Scale { sx, sy, .. } => {
                        round_half_up(circle.radius as Scalar * (sx + sy) / 2.0)
                    }
                    _ => circle.radius,
                };
                Shape::Circle(Circle::new(op.apply(circle.center), radius))
            }
            Shape::Ellipse(ellipse) => {
                let (rx, ry) = match op {
                    Transformation::Scale { sx, sy, .. } => (
                        round_half_up(ellipse.rx as Scalar * sx.abs()),
                        round_half_up(ellipse.ry as Scalar * sy.abs()),
                    ),
                    _ => (ellipse.rx, ellipse.ry),
                };
                Shape::Ellipse(Ellipse::new(op.apply(ellipse.center), rx, ry))
            }
            Shape::Bezier(bezier) => Shape::Bezier(Bezier {
                points: map(&bezier.points),
            }),
            Shape::Polyline(polyline) => Shape::Polyline(Polyline {
                points: map(&polyline.points),
            }),
            Shape::Polygon(polygon) => Shape::Polygon(Polygon {
                points: map(&polygon.points),
            }),
        }
    }
}

/// Euclidean distance from `point` to `center` is at most `radius`
pub fn is_inside_circle(point: Point, center: Point, radius: i32) -> bool {
    point.dist(center) <= radius as Scalar
}

/// Point satisfies `(dx / rx)^2 + (dy / ry)^2 <= 1`, always false for non-positive radii
pub fn is_inside_ellipse(point: Point, center: Point, rx: i32, ry: i32) -> bool {
    if rx <= 0 || ry <= 0 {
        return false;
    }
    let dx = (point.x - center.x) as Scalar / rx as Scalar;
    let dy = (point.y - center.y) as Scalar / ry as Scalar;
    dx * dx + dy * dy <= 1.0
}

/// Even-odd ray casting test, polygons with less than three vertices contain nothing
pub fn is_inside_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let (x, y) = point.to_scalar();
    let mut inside = false;
    let mut prev = polygon[polygon.len() - 1];
    for &curr in polygon {
        let (xi, yi) = curr.to_scalar();
        let (xj, yj) = prev.to_scalar();
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        prev = curr;
    }
    inside
}

/// Distance from `point` to the segment is at most `tolerance`
///
/// Projection onto the line is clamped to the segment, zero length segment is
/// treated as a single point.
pub fn is_near_line(point: Point, line: Line, tolerance: Scalar) -> bool {
    let (px, py) = point.to_scalar();
    let (x0, y0) = line.p0.to_scalar();
    let (x1, y1) = line.p1.to_scalar();
    let (dx, dy) = (x1 - x0, y1 - y0);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return point.dist(line.p0) <= tolerance;
    }
    let t = clamp(((px - x0) * dx + (py - y0) * dy) / length_sq, 0.0, 1.0);
    let (nx, ny) = (x0 + t * dx, y0 + t * dy);
    (px - nx).hypot(py - ny) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> Vec<Shape> {
        vec![
            Shape::from(Point::new(4, 7)),
            Line::new((2, 3), (12, 9)).into(),
            Circle::new((10, 10), 4).into(),
            Ellipse::new((9, 8), 5, 2).into(),
            Bezier {
                points: vec![Point::new(1, 1), Point::new(8, 15), Point::new(17, 2)],
            }
            .into(),
            Polyline {
                points: vec![Point::new(3, 3), Point::new(9, 4), Point::new(15, 12)],
            }
            .into(),
            Polygon::rect(Point::new(5, 5), Point::new(12, 9)).into(),
        ]
    }

    #[test]
    fn test_translate_round_trip() {
        for shape in shapes() {
            let moved = shape.transform(Transformation::Translate { dx: 3, dy: -7 });
            assert_ne!(moved, shape);
            let back = moved.transform(Transformation::Translate { dx: -3, dy: 7 });
            assert_eq!(back, shape);
        }
    }

    #[test]
    fn test_rotate_round_trip() {
        let pivot = Point::new(10, 10);
        for shape in shapes() {
            for degrees in [15.0, 45.0, 90.0, 133.0] {
                let op = Transformation::Rotate {
                    degrees,
                    pivot: Some(pivot),
                };
                let inverse = op.inverse().expect("rotation is invertible");
                let back = shape.transform(op).transform(inverse);
                for (p0, p1) in shape.points().iter().zip(back.points()) {
                    assert!(
                        (p0.x - p1.x).abs() <= 1 && (p0.y - p1.y).abs() <= 1,
                        "{:?} -> {:?} at {}",
                        p0,
                        p1,
                        degrees
                    );
                }
            }
        }
    }

    #[test]
    fn test_rotate_point() {
        let pivot = Point::new(5, 5);
        assert_eq!(rotate_point(Point::new(8, 5), 90.0, pivot), Point::new(5, 8));
        assert_eq!(rotate_point(Point::new(8, 5), 180.0, pivot), Point::new(2, 5));
        assert_eq!(rotate_point(Point::new(8, 5), -90.0, pivot), Point::new(5, 2));
        assert_eq!(rotate_point(pivot, 37.0, pivot), pivot);
        // isolated pixel rotates around the origin
        let pixel = Shape::from(Point::new(3, 0)).transform(Transformation::Rotate {
            degrees: 90.0,
            pivot: None,
        });
        assert_eq!(pixel, Shape::Pixel(Point::new(0, 3)));
    }

    #[test]
    fn test_scale() {
        assert_eq!(
            scale_point(Point::new(6, 6), 2.0, 0.5, Point::new(4, 4)),
            Point::new(8, 5)
        );
        let square = Shape::from(Polygon::rect(Point::new(4, 4), Point::new(8, 8)));
        let scaled = square.transform(Transformation::Scale {
            sx: 2.0,
            sy: 2.0,
            fixed: None,
        });
        assert_eq!(
            scaled,
            Shape::from(Polygon::rect(Point::new(2, 2), Point::new(10, 10)))
        );

        let circle = Shape::from(Circle::new((10, 10), 4));
        let scaled = circle.transform(Transformation::Scale {
            sx: 2.0,
            sy: 1.0,
            fixed: None,
        });
        assert_eq!(scaled, Shape::from(Circle::new((10, 10), 6)));

        let ellipse = Shape::from(Ellipse::new((10, 10), 4, 3));
        let scaled = ellipse.transform(Transformation::Scale {
            sx: -1.5,
            sy: 2.0,
            fixed: Some(Point::new(0, 0)),
        });
        assert_eq!(scaled, Shape::from(Ellipse::new((-15, 20), 6, 6)));
        let rotated = ellipse.transform(Transformation::Rotate {
            degrees: 90.0,
            pivot: Some(Point::new(0, 0)),
        });
        assert_eq!(rotated, Shape::from(Ellipse::new((-10, 10), 4, 3)));
    }

    #[test]
    fn test_inside_polygon() {
        let square = Polygon::rect(Point::new(0, 0), Point::new(20, 20));
        assert!(is_inside_polygon(Point::new(10, 10), &square.points));
        assert!(!is_inside_polygon(Point::new(25, 10), &square.points));
        assert!(!is_inside_polygon(
            Point::new(1, 1),
            &[Point::new(0, 0), Point::new(5, 5)]
        ));
        // concave polygon, point inside of the notch
        let notch = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(5, 4),
            Point::new(0, 10),
        ];
        assert!(is_inside_polygon(Point::new(2, 2), &notch));
        assert!(!is_inside_polygon(Point::new(5, 8), &notch));
    }

    #[test]
    fn test_inside_circle_ellipse() {
        let center = Point::new(10, 10);
        assert!(is_inside_circle(Point::new(13, 14), center, 5));
        assert!(is_inside_circle(Point::new(15, 10), center, 5));
        assert!(!is_inside_circle(Point::new(14, 14), center, 5));
        assert!(is_inside_ellipse(Point::new(16, 10), center, 6, 2));
        assert!(!is_inside_ellipse(Point::new(10, 13), center, 6, 2));
        assert!(!is_inside_ellipse(center, center, 0, 2));
    }

    #[test]
    fn test_near_line() {
        let line = Line::new((0, 0), (10, 0));
        assert!(is_near_line(Point::new(5, 1), line, 1.0));
        assert!(!is_near_line(Point::new(5, 2), line, 1.0));
        // projection is clamped to the segment
        assert!(!is_near_line(Point::new(12, 0), line, 1.0));
        assert!(is_near_line(Point::new(11, 0), line, 1.0));
        let point = Line::new((3, 3), (3, 3));
        assert!(is_near_line(Point::new(3, 4), point, 1.0));
        assert!(!is_near_line(Point::new(4, 4), point, 1.0));
    }
}
