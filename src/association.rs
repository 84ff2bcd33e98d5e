//! Policies deciding which loose pixels travel together with a transformed shape
use crate::{
    BBox, Bezier, Point, Polyline, Scalar, Shape, is_inside_circle, is_inside_ellipse,
    is_inside_polygon, is_near_line,
};

/// Default distance from a line at which a pixel is still associated with it
pub const DEFAULT_LINE_TOLERANCE: Scalar = 1.0;

/// Default number of cells the bounding box of an open curve is expanded by
pub const DEFAULT_BBOX_PADDING: i32 = 2;

/// Decides if a loose pixel belongs to a shape
pub trait AssociationPolicy {
    /// Name of the policy
    fn name(&self) -> &str;

    /// Check if pixel at `point` should be transformed together with `shape`
    fn is_associated(&self, shape: &Shape, point: Point) -> bool;
}

/// Geometric proximity policy
///
/// Closed shapes own the pixels they contain and lines own pixels within
/// `line_tolerance`. Polylines and bezier curves have no interior, so they own
/// every pixel inside of the bounding box of their points expanded by
/// `bbox_padding` cells. That fallback is a heuristic and the padding is meant
/// to be tuned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProximityAssociation {
    pub line_tolerance: Scalar,
    pub bbox_padding: i32,
}

impl Default for ProximityAssociation {
    fn default() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            bbox_padding: DEFAULT_BBOX_PADDING,
        }
    }
}

impl ProximityAssociation {
    fn in_padded_bbox(&self, points: &[Point], point: Point) -> bool {
        BBox::from_points(points)
            .is_some_and(|bbox| bbox.pad(self.bbox_padding).contains(point))
    }
}

impl AssociationPolicy for ProximityAssociation {
    fn name(&self) -> &str {
        "proximity"
    }

    fn is_associated(&self, shape: &Shape, point: Point) -> bool {
        match shape {
            Shape::Pixel(pixel) => *pixel == point,
            Shape::Line(line) => is_near_line(point, *line, self.line_tolerance),
            Shape::Circle(circle) => is_inside_circle(point, circle.center, circle.radius),
            Shape::Ellipse(ellipse) => {
                is_inside_ellipse(point, ellipse.center, ellipse.rx, ellipse.ry)
            }
            Shape::Polygon(polygon) => is_inside_polygon(point, &polygon.points),
            Shape::Bezier(Bezier { points }) | Shape::Polyline(Polyline { points }) => {
                self.in_padded_bbox(points, point)
            }
        }
    }
}

/// Policy that never associates anything, only the shape itself is transformed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssociation;

impl AssociationPolicy for NoAssociation {
    fn name(&self) -> &str {
        "none"
    }

    fn is_associated(&self, _shape: &Shape, _point: Point) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Ellipse, Line, Polygon};

    #[test]
    fn test_proximity() {
        let policy = ProximityAssociation::default();
        let circle = Shape::from(Circle::new((10, 10), 3));
        assert!(policy.is_associated(&circle, Point::new(12, 12)));
        assert!(!policy.is_associated(&circle, Point::new(13, 13)));

        let ellipse = Shape::from(Ellipse::new((10, 10), 5, 1));
        assert!(policy.is_associated(&ellipse, Point::new(14, 10)));
        assert!(!policy.is_associated(&ellipse, Point::new(10, 12)));

        let line = Shape::from(Line::new((0, 0), (10, 10)));
        assert!(policy.is_associated(&line, Point::new(5, 6)));
        assert!(!policy.is_associated(&line, Point::new(5, 8)));

        let polygon = Shape::from(Polygon::rect(Point::new(2, 2), Point::new(8, 8)));
        assert!(policy.is_associated(&polygon, Point::new(5, 5)));
        assert!(!policy.is_associated(&polygon, Point::new(9, 5)));

        let pixel = Shape::from(Point::new(3, 3));
        assert!(policy.is_associated(&pixel, Point::new(3, 3)));
        assert!(!policy.is_associated(&pixel, Point::new(3, 4)));
    }

    #[test]
    fn test_bbox_fallback() {
        let points = vec![Point::new(5, 5), Point::new(8, 12), Point::new(12, 6)];
        let polyline = Shape::from(Polyline {
            points: points.clone(),
        });
        let bezier = Shape::from(Bezier { points });
        let policy = ProximityAssociation::default();
        for shape in [&polyline, &bezier] {
            assert!(policy.is_associated(shape, Point::new(3, 3)));
            assert!(policy.is_associated(shape, Point::new(14, 14)));
            assert!(!policy.is_associated(shape, Point::new(2, 8)));
            assert!(!policy.is_associated(shape, Point::new(8, 15)));
        }
        let tight = ProximityAssociation {
            bbox_padding: 0,
            ..ProximityAssociation::default()
        };
        assert!(!tight.is_associated(&polyline, Point::new(4, 5)));
        assert!(tight.is_associated(&polyline, Point::new(12, 12)));

        let empty = Shape::from(Polyline { points: Vec::new() });
        assert!(!policy.is_associated(&empty, Point::new(0, 0)));
        assert!(!NoAssociation.is_associated(&polyline, Point::new(8, 8)));
    }
}
