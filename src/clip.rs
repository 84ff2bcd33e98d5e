//! Clipping of lines and polygons against an axis aligned rectangle
use crate::{ClipRect, EPSILON, Line, Point, Scalar};

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Cohen-Sutherland region code of a point relative to the rectangle
fn outcode(x: Scalar, y: Scalar, rect: &ClipRect) -> u8 {
    let mut code = INSIDE;
    if x < rect.xmin as Scalar {
        code |= LEFT;
    } else if x > rect.xmax as Scalar {
        code |= RIGHT;
    }
    if y < rect.ymin as Scalar {
        code |= BOTTOM;
    } else if y > rect.ymax as Scalar {
        code |= TOP;
    }
    code
}

/// Clip line segment against the rectangle with the Cohen-Sutherland algorithm
///
/// Returns `None` if the segment does not intersect the rectangle or the
/// rectangle is invalid. Endpoints keep their order and are rounded to the
/// nearest cell.
pub fn clip_line(line: Line, rect: ClipRect) -> Option<Line> {
    if !rect.is_valid() {
        tracing::trace!(?rect, "[clip_line] invalid rectangle");
        return None;
    }
    let (mut x0, mut y0) = line.p0.to_scalar();
    let (mut x1, mut y1) = line.p1.to_scalar();
    let mut code0 = outcode(x0, y0, &rect);
    let mut code1 = outcode(x1, y1, &rect);
    loop {
        if code0 | code1 == INSIDE {
            return Some(Line::new(Point::round(x0, y0), Point::round(x1, y1)));
        }
        if code0 & code1 != INSIDE {
            return None;
        }

        let code = if code0 != INSIDE { code0 } else { code1 };
        let (px, py) = if code0 != INSIDE { (x0, y0) } else { (x1, y1) };
        let dx = x1 - x0;
        let dy = y1 - y0;
        let (x, y) = if code & TOP != 0 {
            let y = rect.ymax as Scalar;
            (at_y(x0, y0, dx, dy, y, px), y)
        } else if code & BOTTOM != 0 {
            let y = rect.ymin as Scalar;
            (at_y(x0, y0, dx, dy, y, px), y)
        } else if code & RIGHT != 0 {
            let x = rect.xmax as Scalar;
            (x, at_x(x0, y0, dx, dy, x, py))
        } else {
            let x = rect.xmin as Scalar;
            (x, at_x(x0, y0, dx, dy, x, py))
        };

        if code == code0 {
            x0 = x;
            y0 = y;
            code0 = outcode(x0, y0, &rect);
        } else {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1, &rect);
        }
    }
}

/// `x` coordinate of the line at height `y`, keeps `fallback` for horizontal lines
#[inline]
fn at_y(x0: Scalar, y0: Scalar, dx: Scalar, dy: Scalar, y: Scalar, fallback: Scalar) -> Scalar {
    if dy.abs() < EPSILON {
        fallback
    } else {
        x0 + dx * (y - y0) / dy
    }
}

/// `y` coordinate of the line at `x`, keeps `fallback` for vertical lines
#[inline]
fn at_x(x0: Scalar, y0: Scalar, dx: Scalar, dy: Scalar, x: Scalar, fallback: Scalar) -> Scalar {
    if dx.abs() < EPSILON {
        fallback
    } else {
        y0 + dy * (x - x0) / dx
    }
}

/// Half-plane bounded by one side of the clip rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plane {
    /// `y >= ymin`
    Top(i32),
    /// `y <= ymax`
    Bottom(i32),
    /// `x >= xmin`
    Left(i32),
    /// `x <= xmax`
    Right(i32),
}

impl Plane {
    fn contains(self, point: Point) -> bool {
        match self {
            Plane::Top(ymin) => point.y >= ymin,
            Plane::Bottom(ymax) => point.y <= ymax,
            Plane::Left(xmin) => point.x >= xmin,
            Plane::Right(xmax) => point.x <= xmax,
        }
    }

    /// Intersection of the segment with the plane boundary, rounded to a cell
    fn intersect(self, p0: Point, p1: Point) -> Point {
        let (x0, y0) = p0.to_scalar();
        let (x1, y1) = p1.to_scalar();
        let (dx, dy) = (x1 - x0, y1 - y0);
        match self {
            Plane::Top(y) | Plane::Bottom(y) => {
                let y = y as Scalar;
                Point::round(at_y(x0, y0, dx, dy, y, x0), y)
            }
            Plane::Left(x) | Plane::Right(x) => {
                let x = x as Scalar;
                Point::round(x, at_x(x0, y0, dx, dy, x, y0))
            }
        }
    }

    /// Single Sutherland-Hodgman pass over a closed vertex list
    fn clip(self, points: &[Point]) -> Vec<Point> {
        if let [point] = points {
            return if self.contains(*point) {
                vec![*point]
            } else {
                Vec::new()
            };
        }
        let mut output = Vec::with_capacity(points.len() + 2);
        let Some(mut prev) = points.last().copied() else {
            return output;
        };
        for &curr in points {
            match (self.contains(prev), self.contains(curr)) {
                (true, true) => output.push(curr),
                (true, false) => output.push(self.intersect(prev, curr)),
                (false, true) => {
                    output.push(self.intersect(prev, curr));
                    output.push(curr);
                }
                (false, false) => {}
            }
            prev = curr;
        }
        output
    }
}

/// Clip closed polygon against the rectangle with the Sutherland-Hodgman algorithm
///
/// Planes are processed in the order top, bottom, left, right and vertices are
/// rounded after every pass. Polygons with less than three vertices, invalid
/// rectangles and results with less than three vertices produce an empty list.
pub fn clip_polygon(points: &[Point], rect: ClipRect) -> Vec<Point> {
    if points.len() < 3 || !rect.is_valid() {
        tracing::trace!(count = points.len(), ?rect, "[clip_polygon] degenerate input");
        return Vec::new();
    }
    let planes = [
        Plane::Top(rect.ymin),
        Plane::Bottom(rect.ymax),
        Plane::Left(rect.xmin),
        Plane::Right(rect.xmax),
    ];
    let mut output = points.to_vec();
    for plane in planes {
        output = plane.clip(&output);
        if output.is_empty() {
            break;
        }
    }
    if output.len() < 3 {
        output.clear();
    }
    output
}
