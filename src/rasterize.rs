//! Scan conversion of shapes into grid cells
//!
//! All rasterizers drop cells that are outside of the grid and never produce
//! duplicates, since the output is a [`PixelSet`].
use crate::{
    Bezier, Circle, Ellipse, Grid, Line, PixelSet, Point, Polygon, Polyline, Shape,
    evaluate_bezier, rasterize_ellipse, shape::closed_edges,
};

/// Default number of samples taken along a bezier curve
pub const DEFAULT_BEZIER_STEPS: usize = 100;

/// Externally configurable rasterization options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterOptions {
    /// Number of samples along a bezier curve
    pub steps: usize,
    /// Bounding extent for coordinate validity
    pub grid: Grid,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_BEZIER_STEPS,
            grid: Grid::default(),
        }
    }
}

/// Iterator over cells of a line produced by Bresenham's algorithm
///
/// Cells are produced from `p0` to `p1` using only integer arithmetic. The error
/// term is kept in `i64` so any pair of `i32` endpoints is valid.
#[derive(Debug, Clone)]
pub struct LineIter {
    current: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LineIter {
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = (p1.x as i64 - p0.x as i64).abs();
        let dy = -(p1.y as i64 - p0.y as i64).abs();
        Self {
            current: p0,
            end: p1,
            dx,
            dy,
            sx: if p0.x < p1.x { 1 } else { -1 },
            sy: if p0.y < p1.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LineIter {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.current.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let dx = (self.end.x as i64 - self.current.x as i64).unsigned_abs() as usize;
        let dy = (self.end.y as i64 - self.current.y as i64).unsigned_abs() as usize;
        (dx.max(dy) + 1, Some(dx + dy + 1))
    }
}

/// Cells of the line ordered from `p0` to `p1`
///
/// The line is always traced from the smaller endpoint, so `line_points(a, b)`
/// is exactly `line_points(b, a)` reversed.
pub fn line_points(p0: Point, p1: Point) -> Vec<Point> {
    if p0 <= p1 {
        LineIter::new(p0, p1).collect()
    } else {
        let mut points: Vec<_> = LineIter::new(p1, p0).collect();
        points.reverse();
        points
    }
}

/// Rasterize line segment with Bresenham's algorithm
pub fn rasterize_line(p0: Point, p1: Point, grid: Grid) -> PixelSet {
    let mut pixels = PixelSet::new();
    line_into(p0, p1, grid, &mut pixels);
    pixels
}

fn line_into(p0: Point, p1: Point, grid: Grid, out: &mut PixelSet) {
    let size = grid.size();
    if (p0.x < 0 && p1.x < 0)
        || (p0.y < 0 && p1.y < 0)
        || (p0.x >= size && p1.x >= size)
        || (p0.y >= size && p1.y >= size)
    {
        return;
    }
    let (start, end) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
    // grid is convex, once the line leaves it it never comes back
    let mut entered = false;
    for point in LineIter::new(start, end) {
        if grid.contains(point) {
            entered = true;
            out.insert(point);
        } else if entered {
            break;
        }
    }
}

/// Rasterize circle outline with midpoint algorithm
///
/// Non-positive radius produces an empty set.
pub fn rasterize_circle(center: Point, radius: i32, grid: Grid) -> PixelSet {
    let mut pixels = PixelSet::new();
    if radius <= 0 {
        tracing::trace!(?center, radius, "[circle] degenerate radius");
        return pixels;
    }

    let mut symmetric = |x: i32, y: i32| {
        for (dx, dy) in [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ] {
            pixels.insert_in(grid, Point::new(center.x + dx, center.y + dy));
        }
    };

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    symmetric(x, y);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        symmetric(x, y);
    }
    pixels
}

/// Types that can be converted into grid cells
pub trait Rasterize {
    /// Add cells covered by self to `out`
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet);

    /// Cells covered by self
    fn rasterize(&self, options: RasterOptions) -> PixelSet {
        let mut pixels = PixelSet::new();
        self.rasterize_into(options, &mut pixels);
        pixels
    }
}

impl Rasterize for Point {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        out.insert_in(options.grid, *self);
    }
}

impl Rasterize for Line {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        line_into(self.p0, self.p1, options.grid, out);
    }
}

impl Rasterize for Circle {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        out.union(&rasterize_circle(self.center, self.radius, options.grid));
    }
}

impl Rasterize for Ellipse {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        out.union(&rasterize_ellipse(
            self.center,
            self.rx,
            self.ry,
            options.grid,
        ));
    }
}

impl Rasterize for Bezier {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        out.union(&evaluate_bezier(&self.points, options.steps, options.grid));
    }
}

impl Rasterize for Polyline {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        polygon_outline_into(&self.points, options.grid, out);
    }
}

impl Rasterize for Polygon {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        polygon_outline_into(&self.points, options.grid, out);
    }
}

/// Outline of a closed vertex list, single vertex produces single cell
pub(crate) fn polygon_outline_into(points: &[Point], grid: Grid, out: &mut PixelSet) {
    for edge in closed_edges(points) {
        line_into(edge.p0, edge.p1, grid, out);
    }
}

impl Rasterize for Shape {
    fn rasterize_into(&self, options: RasterOptions, out: &mut PixelSet) {
        match self {
            Shape::Pixel(point) => point.rasterize_into(options, out),
            Shape::Line(line) => line.rasterize_into(options, out),
            Shape::Circle(circle) => circle.rasterize_into(options, out),
            Shape::Ellipse(ellipse) => ellipse.rasterize_into(options, out),
            Shape::Bezier(bezier) => bezier.rasterize_into(options, out),
            Shape::Polyline(polyline) => polyline.rasterize_into(options, out),
            Shape::Polygon(polygon) => polygon.rasterize_into(options, out),
        }
    }
}
