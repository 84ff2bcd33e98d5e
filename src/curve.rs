//! Bezier curves of arbitrary degree evaluated in Bernstein form
use crate::{Grid, PixelSet, Point, Scalar, utils::binomial};

/// Evaluate bezier curve defined by control `points` at parameter value `t` in (0.0..=1.0)
///
/// `B(t) = Σ C(n, i) (1 - t)^(n - i) t^i P_i`, returns `None` if there are no points.
pub fn bezier_at(points: &[Point], t: Scalar) -> Option<(Scalar, Scalar)> {
    let n = points.len().checked_sub(1)?;
    let s = 1.0 - t;
    let mut x = 0.0;
    let mut y = 0.0;
    for (i, point) in points.iter().enumerate() {
        let basis = binomial(n, i) * s.powi((n - i) as i32) * t.powi(i as i32);
        x += basis * point.x as Scalar;
        y += basis * point.y as Scalar;
    }
    Some((x, y))
}

/// Iterator over `steps + 1` rounded samples of the curve at evenly spaced `t`
///
/// The first and the last samples are exactly the first and the last control points.
pub struct BezierIter<'a> {
    points: &'a [Point],
    steps: usize,
    index: usize,
}

impl<'a> BezierIter<'a> {
    pub fn new(points: &'a [Point], steps: usize) -> Self {
        Self {
            points,
            steps: steps.max(1),
            index: 0,
        }
    }
}

impl Iterator for BezierIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.steps {
            return None;
        }
        let t = self.index as Scalar / self.steps as Scalar;
        self.index += 1;
        let (x, y) = bezier_at(self.points, t)?;
        Some(Point::round(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = if self.points.is_empty() {
            0
        } else {
            (self.steps + 1).saturating_sub(self.index)
        };
        (size, Some(size))
    }
}

/// Sample bezier curve with `steps` segments and collect cells inside of the grid
///
/// Less than two control points produce an empty set, `steps == 0` is treated as one.
pub fn evaluate_bezier(points: &[Point], steps: usize, grid: Grid) -> PixelSet {
    let mut pixels = PixelSet::new();
    if points.len() < 2 {
        tracing::trace!(count = points.len(), "[bezier] not enough control points");
        return pixels;
    }
    for point in BezierIter::new(points, steps) {
        pixels.insert_in(grid, point);
    }
    pixels
}
