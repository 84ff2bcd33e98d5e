//! Flood fill engines
//!
//! Both engines flip every 4-connected cell reachable from the seed that has the
//! same state as the seed, and always produce identical results. They differ only
//! in the order cells are visited and in the amount of work stored on the stack.
use crate::{Grid, PixelSet, Point};

/// Flood fill algorithm
pub trait FloodFill {
    /// Name of the engine
    fn name(&self) -> &str;

    /// Flip every cell with state `target` reachable from `seed`
    ///
    /// Caller guarantees that `seed` is inside of the grid and has state `target`.
    fn flood(&self, seed: Point, grid: Grid, target: bool, pixels: &mut PixelSet);

    /// Paint region containing `seed` with `color` (`true` is filled)
    ///
    /// Returns unchanged copy of `pixels` if the seed is outside of the grid or
    /// already has requested color.
    fn fill_with(&self, seed: Point, pixels: &PixelSet, grid: Grid, color: bool) -> PixelSet {
        let mut result = pixels.clone();
        if !grid.contains(seed) {
            tracing::trace!(?seed, ?grid, "[fill] seed outside of the grid");
            return result;
        }
        if pixels.contains(seed) == color {
            tracing::trace!(?seed, color, "[fill] seed already has requested color");
            return result;
        }
        self.flood(seed, grid, !color, &mut result);
        tracing::debug!(
            engine = self.name(),
            ?seed,
            before = pixels.len(),
            after = result.len(),
            "[fill]"
        );
        result
    }

    /// Toggle region containing `seed`: empty region is filled, filled region is cleared
    fn fill(&self, seed: Point, pixels: &PixelSet, grid: Grid) -> PixelSet {
        self.fill_with(seed, pixels, grid, !pixels.contains(seed))
    }
}

#[inline]
fn is_target(grid: Grid, pixels: &PixelSet, point: Point, target: bool) -> bool {
    grid.contains(point) && pixels.contains(point) == target
}

/// Reference flood fill with an explicit stack of cells
#[derive(Debug, Clone, Copy, Default)]
pub struct StackFill;

impl FloodFill for StackFill {
    fn name(&self) -> &str {
        "stack"
    }

    fn flood(&self, seed: Point, grid: Grid, target: bool, pixels: &mut PixelSet) {
        let mut stack = vec![seed];
        while let Some(point) = stack.pop() {
            if !is_target(grid, pixels, point, target) {
                continue;
            }
            pixels.set(point, !target);
            let Point { x, y } = point;
            stack.extend([
                Point::new(x + 1, y),
                Point::new(x - 1, y),
                Point::new(x, y + 1),
                Point::new(x, y - 1),
            ]);
        }
    }
}

/// Span based flood fill
///
/// Flips maximal horizontal runs at once and pushes only one seed per
/// contiguous run in the rows above and below.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineFill;

impl ScanlineFill {
    /// Push one seed for every contiguous target span of row `y` within `[x0, x1]`
    fn push_spans(
        stack: &mut Vec<Point>,
        grid: Grid,
        pixels: &PixelSet,
        target: bool,
        x0: i32,
        x1: i32,
        y: i32,
    ) {
        if y < 0 || y >= grid.size() {
            return;
        }
        let mut in_span = false;
        for x in x0..=x1 {
            let point = Point::new(x, y);
            if is_target(grid, pixels, point, target) {
                if !in_span {
                    stack.push(point);
                    in_span = true;
                }
            } else {
                in_span = false;
            }
        }
    }
}

impl FloodFill for ScanlineFill {
    fn name(&self) -> &str {
        "scanline"
    }

    fn flood(&self, seed: Point, grid: Grid, target: bool, pixels: &mut PixelSet) {
        let mut stack = vec![seed];
        while let Some(point) = stack.pop() {
            // cell might have been flipped by another span since it was pushed
            if !is_target(grid, pixels, point, target) {
                continue;
            }
            let y = point.y;
            let mut x0 = point.x;
            while is_target(grid, pixels, Point::new(x0 - 1, y), target) {
                x0 -= 1;
            }
            let mut x1 = point.x;
            while is_target(grid, pixels, Point::new(x1 + 1, y), target) {
                x1 += 1;
            }
            for x in x0..=x1 {
                pixels.set(Point::new(x, y), !target);
            }
            Self::push_spans(&mut stack, grid, pixels, target, x0, x1, y - 1);
            Self::push_spans(&mut stack, grid, pixels, target, x0, x1, y + 1);
        }
    }
}

/// All available flood fill engines
pub fn fill_engines() -> impl Iterator<Item = Box<dyn FloodFill>> {
    let f0: Box<dyn FloodFill> = Box::new(StackFill);
    let f1: Box<dyn FloodFill> = Box::new(ScanlineFill);
    Some(f0).into_iter().chain(Some(f1))
}
