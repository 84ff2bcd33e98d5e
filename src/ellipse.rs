use crate::{Grid, PixelSet, Point, Scalar};

/// Rasterize axis aligned ellipse outline with the two region midpoint algorithm
///
/// Region 1 walks along `x` while the slope of the curve is shallower than one,
/// region 2 continues along `y` until the major axis is reached. Decision
/// variables are kept as scalars, only the produced cells are integers.
/// Any non-positive radius produces an empty set.
pub fn rasterize_ellipse(center: Point, rx: i32, ry: i32, grid: Grid) -> PixelSet {
    let mut pixels = PixelSet::new();
    if rx <= 0 || ry <= 0 {
        tracing::trace!(?center, rx, ry, "[ellipse] degenerate radius");
        return pixels;
    }

    let mut symmetric = |x: i32, y: i32| {
        for (dx, dy) in [(x, y), (-x, y), (x, -y), (-x, -y)] {
            pixels.insert_in(grid, Point::new(center.x + dx, center.y + dy));
        }
    };

    let rx2 = (rx as Scalar).powi(2);
    let ry2 = (ry as Scalar).powi(2);
    let mut x = 0;
    let mut y = ry;
    let mut dx = 2.0 * ry2 * x as Scalar;
    let mut dy = 2.0 * rx2 * y as Scalar;

    // region 1
    let mut d1 = ry2 - rx2 * ry as Scalar + 0.25 * rx2;
    symmetric(x, y);
    while dx < dy {
        x += 1;
        dx += 2.0 * ry2;
        if d1 < 0.0 {
            d1 += dx + ry2;
        } else {
            y -= 1;
            dy -= 2.0 * rx2;
            d1 += dx - dy + ry2;
        }
        symmetric(x, y);
    }

    // region 2
    let mut d2 = ry2 * (x as Scalar + 0.5).powi(2) + rx2 * ((y - 1) as Scalar).powi(2)
        - rx2 * ry2;
    // the last step lands on `y = -1`, its mirror closes the ends of the major axis
    while y >= 0 {
        y -= 1;
        dy -= 2.0 * rx2;
        if d2 > 0.0 {
            d2 += rx2 - dy;
        } else {
            x += 1;
            dx += 2.0 * ry2;
            d2 += dx - dy + rx2;
        }
        symmetric(x, y);
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterize_circle;

    #[test]
    fn test_ellipse_degenerate() {
        let grid = Grid::default();
        assert!(rasterize_ellipse(Point::new(5, 5), 0, 3, grid).is_empty());
        assert!(rasterize_ellipse(Point::new(5, 5), 3, -1, grid).is_empty());
    }

    #[test]
    fn test_ellipse_unit() {
        // every step is mirrored, including the final one below the major axis
        let pixels = rasterize_ellipse(Point::new(5, 5), 1, 1, Grid::default());
        let expected: PixelSet = Grid(11)
            .cells()
            .filter(|p| *p != Point::new(5, 5) && (p.x - 5).abs() <= 1 && (p.y - 5).abs() <= 1)
            .collect();
        assert_eq!(expected.len(), 8);
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_ellipse_small() {
        let pixels = rasterize_ellipse(Point::new(10, 10), 3, 2, Grid::default());
        let expected: PixelSet = [
            (7, 9),
            (7, 10),
            (7, 11),
            (8, 9),
            (8, 11),
            (9, 8),
            (9, 12),
            (10, 8),
            (10, 12),
            (11, 8),
            (11, 12),
            (12, 9),
            (12, 11),
            (13, 9),
            (13, 10),
            (13, 11),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_ellipse_symmetry_and_extent() {
        let grid = Grid(40);
        let center = Point::new(20, 20);
        for (rx, ry) in [(6, 3), (3, 6), (9, 2), (5, 5), (12, 7)] {
            let pixels = rasterize_ellipse(center, rx, ry, grid);
            assert!(pixels.contains(Point::new(center.x, center.y + ry)));
            assert!(pixels.contains(Point::new(center.x, center.y - ry)));
            assert!(pixels.contains(Point::new(center.x + rx, center.y)));
            assert!(pixels.contains(Point::new(center.x - rx, center.y)));
            for p in pixels.iter() {
                let (x, y) = (p.x - center.x, p.y - center.y);
                assert!(x.abs() <= rx && y.abs() <= ry, "{:?} outside {}x{}", p, rx, ry);
                for (dx, dy) in [(-x, y), (x, -y), (-x, -y)] {
                    assert!(pixels.contains(Point::new(center.x + dx, center.y + dy)));
                }
            }
        }
    }

    #[test]
    fn test_ellipse_grid_boundary() {
        let grid = Grid::default();
        let circle = rasterize_ellipse(Point::new(0, 0), 4, 4, grid);
        assert!(!circle.is_empty());
        assert!(circle.iter().all(|p| p.x >= 0 && p.y >= 0));
        // both outlines stay close to the ideal circle
        let reference = rasterize_circle(Point::new(0, 0), 4, grid);
        for p in circle.iter().chain(reference.iter()) {
            let r = Point::new(0, 0).dist(p);
            assert!((r - 4.0).abs() < 1.0, "{:?} is too far from the circle", p);
        }
    }
}
