//! Set of grid cells produced by rasterizers and consumed by flood fills
use crate::{Grid, Point};
use std::{collections::HashSet, fmt};

/// Unordered set of unique grid cells
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PixelSet {
    cells: HashSet<Point>,
}

impl PixelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells in the set
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if the cell is filled
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// Fill cell, returns `true` if it was not filled before
    #[inline]
    pub fn insert(&mut self, point: Point) -> bool {
        self.cells.insert(point)
    }

    /// Clear cell, returns `true` if it was filled before
    #[inline]
    pub fn remove(&mut self, point: Point) -> bool {
        self.cells.remove(&point)
    }

    /// Set cell to the provided state
    #[inline]
    pub fn set(&mut self, point: Point, filled: bool) {
        if filled {
            self.cells.insert(point);
        } else {
            self.cells.remove(&point);
        }
    }

    /// Insert cell only if it is inside of the grid
    #[inline]
    pub fn insert_in(&mut self, grid: Grid, point: Point) -> bool {
        grid.contains(point) && self.cells.insert(point)
    }

    /// Add all cells of the other set
    pub fn union(&mut self, other: &PixelSet) -> &mut Self {
        self.cells.extend(other.cells.iter().copied());
        self
    }

    /// Keep only the cells for which predicate returns `true`
    pub fn retain(&mut self, pred: impl FnMut(&Point) -> bool) {
        self.cells.retain(pred)
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }

    /// Cells sorted in row-major order, useful for stable output
    pub fn sorted(&self) -> Vec<Point> {
        let mut cells: Vec<_> = self.iter().collect();
        cells.sort_by_key(|p| (p.y, p.x));
        cells
    }

    /// Text view of the set inside of the grid, `#` is a filled cell and `.` is empty
    ///
    /// Row `y = 0` is printed first.
    pub fn ascii(&self, grid: Grid) -> AsciiGrid<'_> {
        AsciiGrid { pixels: self, grid }
    }
}

impl fmt::Debug for PixelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sorted()).finish()
    }
}

impl FromIterator<Point> for PixelSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PixelSet {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.cells.extend(iter)
    }
}

impl IntoIterator for PixelSet {
    type Item = Point;
    type IntoIter = std::collections::hash_set::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::collections::hash_set::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// Helper returned by [`PixelSet::ascii`]
pub struct AsciiGrid<'a> {
    pixels: &'a PixelSet,
    grid: Grid,
}

impl fmt::Display for AsciiGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.size() {
            for x in 0..self.grid.size() {
                let cell = if self.pixels.contains(Point::new(x, y)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_set() {
        let mut set: PixelSet = [(1, 1), (0, 2), (1, 1)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Point::new(1, 1)));
        assert!(!set.insert(Point::new(0, 2)));
        assert!(!set.insert_in(Grid(3), Point::new(3, 0)));
        set.set(Point::new(1, 1), false);
        assert_eq!(set.sorted(), vec![Point::new(0, 2)]);

        let other: PixelSet = [Point::new(2, 2)].into_iter().collect();
        set.union(&other);
        assert_eq!(set.len(), 2);
        assert_eq!(format!("{:?}", set), "{0,2, 2,2}");
    }

    #[test]
    fn test_ascii() {
        let set: PixelSet = [Point::new(0, 0), Point::new(2, 1)].into_iter().collect();
        assert_eq!(set.ascii(Grid(3)).to_string(), "#..\n..#\n...\n");
    }
}
