//! Character grid with integer coordinates

/// Background character
pub const BLANK: char = ' ';

/// Default foreground character
pub const INK: char = '*';

/// Fixed-size character framebuffer
///
/// Coordinates are discrete: `x` is the column, `y` the row, origin top-left.
/// Writes outside the grid are ignored so callers can stamp rounded
/// coordinates without clipping them first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Cell data (row-major)
    cells: Vec<char>,
}

impl Grid {
    /// Create a blank grid with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        tracing::trace!(width, height, "allocating grid");
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    /// Create a blank square grid
    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Get cell at coordinates
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at coordinates, returns false when clipped
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, ch: char) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = ch;
                true
            }
            None => false,
        }
    }

    /// Mark a cell with the ink character
    #[inline]
    pub fn plot(&mut self, x: i64, y: i64) -> bool {
        self.set(x, y, INK)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on zero, an empty grid simply has no rows
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Number of cells holding anything but the blank character
    pub fn count_marked(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLANK).count()
    }

    /// Flatten into newline-terminated rows
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

/// Join rows with a newline after each one
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(10, 5);
        assert_eq!(grid.width, 10);
        assert_eq!(grid.height, 5);
        assert_eq!(grid.cells.len(), 50);
        assert_eq!(grid.count_marked(), 0);
    }

    #[test]
    fn test_set_get_cell() {
        let mut grid = Grid::square(4);
        assert!(grid.set(2, 1, '/'));
        assert_eq!(grid.get(2, 1), Some('/'));
        assert_eq!(grid.get(1, 2), Some(BLANK));
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut grid = Grid::square(3);
        assert!(!grid.plot(-1, 0));
        assert!(!grid.plot(0, 3));
        assert!(!grid.plot(3, 0));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.count_marked(), 0);
    }

    #[test]
    fn test_to_text() {
        let mut grid = Grid::new(3, 2);
        grid.plot(0, 0);
        grid.plot(2, 1);
        assert_eq!(grid.to_text(), "*  \n  *\n");
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(["a", "bb"]), "a\nbb\n");
        assert_eq!(join_lines(Vec::<String>::new()), "");
    }
}
