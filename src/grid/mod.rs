use crate::error::GridError;

/// A rectangular occupancy grid of binary cells.
///
/// Cells are addressed as `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`; `y` grows "up" (towards +Z once meshed).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Column-major storage: index `x * height + y`.
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an empty (all cells unfilled) grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, false)
    }

    /// Creates a grid with every cell set to `filled`.
    #[must_use]
    pub fn filled(width: usize, height: usize, filled: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![filled; width * height],
        }
    }

    /// Builds a grid from `cells[x][y]` integer values (`0` empty, `1` filled).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedColumns`] if the columns differ in length, or
    /// [`GridError::InvalidCellValue`] for any value other than 0 or 1.
    pub fn from_cells<R: AsRef<[i32]>>(cells: &[R]) -> Result<Self, GridError> {
        let width = cells.len();
        let height = cells.first().map_or(0, |c| c.as_ref().len());
        let mut grid = Self::new(width, height);

        for (x, column) in cells.iter().enumerate() {
            let column = column.as_ref();
            if column.len() != height {
                return Err(GridError::RaggedColumns {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, &value) in column.iter().enumerate() {
                grid.cells[x * height + y] = match value {
                    0 => false,
                    1 => true,
                    _ => return Err(GridError::InvalidCellValue { x, y, value }),
                };
            }
        }

        Ok(grid)
    }

    /// Builds a grid by classifying every cell with `predicate(x, y)`.
    ///
    /// This is the hook for image-derived grids: decode the pixels elsewhere
    /// and pass a predicate such as "pixel is pure black".
    pub fn from_fn<F>(width: usize, height: usize, mut predicate: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                cells.push(predicate(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Parses an ASCII picture: `#` is filled, any other character is empty.
    ///
    /// The first non-blank line is the top row (highest `y`). Surrounding
    /// whitespace on each line is ignored and short lines are padded with
    /// empty cells up to the longest line.
    #[must_use]
    pub fn from_ascii(text: &str) -> Self {
        let rows: Vec<&[u8]> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

        Self::from_fn(width, height, |x, y| {
            rows[height - 1 - y].get(x).is_some_and(|&c| c == b'#')
        })
    }

    /// Number of cells along X.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along Y.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the state of cell `(x, y)`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns `true` if `(x, y)` is inside the grid and filled.
    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Sets a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) -> Result<(), GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = filled;
        Ok(())
    }

    /// Sets every listed cell to `filled`.
    ///
    /// All coordinates are checked before any cell changes, so a failed call
    /// leaves the grid untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for the first coordinate outside the grid.
    pub fn paint(&mut self, cells: &[(usize, usize)], filled: bool) -> Result<(), GridError> {
        let indices = cells
            .iter()
            .map(|&(x, y)| self.checked_index(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        for i in indices {
            self.cells[i] = filled;
        }
        Ok(())
    }

    /// Returns a copy with the `y` order reversed (mirrored across the X axis).
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            self.cells[x * self.height + (self.height - 1 - y)]
        })
    }

    /// Returns a copy wrapped in a one-cell ring of filled cells.
    #[must_use]
    pub fn with_border(&self) -> Self {
        Self::from_fn(self.width + 2, self.height + 2, |x, y| {
            if x == 0 || y == 0 || x > self.width || y > self.height {
                true
            } else {
                self.cells[(x - 1) * self.height + (y - 1)]
            }
        })
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}
