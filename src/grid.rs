use std::ops::Not;

use itertools::Itertools;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl Not for Cell {
    type Output = Cell;

    fn not(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },
}

/// A fixed-size `height × width` board of cells, stored row-major.
///
/// Coordinates are `(row, col)`. The checked accessors take `isize` so that a
/// caller holding `(-1, 0)` gets an [`GridError::OutOfBounds`] back instead of
/// an unrepresentable value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(height: usize, width: usize, fill: Cell) -> Self {
        Self {
            height,
            width,
            cells: vec![fill; area(height, width)],
        }
    }

    /// The cleared board. Every cell is written independently.
    pub fn dead(height: usize, width: usize) -> Self {
        Self::new(height, width, Cell::Dead)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: isize, col: isize) -> Result<Cell, GridError> {
        let i = self.index(row, col)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    pub fn toggle(&mut self, row: isize, col: isize) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        log::trace!("toggled ({row}, {col}) to {:?}", self.cells[i]);
        Ok(())
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.coordinates().zip(self.cells.iter().copied())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    pub fn contains(&self, (row, col): (isize, isize)) -> bool {
        usize::try_from(row).is_ok_and(|row| row < self.height)
            && usize::try_from(col).is_ok_and(|col| col < self.width)
    }
}

impl Grid {
    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), area(height, width), "cell count must match dimensions");
        Self {
            height,
            width,
            cells,
        }
    }

    pub(crate) fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).cartesian_product(0..self.width)
    }

    /// Reads a coordinate that is known to be in bounds.
    pub(crate) fn cell(&self, (row, col): (usize, usize)) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Moves `p` by `(dy, dx)`, or `None` if that leaves the board.
    pub(crate) fn offset(
        &self,
        (row, col): (usize, usize),
        (dy, dx): (isize, isize),
    ) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(dy).filter(|&row| row < self.height)?;
        let col = col.checked_add_signed(dx).filter(|&col| col < self.width)?;
        Some((row, col))
    }

    pub(crate) fn checked(&self, row: isize, col: isize) -> Result<(usize, usize), GridError> {
        if !self.contains((row, col)) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok((row as usize, col as usize))
    }

    fn index(&self, row: isize, col: isize) -> Result<usize, GridError> {
        let (row, col) = self.checked(row, col)?;
        Ok(row * self.width + col)
    }
}

/// Number of cells in a `height × width` board.
///
/// Panics when the product overflows `usize`, as `Vec` does on capacity overflow.
pub(crate) fn area(height: usize, width: usize) -> usize {
    height
        .checked_mul(width)
        .unwrap_or_else(|| panic!("grid of {height}x{width} cells overflows usize"))
}
