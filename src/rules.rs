use crate::{
    grid::{Cell, Grid},
    neighbours,
};

/// B3/S23.
pub fn next_cell(cell: Cell, alive_neighbours: usize) -> Cell {
    match (cell, alive_neighbours) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Computes the next generation into a fresh grid; `grid` is only read.
pub fn step(grid: &Grid) -> Grid {
    let (height, width) = grid.dimensions();
    let cells = grid
        .coordinates()
        .map(|p| next_cell(grid.cell(p), neighbours::count_at(grid, p).alive))
        .collect();
    Grid::from_cells(height, width, cells)
}
