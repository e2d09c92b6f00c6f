use itertools::Itertools;

use crate::grid::{Cell, Grid, GridError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighbourCount {
    pub alive: usize,
    pub dead: usize,
}

impl NeighbourCount {
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }
}

/// The Moore neighbourhood of `(row, col)` clipped to the board.
pub fn neighbours(
    grid: &Grid,
    row: isize,
    col: isize,
) -> Result<impl Iterator<Item = (usize, usize)> + '_, GridError> {
    let p = grid.checked(row, col)?;
    Ok(moore(grid, p))
}

pub fn count(grid: &Grid, row: isize, col: isize) -> Result<NeighbourCount, GridError> {
    let p = grid.checked(row, col)?;
    Ok(count_at(grid, p))
}

pub(crate) fn count_at(grid: &Grid, p: (usize, usize)) -> NeighbourCount {
    moore(grid, p).fold(NeighbourCount::default(), |mut n, q| {
        match grid.cell(q) {
            Cell::Alive => n.alive += 1,
            Cell::Dead => n.dead += 1,
        }
        n
    })
}

fn moore(grid: &Grid, p: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .filter_map(move |d| grid.offset(p, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbourhood_size(grid: &Grid, row: isize, col: isize) -> usize {
        count(grid, row, col).unwrap().total()
    }

    #[test]
    fn test_sizes() {
        let grid = Grid::dead(4, 5);
        for (row, col) in [(0, 0), (0, 4), (3, 0), (3, 4)] {
            assert_eq!(neighbourhood_size(&grid, row, col), 3);
        }
        for (row, col) in [(0, 1), (0, 3), (3, 2), (1, 0), (2, 4)] {
            assert_eq!(neighbourhood_size(&grid, row, col), 5);
        }
        for (row, col) in [(1, 1), (2, 3), (1, 2)] {
            assert_eq!(neighbourhood_size(&grid, row, col), 8);
        }
    }

    #[test]
    fn test_thin_grids() {
        assert_eq!(neighbourhood_size(&Grid::dead(1, 1), 0, 0), 0);
        assert_eq!(neighbourhood_size(&Grid::dead(1, 3), 0, 1), 2);
        assert_eq!(neighbourhood_size(&Grid::dead(2, 2), 1, 1), 3);
    }

    #[test]
    fn test_top_edge_diagonals() {
        // Both lower diagonals of a top-edge cell are counted separately.
        let mut grid = Grid::dead(3, 3);
        grid.set(1, 0, Cell::Alive).unwrap();
        assert_eq!(count(&grid, 0, 1).unwrap().alive, 1);
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(count(&grid, 0, 1).unwrap().alive, 2);
        grid.set(1, 0, Cell::Dead).unwrap();
        assert_eq!(count(&grid, 0, 1).unwrap().alive, 1);
    }

    #[test]
    fn test_classifies_by_value() {
        let mut grid = Grid::dead(3, 3);
        for (row, col) in [(0, 0), (0, 1), (2, 2), (1, 1)] {
            grid.set(row, col, Cell::Alive).unwrap();
        }
        // The centre itself is never counted.
        assert_eq!(
            count(&grid, 1, 1),
            Ok(NeighbourCount { alive: 3, dead: 5 })
        );
        assert_eq!(
            count(&grid, 0, 0),
            Ok(NeighbourCount { alive: 2, dead: 1 })
        );
    }

    #[test]
    fn test_neighbour_coordinates() {
        let grid = Grid::dead(3, 3);
        let mut ps: Vec<_> = neighbours(&grid, 0, 2).unwrap().collect();
        ps.sort();
        assert_eq!(ps, [(0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::dead(3, 3);
        assert!(count(&grid, 3, 0).is_err());
        assert!(count(&grid, -1, 0).is_err());
        assert!(neighbours(&grid, 0, 3).is_err());
        assert!(count(&Grid::dead(0, 0), 0, 0).is_err());
    }
}
