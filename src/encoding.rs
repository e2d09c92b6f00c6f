use crate::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("alive and dead are both encoded as {0}")]
    NotInjective(i64),
    #[error("value {value} at ({row}, {col}) encodes neither alive nor dead")]
    UnknownValue { row: usize, col: usize, value: i64 },
    #[error("row {row} has {len} cells, expected {width}")]
    RaggedRows { row: usize, len: usize, width: usize },
}

/// Maps cells to the integers a renderer or exporter expects.
///
/// Defaults to `alive = 0`, `dead = 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoding {
    alive: i64,
    dead: i64,
}

impl Encoding {
    pub fn new(alive: i64, dead: i64) -> Result<Self, EncodingError> {
        if alive == dead {
            return Err(EncodingError::NotInjective(alive));
        }
        Ok(Self { alive, dead })
    }

    pub fn alive(&self) -> i64 {
        self.alive
    }

    pub fn dead(&self) -> i64 {
        self.dead
    }

    pub fn encode(&self, cell: Cell) -> i64 {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }

    pub fn decode(&self, value: i64) -> Option<Cell> {
        match value {
            v if v == self.alive => Some(Cell::Alive),
            v if v == self.dead => Some(Cell::Dead),
            _ => None,
        }
    }

    pub fn export(&self, grid: &Grid) -> Vec<Vec<i64>> {
        grid.rows()
            .map(|row| row.iter().map(|&c| self.encode(c)).collect())
            .collect()
    }

    pub fn import<R: AsRef<[i64]>>(&self, rows: &[R]) -> Result<Grid, EncodingError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(EncodingError::RaggedRows {
                    row,
                    len: values.len(),
                    width,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = self
                    .decode(value)
                    .ok_or(EncodingError::UnknownValue { row, col, value })?;
                cells.push(cell);
            }
        }
        Ok(Grid::from_cells(rows.len(), width, cells))
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self { alive: 0, dead: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_injective() {
        assert_eq!(Encoding::new(3, 3), Err(EncodingError::NotInjective(3)));
    }

    #[test]
    fn test_default_matches_xor_flip() {
        // Flipping the low bit of an encoded value is a toggle.
        let enc = Encoding::default();
        for cell in [Cell::Alive, Cell::Dead] {
            assert_eq!(enc.decode(1 ^ enc.encode(cell)), Some(!cell));
        }
    }

    #[test]
    fn test_export_import() {
        let enc = Encoding::new(7, -2).unwrap();
        let mut grid = Grid::dead(2, 3);
        grid.set(0, 2, Cell::Alive).unwrap();
        grid.set(1, 0, Cell::Alive).unwrap();
        let rows = enc.export(&grid);
        assert_eq!(rows, [[-2, -2, 7], [7, -2, -2]]);
        assert_eq!(enc.import(&rows), Ok(grid));
    }

    #[test]
    fn test_import_errors() {
        let enc = Encoding::default();
        assert_eq!(
            enc.import(&[[0i64, 1], [1, 5]]),
            Err(EncodingError::UnknownValue {
                row: 1,
                col: 1,
                value: 5
            })
        );
        let ragged: Vec<Vec<i64>> = vec![vec![0, 1], vec![1]];
        assert_eq!(
            enc.import(&ragged),
            Err(EncodingError::RaggedRows {
                row: 1,
                len: 1,
                width: 2
            })
        );
        let empty: [[i64; 0]; 0] = [];
        assert_eq!(enc.import(&empty), Ok(Grid::dead(0, 0)));
    }
}
