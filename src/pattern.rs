use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unexpected character {c:?} at ({row}, {col})")]
    UnexpectedChar { row: usize, col: usize, c: char },
}

impl Grid {
    /// Parses the text notation: `o` is alive, `.` or a space is dead.
    ///
    /// Leading blank lines, trailing whitespace (including trailing rows made
    /// only of spaces) and common indentation are dropped, so patterns can be
    /// written inline as indented string literals. Use `.` for dead cells that
    /// must survive at the right or bottom edge. Short rows are padded with
    /// dead cells on the right.
    pub fn from_pattern(s: &str) -> Result<Self, PatternError> {
        let lines = s
            .trim_end()
            .lines()
            .skip_while(|l| l.trim().is_empty())
            .collect_vec();
        // Indentation is counted in chars so mixed-width whitespace strips evenly.
        let indent = lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or_default();
        let rows = lines
            .iter()
            .enumerate()
            .map(|(row, l)| {
                let line: String = l.chars().skip(indent).collect();
                parse_row(row, line.trim_end())
            })
            .collect::<Result<Vec<_>, _>>()?;
        let width = rows.iter().map(Vec::len).max().unwrap_or_default();
        let height = rows.len();
        let cells = rows
            .into_iter()
            .flat_map(|mut r| {
                r.resize(width, Cell::Dead);
                r
            })
            .collect();
        Ok(Grid::from_cells(height, width, cells))
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<Cell>, PatternError> {
    line.chars()
        .enumerate()
        .map(|(col, c)| match c {
            'o' => Ok(Cell::Alive),
            '.' | ' ' => Ok(Cell::Dead),
            _ => Err(PatternError::UnexpectedChar { row, col, c }),
        })
        .collect()
}

impl FromStr for Grid {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_pattern(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &cell in row {
                f.write_char(if cell.is_alive() { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
