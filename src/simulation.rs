//! A headless driver: owns the board and forwards ticks and pointer input to
//! the engine.

use crate::{
    grid::{Grid, GridError},
    rules,
    seed::Seeder,
};

/// Clamps an arbitrary `(row, col)` onto the nearest cell of `grid`.
///
/// Returns `None` only for an empty grid, which has no cell to clamp to.
pub fn clamp_to_grid(grid: &Grid, row: isize, col: isize) -> Option<(isize, isize)> {
    let (height, width) = grid.dimensions();
    if grid.is_empty() {
        return None;
    }
    let clamp = |v: isize, len: usize| v.clamp(0, len as isize - 1);
    Some((clamp(row, height), clamp(col, width)))
}

/// Press-and-drag painting. A drag toggles a cell only when it moves onto a
/// different cell than the last one it touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Brush {
    last: Option<(isize, isize)>,
}

impl Brush {
    pub fn press(&mut self, grid: &mut Grid, row: isize, col: isize) -> Result<(), GridError> {
        grid.toggle(row, col)?;
        self.last = Some((row, col));
        Ok(())
    }

    pub fn drag(&mut self, grid: &mut Grid, row: isize, col: isize) -> Result<bool, GridError> {
        if self.last == Some((row, col)) {
            return Ok(false);
        }
        grid.toggle(row, col)?;
        self.last = Some((row, col));
        Ok(true)
    }

    pub fn release(&mut self) {
        self.last = None;
    }
}

pub struct Simulation {
    grid: Grid,
    seeder: Seeder,
    brush: Brush,
    running: bool,
    generation: u64,
}

impl Simulation {
    /// Starts cleared and paused.
    pub fn new(height: usize, width: usize, seeder: Seeder) -> Self {
        Self::with_grid(Grid::dead(height, width), seeder)
    }

    pub fn with_grid(grid: Grid, seeder: Seeder) -> Self {
        Self {
            grid,
            seeder,
            brush: Brush::default(),
            running: false,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Advances one generation if running. Returns whether it did.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.step_once();
        true
    }

    pub fn step_once(&mut self) {
        if self.grid.is_empty() {
            return;
        }
        self.grid = rules::step(&self.grid);
        self.generation += 1;
        log::debug!(
            "generation {}: {} alive",
            self.generation,
            self.grid.population()
        );
    }

    pub fn clear(&mut self) {
        let (height, width) = self.grid.dimensions();
        self.grid = Grid::dead(height, width);
        self.generation = 0;
        log::debug!("cleared {height}x{width}");
    }

    pub fn regenerate(&mut self) {
        let (height, width) = self.grid.dimensions();
        self.grid = self.seeder.randomize(height, width);
        self.generation = 0;
        log::debug!("regenerated with {} alive", self.grid.population());
    }

    pub fn press(&mut self, row: isize, col: isize) -> Result<(), GridError> {
        self.brush.press(&mut self.grid, row, col)
    }

    pub fn drag(&mut self, row: isize, col: isize) -> Result<bool, GridError> {
        self.brush.drag(&mut self.grid, row, col)
    }

    pub fn release(&mut self) {
        self.brush.release();
    }
}
