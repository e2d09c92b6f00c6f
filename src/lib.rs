mod encoding;
mod grid;
pub mod neighbours;
mod pattern;
pub mod rules;
mod seed;
pub mod simulation;


pub use crate::{
    encoding::{Encoding, EncodingError},
    grid::{Cell, Grid, GridError},
    neighbours::NeighbourCount,
    pattern::PatternError,
    rules::step,
    seed::{Seeder, randomize},
    simulation::{Brush, Simulation},
};
