pub mod game;

pub use game::{Direction, Grid, Placements, Position};
