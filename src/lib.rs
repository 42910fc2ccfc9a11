#![warn(clippy::all)]

mod config;
mod error;
pub mod grid;
mod neighbors;
mod pattern;
pub mod render;
mod rules;
mod simulation;
mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use grid::{Cell, Grid, ALIVE, DEAD};
pub use neighbors::NeighborCounts;
pub use pattern::Pattern;
pub use render::{PngRenderer, Recorder, Renderer, TextRenderer};
pub use rules::{Rule, RuleSet};
pub use simulation::{Outcome, Simulation};
pub use utils::{parse_rle, NiceInt};
