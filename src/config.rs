use crate::{Error, Pattern, Result, RuleSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of a single run.
///
/// Deserializes from JSON; every field is optional and falls back to
/// [`Config::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Side length of the square grid.
    #[serde(alias = "N")]
    pub size: usize,
    /// Number of generations to simulate after the initial one.
    #[serde(alias = "maximum_number_of_generation")]
    pub max_generations: u64,
    /// A snapshot is emitted every this-many generations.
    pub write_frequency: u64,
    /// Seed of the random source; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Centered seed pattern; `None` or empty seeds the grid randomly.
    #[serde(alias = "initialize_array")]
    pub pattern: Option<Pattern>,
    pub rules: RuleSet,
}

impl Config {
    pub const DEFAULT_SIZE: usize = 20;
    pub const DEFAULT_MAX_GENERATIONS: u64 = 200;
    pub const DEFAULT_WRITE_FREQUENCY: u64 = 5;

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Checks the scalar parameters. Rules are checked when the [`RuleSet`]
    /// is built, pattern placement when the grid is.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidDimension(self.size));
        }
        if self.write_frequency == 0 {
            return Err(Error::InvalidWriteFrequency);
        }
        Ok(())
    }
}

impl Default for Config {
    /// The demo run: 3x7 pattern on a 20x20 grid for 200 generations.
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            max_generations: Self::DEFAULT_MAX_GENERATIONS,
            write_frequency: Self::DEFAULT_WRITE_FREQUENCY,
            seed: None,
            pattern: Some(Pattern::demo()),
            rules: RuleSet::default(),
        }
    }
}
