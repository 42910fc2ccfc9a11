use crate::{
    grid::{Cell, ALIVE, DEAD},
    Error, Result,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Transition applied to a cell in state `current_state` whose live-neighbor
/// count lies strictly between the bounds. A missing bound is unbounded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub current_state: Cell,
    #[serde(default)]
    pub min_live_neighbors: Option<u8>,
    #[serde(default)]
    pub max_live_neighbors: Option<u8>,
    /// Chance that the rule fires once its condition holds.
    #[serde(default = "Rule::always")]
    pub probability: f64,
    pub next_state: Cell,
}

impl Rule {
    pub fn new(
        current_state: Cell,
        min_live_neighbors: Option<u8>,
        max_live_neighbors: Option<u8>,
        next_state: Cell,
    ) -> Self {
        Self {
            current_state,
            min_live_neighbors,
            max_live_neighbors,
            probability: Self::always(),
            next_state,
        }
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    fn always() -> f64 {
        1.
    }

    /// Rule matching exactly `count` live neighbors.
    fn exact(current_state: Cell, count: u8, next_state: Cell) -> Self {
        Self::new(current_state, count.checked_sub(1), Some(count + 1), next_state)
    }

    /// Checks the state and neighbor-count condition, ignoring probability.
    pub fn matches(&self, state: Cell, live_neighbors: u8) -> bool {
        state == self.current_state
            && self.min_live_neighbors.map_or(true, |min| live_neighbors > min)
            && self.max_live_neighbors.map_or(true, |max| live_neighbors < max)
    }

    fn validate(&self, index: usize) -> Result<()> {
        for state in [self.current_state, self.next_state] {
            if state > ALIVE {
                return Err(Error::InvalidCellState(state));
            }
        }
        if let (Some(min), Some(max)) = (self.min_live_neighbors, self.max_live_neighbors) {
            if min >= max {
                return Err(Error::InvalidBounds { index, min, max });
            }
        }
        if !(0. ..=1.).contains(&self.probability) {
            return Err(Error::InvalidProbability {
                index,
                probability: self.probability,
            });
        }
        Ok(())
    }
}

/// Ordered list of rules; the first one that matches and fires decides the
/// next state of a cell, otherwise the cell keeps its state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Validates every rule. An empty list is allowed and freezes the grid.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        for (index, rule) in rules.iter().enumerate() {
            rule.validate(index)?;
        }
        Ok(Self { rules })
    }

    /// Starvation, survival, overcrowding and reproduction. Reproduction uses
    /// the open interval (1, 4), so a dead cell with 2 or 3 live neighbors
    /// comes alive; use [`RuleSet::b3s23`] for birth on exactly 3.
    pub fn game_of_life() -> Self {
        Self {
            rules: vec![
                Rule::new(ALIVE, None, Some(2), DEAD),
                Rule::new(ALIVE, Some(1), Some(4), ALIVE),
                Rule::new(ALIVE, Some(3), None, DEAD),
                Rule::new(DEAD, Some(1), Some(4), ALIVE),
            ],
        }
    }

    /// Textbook Conway rules: birth on exactly 3, survival on 2 or 3.
    pub fn b3s23() -> Self {
        Self {
            rules: vec![
                Rule::new(ALIVE, None, Some(2), DEAD),
                Rule::new(ALIVE, Some(1), Some(4), ALIVE),
                Rule::new(ALIVE, Some(3), None, DEAD),
                Rule::new(DEAD, Some(2), Some(4), ALIVE),
            ],
        }
    }

    /// Parses outer-totalistic `B.../S...` notation, e.g. `B36/S23`.
    ///
    /// Every survival count becomes an alive->alive rule, followed by a
    /// catch-all alive->dead rule; every birth count becomes a dead->alive rule.
    pub fn from_rulestring(rulestring: &str) -> Result<Self> {
        let invalid = || Error::InvalidRulestring(rulestring.to_owned());
        let (mut birth, mut survival) = (None, None);
        for part in rulestring.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next() {
                Some('B' | 'b') => &mut birth,
                Some('S' | 's') => &mut survival,
                _ => return Err(invalid()),
            };
            if slot.is_some() {
                return Err(invalid());
            }
            let mut counts = [false; 9];
            for c in chars {
                let count = c.to_digit(10).filter(|&d| d <= 8).ok_or_else(invalid)?;
                counts[count as usize] = true;
            }
            *slot = Some(counts);
        }
        let (birth, survival) = (birth.ok_or_else(invalid)?, survival.ok_or_else(invalid)?);

        let mut rules = Vec::new();
        for count in (0..=8u8).filter(|&c| survival[c as usize]) {
            rules.push(Rule::exact(ALIVE, count, ALIVE));
        }
        rules.push(Rule::new(ALIVE, None, None, DEAD));
        for count in (0..=8u8).filter(|&c| birth[c as usize]) {
            rules.push(Rule::exact(DEAD, count, ALIVE));
        }
        Self::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Next state of a cell. The probability of a rule is drawn from `rng`
    /// only after its state and bounds match.
    pub fn next_state(&self, state: Cell, live_neighbors: u8, rng: &mut impl Rng) -> Cell {
        for rule in &self.rules {
            if rule.matches(state, live_neighbors) && rng.gen::<f64>() < rule.probability {
                return rule.next_state;
            }
        }
        state
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::game_of_life()
    }
}

impl TryFrom<Vec<Rule>> for RuleSet {
    type Error = Error;

    fn try_from(rules: Vec<Rule>) -> Result<Self> {
        Self::new(rules)
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(rule_set: RuleSet) -> Self {
        rule_set.rules
    }
}

impl std::str::FromStr for RuleSet {
    type Err = Error;

    /// `default`, `b3s23` or a `B.../S...` rulestring.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "gol" => Ok(Self::game_of_life()),
            "b3s23" | "conway" => Ok(Self::b3s23()),
            _ => Self::from_rulestring(s),
        }
    }
}
