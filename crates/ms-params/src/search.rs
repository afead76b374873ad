//! Search strategies that hand out enumerated combinations in batches.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::combination::Combination;
use crate::config::SearchConfig;
use crate::enumerate::enumerate;
use crate::errors::ParamResult;
use crate::node::ParameterNode;

/// Common trait for all search strategies.
pub trait SearchStrategy: Send + Sync {
    /// Take the next batch of combinations to evaluate. Returns fewer than
    /// `count` (possibly none) once the strategy runs dry.
    fn suggest(&mut self, count: usize) -> Vec<Combination>;

    /// Combinations not yet handed out.
    fn remaining(&self) -> usize;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}

/// Shared cursor over a prepared list of combinations.
#[derive(Debug)]
struct Cursor {
    total: usize,
    pending: std::vec::IntoIter<Combination>,
}

impl Cursor {
    fn new(combinations: Vec<Combination>) -> Self {
        Self {
            total: combinations.len(),
            pending: combinations.into_iter(),
        }
    }

    fn take(&mut self, count: usize, strategy: &str) -> Vec<Combination> {
        if self.pending.len() == 0 {
            warn!("{} search exhausted after {} combinations", strategy, self.total);
            return Vec::new();
        }
        self.pending.by_ref().take(count).collect()
    }
}

// ---- Grid search ----

/// Exhaustive search over every combination of a tree, in enumeration order.
#[derive(Debug)]
pub struct GridSearch {
    cursor: Cursor,
}

impl GridSearch {
    pub fn new(tree: &ParameterNode<'_>) -> ParamResult<Self> {
        Ok(Self {
            cursor: Cursor::new(enumerate(tree)?),
        })
    }

    /// Size of the full grid.
    pub fn total(&self) -> usize {
        self.cursor.total
    }
}

impl SearchStrategy for GridSearch {
    fn suggest(&mut self, count: usize) -> Vec<Combination> {
        self.cursor.take(count, "grid")
    }

    fn remaining(&self) -> usize {
        self.cursor.pending.len()
    }

    fn name(&self) -> &str {
        "grid"
    }
}

// ---- Random search ----

/// A reproducible random subset of the grid.
///
/// Keeps `ceil(random_ratio * total)` combinations (at least one), chosen with
/// a generator seeded from the config, and hands them out in enumeration
/// order.
#[derive(Debug)]
pub struct RandomSearch {
    cursor: Cursor,
    grid_size: usize,
}

impl RandomSearch {
    pub fn new(tree: &ParameterNode<'_>, config: &SearchConfig) -> ParamResult<Self> {
        config.validate()?;
        let all = enumerate(tree)?;
        let grid_size = all.len();

        let keep = ((grid_size as f64 * config.random_ratio).ceil() as usize).clamp(1, grid_size);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut selected = vec![false; grid_size];
        for index in rand::seq::index::sample(&mut rng, grid_size, keep).iter() {
            selected[index] = true;
        }

        let subset: Vec<Combination> = all
            .into_iter()
            .zip(selected)
            .filter_map(|(combination, chosen)| chosen.then_some(combination))
            .collect();
        debug!("Random search kept {} of {} combinations", subset.len(), grid_size);

        Ok(Self {
            cursor: Cursor::new(subset),
            grid_size,
        })
    }

    /// Size of the grid the subset was drawn from.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Size of the subset.
    pub fn total(&self) -> usize {
        self.cursor.total
    }
}

impl SearchStrategy for RandomSearch {
    fn suggest(&mut self, count: usize) -> Vec<Combination> {
        self.cursor.take(count, "random")
    }

    fn remaining(&self) -> usize {
        self.cursor.pending.len()
    }

    fn name(&self) -> &str {
        "random"
    }
}
