//! Bootstrap ensemble over [`DecisionTree`](super::tree::DecisionTree).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tree::{DecisionTree, TreeConfig, NUM_FEATURES};

/// Ensemble configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the forest.
    pub n_trees: usize,
    /// Per-tree growth limits.
    pub tree: TreeConfig,
    /// Fit each tree on a bootstrap resample instead of the full table.
    pub bootstrap: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 25,
            tree: TreeConfig::default(),
            bootstrap: true,
        }
    }
}

/// A fitted forest. The only operations callers may rely on are `fit` and
/// `predict_probability`; the internals are opaque by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskForest {
    trees: Vec<DecisionTree>,
}

impl RiskForest {
    /// Fit the ensemble. Each tree sees a bootstrap resample (with
    /// replacement, same size as the input) drawn from the caller's RNG.
    pub fn fit(
        features: &[[f64; NUM_FEATURES]],
        labels: &[bool],
        config: &ForestConfig,
        rng: &mut impl Rng,
    ) -> Self {
        debug_assert_eq!(features.len(), labels.len());
        let n = features.len();
        let mut trees = Vec::with_capacity(config.n_trees);

        for _ in 0..config.n_trees {
            if config.bootstrap && n > 0 {
                let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                let boot_features: Vec<[f64; NUM_FEATURES]> =
                    sample.iter().map(|&i| features[i]).collect();
                let boot_labels: Vec<bool> = sample.iter().map(|&i| labels[i]).collect();
                trees.push(DecisionTree::fit(
                    &boot_features,
                    &boot_labels,
                    &config.tree,
                    rng,
                ));
            } else {
                trees.push(DecisionTree::fit(features, labels, &config.tree, rng));
            }
        }

        Self { trees }
    }

    /// Mean positive-class probability across all trees, in [0, 1].
    /// An empty forest answers with the uninformative 0.5.
    pub fn predict_probability(&self, x: &[f64; NUM_FEATURES]) -> f64 {
        if self.trees.is_empty() {
            return 0.5;
        }
        let sum: f64 = self.trees.iter().map(|t| t.predict_probability(x)).sum();
        (sum / self.trees.len() as f64).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
