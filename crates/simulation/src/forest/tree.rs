//! Gini-split decision tree for binary classification.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of feature columns (rainfall, soil moisture, elevation).
pub(crate) const NUM_FEATURES: usize = 3;

/// Growth limits for a single tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth of the tree.
    pub max_depth: usize,
    /// Minimum samples required to attempt a split.
    pub min_samples_split: usize,
    /// Minimum samples that must land on each side of a split.
    pub min_samples_leaf: usize,
    /// Features considered per split; `None` means all.
    pub max_features: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            min_samples_split: 4,
            min_samples_leaf: 2,
            max_features: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Split {
    feature_idx: usize,
    threshold: f64,
    left: Box<TreeNode>,
    right: Box<TreeNode>,
}

/// One tree node. Interior nodes carry a split; every node remembers the
/// positive-label fraction of the samples that reached it, which doubles as
/// the leaf prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TreeNode {
    positive_fraction: f64,
    split: Option<Split>,
}

impl TreeNode {
    fn leaf(positive_fraction: f64) -> Self {
        Self {
            positive_fraction,
            split: None,
        }
    }
}

/// A fitted decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
}

impl DecisionTree {
    /// Fit a tree on the given feature rows and binary labels.
    /// `features` and `labels` must have equal length.
    pub fn fit(
        features: &[[f64; NUM_FEATURES]],
        labels: &[bool],
        config: &TreeConfig,
        rng: &mut impl Rng,
    ) -> Self {
        debug_assert_eq!(features.len(), labels.len());
        let indices: Vec<usize> = (0..features.len()).collect();
        Self {
            root: build_node(features, labels, &indices, 0, config, rng),
        }
    }

    /// Positive-class probability for a feature vector: the positive-label
    /// fraction of the leaf the vector falls into. Always in [0, 1].
    pub fn predict_probability(&self, x: &[f64; NUM_FEATURES]) -> f64 {
        let mut node = &self.root;
        while let Some(split) = &node.split {
            node = if x[split.feature_idx] <= split.threshold {
                &split.left
            } else {
                &split.right
            };
        }
        node.positive_fraction
    }
}

// ---------------------------------------------------------------------------
// Tree construction
// ---------------------------------------------------------------------------

/// Binary gini impurity for a node with `pos` positives out of `n` samples.
fn gini(pos: f64, n: f64) -> f64 {
    let p = pos / n;
    2.0 * p * (1.0 - p)
}

fn build_node(
    features: &[[f64; NUM_FEATURES]],
    labels: &[bool],
    indices: &[usize],
    depth: usize,
    config: &TreeConfig,
    rng: &mut impl Rng,
) -> TreeNode {
    let n = indices.len();
    if n == 0 {
        return TreeNode::leaf(0.5);
    }

    let pos = indices.iter().filter(|&&i| labels[i]).count();
    let fraction = pos as f64 / n as f64;

    // Pure node, too small, or too deep: stop growing.
    if pos == 0 || pos == n || n < config.min_samples_split || depth >= config.max_depth {
        return TreeNode::leaf(fraction);
    }

    let all_features = [0usize, 1, 2];
    let candidates: Vec<usize> = match config.max_features {
        Some(k) if k < NUM_FEATURES => all_features.choose_multiple(rng, k).copied().collect(),
        _ => all_features.to_vec(),
    };

    let Some((feature_idx, threshold)) = best_split(
        features,
        labels,
        indices,
        &candidates,
        config.min_samples_leaf,
    ) else {
        return TreeNode::leaf(fraction);
    };

    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .partition(|&&i| features[i][feature_idx] <= threshold);

    TreeNode {
        positive_fraction: fraction,
        split: Some(Split {
            feature_idx,
            threshold,
            left: Box::new(build_node(
                features, labels, &left_idx, depth + 1, config, rng,
            )),
            right: Box::new(build_node(
                features, labels, &right_idx, depth + 1, config, rng,
            )),
        }),
    }
}

/// Find the (feature, threshold) cut minimizing weighted gini impurity, or
/// `None` when no cut satisfies the leaf-size constraint. Thresholds are
/// midpoints between adjacent distinct feature values.
fn best_split(
    features: &[[f64; NUM_FEATURES]],
    labels: &[bool],
    indices: &[usize],
    candidates: &[usize],
    min_samples_leaf: usize,
) -> Option<(usize, f64)> {
    let n = indices.len() as f64;
    let mut best = None;
    let mut best_impurity = f64::INFINITY;

    for &f in candidates {
        let mut order = indices.to_vec();
        order.sort_by(|&a, &b| {
            features[a][f]
                .partial_cmp(&features[b][f])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_pos = order.iter().filter(|&&i| labels[i]).count();
        let mut left_pos = 0usize;

        for i in 1..order.len() {
            if labels[order[i - 1]] {
                left_pos += 1;
            }
            let prev = features[order[i - 1]][f];
            let cur = features[order[i]][f];
            // Identical adjacent values cannot be separated.
            if cur <= prev {
                continue;
            }
            if i < min_samples_leaf || order.len() - i < min_samples_leaf {
                continue;
            }

            let left_n = i as f64;
            let right_n = n - left_n;
            let right_pos = total_pos - left_pos;
            let impurity = (left_n / n) * gini(left_pos as f64, left_n)
                + (right_n / n) * gini(right_pos as f64, right_n);

            if impurity < best_impurity {
                best_impurity = impurity;
                best = Some((f, (prev + cur) / 2.0));
            }
        }
    }

    best
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn constant_rows(n: usize, label: bool) -> (Vec<[f64; 3]>, Vec<bool>) {
        let features = (0..n).map(|i| [i as f64, 0.0, 0.0]).collect();
        let labels = vec![label; n];
        (features, labels)
    }

    /// Rows cleanly separable on feature 0 with a wide margin.
    fn separable_rows() -> (Vec<[f64; 3]>, Vec<bool>) {
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for i in 0..20 {
            features.push([10.0 + i as f64, 50.0, 25.0]);
            labels.push(false);
            features.push([70.0 + i as f64, 50.0, 25.0]);
            labels.push(true);
        }
        (features, labels)
    }

    #[test]
    fn test_pure_positive_labels_predict_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (features, labels) = constant_rows(20, true);
        let tree = DecisionTree::fit(&features, &labels, &TreeConfig::default(), &mut rng);
        assert!((tree.predict_probability(&[5.0, 0.0, 0.0]) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pure_negative_labels_predict_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (features, labels) = constant_rows(20, false);
        let tree = DecisionTree::fit(&features, &labels, &TreeConfig::default(), &mut rng);
        assert!(tree.predict_probability(&[5.0, 0.0, 0.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_learns_separable_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (features, labels) = separable_rows();
        let tree = DecisionTree::fit(&features, &labels, &TreeConfig::default(), &mut rng);
        assert!(tree.predict_probability(&[15.0, 50.0, 25.0]) < 0.1);
        assert!(tree.predict_probability(&[80.0, 50.0, 25.0]) > 0.9);
    }

    #[test]
    fn test_prediction_in_unit_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let features: Vec<[f64; 3]> = (0..40)
            .map(|i| [(i * 7 % 100) as f64, (i * 13 % 100) as f64, (i % 50) as f64])
            .collect();
        let labels: Vec<bool> = (0..40).map(|i| i % 3 == 0).collect();
        let tree = DecisionTree::fit(&features, &labels, &TreeConfig::default(), &mut rng);
        for x in [[0.0, 0.0, 0.0], [50.0, 60.0, 20.0], [99.0, 99.0, 49.0]] {
            let p = tree.predict_probability(&x);
            assert!((0.0..=1.0).contains(&p), "p={p}");
        }
    }

    #[test]
    fn test_max_depth_zero_yields_prior() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (features, labels) = separable_rows();
        let config = TreeConfig {
            max_depth: 0,
            ..TreeConfig::default()
        };
        let tree = DecisionTree::fit(&features, &labels, &config, &mut rng);
        // Half the rows are positive, so the root leaf predicts 0.5 everywhere.
        assert!((tree.predict_probability(&[15.0, 50.0, 25.0]) - 0.5).abs() < f64::EPSILON);
        assert!((tree.predict_probability(&[80.0, 50.0, 25.0]) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_is_deterministic_per_seed() {
        let (features, labels) = separable_rows();
        let config = TreeConfig {
            max_features: Some(1),
            ..TreeConfig::default()
        };
        let mut rng_a = ChaCha8Rng::seed_from_u64(11);
        let mut rng_b = ChaCha8Rng::seed_from_u64(11);
        let tree_a = DecisionTree::fit(&features, &labels, &config, &mut rng_a);
        let tree_b = DecisionTree::fit(&features, &labels, &config, &mut rng_b);
        for x in [[15.0, 50.0, 25.0], [55.0, 50.0, 25.0], [80.0, 50.0, 25.0]] {
            assert_eq!(tree_a.predict_probability(&x), tree_b.predict_probability(&x));
        }
    }

    #[test]
    fn test_gini_extremes() {
        assert!(gini(0.0, 10.0).abs() < f64::EPSILON);
        assert!(gini(10.0, 10.0).abs() < f64::EPSILON);
        assert!((gini(5.0, 10.0) - 0.5).abs() < f64::EPSILON);
    }
}
