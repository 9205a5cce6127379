//! Toy random-forest risk estimator.
//!
//! A bootstrap ensemble of gini-split decision trees fit on the synthetic
//! training table. Consumed through a narrow boundary: `RiskForest::fit`
//! and `predict_probability` returning a value in [0, 1]. Because the
//! labels are random, the output carries no real signal and callers must
//! not assume accuracy, monotonicity, or anything beyond the output range.

pub mod ensemble;
pub mod tree;

pub use ensemble::{ForestConfig, RiskForest};
pub use tree::{DecisionTree, TreeConfig};
