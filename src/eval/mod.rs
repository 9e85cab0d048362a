//! Evaluation metrics for generated text
//!
//! - `rouge`: ROUGE-1/2 (n-gram overlap), ROUGE-L (longest common
//!   subsequence), and ROUGE-W (weighted LCS) with corpus-level
//!   aggregation.

pub mod rouge;

pub use rouge::{RougeConfig, RougeEvaluator, RougeMetric};
