//! Evaluator configuration

use serde::Deserialize;

use super::metric::RougeMetric;

/// Configuration for Rouge evaluation.
///
/// Deserializable from structured options with the recognized keys
/// `metrics`, `n_grams`, and `max_target_length`; unrecognized keys are
/// ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RougeConfig {
    /// Metrics to report.
    pub metrics: Vec<RougeMetric>,
    /// Maximum n-gram order for rouge-n.
    #[serde(rename = "n_grams")]
    pub max_n: usize,
    /// Word-count cap applied to references before scoring.
    #[serde(rename = "max_target_length")]
    pub length_limit: Option<usize>,
    /// Precision/recall balance for the F-score (0.5 = harmonic mean).
    pub alpha: f64,
    /// Consecutive-match weighting exponent for rouge-w.
    pub weight_factor: f64,
    /// Stem words before overlap counting.
    pub stemming: bool,
}

impl Default for RougeConfig {
    fn default() -> Self {
        Self {
            metrics: RougeMetric::ALL.to_vec(),
            max_n: 2,
            length_limit: None,
            alpha: 0.5,
            weight_factor: 1.2,
            stemming: true,
        }
    }
}
