//! Rouge-based evaluation of generated text
//!
//! [`RougeEvaluator`] scores a generated corpus against a parallel
//! reference corpus and reports the mean F-score per metric, rounded to
//! 4 decimal places.
//!
//! ## Example
//!
//! ```
//! use generar::eval::rouge::{RougeConfig, RougeEvaluator, RougeMetric};
//!
//! let evaluator = RougeEvaluator::new(RougeConfig::default());
//! let generated = vec![vec!["the".to_string(), "cat".to_string()]];
//! let reference = vec![vec!["the".to_string(), "cat".to_string()]];
//! let report = evaluator.evaluate(&generated, &reference)?;
//! assert!((report[&RougeMetric::Rouge1] - 1.0).abs() < 1e-9);
//! # Ok::<(), generar::GenerarError>(())
//! ```

mod config;
mod engine;
mod metric;
mod stem;


pub use config::RougeConfig;
pub use engine::{lcs_score, ngram_score, score_pair, wlcs_score, Score};
pub use metric::RougeMetric;

use std::collections::BTreeMap;

use crate::error::{GenerarError, Result};

/// Rouge evaluator: joins token sequences into sentences, scores each
/// generated/reference pair, and aggregates per-metric F-scores across
/// the corpus.
pub struct RougeEvaluator {
    config: RougeConfig,
}

impl RougeEvaluator {
    pub fn new(config: RougeConfig) -> Self {
        Self { config }
    }

    /// Metrics this evaluator reports.
    ///
    /// `rouge-2` is dropped when the configured n-gram bound excludes it.
    pub fn enabled_metrics(&self) -> Vec<RougeMetric> {
        self.config
            .metrics
            .iter()
            .copied()
            .filter(|&m| m != RougeMetric::Rouge2 || self.config.max_n >= 2)
            .collect()
    }

    /// Score `generated` against `reference` and report the mean F-score
    /// per enabled metric, rounded to 4 decimal places.
    ///
    /// Corpora are parallel: sample `i` of `generated` is scored against
    /// sample `i` of `reference`. Errors on length mismatch (before any
    /// scoring) and on empty corpora.
    pub fn evaluate(
        &self,
        generated: &[Vec<String>],
        reference: &[Vec<String>],
    ) -> Result<BTreeMap<RougeMetric, f64>> {
        if generated.len() != reference.len() {
            return Err(GenerarError::CorpusLengthMismatch {
                generated: generated.len(),
                reference: reference.len(),
            });
        }
        if generated.is_empty() {
            return Err(GenerarError::EmptyCorpus);
        }

        let mut totals: BTreeMap<RougeMetric, f64> =
            self.enabled_metrics().into_iter().map(|m| (m, 0.0)).collect();

        for (gen_tokens, ref_tokens) in generated.iter().zip(reference) {
            let candidate = gen_tokens.join(" ");
            let gold = ref_tokens.join(" ");
            let sample = score_pair(&candidate, &gold, &self.config);
            for (metric, total) in totals.iter_mut() {
                if let Some(score) = sample.get(metric) {
                    *total += score.f_score;
                }
            }
        }

        let samples = generated.len() as f64;
        Ok(totals
            .into_iter()
            .map(|(metric, total)| (metric, round4(total / samples)))
            .collect())
    }
}

/// Round to 4 decimal places, the report precision.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
