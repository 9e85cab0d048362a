//! Rouge scoring engine
//!
//! Clipped n-gram overlap, longest-common-subsequence, and weighted-LCS
//! scores as precision/recall/F triples. Scores one candidate/reference
//! pair at a time; corpus aggregation lives in the evaluator.

use std::collections::{BTreeMap, HashMap};

use super::config::RougeConfig;
use super::metric::RougeMetric;
use super::stem::stem;

/// Precision/recall/F triple for a single sample and metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Score {
    pub precision: f64,
    pub recall: f64,
    pub f_score: f64,
}

impl Score {
    fn new(precision: f64, recall: f64, alpha: f64) -> Self {
        Self { precision, recall, f_score: f_score(precision, recall, alpha) }
    }
}

/// Alpha-weighted F-score: `p·r / ((1-alpha)·p + alpha·r)`.
///
/// alpha = 0.5 reduces to the harmonic mean of precision and recall.
/// Returns 0 when either side is 0.
fn f_score(precision: f64, recall: f64, alpha: f64) -> f64 {
    if precision == 0.0 || recall == 0.0 {
        return 0.0;
    }
    precision * recall / ((1.0 - alpha) * precision + alpha * recall)
}

/// Count n-gram occurrences in a token sequence.
fn ngram_counts<'a>(tokens: &'a [String], n: usize) -> HashMap<&'a [String], usize> {
    let mut counts = HashMap::new();
    if n > 0 && tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}

/// Clipped n-gram overlap score (rouge-n).
///
/// Each candidate n-gram counts at most as often as it appears in the
/// reference. Sequences shorter than `n` score zero, never NaN.
pub fn ngram_score<'a>(
    candidate: &'a [String],
    reference: &'a [String],
    n: usize,
    alpha: f64,
) -> Score {
    let cand_ngrams = ngram_counts(candidate, n);
    let ref_ngrams = ngram_counts(reference, n);

    let cand_total: usize = cand_ngrams.values().sum();
    let ref_total: usize = ref_ngrams.values().sum();
    if cand_total == 0 || ref_total == 0 {
        return Score::default();
    }

    let overlap: usize = cand_ngrams
        .iter()
        .map(|(ngram, &count)| count.min(ref_ngrams.get(ngram).copied().unwrap_or(0)))
        .sum();

    Score::new(
        overlap as f64 / cand_total as f64,
        overlap as f64 / ref_total as f64,
        alpha,
    )
}

/// Longest-common-subsequence score (rouge-l).
pub fn lcs_score(candidate: &[String], reference: &[String], alpha: f64) -> Score {
    if candidate.is_empty() || reference.is_empty() {
        return Score::default();
    }

    let lcs = lcs_length(reference, candidate) as f64;

    Score::new(
        lcs / candidate.len() as f64,
        lcs / reference.len() as f64,
        alpha,
    )
}

fn lcs_length(a: &[String], b: &[String]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp[n][m]
}

/// Weighted-LCS score (rouge-w).
///
/// A consecutive match run of length k contributes `k^weight` rather than
/// k, so candidates preserving long runs of the reference outscore
/// candidates with the same matches scattered. Precision and recall are
/// recovered through the inverse weighting `x^(1/weight)`.
pub fn wlcs_score(candidate: &[String], reference: &[String], alpha: f64, weight: f64) -> Score {
    if candidate.is_empty() || reference.is_empty() {
        return Score::default();
    }

    let wlcs = wlcs_weight(reference, candidate, weight);
    let inv = 1.0 / weight;

    Score::new(
        (wlcs / (candidate.len() as f64).powf(weight)).powf(inv),
        (wlcs / (reference.len() as f64).powf(weight)).powf(inv),
        alpha,
    )
}

fn wlcs_weight(a: &[String], b: &[String], weight: f64) -> f64 {
    let f = |k: usize| (k as f64).powf(weight);
    let n = a.len();
    let m = b.len();
    let mut score = vec![vec![0f64; m + 1]; n + 1];
    let mut run = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if a[i - 1] == b[j - 1] {
                let k = run[i - 1][j - 1];
                score[i][j] = score[i - 1][j - 1] + f(k + 1) - f(k);
                run[i][j] = k + 1;
            } else if score[i - 1][j] > score[i][j - 1] {
                score[i][j] = score[i - 1][j];
            } else {
                score[i][j] = score[i][j - 1];
            }
        }
    }

    score[n][m]
}

/// Score one candidate/reference pair under `config`.
///
/// Tokenizes on whitespace, stems if configured, and caps the reference at
/// `length_limit` words if configured. Always computes every metric in
/// `RougeMetric::ALL`; the evaluator filters to its enabled set.
pub fn score_pair(
    candidate: &str,
    reference: &str,
    config: &RougeConfig,
) -> BTreeMap<RougeMetric, Score> {
    let candidate = prepare(candidate, config, None);
    let reference = prepare(reference, config, config.length_limit);

    RougeMetric::ALL
        .into_iter()
        .map(|metric| {
            let score = match metric {
                RougeMetric::Rouge1 => ngram_score(&candidate, &reference, 1, config.alpha),
                RougeMetric::Rouge2 => ngram_score(&candidate, &reference, 2, config.alpha),
                RougeMetric::RougeL => lcs_score(&candidate, &reference, config.alpha),
                RougeMetric::RougeW => {
                    wlcs_score(&candidate, &reference, config.alpha, config.weight_factor)
                }
            };
            (metric, score)
        })
        .collect()
}

fn prepare(text: &str, config: &RougeConfig, limit: Option<usize>) -> Vec<String> {
    let mut tokens: Vec<String> = text
        .split_whitespace()
        .map(|t| if config.stemming { stem(t) } else { t.to_lowercase() })
        .collect();
    if let Some(limit) = limit {
        tokens.truncate(limit);
    }
    tokens
}
