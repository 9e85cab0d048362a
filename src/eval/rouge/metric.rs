//! Rouge metric identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rouge metric variants tracked by the evaluator.
///
/// The set is fixed; `ALL` lists every variant in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RougeMetric {
    /// Unigram overlap
    #[serde(rename = "rouge-1")]
    Rouge1,
    /// Bigram overlap
    #[serde(rename = "rouge-2")]
    Rouge2,
    /// Longest common subsequence
    #[serde(rename = "rouge-l")]
    RougeL,
    /// Weighted longest common subsequence
    #[serde(rename = "rouge-w")]
    RougeW,
}

impl RougeMetric {
    /// Every metric the engine computes, in report order.
    pub const ALL: [RougeMetric; 4] = [
        RougeMetric::Rouge1,
        RougeMetric::Rouge2,
        RougeMetric::RougeL,
        RougeMetric::RougeW,
    ];

    /// Canonical metric name as reported in score tables.
    pub fn name(&self) -> &'static str {
        match self {
            RougeMetric::Rouge1 => "rouge-1",
            RougeMetric::Rouge2 => "rouge-2",
            RougeMetric::RougeL => "rouge-l",
            RougeMetric::RougeW => "rouge-w",
        }
    }
}

impl fmt::Display for RougeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
