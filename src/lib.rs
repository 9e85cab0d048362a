//! Training utilities for text generation models
//!
//! Two independent components:
//!
//! - [`eval`]: ROUGE-based evaluation of generated text against parallel
//!   reference corpora (n-gram, LCS, and weighted-LCS overlap).
//! - [`optim`]: gradient optimizers organized around parameter groups,
//!   with warmup learning-rate scheduling wrappers.
//!
//! The components do not interact; use either on its own.

pub mod error;
pub mod eval;
pub mod optim;

pub use error::{GenerarError, Result};
