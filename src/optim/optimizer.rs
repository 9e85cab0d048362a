//! Optimizer trait and serializable state

use serde::{Deserialize, Serialize};

use super::param::ParamGroup;
use crate::error::Result;

/// Trait for gradient-based optimization algorithms.
///
/// An optimizer owns its parameter groups; a scheduler wrapper mutates
/// each group's learning rate through `param_groups_mut` (or `set_lr`)
/// before delegating `step`.
pub trait Optimizer {
    /// Apply one update to every parameter with an accumulated gradient,
    /// using each group's current learning rate.
    fn step(&mut self);

    /// Clear accumulated gradients in every group.
    fn zero_grad(&mut self) {
        for group in self.param_groups_mut() {
            for param in &group.params {
                param.zero_grad();
            }
        }
    }

    /// Parameter groups, in registration order.
    fn param_groups(&self) -> &[ParamGroup];

    /// Mutable access to the parameter groups.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];

    /// Write one learning rate into every group.
    fn set_lr(&mut self, lr: f32) {
        for group in self.param_groups_mut() {
            group.lr = lr;
        }
    }

    /// Snapshot the step counter, per-parameter buffers, and group rates.
    fn state(&self) -> OptimizerState;

    /// Restore a snapshot taken from an optimizer with the same layout.
    fn load_state(&mut self, state: OptimizerState) -> Result<()>;
}

/// Serializable optimizer snapshot.
///
/// Buffers are stored as plain vectors, one entry per parameter in group
/// order; `None` marks a buffer the optimizer has not initialized yet.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OptimizerState {
    /// Update steps taken so far.
    pub step_count: u64,
    /// Per-group learning rates, in group order.
    pub group_lrs: Vec<f32>,
    /// First buffer set (SGD velocities, AdamW first moments).
    pub buffers: Vec<Option<Vec<f32>>>,
    /// Second buffer set (AdamW second moments; empty for SGD).
    pub second_buffers: Vec<Option<Vec<f32>>>,
}
