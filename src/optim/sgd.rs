//! Stochastic gradient descent

use ndarray::Array1;

use super::optimizer::{Optimizer, OptimizerState};
use super::param::ParamGroup;
use crate::error::{GenerarError, Result};

/// SGD optimizer with optional momentum.
///
/// Velocity buffers are allocated lazily, on the first step that sees a
/// gradient for the parameter.
pub struct Sgd {
    groups: Vec<ParamGroup>,
    momentum: f32,
    velocities: Vec<Option<Array1<f32>>>,
    step_count: u64,
}

impl Sgd {
    pub fn new(groups: Vec<ParamGroup>, momentum: f32) -> Self {
        let n_params = groups.iter().map(|g| g.params.len()).sum();
        Self { groups, momentum, velocities: vec![None; n_params], step_count: 0 }
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        self.step_count += 1;

        let mut idx = 0;
        for group in &self.groups {
            for param in &group.params {
                if let Some(grad) = param.grad() {
                    if self.momentum > 0.0 {
                        // v = momentum * v - lr * grad; param += v
                        let velocity = match &self.velocities[idx] {
                            Some(v) => v * self.momentum - &grad * group.lr,
                            None => &grad * (-group.lr),
                        };
                        *param.data_mut() += &velocity;
                        self.velocities[idx] = Some(velocity);
                    } else {
                        *param.data_mut() -= &(&grad * group.lr);
                    }
                }
                idx += 1;
            }
        }
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.groups
    }

    fn state(&self) -> OptimizerState {
        OptimizerState {
            step_count: self.step_count,
            group_lrs: self.groups.iter().map(|g| g.lr).collect(),
            buffers: self.velocities.iter().map(|v| v.as_ref().map(|a| a.to_vec())).collect(),
            second_buffers: Vec::new(),
        }
    }

    fn load_state(&mut self, state: OptimizerState) -> Result<()> {
        if state.group_lrs.len() != self.groups.len() {
            return Err(GenerarError::StateMismatch {
                expected: self.groups.len(),
                actual: state.group_lrs.len(),
            });
        }
        if state.buffers.len() != self.velocities.len() {
            return Err(GenerarError::StateMismatch {
                expected: self.velocities.len(),
                actual: state.buffers.len(),
            });
        }

        self.step_count = state.step_count;
        for (group, &lr) in self.groups.iter_mut().zip(&state.group_lrs) {
            group.lr = lr;
        }
        self.velocities = state.buffers.into_iter().map(|b| b.map(Array1::from)).collect();
        Ok(())
    }
}
