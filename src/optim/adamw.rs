//! AdamW optimizer (Adam with decoupled weight decay)

use ndarray::Array1;

use super::optimizer::{Optimizer, OptimizerState};
use super::param::ParamGroup;
use crate::error::{GenerarError, Result};

/// AdamW optimizer.
///
/// Weight decay is applied directly to the parameters instead of being
/// folded into the gradient:
///
/// θ_t = (1 - lr·λ) · θ_{t-1} - lr · m̂_t / (√v̂_t + ε)
pub struct AdamW {
    groups: Vec<ParamGroup>,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    weight_decay: f32,
    t: u64,
    m: Vec<Option<Array1<f32>>>,
    v: Vec<Option<Array1<f32>>>,
}

impl AdamW {
    pub fn new(
        groups: Vec<ParamGroup>,
        beta1: f32,
        beta2: f32,
        epsilon: f32,
        weight_decay: f32,
    ) -> Self {
        let n_params = groups.iter().map(|g| g.params.len()).sum();
        Self {
            groups,
            beta1,
            beta2,
            epsilon,
            weight_decay,
            t: 0,
            m: vec![None; n_params],
            v: vec![None; n_params],
        }
    }

    /// AdamW with the usual defaults (β₁ 0.9, β₂ 0.999, weight decay 0.01).
    pub fn default_params(groups: Vec<ParamGroup>) -> Self {
        Self::new(groups, 0.9, 0.999, 1e-8, 0.01)
    }

    pub fn step_count(&self) -> u64 {
        self.t
    }
}

impl Optimizer for AdamW {
    fn step(&mut self) {
        self.t += 1;
        let bias1 = 1.0 - self.beta1.powi(self.t as i32);
        let bias2 = 1.0 - self.beta2.powi(self.t as i32);

        let mut idx = 0;
        for group in &self.groups {
            for param in &group.params {
                if let Some(grad) = param.grad() {
                    let m = match self.m[idx].take() {
                        Some(m) => m * self.beta1 + &grad * (1.0 - self.beta1),
                        None => &grad * (1.0 - self.beta1),
                    };
                    let v = match self.v[idx].take() {
                        Some(v) => v * self.beta2 + (&grad * &grad) * (1.0 - self.beta2),
                        None => (&grad * &grad) * (1.0 - self.beta2),
                    };

                    let m_hat = &m / bias1;
                    let v_hat = &v / bias2;
                    let denom = v_hat.mapv(f32::sqrt) + self.epsilon;

                    let mut data = param.data_mut();
                    if self.weight_decay > 0.0 {
                        *data *= 1.0 - group.lr * self.weight_decay;
                    }
                    *data -= &(m_hat * group.lr / &denom);

                    self.m[idx] = Some(m);
                    self.v[idx] = Some(v);
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
            step_count: self.t,
            group_lrs: self.groups.iter().map(|g| g.lr).collect(),
            buffers: self.m.iter().map(|b| b.as_ref().map(|a| a.to_vec())).collect(),
            second_buffers: self.v.iter().map(|b| b.as_ref().map(|a| a.to_vec())).collect(),
        }
    }

    fn load_state(&mut self, state: OptimizerState) -> Result<()> {
        if state.group_lrs.len() != self.groups.len() {
            return Err(GenerarError::StateMismatch {
                expected: self.groups.len(),
                actual: state.group_lrs.len(),
            });
        }
        if state.buffers.len() != self.m.len() || state.second_buffers.len() != self.v.len() {
            return Err(GenerarError::StateMismatch {
                expected: self.m.len(),
                actual: state.buffers.len(),
            });
        }

        self.t = state.step_count;
        for (group, &lr) in self.groups.iter_mut().zip(&state.group_lrs) {
            group.lr = lr;
        }
        self.m = state.buffers.into_iter().map(|b| b.map(Array1::from)).collect();
        self.v = state.second_buffers.into_iter().map(|b| b.map(Array1::from)).collect();
        Ok(())
    }
}
