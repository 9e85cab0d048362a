//! Inverse-square-root-of-dimension warmup schedule

use super::WarmupSchedule;
use crate::error::{GenerarError, Result};

/// Warmup schedule scaled by the model dimension.
///
/// Formula: rate(n) = init_lr · d_model^-0.5 · min(n^-0.5, n · warmup_steps^-1.5)
///
/// Rises roughly linearly for `n < warmup_steps`, peaks at
/// `n = warmup_steps`, then decays as the inverse square root of the
/// step count. The model dimension stands in for an explicit target
/// rate.
#[derive(Clone, Debug)]
pub struct InverseSqrtDimSchedule {
    init_lr: f32,
    d_model: usize,
    warmup_steps: usize,
}

impl InverseSqrtDimSchedule {
    /// # Arguments
    /// * `init_lr` - Base rate multiplied into the schedule scale
    /// * `d_model` - Model dimension (must be >= 1)
    /// * `warmup_steps` - Length of the warmup phase (must be >= 1)
    pub fn new(init_lr: f32, d_model: usize, warmup_steps: usize) -> Result<Self> {
        if warmup_steps == 0 {
            return Err(GenerarError::InvalidWarmup { steps: warmup_steps });
        }
        if d_model == 0 {
            return Err(GenerarError::InvalidDimension { dim: d_model });
        }
        Ok(Self { init_lr, d_model, warmup_steps })
    }
}

impl WarmupSchedule for InverseSqrtDimSchedule {
    fn rate_at(&self, step: usize) -> f32 {
        let n = step as f32;
        let warmup = self.warmup_steps as f32;
        let scale = (self.d_model as f32).powf(-0.5) * n.powf(-0.5).min(n * warmup.powf(-1.5));
        self.init_lr * scale
    }
}
