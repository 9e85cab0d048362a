//! Linear warmup with inverse-square-root decay

use super::WarmupSchedule;
use crate::error::{GenerarError, Result};

/// Linear ramp to an explicit target rate, then inverse-square-root
/// decay continuous with the ramp endpoint.
///
/// Formula, with `W = warmup_steps`:
/// - n <= W: rate(n) = init_lr + n · (target_lr - init_lr) / W
/// - n >  W: rate(n) = target_lr · √W · n^-0.5
///
/// The rate at `n = W` is exactly `target_lr`, and the decay branch
/// takes the same value there.
#[derive(Clone, Debug)]
pub struct LinearWarmupInverseSqrtSchedule {
    init_lr: f32,
    warmup_steps: usize,
    warmup_step_size: f32,
    decay_factor: f32,
}

impl LinearWarmupInverseSqrtSchedule {
    /// # Arguments
    /// * `target_lr` - Rate reached at the end of the warmup phase
    /// * `init_lr` - Rate the ramp starts from (first step is one
    ///   increment above it)
    /// * `warmup_steps` - Length of the warmup phase (must be >= 1)
    pub fn new(target_lr: f32, init_lr: f32, warmup_steps: usize) -> Result<Self> {
        if warmup_steps == 0 {
            return Err(GenerarError::InvalidWarmup { steps: warmup_steps });
        }
        Ok(Self {
            init_lr,
            warmup_steps,
            warmup_step_size: (target_lr - init_lr) / warmup_steps as f32,
            decay_factor: target_lr * (warmup_steps as f32).sqrt(),
        })
    }

    /// The precomputed decay coefficient `target_lr · √warmup_steps`.
    pub fn decay_factor(&self) -> f32 {
        self.decay_factor
    }
}

impl WarmupSchedule for LinearWarmupInverseSqrtSchedule {
    fn rate_at(&self, step: usize) -> f32 {
        if step <= self.warmup_steps {
            self.init_lr + step as f32 * self.warmup_step_size
        } else {
            self.decay_factor * (step as f32).powf(-0.5)
        }
    }
}
