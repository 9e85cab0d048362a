//! Scheduler-wrapped optimizer

use serde::{Deserialize, Serialize};

use super::WarmupSchedule;
use crate::error::Result;
use crate::optim::{Optimizer, OptimizerState};

/// An optimizer wrapped with a warmup learning-rate schedule.
///
/// Each [`step`](Self::step) advances the step counter, recomputes the
/// rate, writes it into every parameter group, then delegates the
/// parameter update to the wrapped optimizer.
pub struct ScheduledOptimizer<O, S> {
    optimizer: O,
    schedule: S,
    step_count: usize,
}

impl<O: Optimizer, S: WarmupSchedule> ScheduledOptimizer<O, S> {
    pub fn new(optimizer: O, schedule: S) -> Self {
        Self { optimizer, schedule, step_count: 0 }
    }

    /// Apply one scheduled update.
    pub fn step(&mut self) {
        self.step_count += 1;
        let lr = self.schedule.rate_at(self.step_count);
        self.optimizer.set_lr(lr);
        self.optimizer.step();
    }

    /// Clear accumulated gradients on the wrapped optimizer.
    pub fn zero_grad(&mut self) {
        self.optimizer.zero_grad();
    }

    /// Update steps taken so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Rate written by the most recent step; `None` before the first.
    pub fn current_lr(&self) -> Option<f32> {
        (self.step_count > 0).then(|| self.schedule.rate_at(self.step_count))
    }

    /// The wrapped optimizer.
    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    /// Snapshot the wrapped optimizer state together with the step
    /// counter.
    pub fn state(&self) -> ScheduledOptimizerState {
        ScheduledOptimizerState {
            optimizer: self.optimizer.state(),
            step_count: self.step_count,
        }
    }

    /// Restore a snapshot. The optimizer state and the step counter are
    /// restored together; on error the counter is left untouched.
    pub fn load_state(&mut self, state: ScheduledOptimizerState) -> Result<()> {
        self.optimizer.load_state(state.optimizer)?;
        self.step_count = state.step_count;
        Ok(())
    }
}

/// Snapshot of a scheduled optimizer: wrapped optimizer state plus the
/// scheduler's step counter. Restore both together; restoring only one
/// resumes at the wrong point on the rate curve.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledOptimizerState {
    pub optimizer: OptimizerState,
    pub step_count: usize,
}
