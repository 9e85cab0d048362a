//! Optimizers and warmup learning-rate scheduling

mod adamw;
mod optimizer;
mod param;
mod scheduler;
mod sgd;

pub use adamw::AdamW;
pub use optimizer::{Optimizer, OptimizerState};
pub use param::{ParamGroup, Parameter};
pub use scheduler::{
    InverseSqrtDimSchedule, LinearWarmupInverseSqrtSchedule, ScheduledOptimizer,
    ScheduledOptimizerState, WarmupSchedule,
};
pub use sgd::Sgd;
