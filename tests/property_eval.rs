//! Property tests for Rouge evaluation and warmup scheduling
//!
//! Ensures the public API satisfies its mathematical invariants:
//! - Report values bounded to [0, 1], never NaN
//! - Identical corpora score 1.0, mismatched corpora always error
//! - Schedule rates finite, positive, and peaked at the warmup boundary
//! - Save/restore reproduces the exact rate sequence

use generar::eval::rouge::{RougeConfig, RougeEvaluator, RougeMetric};
use generar::optim::{
    InverseSqrtDimSchedule, LinearWarmupInverseSqrtSchedule, ParamGroup, Parameter,
    ScheduledOptimizer, Sgd, WarmupSchedule,
};
use generar::GenerarError;
use ndarray::Array1;
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

fn token() -> impl Strategy<Value = String> {
    "[a-z]{1,4}"
}

/// Generate one token sequence (at least two tokens so bigrams exist)
fn sample() -> impl Strategy<Value = Vec<String>> {
    vec(token(), 2..6)
}

/// Generate a pair of parallel corpora with the same sample count
fn corpus_pair(
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<Vec<String>>, Vec<Vec<String>>)> {
    len.prop_flat_map(|l| (vec(sample(), l), vec(sample(), l)))
}

fn single_param_sgd() -> (Parameter, Sgd) {
    let param = Parameter::from_vec(vec![1.0]);
    let opt = Sgd::new(vec![ParamGroup::new("all", vec![param.clone()], 0.0)], 0.0);
    (param, opt)
}

// =============================================================================
// Evaluator Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_report_keys_and_bounds((generated, reference) in corpus_pair(1..8)) {
        let evaluator = RougeEvaluator::new(RougeConfig::default());
        let report = evaluator.evaluate(&generated, &reference).unwrap();

        let keys: Vec<RougeMetric> = report.keys().copied().collect();
        prop_assert_eq!(keys, RougeMetric::ALL.to_vec());

        for (metric, value) in report {
            prop_assert!(
                (0.0..=1.0).contains(&value) && !value.is_nan(),
                "{} = {} not in [0, 1]",
                metric, value
            );
        }
    }

    #[test]
    fn prop_identical_corpora_score_one(generated in vec(sample(), 1..8)) {
        let evaluator = RougeEvaluator::new(RougeConfig::default());
        let report = evaluator.evaluate(&generated, &generated).unwrap();
        for (metric, value) in report {
            prop_assert!(
                (value - 1.0).abs() < 1e-9,
                "{} = {} for identical corpora",
                metric, value
            );
        }
    }

    #[test]
    fn prop_length_mismatch_always_errors(
        (generated, reference) in corpus_pair(1..6),
        extra in sample()
    ) {
        let mut longer = generated.clone();
        longer.push(extra);
        let evaluator = RougeEvaluator::new(RougeConfig::default());
        let err = evaluator.evaluate(&longer, &reference).unwrap_err();
        let is_length_mismatch = matches!(err, GenerarError::CorpusLengthMismatch { .. });
        prop_assert!(is_length_mismatch);
    }
}

// =============================================================================
// Schedule Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_dim_schedule_rates_finite_positive(
        d_model in 1usize..2048,
        warmup in 1usize..500,
        step in 1usize..5000
    ) {
        let sched = InverseSqrtDimSchedule::new(1.0, d_model, warmup).unwrap();
        let rate = sched.rate_at(step);
        prop_assert!(rate.is_finite() && rate > 0.0, "rate = {} at step {}", rate, step);
    }

    #[test]
    fn prop_dim_schedule_peaks_at_warmup(
        warmup in 2usize..200,
        step in 1usize..1000
    ) {
        let sched = InverseSqrtDimSchedule::new(1.0, 512, warmup).unwrap();
        prop_assert!(
            sched.rate_at(step) <= sched.rate_at(warmup) + 1e-7,
            "rate at {} exceeds the peak at {}",
            step, warmup
        );
    }

    #[test]
    fn prop_linear_schedule_target_at_boundary(
        target in 1e-4f32..1e-2,
        warmup in 1usize..1000
    ) {
        let sched = LinearWarmupInverseSqrtSchedule::new(target, 0.0, warmup).unwrap();
        let boundary = sched.rate_at(warmup);
        prop_assert!(
            (boundary - target).abs() <= target * 1e-5,
            "rate {} at the warmup boundary, expected {}",
            boundary, target
        );
    }

    #[test]
    fn prop_resume_reproduces_rates(warmup in 1usize..50, run in 1usize..100) {
        let (_, opt) = single_param_sgd();
        let sched = InverseSqrtDimSchedule::new(1.0, 256, warmup).unwrap();
        let mut scheduled = ScheduledOptimizer::new(opt, sched.clone());
        for _ in 0..run {
            scheduled.step();
        }
        let snapshot = scheduled.state();

        let (_, opt) = single_param_sgd();
        let mut resumed = ScheduledOptimizer::new(opt, sched);
        resumed.load_state(snapshot).unwrap();

        for _ in 0..10 {
            scheduled.step();
            resumed.step();
            prop_assert_eq!(scheduled.current_lr(), resumed.current_lr());
        }
    }
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_scheduled_training_follows_the_curve() {
    let (param, opt) = single_param_sgd();
    let sched = LinearWarmupInverseSqrtSchedule::new(1e-2, 0.0, 10).unwrap();
    let mut scheduled = ScheduledOptimizer::new(opt, sched.clone());

    // Minimize x^2 from x = 1: gradient is 2x
    for n in 1..=30 {
        let x = param.data()[0];
        param.set_grad(Array1::from(vec![2.0 * x]));
        scheduled.step();
        scheduled.zero_grad();
        assert_eq!(scheduled.current_lr(), Some(sched.rate_at(n)));
    }

    assert!(param.data()[0].abs() < 1.0, "training should move toward the minimum");
    assert_eq!(scheduled.step_count(), 30);
}
