//! End-to-end stage construction scenarios
//!
//! Stage counts are pinned against reference runs of the construction with
//! the default configuration (200 iterations, 1e-3 termination tolerance).

use approx::assert_relative_eq;
use mccabe_rs::models::FeedLine;
use mccabe_rs::physics::ColumnParameters;
use mccabe_rs::solver::{compute_stages, compute_stages_with, McCabeThiele, StepperConfiguration};
use mccabe_rs::EngineError;

mod common;
use common::{assert_on_diagonal, converging_parameters, pinched_parameters, stage_count_or_cap};

#[test]
fn test_reference_scenario_geometry() {
    let construction = McCabeThiele::build(&pinched_parameters()).unwrap();

    assert_eq!(*construction.feed_line(), FeedLine::Vertical { x: 0.5 });
    assert_relative_eq!(construction.rectifying().slope, 2.0 / 3.0, epsilon = 1e-15);
    assert_relative_eq!(construction.rectifying().intercept, 1.0 / 3.0, epsilon = 1e-15);
    assert_eq!(construction.intersection().x, 0.5);
}

#[test]
fn test_reference_scenario_pinches_at_feed() {
    // The equilibrium curve of alpha = 2 passes through the intersection
    // (0.5, 2/3), so the staircase closes in on it and never reaches xb.
    match compute_stages(pinched_parameters()) {
        Err(EngineError::NonConvergent { partial }) => {
            assert!(!partial.reboiler_reached);
            assert_eq!(partial.stage_count, 200);
            assert!(partial.stage_count >= 5);

            let last = partial.points.last().unwrap();
            assert_relative_eq!(last.x, 0.5, epsilon = 1e-9);
            assert_relative_eq!(last.y, 2.0 / 3.0, epsilon = 1e-9);
        }
        other => panic!("expected NonConvergent, got {:?}", other),
    }
}

#[test]
fn test_pinned_stage_counts() {
    let cases = [
        (ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95), 13, Some(7)),
        (ColumnParameters::new(2.5, 3.0, 0.5, 0.5, 0.05, 0.95), 11, None),
        (ColumnParameters::new(2.5, 3.0, 2.0, 0.5, 0.05, 0.95), 9, None),
        (ColumnParameters::new(4.0, 1.0, 1.0, 0.4, 0.02, 0.98), 14, None),
    ];

    for (params, expected, feed_stage) in cases {
        let result = compute_stages(params).unwrap();
        assert!(result.reboiler_reached);
        assert_eq!(result.stage_count, expected, "stage count for {:?}", params);
        assert_eq!(result.iterations as u32, expected);
        if feed_stage.is_some() {
            assert_eq!(result.feed_stage, feed_stage);
        }
    }
}

#[test]
fn test_staircase_structure() {
    let result = compute_stages(converging_parameters()).unwrap();
    let staircase = result.staircase();

    assert_on_diagonal(&staircase[0], 1e-15, "staircase anchor");
    assert_eq!(result.points.len(), 2 * result.iterations);

    // Each stage: corner then vertical leg at the same x, next corner at the same y
    for pair in result.points.chunks(2) {
        assert_eq!(pair[0].x, pair[1].x);
    }
    for window in result.points[1..].chunks(2).filter(|w| w.len() == 2) {
        assert_eq!(window[0].y, window[1].y);
    }

    let last = result.points.last().unwrap();
    assert!(last.x <= 0.05 + 1e-3);
}

#[test]
fn test_stage_count_at_least_one() {
    // Very high reflux, easy separation: the first corner already lies below xb
    let params = ColumnParameters::new(50.0, 100.0, 1.0, 0.5, 0.4, 0.6);
    let result = compute_stages(params).unwrap();
    assert!(result.stage_count >= 1);
}

#[test]
fn test_reflux_monotonicity_sweep() {
    let reflux_ratios = [0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0, 20.0, 100.0];

    for q in [0.0, 0.5, 1.0, 1.5, 2.0] {
        let counts: Vec<u32> = reflux_ratios
            .iter()
            .map(|&r| {
                stage_count_or_cap(
                    converging_parameters().with_feed_quality(q).with_reflux_ratio(r),
                )
            })
            .collect();

        for (i, pair) in counts.windows(2).enumerate() {
            assert!(
                pair[1] <= pair[0],
                "q = {}: R = {} needs {} stages but R = {} needs {}",
                q, reflux_ratios[i + 1], pair[1], reflux_ratios[i], pair[0]
            );
        }
    }
}

#[test]
fn test_sweep_pinned_values_saturated_liquid() {
    let counts: Vec<u32> = [1.5, 2.0, 3.0, 5.0, 10.0, 20.0]
        .iter()
        .map(|&r| stage_count_or_cap(converging_parameters().with_reflux_ratio(r)))
        .collect();
    assert_eq!(counts, vec![18, 13, 10, 9, 8, 7]);
}

#[test]
fn test_zero_reflux_sticks_at_unit_point() {
    // Rectifying line degenerates to y = 1, so every stage lands on (1, 1)
    let params = pinched_parameters().with_reflux_ratio(0.0);
    let construction = McCabeThiele::build(&params).unwrap();
    assert_eq!(construction.rectifying().slope, 0.0);
    assert_eq!(construction.rectifying().intercept, 1.0);

    match construction.step_off(&StepperConfiguration::default()) {
        Err(EngineError::NonConvergent { partial }) => {
            assert_eq!(partial.iterations, 200);
            assert!(!partial.reboiler_reached);
            let last = partial.points.last().unwrap();
            assert_relative_eq!(last.x, 1.0, epsilon = 1e-12);
            assert_relative_eq!(last.y, 1.0, epsilon = 1e-12);
        }
        other => panic!("expected NonConvergent, got {:?}", other),
    }
}

#[test]
fn test_zero_reflux_vapor_feed_has_no_intersection() {
    let params = pinched_parameters().with_reflux_ratio(0.0).with_feed_quality(0.0);
    assert!(params.validate().is_ok());
    assert!(matches!(compute_stages(params), Err(EngineError::NoIntersection { .. })));
}

#[test]
fn test_intersection_on_bottoms_is_degenerate() {
    // q = 0, R = 1: rectifying y = 0.5x + 0.5 meets y = zf at x = 2zf - 1 = xb
    let params = ColumnParameters::new(2.0, 1.0, 0.0, 0.525, 0.05, 0.95);
    assert!(params.validate().is_ok());

    match compute_stages(params) {
        Err(EngineError::DegenerateStrippingLine { x }) => {
            assert_relative_eq!(x, 0.05, epsilon = 1e-12);
        }
        other => panic!("expected DegenerateStrippingLine, got {:?}", other),
    }
}

#[test]
fn test_tighter_cap_turns_convergence_into_error() {
    let config = StepperConfiguration::default().max_iterations(12);
    let err = compute_stages_with(converging_parameters(), &config).unwrap_err();
    let partial = err.partial_result().unwrap();

    assert_eq!(partial.stage_count, 12);
    assert!(!partial.is_converged());
}
