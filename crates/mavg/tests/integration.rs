//! End-to-end tests through the public API.

#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

mod common;

use std::thread;

use common::{
    assert_series_eq, generate_series, naive_sma, REFERENCE_EPSILON, REFERENCE_LONG,
    REFERENCE_SHORT,
};
use mavg::batch::{process_batch, BatchProcessor};
use mavg::prelude::*;
use mavg::{approx_eq, LOOSE_EPSILON};

// ==================== Reference Scenarios ====================

#[test]
fn reference_sma_period_3() {
    let result = sma(&REFERENCE_SHORT, 3).unwrap();
    assert_series_eq(&result, &[58.333, 54.15, 47.883], REFERENCE_EPSILON);
}

#[test]
fn reference_ema_period_3() {
    let result = ema(&REFERENCE_SHORT, 3).unwrap();
    assert_series_eq(&result, &[58.333, 35.392, 50.796], REFERENCE_EPSILON);
}

#[test]
fn reference_dema_period_3() {
    let result = dema(&REFERENCE_LONG, 3).unwrap();
    assert_series_eq(&result, &[53.418, 22.485, 20.356], REFERENCE_EPSILON);
}

#[test]
fn reference_dema_is_built_from_two_ema_passes() {
    let first = ema(&REFERENCE_LONG, 3).unwrap();
    let second = ema(&first, 3).unwrap();

    assert_series_eq(
        &first,
        &[58.333, 35.392, 50.796, 31.048, 26.774],
        REFERENCE_EPSILON,
    );
    assert_series_eq(&second, &[48.174, 39.611, 33.192], REFERENCE_EPSILON);
}

// ==================== Configuration ====================

#[test]
fn moving_average_matches_free_functions() {
    let data = generate_series(500);

    for (kind, direct) in [
        (MaType::Sma, sma(&data, 14).unwrap()),
        (MaType::Ema, ema(&data, 14).unwrap()),
        (MaType::Dema, dema(&data, 14).unwrap()),
    ] {
        let ma = MovingAverage::new(kind).period(14);
        let configured = ma.compute(&data).unwrap();

        assert_eq!(configured, direct, "{kind}");
        assert_eq!(configured.len(), ma.output_len(data.len()), "{kind}");
        assert_eq!(kind.compute(&data, 14).unwrap(), direct, "{kind}");
    }
}

#[test]
fn moving_average_from_parsed_kind() {
    let kind: MaType = " dema ".parse().unwrap();
    let ma = MovingAverage::from(kind).period(3);

    assert_eq!(ma.get_kind(), MaType::Dema);
    assert_eq!(ma.min_len(), Some(5));
    assert_eq!(ma.compute(&REFERENCE_LONG).unwrap().len(), 3);
}

#[test]
fn ma_type_round_trips_through_display() {
    for kind in MaType::ALL {
        let parsed: MaType = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
    }
}

#[test]
fn only_three_kinds_have_algorithms() {
    let implemented: Vec<MaType> = MaType::ALL
        .into_iter()
        .filter(|kind| kind.is_implemented())
        .collect();
    assert_eq!(implemented, vec![MaType::Sma, MaType::Ema, MaType::Dema]);
}

// ==================== Numeric Types ====================

#[test]
fn f32_tracks_f64() {
    let data64 = generate_series(200);
    let data32: Vec<f32> = data64.iter().map(|&v| v as f32).collect();

    let sma64 = sma(&data64, 10).unwrap();
    let sma32 = sma(&data32, 10).unwrap();
    let dema64 = dema(&data64, 10).unwrap();
    let dema32 = dema(&data32, 10).unwrap();

    assert_eq!(sma32.len(), sma64.len());
    assert_eq!(dema32.len(), dema64.len());
    for (&a, &b) in sma32.iter().zip(&sma64) {
        assert!((f64::from(a) - b).abs() < 1e-2);
    }
    for (&a, &b) in dema32.iter().zip(&dema64) {
        assert!((f64::from(a) - b).abs() < 1e-2);
    }
}

// ==================== Long Series ====================

#[test]
fn long_series_sma_does_not_drift() {
    let data = generate_series(100_000);
    let result = sma(&data, 50).unwrap();
    let expected = naive_sma(&data, 50);

    assert_eq!(result.len(), expected.len());
    for (i, (&a, &e)) in result.iter().zip(&expected).enumerate() {
        assert!(approx_eq(a, e, LOOSE_EPSILON), "index {i}: {a} vs {e}");
    }
}

#[test]
fn output_lengths_match_helpers() {
    let data = generate_series(1_000);

    for period in [1, 2, 10, 100, 500] {
        assert_eq!(sma(&data, period).unwrap().len(), sma_output_len(data.len(), period));
        assert_eq!(ema(&data, period).unwrap().len(), ema_output_len(data.len(), period));
        assert_eq!(dema(&data, period).unwrap().len(), dema_output_len(data.len(), period));
    }
}

// ==================== Batch and Threads ====================

#[test]
fn batch_matches_individual_calls() {
    let series: Vec<Vec<f64>> = (1..=20).map(|n| generate_series(50 + n)).collect();

    let batched = BatchProcessor::new()
        .min_parallel_threshold(4)
        .process(&series, |s| dema(s, 5))
        .unwrap();

    for (s, result) in series.iter().zip(&batched) {
        assert_eq!(result, &dema(s, 5).unwrap());
    }
}

#[test]
fn batch_reports_first_failure() {
    let series = vec![generate_series(30), generate_series(3), generate_series(30)];

    let result = process_batch(&series, |s| ema(s, 10));
    assert_eq!(
        result,
        Err(Error::TimePeriodTooBig {
            period: 10,
            required: 10,
            actual: 3,
        })
    );
}

#[test]
fn concurrent_calls_share_input() {
    let data = generate_series(5_000);
    let expected = ema(&data, 21).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| ema(&data, 21).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
