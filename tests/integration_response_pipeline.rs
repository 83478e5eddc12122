//! Integration tests for the SDOF Duhamel response pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from text input, through parameter
//!   validation and either convolution strategy, to derived series and the
//!   peak summary.
//! - Check the cross-strategy properties that only make sense on whole
//!   responses (qualitative agreement, opt-in rescaling, idempotence).
//!
//! Coverage
//! --------
//! - `input`: parsing a text record into an `ExcitationRecord`.
//! - `response::models::engine`: `compute_response`, `compute_batch`,
//!   degenerate-record warnings, length ceilings, and cancellation.
//! - `response::core`: defaults, strategy parsing, and physical scaling as
//!   seen through the public surface.
//!
//! Exclusions
//! ----------
//! - Fine-grained kernel and validation checks; those are covered by unit
//!   tests in `response::core`.
//! - Python bindings.
use approx::assert_relative_eq;
use ndarray::Array1;
use rust_duhamel::{
    input::parse_excitation,
    response::{
        core::derived::{peak_index, sign_changes},
        prelude::*,
    },
};

/// Unit impulse at `t = 0` followed by `n − 1` zeros.
fn impulse(n: usize) -> ExcitationRecord {
    let mut samples = Array1::zeros(n);
    if n > 0 {
        samples[0] = 1.0;
    }
    ExcitationRecord::new(samples, ExcitationKind::Force).unwrap()
}

/// 1 Hz sine sampled at `dt = 0.02` for `n` samples.
fn sine_record(n: usize) -> ExcitationRecord {
    let samples =
        Array1::from_iter((0..n).map(|i| (std::f64::consts::TAU * i as f64 * 0.02).sin()));
    ExcitationRecord::new(samples, ExcitationKind::BaseAcceleration).unwrap()
}

fn run(
    record: &ExcitationRecord, strategy: ConvolutionStrategy,
) -> ResponseResult<SdofResponse> {
    compute_response(&SystemParameters::default(), record, &EngineOptions::new(strategy))
}

#[test]
// Purpose
// -------
// Reproduce the reference impulse scenario with the default system.
//
// Given
// -----
// - dt = 0.02, mass = 1000, stiffness = 50000, ξ = 0.05.
// - Excitation [1, 0, 0, 0, 0], direct strategy.
//
// Expect
// ------
// - wn = √50, wd = wn·√(1 − 0.0025).
// - u[0] = 0 and u[1] = −exp(−ξ·wn·dt)·sin(wd·dt)·dt/(m·wd) to 6+ digits.
fn impulse_scenario_matches_closed_form() {
    let response = run(&impulse(5), ConvolutionStrategy::Direct).unwrap();

    let wn = 50f64.sqrt();
    let wd = wn * (1.0f64 - 0.0025).sqrt();
    let expected = -(-0.05 * wn * 0.02f64).exp() * (wd * 0.02).sin() * 0.02 / (1000.0 * wd);

    assert_relative_eq!(response.modal.wn, wn, max_relative = 1e-14);
    assert_relative_eq!(response.modal.wd, wd, max_relative = 1e-14);
    assert_eq!(response.series.displacement[0], 0.0);
    assert_relative_eq!(response.series.displacement[1], expected, max_relative = 1e-6);
    assert_eq!(response.strategy, ConvolutionStrategy::Direct);
}

#[test]
// Purpose
// -------
// Both strategies describe the same motion on a unit impulse.
//
// Given
// -----
// - 200-sample unit impulse (4 s, about 4.5 natural periods).
//
// Expect
// ------
// - Same number of sign changes (8) and same peak location (index 11,
//   close to a quarter period).
// - After opt-in rescaling, identical sign and value.
fn strategies_agree_on_impulse_response() {
    let params = SystemParameters::default();
    let record = impulse(200);

    let direct = run(&record, ConvolutionStrategy::Direct).unwrap();
    let recursive = run(&record, ConvolutionStrategy::Recursive).unwrap();

    let u_direct = direct.series.displacement.view();
    let u_recursive = recursive.series.displacement.view();
    assert_eq!(sign_changes(u_direct), sign_changes(u_recursive));
    assert_eq!(sign_changes(u_direct), 8);
    assert_eq!(peak_index(u_direct), peak_index(u_recursive));
    assert_eq!(peak_index(u_direct), Some(11));

    let scaled = recursive.physically_scaled_displacement(&params);
    for (d, r) in u_direct.iter().zip(scaled.iter()) {
        assert_relative_eq!(*d, *r, epsilon = 1e-18, max_relative = 1e-8);
    }
}

#[test]
// Purpose
// -------
// Strategies also agree on a sustained harmonic excitation.
fn strategies_agree_on_harmonic_excitation() {
    let record = sine_record(300);

    let direct = run(&record, ConvolutionStrategy::Direct).unwrap();
    let recursive = run(&record, ConvolutionStrategy::Recursive).unwrap();

    let u_direct = direct.series.displacement.view();
    let u_recursive = recursive.series.displacement.view();
    assert_eq!(sign_changes(u_direct), sign_changes(u_recursive));
    assert_eq!(peak_index(u_direct), peak_index(u_recursive));
}

#[test]
// Purpose
// -------
// Repeated invocations with identical inputs are bit-identical.
fn repeated_invocations_are_bit_identical() {
    let record = sine_record(120);

    for strategy in ConvolutionStrategy::ALL {
        let first = run(&record, strategy).unwrap();
        let second = run(&record, strategy).unwrap();
        assert_eq!(first, second, "{strategy} is not deterministic");
    }
}

#[test]
// Purpose
// -------
// Summary peaks equal max |x| computed independently from the series.
fn summary_matches_independent_peaks() {
    let response = run(&sine_record(150), ConvolutionStrategy::Direct).unwrap();

    let max_abs = |x: &Array1<f64>| x.iter().map(|v| v.abs()).fold(0.0f64, f64::max);
    let series = &response.series;
    assert_eq!(response.summary.max_displacement, max_abs(&series.displacement));
    assert_eq!(response.summary.max_velocity, max_abs(&series.velocity));
    assert_eq!(response.summary.max_acceleration, max_abs(&series.acceleration));
    assert!(response.summary.max_displacement > 0.0);
}

#[test]
// Purpose
// -------
// Zero excitation produces zero motion everywhere, for both strategies.
fn zero_excitation_is_at_rest() {
    let record = ExcitationRecord::new(Array1::zeros(50), ExcitationKind::Force).unwrap();

    for strategy in ConvolutionStrategy::ALL {
        let response = run(&record, strategy).unwrap();
        assert_eq!(response.summary, ResponseSummary::default());
        assert!(response.warnings.is_empty());
    }
}

#[test]
// Purpose
// -------
// ξ ≥ 1 is rejected with a parameter error for both strategies.
fn critical_and_overdamped_systems_are_rejected() {
    for xi in [1.0, 1.5] {
        let params = SystemParameters { damping_ratio: xi, ..SystemParameters::default() };
        for strategy in ConvolutionStrategy::ALL {
            let err =
                compute_response(&params, &impulse(5), &EngineOptions::new(strategy)).unwrap_err();
            assert_eq!(
                err,
                ResponseError::InvalidParameter(ParamError::InvalidDampingRatio { value: xi })
            );
        }
    }
}

#[test]
// Purpose
// -------
// Records of length 0 or 1 give zero series plus a warning, not an error.
fn short_records_warn() {
    for n in [0usize, 1] {
        let response = run(&impulse(n), ConvolutionStrategy::Recursive).unwrap();

        assert_eq!(response.series.len(), n);
        assert_eq!(response.warnings, vec![ResponseWarning::DegenerateRecord { len: n }]);
        assert_eq!(response.summary, ResponseSummary::default());
    }
}

#[test]
// Purpose
// -------
// A parsed text record flows through the whole pipeline.
//
// Given
// -----
// - A header line, a blank line, and four samples (one with a second column).
//
// Expect
// ------
// - Four samples, a four-row time/series table, and a printable summary.
fn text_record_runs_end_to_end() {
    let text = "ACCELEROGRAM (m/s2)\n\n0.0\n0.3 0.02\n-0.1\n0.05\n";
    let record = parse_excitation(text, ExcitationKind::BaseAcceleration).unwrap();
    let strategy: ConvolutionStrategy = "Recursive".parse().unwrap();

    let response = run(&record, strategy).unwrap();

    assert_eq!(record.len(), 4);
    let rows: Vec<_> = response.series.rows().collect();
    assert_eq!(rows.len(), 4);
    assert_relative_eq!(rows[3].0, 0.06, epsilon = 1e-15);
    let summary = response.summary.to_string();
    assert!(summary.contains("Max Displacement:"));
    assert!(summary.contains("m/s²"));
}

#[test]
// Purpose
// -------
// Batches return one result per record, in order, honoring the ceiling.
fn batch_runs_records_independently() {
    let params = SystemParameters::default();
    let records = vec![impulse(40), sine_record(80), impulse(0), sine_record(61)];
    let opts = EngineOptions::new(ConvolutionStrategy::Direct).with_max_len(60);

    let results = compute_batch(&params, &records, &opts);

    assert_eq!(results.len(), 4);
    let single = compute_response(&params, &records[0], &opts).unwrap();
    assert_eq!(results[0].as_ref().unwrap(), &single);
    assert_eq!(results[1].as_ref().unwrap_err(), &ResponseError::RecordTooLong { len: 80, max: 60 });
    assert!(results[2].as_ref().unwrap().is_degenerate());
    assert_eq!(results[3].as_ref().unwrap_err(), &ResponseError::RecordTooLong { len: 61, max: 60 });
}

#[test]
// Purpose
// -------
// A flag raised before the call cancels both strategies, and a reset flag
// lets the same options run to completion.
fn cancellation_is_cooperative_and_resettable() {
    let flag = CancelFlag::new();
    flag.cancel();
    let record = impulse(100);

    for strategy in ConvolutionStrategy::ALL {
        let opts = EngineOptions::new(strategy).with_cancel_flag(flag.clone());
        let err = compute_response(&SystemParameters::default(), &record, &opts).unwrap_err();
        assert!(matches!(err, ResponseError::Cancelled { .. }), "got {err:?}");
    }

    flag.reset();
    let opts = EngineOptions::default().with_cancel_flag(flag);
    assert!(compute_response(&SystemParameters::default(), &record, &opts).is_ok());
}
