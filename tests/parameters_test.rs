//! Integration tests for parameter handling and shared configuration.
//!
//! These tests verify:
//! - Deserialization of parameter bundles by option name
//! - Rejection of invalid parameter files at finalize
//! - Concurrent read-only use of a finalized configuration

use std::sync::Arc;

use rayon::prelude::*;
use swe_kernels::{Boundary, ParameterError, ShallowWater, ShallowWaterParameters, State};

const TOL: f64 = 1e-12;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_deserialize_partial_parameters_uses_defaults() {
    let json = r#"{ "gravity": 10.0, "mannings_friction": 0.025 }"#;
    let params: ShallowWaterParameters = serde_json::from_str(json).unwrap();

    assert_eq!(params.gravity, 10.0);
    assert_eq!(params.mannings_friction, 0.025);
    assert_eq!(params.reference_water_depth, 1.0);
    assert_eq!(params.dry_state_tolerance, 1e-10);
}

#[test]
fn test_unknown_option_is_rejected() {
    let json = r#"{ "gravitation": 10.0 }"#;
    assert!(serde_json::from_str::<ShallowWaterParameters>(json).is_err());
}

#[test]
fn test_parameters_roundtrip_through_json() {
    let params = ShallowWaterParameters::new()
        .with_reference_water_depth(25.0)
        .with_dry_state_tolerance(1e-8);
    let json = serde_json::to_string(&params).unwrap();
    let back: ShallowWaterParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);
}

#[test]
fn test_invalid_parameter_file_fails_to_finalize() {
    init_logging();
    let json = r#"{ "gravity": -9.81 }"#;
    let params: ShallowWaterParameters = serde_json::from_str(json).unwrap();
    assert_eq!(
        params.finalize().unwrap_err(),
        ParameterError::NonPositiveGravity(-9.81)
    );
}

#[test]
fn test_finalized_configuration_is_shared_across_threads() {
    init_logging();
    let sw = Arc::new(
        ShallowWaterParameters::new()
            .with_mannings_friction(0.03)
            .finalize()
            .unwrap(),
    );

    let states: Vec<State<2, f64>> = (0..1000)
        .map(|i| {
            let phase = i as f64 * 0.01;
            State::new(1.0 + 0.5 * phase.sin(), [0.3 * phase.cos(), 0.1])
        })
        .collect();

    let parallel: Vec<f64> = states
        .par_iter()
        .map(|u| {
            let sw: &ShallowWater = &sw;
            sw.mathematical_entropy(u) + sw.manning_friction(u).m()[0]
        })
        .collect();
    let serial: Vec<f64> = states
        .iter()
        .map(|u| sw.mathematical_entropy(u) + sw.manning_friction(u).m()[0])
        .collect();

    for (p, s) in parallel.iter().zip(&serial) {
        assert!((p - s).abs() < TOL);
    }
}

#[test]
fn test_boundary_ids_from_mesh() {
    let ids = [2_u32, 3, 4, 5, 9];
    let parsed: Vec<_> = ids.iter().map(|&id| Boundary::try_from(id)).collect();
    assert_eq!(parsed[0], Ok(Boundary::Slip));
    assert_eq!(parsed[3], Ok(Boundary::Dynamic));
    assert!(parsed[4].is_err());
    assert_eq!(
        parsed[4].unwrap_err().to_string(),
        "Unknown boundary id 9"
    );
}
