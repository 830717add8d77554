//! Integration tests for the equilibrated interface fluxes.
//!
//! These tests verify:
//! - Lake-at-rest over variable topography (well-balanced property)
//! - Positivity of the star states at wet/dry fronts
//! - Low-order and high-order fluxes agree on a flat bed

use swe_kernels::{
    Precomputed, PrecomputedValues, ShallowWater, ShallowWaterParameters, State, TopographyStore,
};

const TOL: f64 = 1e-12;
const ETA: f64 = 3.0;

/// Bed profile with a bump and a step, sampled at `n` nodes on [0, 1].
fn bed(n: usize) -> TopographyStore<f64> {
    TopographyStore::from_fn(n, |i| {
        let x = i as f64 / (n - 1) as f64;
        let bump = 0.8 * (-50.0 * (x - 0.3) * (x - 0.3)).exp();
        let step = if x > 0.7 { 1.0 } else { 0.0 };
        bump + step
    })
}

fn lake_at_rest(sw: &ShallowWater, store: &TopographyStore<f64>) -> Vec<Precomputed<1, f64>> {
    (0..store.len())
        .map(|i| {
            let z = store.get::<f64>(i);
            sw.flux_contribution(store, i, &State::new(ETA - z, [0.0]))
        })
        .collect()
}

#[test]
fn test_lake_at_rest_interface_fluxes_balance() {
    let sw = ShallowWater::default();
    let store = bed(101);
    let nodes = lake_at_rest(&sw, &store);

    for pair in nodes.windows(2) {
        let (i, j) = (&pair[0], &pair[1]);
        let [star_ij, star_ji] = sw.equilibrated_states(i, j);

        assert!((star_ij.h() - star_ji.h()).abs() < TOL);
        assert!(star_ij.m()[0].abs() < TOL);

        let f_ij = sw.flux(i, j);
        let f_ji = sw.flux(j, i);
        assert!(f_ij.row(0)[0].abs() < TOL);
        assert!((f_ij.row(1)[0] - f_ji.row(1)[0]).abs() < TOL);
    }
}

#[test]
fn test_star_states_stay_non_negative_at_wet_dry_front() {
    let sw = ShallowWater::default();
    let store = bed(41);

    // Water only left of the bump crest, dry beyond.
    let nodes: Vec<_> = (0..store.len())
        .map(|i| {
            let z = store.get::<f64>(i);
            let h = (0.5 - z).max(0.0);
            sw.flux_contribution(&store, i, &State::new(h, [0.1 * h]))
        })
        .collect();

    for pair in nodes.windows(2) {
        let [star_ij, star_ji] = sw.equilibrated_states(&pair[0], &pair[1]);
        assert!(star_ij.h() >= 0.0);
        assert!(star_ji.h() >= 0.0);
        assert!(star_ij.h() <= pair[0].state.h() + TOL);
        assert!(star_ji.h() <= pair[1].state.h() + TOL);
    }
}

#[test]
fn test_flat_bed_low_order_flux_equals_high_order_flux() {
    let sw = ShallowWaterParameters::new()
        .with_gravity(10.0)
        .finalize()
        .unwrap();
    let store = TopographyStore::new(vec![0.5; 2]);
    let u_i = State::new(1.2, [0.3, -0.1]);
    let u_j = State::new(0.9, [-0.2, 0.4]);

    let prec_i = sw.flux_contribution(&store, 0, &u_i);
    let prec_j = sw.flux_contribution_gather(&store, &[1], &u_j);

    let low = sw.flux(&prec_i, &prec_j);
    let high = sw.high_order_flux(&prec_i, &prec_j);
    for k in 0..3 {
        assert_eq!(low.row(k), high.row(k));
    }
}

#[test]
fn test_normal_flux_of_moving_state() {
    let sw = ShallowWater::default();
    let u = State::new(2.0_f64, [1.0, 0.0]);
    let normal_flux = sw.f(&u).contract(&[0.0, 1.0]);
    assert!(normal_flux.h().abs() < TOL);
    assert!(normal_flux.m()[0].abs() < TOL);
    assert!((normal_flux.m()[1] - 19.62).abs() < TOL);
}
