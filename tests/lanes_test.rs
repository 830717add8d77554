//! Integration tests for lane-batched kernels.
//!
//! These tests verify:
//! - Batched kernels agree lane by lane with their scalar evaluation
//! - Admissibility of a batch requires every lane to be admissible
//! - Dynamic boundary regimes are chosen per lane
//! - fast_pow accuracy on lanes

#![cfg(any(
    target_feature = "sse2",
    target_feature = "neon",
    target_feature = "simd128"
))]

use swe_kernels::{
    Boundary, FAST_POW_TOLERANCE, Number, Precomputed, ShallowWater, State, TopographyStore,
    fast_pow, pow,
};
use wide::f64x2;

const TOL: f64 = 1e-12;

fn batch(lanes: [State<2, f64>; 2]) -> State<2, f64x2> {
    State::from_lanes(&lanes)
}

#[test]
fn test_batched_flux_matches_scalar_flux() {
    let sw = ShallowWater::default();
    let a = State::new(2.0, [1.0, 0.0]);
    let b = State::new(0.4, [-0.3, 0.2]);
    let z = [0.0, 0.7];

    let prec = Precomputed::new(batch([a, b]), f64x2::new(z));
    let neighbour = Precomputed::new(batch([b, a]), f64x2::new([0.5, 0.1]));
    let f = sw.flux(&prec, &neighbour);

    let scalar = [
        sw.flux(&Precomputed::new(a, 0.0), &Precomputed::new(b, 0.5)),
        sw.flux(&Precomputed::new(b, 0.7), &Precomputed::new(a, 0.1)),
    ];
    for (lane, expected) in scalar.iter().enumerate() {
        for k in 0..3 {
            for j in 0..2 {
                let got = f.row(k)[j].lane(lane);
                assert!((got - expected.row(k)[j]).abs() < TOL, "lane {lane} row {k}");
            }
        }
    }
}

#[test]
fn test_batched_flat_bed_lane_is_identity() {
    let sw = ShallowWater::default();
    let u = batch([State::new(1.0, [0.3, 0.1]), State::new(2.0, [0.0, -1.0])]);
    let z_left = f64x2::new([0.0, 1.0]);
    let z_right = f64x2::new([0.0, 2.0]);
    let star = sw.star_state(&u, z_left, z_right);

    // Lane 0 sees a flat bed, lane 1 a step up by 1.
    assert_eq!(star.lane(0).h(), 1.0);
    assert_eq!(star.lane(0).m(), [0.3, 0.1]);
    assert!((star.lane(1).h() - 1.0).abs() < TOL);
    assert!((star.lane(1).m()[1] + 0.5).abs() < TOL);
}

#[test]
fn test_one_inadmissible_lane_rejects_batch() {
    let sw = ShallowWater::default();
    let good = batch([State::new(1.0, [0.0, 0.0]), State::new(0.1, [0.0, 0.0])]);
    let bad = batch([State::new(1.0, [0.0, 0.0]), State::new(-0.1, [0.0, 0.0])]);
    let dry = batch([State::new(0.0, [0.0, 0.0]), State::new(1.0, [0.0, 0.0])]);

    assert!(sw.is_admissible(&good));
    assert!(!sw.is_admissible(&bad));
    assert!(!sw.is_admissible(&dry));
}

#[test]
fn test_dynamic_boundary_regimes_are_chosen_per_lane() {
    let sw = ShallowWater::default();
    let n = [f64x2::splat(1.0), f64x2::splat(0.0)];

    // Lane 0 supersonic outflow, lane 1 supersonic inflow.
    let interior = [State::new(1.0, [10.0, 0.0]), State::new(1.0, [-10.0, 0.0])];
    let prescribed = State::new(2.0, [-20.0, 1.0]);

    let result = sw.apply_boundary_conditions(Boundary::Dynamic, batch(interior), &n, || {
        batch([prescribed, prescribed])
    });

    let lane0 = result.lane(0);
    assert_eq!(lane0.h().to_bits(), interior[0].h().to_bits());
    assert_eq!(lane0.m(), interior[0].m());

    let lane1 = result.lane(1);
    assert_eq!(lane1.h(), 2.0);
    assert_eq!(lane1.m(), [-20.0, 1.0]);
}

#[test]
fn test_dynamic_boundary_matches_scalar_evaluation() {
    let sw = ShallowWater::default();
    let normal = [0.6, 0.8];
    let n = normal.map(f64x2::splat);

    // Subsonic inflow and subsonic outflow lanes.
    let interior = [State::new(1.0, [-0.3, -0.4]), State::new(1.0, [0.3, 0.4])];
    let prescribed = [State::new(1.1, [0.0, 0.0]), State::new(0.9, [0.1, 0.0])];

    let result = sw.apply_boundary_conditions(Boundary::Dynamic, batch(interior), &n, || {
        batch(prescribed)
    });

    for lane in 0..2 {
        let expected = sw.apply_boundary_conditions(
            Boundary::Dynamic,
            interior[lane],
            &normal,
            || prescribed[lane],
        );
        let got = result.lane(lane);
        for k in 0..3 {
            assert!((got[k] - expected[k]).abs() < TOL, "lane {lane} component {k}");
        }
    }
}

#[test]
fn test_lane_gather_from_store() {
    let sw = ShallowWater::default();
    let store = TopographyStore::new(vec![0.0, 0.25, 0.5, 0.75]);
    let u = batch([State::new(1.0, [0.0, 0.0]), State::new(1.0, [0.0, 0.0])]);

    let contiguous = sw.flux_contribution(&store, 1, &u);
    assert_eq!(contiguous.topography.to_array(), [0.25, 0.5]);

    let gathered = sw.flux_contribution_gather(&store, &[3, 0], &u);
    assert_eq!(gathered.topography.to_array(), [0.75, 0.0]);
}

#[test]
fn test_fast_pow_on_lanes() {
    let x = f64x2::new([0.37, 12.5]);
    let exact = pow(x, 1.0 / 3.0);
    let fast = fast_pow(x, 1.0 / 3.0);
    for lane in 0..2 {
        let rel = ((fast.lane(lane) - exact.lane(lane)) / exact.lane(lane)).abs();
        assert!(rel < FAST_POW_TOLERANCE);
        assert!((exact.lane(lane) - x.lane(lane).powf(1.0 / 3.0)).abs() < TOL);
    }
}
