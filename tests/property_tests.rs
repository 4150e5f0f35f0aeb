//! Property-based tests for the metric, interpolation, and oscillation
//! invariants the rest of the engine leans on.

use morphospace::domains;
use morphospace::trajectory::interpolate_path;
use morphospace::{ParameterPoint, Waveform, DIM};
use proptest::prelude::*;

fn arb_coords() -> impl Strategy<Value = [f64; DIM]> {
    proptest::array::uniform5(0.0f64..=1.0)
}

proptest! {
    #[test]
    fn prop_distance_is_symmetric(a in arb_coords(), b in arb_coords()) {
        let a = ParameterPoint::new(a).unwrap();
        let b = ParameterPoint::new(b).unwrap();
        prop_assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn prop_self_distance_is_zero(a in arb_coords()) {
        let a = ParameterPoint::new(a).unwrap();
        prop_assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn prop_distance_within_diagonal(a in arb_coords(), b in arb_coords()) {
        let a = ParameterPoint::new(a).unwrap();
        let b = ParameterPoint::new(b).unwrap();
        let d = a.distance(&b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= (DIM as f64).sqrt() + 1e-12);
    }

    #[test]
    fn prop_triangle_inequality(
        a in arb_coords(),
        b in arb_coords(),
        c in arb_coords(),
    ) {
        let a = ParameterPoint::new(a).unwrap();
        let b = ParameterPoint::new(b).unwrap();
        let c = ParameterPoint::new(c).unwrap();
        prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c) + 1e-12);
    }

    #[test]
    fn prop_lerp_stays_in_box(a in arb_coords(), b in arb_coords(), t in 0.0f64..=1.0) {
        let a = ParameterPoint::new(a).unwrap();
        let b = ParameterPoint::new(b).unwrap();
        let p = a.lerp(&b, t);
        for &c in p.coords() {
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&c));
        }
    }

    #[test]
    fn prop_lerp_reproduces_endpoints(a in arb_coords(), b in arb_coords()) {
        let a = ParameterPoint::new(a).unwrap();
        let b = ParameterPoint::new(b).unwrap();
        prop_assert_eq!(a.lerp(&b, 0.0), a);
        prop_assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn prop_path_endpoints_exact(
        a in arb_coords(),
        b in arb_coords(),
        steps in 2usize..40,
    ) {
        let a = ParameterPoint::new(a).unwrap();
        let b = ParameterPoint::new(b).unwrap();
        let path = interpolate_path(&a, &b, steps).unwrap();
        prop_assert_eq!(path.len(), steps);
        prop_assert_eq!(path[0].1, a);
        prop_assert_eq!(path[steps - 1].1, b);
    }

    #[test]
    fn prop_waveform_fraction_in_unit_interval(frac in 0.0f64..1.0) {
        for w in [Waveform::Sinusoidal, Waveform::Triangular, Waveform::Square] {
            let t = w.interpolation_fraction(frac);
            prop_assert!((0.0..=1.0).contains(&t), "{} out of range for {:?}", t, w);
        }
    }

    #[test]
    fn prop_oscillation_length_is_period_times_cycles(
        period in 1usize..48,
        cycles in 1usize..4,
    ) {
        let engine = domains::weathering().unwrap();
        let seq = engine
            .oscillate(
                "fresh_pristine",
                "total_ruin",
                period,
                Waveform::Sinusoidal,
                cycles,
                0.0,
            )
            .unwrap();
        prop_assert_eq!(seq.steps.len(), period * cycles);
        for step in &seq.steps {
            prop_assert!((0.0..1.0).contains(&step.phase));
            prop_assert!((0.0..=1.0).contains(&step.t));
        }
    }

    #[test]
    fn prop_classification_is_deterministic(text in "[a-z ]{1,40}") {
        prop_assume!(!text.trim().is_empty());
        let engine = domains::weathering().unwrap();
        let first = engine.classify(&text).unwrap();
        let second = engine.classify(&text).unwrap();
        prop_assert_eq!(first.state_id, second.state_id);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.fallback, second.fallback);
    }

    #[test]
    fn prop_vocabulary_weights_normalized(coords in arb_coords()) {
        let engine = domains::landform().unwrap();
        let point = ParameterPoint::new(coords).unwrap();
        let package = engine.extract_vocabulary(&point).unwrap();
        let total: f64 = package.blend.iter().map(|c| c.weight).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
        prop_assert!(!package.descriptors.is_empty());
    }
}
