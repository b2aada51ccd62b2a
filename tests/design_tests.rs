//! Component Synthesis Tests
//!
//! End-to-end checks of the closed-form Sallen-Key design relations
//! against hand-computed reference values.

use std::f64::consts::FRAC_1_SQRT_2;

use sallen_key::{synthesize, ComponentValues, DesignError, FilterSpec};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// =============================================================================
// Reference Design
// =============================================================================

#[test]
fn test_butterworth_330nf_reference() {
    // The worked example: 10 Hz Butterworth with a 330 nF seed cap.
    let spec = FilterSpec::new(10.0, FRAC_1_SQRT_2, 330e-9);
    let c = synthesize(&spec).unwrap();

    // Tolerances: 1e-2 nF on capacitors, 1e-1 Ohm on resistors
    assert!(approx_eq(c.c1 * 1e9, 330.00, 1e-2), "C1 = {} nF", c.c1 * 1e9);
    assert!(approx_eq(c.c2 * 1e9, 660.00, 1e-2), "C2 = {} nF", c.c2 * 1e9);
    assert!(approx_eq(c.r1, 34102.89, 1e-1), "R1 = {} Ohm", c.r1);
    assert!(approx_eq(c.r2, 34102.89, 1e-1), "R2 = {} Ohm", c.r2);
}

#[test]
fn test_reference_formatting() {
    let spec = FilterSpec::new(10.0, FRAC_1_SQRT_2, 330e-9);
    let c = synthesize(&spec).unwrap();
    let lines: Vec<String> = c.to_string().lines().map(String::from).collect();

    assert_eq!(lines[0], "C1 = 330.00 nF");
    assert_eq!(lines[1], "C2 = 660.00 nF");
    assert!(lines[2].starts_with("R1 = 34102.8"), "{}", lines[2]);
    assert!(lines[3].ends_with(" Ohm"), "{}", lines[3]);
}

// =============================================================================
// Structural Invariants
// =============================================================================

#[test]
fn test_unit_ratio_gives_equal_resistors() {
    for (fc, q, cap) in [
        (1.0, FRAC_1_SQRT_2, 1e-6),
        (10.0, 0.5, 330e-9),
        (440.0, 3.0, 10e-9),
        (1000.0, 10.0, 4.7e-9),
    ] {
        let c = synthesize(&FilterSpec::new(fc, q, cap)).unwrap();
        assert_eq!(c.r1, c.r2, "m = 1 must give R1 == R2 for fc = {fc}");

        // n = (2Q)^2 when m = 1
        let n = (2.0 * q).powi(2);
        assert!(
            approx_eq(c.c2, n * c.c1, c.c2 * 1e-12),
            "C2 = {} expected {}",
            c.c2,
            n * c.c1
        );
    }
}

#[test]
fn test_component_ratio_invariants_for_uneven_ratio() {
    let spec = FilterSpec::new(25.0, 1.2, 220e-9).with_ratio(2.5);
    let c = synthesize(&spec).unwrap();

    let n = (spec.q * (spec.m + 1.0)).powi(2) / spec.m;
    assert!(approx_eq(c.c2 / c.c1, n, 1e-9));
    assert!(approx_eq(c.r1 / c.r2, spec.m, 1e-12));
}

#[test]
fn test_cutoff_scaling_law() {
    // Doubling fc halves both resistances, all else equal.
    for k in [2.0, 10.0, 1000.0] {
        let base = synthesize(&FilterSpec::new(10.0, 1.0, 100e-9).with_ratio(2.0)).unwrap();
        let scaled = synthesize(&FilterSpec::new(10.0 * k, 1.0, 100e-9).with_ratio(2.0)).unwrap();

        assert!(
            approx_eq(scaled.r1 * k, base.r1, base.r1 * 1e-9),
            "k = {k}: R1 {} vs {}",
            scaled.r1 * k,
            base.r1
        );
        assert!(approx_eq(scaled.r2 * k, base.r2, base.r2 * 1e-9));
        assert_eq!(scaled.c1, base.c1);
        assert_eq!(scaled.c2, base.c2);
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_rejects_non_positive_parameters() {
    let cases: [(&str, FilterSpec); 4] = [
        ("fc", FilterSpec::new(0.0, 1.0, 1e-9)),
        ("Q", FilterSpec::new(10.0, -1.0, 1e-9)),
        ("C", FilterSpec::new(10.0, 1.0, 0.0)),
        ("m", FilterSpec::new(10.0, 1.0, 1e-9).with_ratio(-0.5)),
    ];

    for (expected, spec) in cases {
        match synthesize(&spec) {
            Err(DesignError::InvalidParameter { name, .. }) => {
                assert_eq!(name, expected, "wrong parameter reported for {spec:?}");
            }
            other => panic!("expected InvalidParameter for {spec:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_rejects_nan_and_infinity() {
    assert!(synthesize(&FilterSpec::new(f64::NAN, 1.0, 1e-9)).is_err());
    assert!(synthesize(&FilterSpec::new(10.0, f64::INFINITY, 1e-9)).is_err());
    assert!(synthesize(&FilterSpec::new(10.0, 1.0, f64::NAN)).is_err());
    assert!(synthesize(&FilterSpec::new(10.0, 1.0, 1e-9).with_ratio(f64::NEG_INFINITY)).is_err());
}

#[test]
fn test_error_is_displayable() {
    let err = synthesize(&FilterSpec::new(-1.0, 1.0, 1e-9)).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("fc"), "error text should name the field: {text}");
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_synthesis_is_pure() {
    let spec = FilterSpec::new(123.4, 2.2, 47e-9).with_ratio(0.8);
    let results: Vec<ComponentValues> = (0..5).map(|_| synthesize(&spec).unwrap()).collect();
    for pair in results.windows(2) {
        assert_eq!(pair[0], pair[1]);
    }
}
