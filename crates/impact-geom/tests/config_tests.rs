// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! JSON configuration and result serialisation (requires the `serde` feature).

use impact_geom::narrow::obb_sat;
use impact_geom::{GeomError, NarrowConfig, Obb, SatAxis, SatOutcome, SweepInterval};
use impact_math::{Basis, Vec3};

#[test]
fn empty_document_yields_defaults() {
    let cfg = NarrowConfig::from_json_str("{}").expect("empty object parses");
    assert_eq!(cfg, NarrowConfig::default());
}

#[test]
fn partial_document_overrides_only_named_fields() {
    let cfg = NarrowConfig::from_json_str(r#"{ "velocity_epsilon": 0.001 }"#)
        .expect("partial config parses");
    assert_eq!(cfg.velocity_epsilon, 0.001);
    assert_eq!(
        cfg.degenerate_axis_epsilon,
        NarrowConfig::DEFAULT.degenerate_axis_epsilon
    );
}

#[test]
fn malformed_document_reports_config_error() {
    let err = NarrowConfig::from_json_str(r#"{ "velocity_epsilon": "fast" }"#)
        .expect_err("string is not a float");
    assert!(matches!(err, GeomError::Config(_)), "{err:?}");
    assert!(err.to_string().starts_with("config error:"));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = NarrowConfig {
        degenerate_axis_epsilon: 1e-3,
        velocity_epsilon: 1e-6,
    };
    let json = cfg.to_json_string().expect("config serialises");
    assert_eq!(NarrowConfig::from_json_str(&json).expect("config parses"), cfg);
}

#[test]
fn results_serialise_with_plain_arrays() {
    let a = Obb::from_parts(Vec3::ZERO, Basis::identity(), Vec3::splat(1.0));
    let b = Obb::from_parts(Vec3::new(0.0, 1.5, 0.0), Basis::identity(), Vec3::splat(1.0));
    let value = serde_json::to_value(obb_sat(&a, &b)).expect("outcome serialises");
    assert_eq!(value["Overlapping"]["normal"], serde_json::json!([0.0, 1.0, 0.0]));
    assert_eq!(value["Overlapping"]["axis"], serde_json::json!({ "FaceA": 1 }));

    let miss: SatOutcome =
        serde_json::from_str(r#"{ "Separated": { "Edge": [2, 0] } }"#).expect("outcome parses");
    assert_eq!(miss, SatOutcome::Separated(SatAxis::Edge(2, 0)));

    let interval: SweepInterval =
        serde_json::from_str(r#"{ "u0": 0.25, "u1": 1.0 }"#).expect("interval parses");
    assert_eq!(interval, SweepInterval { u0: 0.25, u1: 1.0 });
}
