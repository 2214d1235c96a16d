// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use impact_math::{Basis, Mat3, MathError, Vec3};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-6, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn mat3_default_is_identity() {
    assert_eq!(Mat3::default(), Mat3::identity());
    let v = Vec3::new(3.0, -4.0, 5.0);
    assert_eq!(Mat3::default() * v, v);
}

#[test]
fn mat3_add_sub_scale_are_elementwise() {
    let a = Mat3::from_cols(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 5.0, 6.0),
        Vec3::new(7.0, 8.0, 9.0),
    );
    let sum = a + Mat3::identity();
    assert_eq!(sum.col(1).to_array(), [4.0, 6.0, 6.0]);
    assert_eq!((sum - Mat3::identity()), a);
    assert_eq!((a * 2.0).col(2).to_array(), [14.0, 16.0, 18.0]);
    assert_eq!(a.sub(&a), Mat3::zero());
}

#[test]
fn transpose_of_rotation_is_its_inverse() {
    let mut basis = Basis::identity();
    basis.rotate_x(0.4);
    basis.rotate_z(-1.1);
    let m = basis.matrix();
    let product = m.transpose().multiply(&m);
    assert!(product.approx_eq(&Mat3::identity(), 1e-6));
    approx_eq(m.determinant(), 1.0);
}

#[test]
fn rows_and_elements_follow_column_major_layout() {
    let m = Mat3::from_cols(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 5.0, 6.0),
        Vec3::new(7.0, 8.0, 9.0),
    );
    assert_eq!(m.row(0).to_array(), [1.0, 4.0, 7.0]);
    assert_eq!(m.at(2, 1), 6.0);
}

#[test]
fn basis_to_local_projects_onto_axes() {
    let basis = Basis::from_axes(Vec3::UNIT_Y, Vec3::UNIT_Z, Vec3::UNIT_X);
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(basis.to_local(&v).to_array(), [2.0, 3.0, 1.0]);
    assert_eq!(basis.to_parent(&basis.to_local(&v)), v);
    assert_eq!(basis.inverse().to_parent(&v), basis.to_local(&v));
}

#[test]
fn checked_basis_reports_deviation() {
    let skewed = Mat3::from_cols(Vec3::new(1.0, 0.1, 0.0), Vec3::UNIT_Y, Vec3::UNIT_Z);
    match Basis::try_from_matrix(skewed) {
        Err(MathError::NotOrthonormal { deviation }) => assert!(deviation > 0.05),
        other => panic!("expected NotOrthonormal, got {other:?}"),
    }
}
