use approx::assert_abs_diff_eq;
use projga::ega3d::*;
use projga::prelude::*;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI};

const N: usize = 64;

fn random_vector(rng: &mut impl Rng) -> Vec3d<f64> {
    Vec3d::default().map(|_| rng.gen_range(-2.0..2.0))
}

fn random_multivector(rng: &mut impl Rng) -> MVec3d<f64> {
    MVec3d::default().map(|_| rng.gen_range(-2.0..2.0))
}

#[test]
fn orthogonal_unit_vectors() {
    let a = Vec3d::new(1_f64, 0., 0.);
    let b = Vec3d::new(0_f64, 1., 0.);

    assert_eq!(BiVec3d::new(0., 0., 1.), wdg(a, b));
    assert_eq!(Scalar3d::new(0.), dot(a, b));
    assert_eq!(MVec3dE::new(0., 0., 0., 1.), a * b);
}

#[test]
fn vector_product_is_dot_plus_wedge() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_abs_diff_eq!(a * b, a.dot(b) + a.wdg(b), epsilon = 1e-12);
    }
}

#[test]
fn wedge_is_antisymmetric() {
    let mut rng = rand::thread_rng();
    let a = random_vector(&mut rng);
    let b = random_vector(&mut rng);
    assert_eq!(a.wdg(b), -b.wdg(a));
    assert_eq!(BiVec3d::<f64>::default(), a.wdg(a));
}

#[test]
fn wedge_past_the_top_grade_is_zero() {
    let b = BiVec3d::new(1_f64, 2., 3.);
    assert_eq!(PScalar3d::new(0.), b.wdg(b));
    assert_eq!(PScalar3d::new(0.), wdg(b, i3d::<f64>()));
}

#[test]
fn triple_product() {
    let a = Vec3d::new(1_f64, 0., 0.);
    let b = Vec3d::new(0_f64, 2., 0.);
    let c = Vec3d::new(1_f64, 1., 3.);
    assert_eq!(PScalar3d::new(6.), a.wdg(b).wdg(c));
    assert_eq!(PScalar3d::new(6.), a.wdg(b.wdg(c)));
}

#[test]
fn cross_product_is_dual_of_wedge() {
    let a = Vec3d::new(1_f64, 2., 3.);
    let b = Vec3d::new(-2_f64, 0., 5.);
    assert_eq!(a.wdg(b).dual(), a.cross(b));
    assert_eq!(Vec3d::new(10., -11., 4.), a.cross(b));
}

#[test]
fn bivector_dot_is_negative() {
    let b = BiVec3d::new(1., 2., 3.);
    assert_eq!(Scalar3d::new(-14.), dot(b, b));
    assert_eq!(14., nrm_sq(b));
}

#[test]
fn contraction_operators() {
    let v = Vec3d::new(1_f64, 2., 3.);
    let b = BiVec3d::new(0_f64, 0., 1.);

    assert_eq!(lcontr(v, b), v << b);
    assert_eq!(rcontr(b, v), b >> v);
    // e1 ⌋ e12 = e2
    assert_eq!(Vec3d::new(0., 1., 0.), Vec3d::new(1_f64, 0., 0.) << b);
    assert_eq!(dot(v, v), v << v);
}

#[test]
fn reverse_and_conjugate_are_involutions() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_multivector(&mut rng);
        assert_eq!(a, rev(rev(a)));
        assert_eq!(a, conj(conj(a)));
        assert_eq!(a, gr_inv(gr_inv(a)));
        assert_eq!(conj(a), rev(gr_inv(a)));
    }
}

#[test]
fn reverse_of_product() {
    let mut rng = rand::thread_rng();
    let a = random_multivector(&mut rng);
    let b = random_multivector(&mut rng);
    assert_abs_diff_eq!(rev(a * b), rev(b) * rev(a), epsilon = 1e-12);
}

/// In three dimensions the complement applied twice is the identity for every grade.
#[test]
fn double_complement() {
    let mut rng = rand::thread_rng();
    let v = random_vector(&mut rng);
    let a = random_multivector(&mut rng);

    assert_eq!(Scalar3d::new(2.), cmpl(cmpl(Scalar3d::new(2.))));
    assert_eq!(v, cmpl(cmpl(v)));
    assert_eq!(v.cmpl(), cmpl(cmpl(v.cmpl())));
    assert_eq!(PScalar3d::new(-1.), cmpl(cmpl(PScalar3d::new(-1.))));
    assert_eq!(a, cmpl(cmpl(a)));
}

#[test]
fn complement_wedges_to_pseudoscalar() {
    let v = Vec3d::new(0., 3., 4.);
    assert_eq!(PScalar3d::new(v.nrm_sq()), v.wdg(v.cmpl()));
}

#[test]
fn dual_matches_complement() {
    let a = MVec3d::new(1., 2., 3., 4., 5., 6., 7., 8.);
    assert_eq!(cmpl(a), dual(a));
}

#[test]
fn multivector_inverse() {
    let mut rng = rand::thread_rng();
    let one = MVec3d::new(1., 0., 0., 0., 0., 0., 0., 0.);
    for _ in 0..N {
        // dominant scalar keeps the sample far from singular
        let a = random_multivector(&mut rng).map(|c| c / 4.) + Scalar3d::new(3_f64);
        assert_abs_diff_eq!(one, a * a.inv(), epsilon = 1e-10);
        assert_abs_diff_eq!(one, a.inv() * a, epsilon = 1e-10);
    }
}

#[test]
fn blade_inverses() {
    let mut rng = rand::thread_rng();
    let one = MVec3dE::new(1., 0., 0., 0.);
    for _ in 0..N {
        let v = random_vector(&mut rng) + Vec3d::new(3_f64, 0., 0.);
        assert_abs_diff_eq!(one, v * inv(v), epsilon = 1e-12);
        let b = v.cmpl();
        assert_abs_diff_eq!(one, b * inv(b), epsilon = 1e-12);
    }
}

#[test]
fn zero_has_no_inverse() {
    let err = try_inv(Vec3d::<f64>::default()).unwrap_err();
    assert_eq!("inv", err.operation);
    assert_eq!(0., err.magnitude);
}

#[test]
fn rotate_a_quarter_turn() {
    let r = rotor(BiVec3d::new(0., 0., 1.), FRAC_PI_2);
    assert_abs_diff_eq!(
        Vec3d::new(0., 1., 0.),
        rotate(Vec3d::new(1., 0., 0.), r),
        epsilon = 1e-12
    );
}

#[test]
fn rotation_preserves_norm_and_angle() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let plane = random_vector(&mut rng).cmpl();
        let r = rotor(plane, rng.gen_range(-PI..PI));
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        assert_abs_diff_eq!(a.nrm(), a.rotate(r).nrm(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.dot(b), a.rotate(r).dot(b.rotate(r)), epsilon = 1e-12);
        assert_abs_diff_eq!(a.wdg(b).rotate(r), a.rotate(r).wdg(b.rotate(r)), epsilon = 1e-12);
    }
}

#[test]
fn optimized_rotation_matches_sandwich() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let r = MVec3dE::from_axis_angle(random_vector(&mut rng), rng.gen_range(-PI..PI));
        let v = random_vector(&mut rng);
        let sandwich = r * v * r.rev();
        assert_abs_diff_eq!(v.rotate(r), sandwich.gr1(), epsilon = 1e-12);
    }
}

#[test]
fn rotors_compose_by_product() {
    let a = rotor(BiVec3d::new(0., 0., 1.), FRAC_PI_2);
    let b = rotor(BiVec3d::new(1., 0., 0.), FRAC_PI_2);
    let v = Vec3d::new(1., 0., 0.);

    // e1 -> e2 about z, then e2 -> e3 about x
    assert_abs_diff_eq!(Vec3d::new(0., 0., 1.), v.rotate(a).rotate(b), epsilon = 1e-12);
    assert_abs_diff_eq!(v.rotate(a).rotate(b), v.rotate(b * a), epsilon = 1e-12);
}

#[test]
fn project_reject_reflect() {
    let v = Vec3d::new(1., 2., 3.);
    let u = Vec3d::new(0., 0., 2.);
    let floor = BiVec3d::new(0., 0., 1.);

    assert_eq!(Vec3d::new(0., 0., 3.), project_onto(v, u));
    assert_eq!(Vec3d::new(1., 2., 0.), reject_from(v, u));
    assert_eq!(v, project_onto(v, u) + reject_from(v, u));
    assert_eq!(Vec3d::new(1., 2., 0.), project_onto(v, floor));
    assert_eq!(Vec3d::new(0., 0., 3.), reject_from(v, floor));
    assert_eq!(Vec3d::new(1., 2., -3.), reflect_on(v, floor));
    assert_eq!(Vec3d::new(-1., -2., 3.), reflect_on(v, u));
}

#[test]
fn mixed_precision() {
    let a = Vec3d::new(1.5_f64, -2., 0.25);
    let b = Vec3d::new(2_f32, 0., 1.);

    let wide: BiVec3d<f64> = a.wdg(b);
    assert_eq!(BiVec3d::new(-2., -1., 4.), wide);
    assert_eq!(wide, b.wdg(a) * -1.);
    assert_eq!(a.wdg(b.to_f64()), wide);
    assert_eq!(a.to_f32().wdg(b), wide);
    assert_eq!(Scalar3d::new(3.25), dot(a, b));
    assert_eq!(Some(wide.to_f32()), a.cast::<f32>().map(|a| a.wdg(b)));
}
