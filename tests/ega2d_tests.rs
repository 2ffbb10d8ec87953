use approx::assert_abs_diff_eq;
use projga::ega2d::*;
use projga::prelude::*;
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

const N: usize = 64;

fn random_vector(rng: &mut impl Rng) -> Vec2d<f64> {
    Vec2d::default().map(|_| rng.gen_range(-2.0..2.0))
}

fn random_multivector(rng: &mut impl Rng) -> MVec2d<f64> {
    MVec2d::default().map(|_| rng.gen_range(-2.0..2.0))
}

#[test]
fn orthogonal_unit_vectors() {
    let a = Vec2d::new(1_f64, 0.);
    let b = Vec2d::new(0_f64, 1.);

    assert_eq!(PScalar2d::new(1.), wdg(a, b));
    assert_eq!(Scalar2d::new(0.), dot(a, b));
    assert_eq!(MVec2dE::new(0., 1.), a * b);
    assert_eq!(MVec2dE::new(0., -1.), b * a);
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
fn pseudoscalar_squares_to_minus_one() {
    assert_eq!(Scalar2d::new(-1.), i2d::<f64>() * i2d::<f64>());
}

#[test]
fn reverse_and_conjugate_are_involutions() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_multivector(&mut rng);
        assert_eq!(a, rev(rev(a)));
        assert_eq!(a, conj(conj(a)));
        assert_eq!(a, gr_inv(gr_inv(a)));
    }
}

/// In two dimensions the right complement applied twice negates vectors and leaves
/// scalars and pseudoscalars unchanged. The left complement undoes the right one.
#[test]
fn double_complement() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let v = random_vector(&mut rng);
        let a = random_multivector(&mut rng);

        assert_eq!(-v, rcmpl(rcmpl(v)));
        assert_eq!(-v, lcmpl(lcmpl(v)));
        assert_eq!(v, lcmpl(rcmpl(v)));
        assert_eq!(v, rcmpl(lcmpl(v)));
        assert_eq!(a, lcmpl(rcmpl(a)));
    }

    let s = Scalar2d::new(3.);
    let i = PScalar2d::new(-2.);
    assert_eq!(s, rcmpl(rcmpl(s)));
    assert_eq!(i, rcmpl(rcmpl(i)));
}

#[test]
fn complements_wedge_to_pseudoscalar() {
    let v = Vec2d::new(3., 4.);
    assert_eq!(PScalar2d::new(25.), v.wdg(v.rcmpl()));
    assert_eq!(PScalar2d::new(25.), v.lcmpl().wdg(v));
    assert_eq!(Vec2d::new(-4., 3.), v.rcmpl());
    assert_eq!(v.rcmpl(), dual(v));
}

#[test]
fn contractions() {
    let v = Vec2d::new(2_f64, 5.);
    let i = i2d::<f64>();

    // e1 ⌋ e12 = e2
    assert_eq!(Vec2d::new(0., 1.), Vec2d::new(1_f64, 0.) << i);
    assert_eq!(dot(v, v), v << v);
    assert_eq!(lcontr(v, i), v << i);
    assert_eq!(rcontr(i, v), i >> v);
}

#[test]
fn multivector_inverse() {
    let mut rng = rand::thread_rng();
    let one = MVec2d::new(1., 0., 0., 0.);
    for _ in 0..N {
        let a = random_multivector(&mut rng).map(|c| c / 4.) + Scalar2d::new(2_f64);
        assert_abs_diff_eq!(one, a * a.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one, a.inv() * a, epsilon = 1e-12);
    }
}

#[test]
fn rotor_inverse_is_reverse() {
    let r = rotor(i2d(), 0.7);
    assert_eq!(r.rev(), r.inv());
    assert_abs_diff_eq!(MVec2dE::new(1., 0.), r * r.inv(), epsilon = 1e-12);
}

#[test]
fn vector_inverse() {
    let v = Vec2d::new(3., 4.);
    assert_eq!(Vec2d::new(0.12, 0.16), inv(v));
    assert!(try_inv(Vec2d::<f64>::default()).is_err());
}

#[test]
fn rotate_a_quarter_turn() {
    let r = rotor(i2d(), FRAC_PI_2);
    assert_abs_diff_eq!(Vec2d::new(-2., 1.), rotate(Vec2d::new(1., 2.), r), epsilon = 1e-12);
}

#[test]
fn rotation_preserves_norm_and_angle() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let theta = rng.gen_range(-3.0..3.0);
        let r = rotor(i2d(), theta);
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        assert_abs_diff_eq!(a.nrm(), a.rotate(r).nrm(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.wdg(b), a.rotate(r).wdg(b.rotate(r)), epsilon = 1e-12);
        assert_abs_diff_eq!(theta, angle(a, a.rotate(r)), epsilon = 1e-9);
    }
}

#[test]
fn project_reject_reflect() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let v = random_vector(&mut rng);
        let u = random_vector(&mut rng) + Vec2d::new(3_f64, 0.);

        let parallel = project_onto(v, u);
        let perpendicular = reject_from(v, u);
        assert_abs_diff_eq!(v, parallel + perpendicular, epsilon = 1e-12);
        assert_abs_diff_eq!(0., perpendicular.dot(u).value, epsilon = 1e-12);
        assert_abs_diff_eq!(0., parallel.wdg(u).value, epsilon = 1e-12);
        assert_abs_diff_eq!(parallel - perpendicular, reflect_on(v, u), epsilon = 1e-12);

        let unit = u.normalize();
        assert_abs_diff_eq!(parallel, project_onto_unitized(v, unit), epsilon = 1e-12);
        assert_abs_diff_eq!(perpendicular, reject_from_unitized(v, unit), epsilon = 1e-12);
    }
}

#[test]
fn mixed_precision() {
    let a = Vec2d::new(0.5_f32, 2.);
    let b = Vec2d::new(4_f64, -1.);

    let ab: PScalar2d<f64> = a.wdg(b);
    assert_eq!(PScalar2d::new(-8.5), ab);
    assert_eq!(-ab, wdg(b, a));
    assert_eq!(Scalar2d::new(0_f64), a.dot(b));
    assert_eq!(a.to_f64() * b, a * b);
    assert_eq!(Some(ab.to_f32()), b.cast::<f32>().map(|b| a.wdg(b)));
}
