use approx::assert_abs_diff_eq;
use projga::pga2dp::*;
use projga::prelude::*;
use rand::Rng;
use std::f64::consts::PI;

const N: usize = 64;

fn random_point(rng: &mut impl Rng) -> Vec2dp<f64> {
    let weight = rng.gen_range(0.5..2.0);
    point(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)) * weight
}

fn random_multivector(rng: &mut impl Rng) -> MVec2dp<f64> {
    MVec2dp::default().map(|_| rng.gen_range(-2.0..2.0))
}

#[test]
fn unitize_a_point() {
    assert_eq!(Vec2dp::new(2., 3., 1.), unitize(Vec2dp::new(4., 6., 2.)));
}

#[test]
fn meet_of_two_lines() {
    let x_axis = wdg(point(0_f64, 0.), point(2_f64, 0.));
    let x_is_1 = wdg(point(1_f64, -1.), point(1_f64, 1.));
    assert_eq!(point(1., 0.), unitize(meet(x_axis, x_is_1)));
}

#[test]
fn parallel_lines_meet_at_infinity() {
    let a = line(point(0_f64, 0.), point(1., 1.));
    let b = line(point(0_f64, 3.), point(2., 5.));
    let p = a.meet(b);

    assert_eq!(0., p.z);
    assert_abs_diff_eq!(0., p.wdg(direction(1_f64, 1.)).bulk_nrm().value, epsilon = 1e-12);
    assert!(p.try_unitize().is_err());
}

#[test]
fn join_of_point_and_line() {
    let l = line(point(0_f64, 1.), point(1., 1.));

    assert_eq!(PScalar2dp::new(2.), join(point(0_f64, 3.), l));
    assert_eq!(PScalar2dp::new(2.), join(l, point(0_f64, 3.)));
    assert_eq!(PScalar2dp::new(0.), join(point(7_f64, 1.), l));
}

#[test]
fn vector_product_is_dot_plus_wedge() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        assert_abs_diff_eq!(a * b, a.dot(b) + a.wdg(b), epsilon = 1e-12);
    }
}

#[test]
fn reverses_and_conjugate_are_involutions() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_multivector(&mut rng);
        assert_eq!(a, rev(rev(a)));
        assert_eq!(a, rrev(rrev(a)));
        assert_eq!(a, conj(conj(a)));
        assert_eq!(a, gr_inv(gr_inv(a)));
    }
}

/// The representational space has three dimensions, so the complement applied twice is
/// the identity for every grade.
#[test]
fn double_complement() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_multivector(&mut rng);
        let p = random_point(&mut rng);

        assert_eq!(a, cmpl(cmpl(a)));
        assert_eq!(p, cmpl(cmpl(p)));
        assert_eq!(p.cmpl(), cmpl(cmpl(p.cmpl())));
    }
}

#[test]
fn bulk_and_weight_partition() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_multivector(&mut rng);
        assert_eq!(a, bulk(a) + weight(a));
        assert_eq!(MVec2dp::<f64>::default(), bulk(weight(a)));
        assert_eq!(MVec2dp::<f64>::default(), weight(bulk(a)));
    }

    let l = BiVec2dp::new(1., 2., 3.);
    assert_eq!(BiVec2dp::new(0., 0., 3.), l.bulk());
    assert_eq!(BiVec2dp::new(1., 2., 0.), l.weight());
}

#[test]
fn unitize_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);

        let p1 = p.unitize();
        assert_eq!(p1, p1.unitize());
        assert_abs_diff_eq!(1., weight_nrm(p1).value, epsilon = 1e-12);

        let l = line(p, q).unitize();
        assert_abs_diff_eq!(l, l.unitize(), epsilon = 1e-12);
        assert_abs_diff_eq!(1., weight_nrm(l).value, epsilon = 1e-12);
    }
}

#[test]
fn contractions_with_self() {
    let p = Vec2dp::new(3., 4., 2.);
    assert_eq!(Scalar2dp::new(25.), right_bulk_contract(p, p));
    assert_eq!(Scalar2dp::new(4.), right_weight_contract(p, p));
    assert_eq!(dot(p, p), p << p);

    let l = line(point(0., 1.), point(1., 1.));
    assert_eq!(BiVec2dp::new(0., 1., -1.), l);
    assert_eq!(Scalar2dp::new(1.), right_bulk_contract(l, l));
    assert_eq!(Scalar2dp::new(1.), right_weight_contract(l, l));
}

#[test]
fn expansion_builds_the_perpendicular() {
    let l = line(point(0_f64, 1.), point(1., 1.));
    let p = point(3_f64, 5.);
    let perpendicular = right_weight_expand(p, l);

    // the vertical line through (3, 5)
    assert_eq!(0., perpendicular.wdg(point(3_f64, -2.)).value);
    assert_eq!(0., perpendicular.wdg(p).value);
    assert_eq!(point(3., 1.), l.meet(perpendicular).unitize());
}

#[test]
fn point_projects_onto_its_line() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let l = line(random_point(&mut rng), random_point(&mut rng));
        let p = random_point(&mut rng);
        let q = p.project_onto(l);

        assert_abs_diff_eq!(0., q.wdg(l).value, epsilon = 1e-9);
        let offset = p.unitize() - q.unitize();
        assert_abs_diff_eq!(0., offset.dot(l.att()).value, epsilon = 1e-9);
    }
}

#[test]
fn reflection_is_an_involution() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_point(&mut rng);
        let l = line(a, random_point(&mut rng)).unitize();
        let p = random_point(&mut rng).unitize();
        let m = line(random_point(&mut rng), random_point(&mut rng)).unitize();

        assert_abs_diff_eq!(p, p.reflect_on(l).reflect_on(l), epsilon = 1e-9);
        assert_abs_diff_eq!(m, m.reflect_on(l).reflect_on(l), epsilon = 1e-9);
        assert_abs_diff_eq!(dist2dp(p, a), dist2dp(p.reflect_on(l), a), epsilon = 1e-9);
    }
}

#[test]
fn motors_are_rigid() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let m = motor(random_point(&mut rng), rng.gen_range(-PI..PI))
            .then(translator(direction(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0))));
        let p = random_point(&mut rng).unitize();
        let q = random_point(&mut rng).unitize();

        assert_abs_diff_eq!(dist2dp(p, q), dist2dp(p.move_by(m), q.move_by(m)), epsilon = 1e-9);
        assert_abs_diff_eq!(
            line(p, q).move_by(m),
            line(p.move_by(m), q.move_by(m)),
            epsilon = 1e-9
        );
        assert_eq!(p.move_by(m), move_by(p, m));
    }
}

#[test]
fn motor_fixes_its_center() {
    let c = point(2., -1.);
    let m = motor(c * 3., 1.2);
    assert_abs_diff_eq!(c, c.move_by(m).unitize(), epsilon = 1e-12);
}

#[test]
fn translate_by_a_vector() {
    let t = translator(direction(3., -4.));
    assert_abs_diff_eq!(point(4., -3.), move2dp(point(1., 1.), t), epsilon = 1e-12);
    // directions are unaffected
    assert_abs_diff_eq!(direction(1., 2.), direction(1., 2.).move_by(t), epsilon = 1e-12);
}

#[test]
fn vector_inverse() {
    let v = Vec2dp::new(3., 4., 7.);
    assert_abs_diff_eq!(MVec2dpE::new(1., 0., 0., 0.), v * v.inv(), epsilon = 1e-12);
    assert!(try_inv(direction(0., 0.)).is_err());
}

#[test]
fn direction_has_no_unitized_form() {
    let err = try_unitize(direction(1., 2.)).unwrap_err();
    assert_eq!("unitize", err.operation);
    assert_eq!(0., err.magnitude);
}

#[cfg(feature = "checked-division")]
#[test]
#[should_panic(expected = "unitize")]
fn unitizing_a_direction_panics() {
    let _ = direction(1., 2.).unitize();
}

#[cfg(not(feature = "checked-division"))]
#[test]
fn unitizing_a_direction_is_not_finite() {
    let p = direction(1_f64, 2.).unitize();
    assert!(p.x.is_infinite());
    assert!(p.z.is_nan());
}

#[test]
fn mixed_precision() {
    let p = point(1.5_f32, 2.);
    let q = point(-0.5_f64, 4.);
    let l: BiVec2dp<f64> = p.wdg(q);

    assert_eq!(p.to_f64().wdg(q), l);
    assert_eq!(-l, q.wdg(p));
    assert_eq!(PScalar2dp::new(0_f64), join(l, p));
    assert_abs_diff_eq!(8_f64.sqrt(), dist2dp(p.to_f64(), q), epsilon = 1e-12);
    assert_eq!(Some(l.to_f32()), q.cast::<f32>().map(|q| p.wdg(q)));
}
