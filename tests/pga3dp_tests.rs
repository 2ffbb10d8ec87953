use approx::assert_abs_diff_eq;
use projga::pga3dp::*;
use projga::prelude::*;
use rand::Rng;
use std::f64::consts::PI;

const N: usize = 64;

fn random_point(rng: &mut impl Rng) -> Vec3dp<f64> {
    let weight = rng.gen_range(0.5..2.0);
    let mut c = || rng.gen_range(-5.0..5.0);
    point(c(), c(), c()) * weight
}

fn random_multivector(rng: &mut impl Rng) -> MVec3dp<f64> {
    MVec3dp::default().map(|_| rng.gen_range(-2.0..2.0))
}

fn floor(height: f64) -> TriVec3dp<f64> {
    plane(point(0., 0., height), point(1., 0., height), point(0., 1., height))
}

#[test]
fn plane_through_three_points() {
    assert_eq!(TriVec3dp::new(0., 0., 1., -1.), floor(1.));
    assert_eq!(plane(origin(), point(1., 0., 0.), point(0., 1., 0.)), floor(0.));
}

#[test]
fn join_of_point_and_plane_is_the_signed_distance() {
    let p = point(0_f64, 0., 3.);
    assert_eq!(PScalar3dp::new(2.), join(p, floor(1.)));
    assert_eq!(PScalar3dp::new(-2.), join(floor(1.), p));
    assert_eq!(PScalar3dp::new(0.), join(point(4_f64, -7., 1.), floor(1.)));
}

#[test]
fn three_planes_meet_in_a_point() {
    let x_is_1 = plane(point(1_f64, 0., 0.), point(1., 1., 0.), point(1., 0., 1.));
    let y_is_2 = plane(point(0_f64, 2., 0.), point(1., 2., 0.), point(0., 2., 1.));

    let l = meet(x_is_1, y_is_2);
    assert_eq!(BiVec3dp::new(0., 0., 1., 2., -1., 0.), l);
    assert_eq!(TriVec3dp::<f64>::default(), join(l, point(1_f64, 2., 9.)));

    let p = meet(l, floor(3.));
    assert_eq!(point(1., 2., 3.), p.unitize());
    assert_eq!(p, meet(floor(3.), l));
}

#[test]
fn line_and_point_span_a_plane() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let r = random_point(&mut rng);

        let pl = plane(p, q, r);
        assert_abs_diff_eq!(pl, join(line(p, q), r), epsilon = 1e-9);
        assert_abs_diff_eq!(pl, join(r, line(p, q)), epsilon = 1e-9);
        assert_abs_diff_eq!(0., join(p, pl).value, epsilon = 1e-9);
    }
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

/// In four dimensions the right complement applied twice negates vectors and
/// trivectors and leaves the even grades unchanged. The left complement undoes the
/// right one.
#[test]
fn double_complement() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let p = random_point(&mut rng);
        let l = line(p, random_point(&mut rng));
        let pl = plane(p, random_point(&mut rng), random_point(&mut rng));
        let a = random_multivector(&mut rng);

        assert_eq!(-p, rcmpl(rcmpl(p)));
        assert_eq!(l, rcmpl(rcmpl(l)));
        assert_eq!(-pl, rcmpl(rcmpl(pl)));
        assert_eq!(-p, lcmpl(lcmpl(p)));
        assert_eq!(p, lcmpl(rcmpl(p)));
        assert_eq!(l, rcmpl(lcmpl(l)));
        assert_eq!(a, lcmpl(rcmpl(a)));
        assert_eq!(a, rcmpl(lcmpl(a)));
    }

    let s = Scalar3dp::new(3.);
    let i = PScalar3dp::new(-2.);
    assert_eq!(s, rcmpl(rcmpl(s)));
    assert_eq!(i, rcmpl(rcmpl(i)));
}

#[test]
fn complement_wedges_to_pseudoscalar() {
    let p = Vec3dp::new(1., 2., 2., 3.);
    assert_eq!(PScalar3dp::new(18.), p.wdg(p.rcmpl()));
    assert_eq!(PScalar3dp::new(18.), p.lcmpl().wdg(p));
}

#[test]
fn bulk_and_weight_partition() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_multivector(&mut rng);
        assert_eq!(a, bulk(a) + weight(a));
        assert_eq!(MVec3dp::<f64>::default(), bulk(weight(a)));
        assert_eq!(MVec3dp::<f64>::default(), weight(bulk(a)));
    }

    let l = BiVec3dp::new(1., 2., 3., 4., 5., 6.);
    assert_eq!(BiVec3dp::new(0., 0., 0., 4., 5., 6.), l.bulk());
    assert_eq!(BiVec3dp::new(1., 2., 3., 0., 0., 0.), l.weight());
    assert_eq!(l.bulk().rcmpl(), l.bulk_dual());
    assert_eq!(l.weight().rcmpl(), l.weight_dual());
}

#[test]
fn unitize_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let r = random_point(&mut rng);

        let p1 = p.unitize();
        assert_eq!(p1, p1.unitize());
        assert_abs_diff_eq!(1., weight_nrm(p1).value, epsilon = 1e-12);

        let l = line(p, q).unitize();
        assert_abs_diff_eq!(l, l.unitize(), epsilon = 1e-12);
        assert_abs_diff_eq!(1., weight_nrm(l).value, epsilon = 1e-12);

        let pl = plane(p, q, r).unitize();
        assert_abs_diff_eq!(pl, pl.unitize(), epsilon = 1e-12);
        assert_abs_diff_eq!(1., weight_nrm(pl).value, epsilon = 1e-12);
    }
}

#[test]
fn point_projects_onto_plane_and_line() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_point(&mut rng).unitize();
        let b = random_point(&mut rng).unitize();
        let c = random_point(&mut rng).unitize();
        let pl = plane(a, b, c);
        let l = line(a, b);
        let p = random_point(&mut rng);

        let on_plane = p.project_onto(pl);
        assert_abs_diff_eq!(0., on_plane.wdg(pl).value, epsilon = 1e-8);
        // the offset is along the plane normal
        let offset = p.unitize() - on_plane.unitize();
        assert_abs_diff_eq!(0., offset.dot(b - a).value, epsilon = 1e-8);
        assert_abs_diff_eq!(0., offset.dot(c - a).value, epsilon = 1e-8);

        let on_line = p.project_onto(l);
        assert_abs_diff_eq!(TriVec3dp::default(), on_line.wdg(l), epsilon = 1e-8);
        let offset = p.unitize() - on_line.unitize();
        assert_abs_diff_eq!(0., offset.dot(l.att()).value, epsilon = 1e-8);
    }
}

#[test]
fn reflection_is_an_involution() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let a = random_point(&mut rng).unitize();
        let pl = plane(a, random_point(&mut rng), random_point(&mut rng)).unitize();
        let p = random_point(&mut rng).unitize();

        let image = p.reflect_on(pl);
        assert_abs_diff_eq!(p, image.reflect_on(pl), epsilon = 1e-9);
        assert_abs_diff_eq!(dist3dp(p, a), dist3dp(image, a), epsilon = 1e-9);
        assert_abs_diff_eq!(-p.wdg(pl).value, image.unitize().wdg(pl).value, epsilon = 1e-9);
    }
}

#[test]
fn motors_are_rigid() {
    let mut rng = rand::thread_rng();
    for _ in 0..N {
        let axis = line(random_point(&mut rng), random_point(&mut rng));
        let shift = random_point(&mut rng);
        let m = motor(axis, rng.gen_range(-PI..PI))
            .then(translator(direction(shift.x, shift.y, shift.z)));
        let p = random_point(&mut rng).unitize();
        let q = random_point(&mut rng).unitize();
        let r = random_point(&mut rng).unitize();

        assert_abs_diff_eq!(dist3dp(p, q), dist3dp(p.move_by(m), q.move_by(m)), epsilon = 1e-9);
        assert_abs_diff_eq!(
            line(p, q).move_by(m),
            line(p.move_by(m), q.move_by(m)),
            epsilon = 1e-8
        );
        assert_abs_diff_eq!(
            plane(p, q, r).move_by(m),
            plane(p.move_by(m), q.move_by(m), r.move_by(m)),
            epsilon = 1e-8
        );
        assert_eq!(p.move_by(m), move_by(p, m));
    }
}

#[test]
fn motor_fixes_its_axis() {
    let a = point(1., 2., 0.);
    let b = point(1., 2., 5.);
    let m = motor(line(a, b), 0.9);

    assert_abs_diff_eq!(point(1., 2., -3.), point(1., 2., -3.).move_by(m), epsilon = 1e-12);
    assert_abs_diff_eq!(
        dist3dp(point(4., 2., 0.), a),
        dist3dp(move3dp(point(4., 2., 0.), m), a),
        epsilon = 1e-12
    );
}

#[test]
fn translate_by_a_vector() {
    let t = translator(direction(1., -2., 0.5));
    assert_abs_diff_eq!(point(2., 0., 3.5), point(1., 2., 3.).move_by(t), epsilon = 1e-12);
    assert_abs_diff_eq!(floor(1.5), floor(1.).move_by(t), epsilon = 1e-12);
    assert_abs_diff_eq!(direction(0., 1., 0.), direction(0., 1., 0.).move_by(t), epsilon = 1e-12);
}

#[test]
fn vector_inverse() {
    let v = Vec3dp::new(1., 2., 2., 5.);
    let one = MVec3dpE::new(1., 0., 0., 0., 0., 0., 0., 0.);
    assert_abs_diff_eq!(one, v * v.inv(), epsilon = 1e-12);
    assert!(try_inv(origin::<f64>()).is_err());
}

#[test]
fn direction_has_no_unitized_form() {
    let err = try_unitize(direction(1., 2., 3.)).unwrap_err();
    assert_eq!("unitize", err.operation);
    assert_eq!(0., err.magnitude);

    assert!(try_unitize(BiVec3dp::new(0., 0., 0., 1., 0., 0.)).is_err());
    assert!(try_unitize(horizon::<f64>()).is_err());
}

#[cfg(feature = "checked-division")]
#[test]
#[should_panic(expected = "unitize")]
fn unitizing_the_horizon_panics() {
    let _ = horizon::<f64>().unitize();
}

#[cfg(not(feature = "checked-division"))]
#[test]
fn unitizing_the_horizon_is_not_finite() {
    let h = horizon::<f64>().unitize();
    assert!(h.w.is_infinite());
}

#[test]
fn mixed_precision() {
    let p = point(1_f32, 2., 2.);
    let q = origin::<f64>();

    let l: BiVec3dp<f64> = p.wdg(q);
    assert_eq!(line(p.to_f64(), q), l);
    assert_eq!(l, line(p, q.to_f32()));
    assert_eq!(TriVec3dp::<f64>::default(), join(l, p));
    assert_abs_diff_eq!(3., dist3dp(p.to_f64(), q), epsilon = 1e-12);
    assert_eq!(Some(line(p, q.to_f32())), p.cast::<f64>().map(|p| line(p, q).to_f32()));
}
