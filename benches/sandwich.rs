use criterion::{criterion_group, criterion_main, Criterion};
use projga::prelude::*;
use projga::{ega3d, pga3dp};

criterion_main!(sandwich);
criterion_group!(
    sandwich,
    rotate_optimized,
    rotate_product,
    move_optimized,
    move_product
);

const N: usize = 64;

fn rotate_optimized(crit: &mut Criterion) {
    let rotor = ega3d::rotor(ega3d::BiVec3d::new(0., 0., 1.), std::f64::consts::FRAC_PI_4);

    let mut vectors = vec![ega3d::Vec3d::new(1_f64, 2., 3.); N];

    crit.bench_function("rotate_optimized", |b| {
        b.iter(|| {
            for vector in &mut vectors {
                *vector = vector.rotate(rotor);
            }
        })
    });
}

fn rotate_product(crit: &mut Criterion) {
    let rotor = ega3d::rotor(ega3d::BiVec3d::new(0., 0., 1.), std::f64::consts::FRAC_PI_4);
    let rev = rotor.rev();

    let mut vectors = vec![ega3d::Vec3d::new(1_f64, 2., 3.); N];

    crit.bench_function("rotate_product", |b| {
        b.iter(|| {
            for vector in &mut vectors {
                *vector = (rotor * *vector * rev).gr1();
            }
        })
    });
}

fn move_optimized(crit: &mut Criterion) {
    let axis = pga3dp::line(pga3dp::origin(), pga3dp::point(0., 0., 1.));
    let motor = pga3dp::motor(axis, std::f64::consts::FRAC_PI_4)
        .then(pga3dp::translator(pga3dp::direction(1., 0., 0.)));

    let mut points = vec![pga3dp::point(1_f64, 2., 3.); N];

    crit.bench_function("move_optimized", |b| {
        b.iter(|| {
            for point in &mut points {
                *point = point.move_by(motor);
            }
        })
    });
}

fn move_product(crit: &mut Criterion) {
    let axis = pga3dp::line(pga3dp::origin(), pga3dp::point(0., 0., 1.));
    let motor = pga3dp::motor(axis, std::f64::consts::FRAC_PI_4)
        .then(pga3dp::translator(pga3dp::direction(1., 0., 0.)));
    let rrev = motor.rrev();

    let mut points = vec![pga3dp::point(1_f64, 2., 3.); N];

    crit.bench_function("move_product", |b| {
        b.iter(|| {
            for point in &mut points {
                *point = motor.rgpr(*point).rgpr(rrev).gr1();
            }
        })
    });
}
