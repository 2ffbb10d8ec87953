use criterion::{black_box, criterion_group, criterion_main, Criterion};
use projga::prelude::*;
use projga::{ega2d, ega3d, pga3dp};

criterion_main!(inverse);
criterion_group!(inverse, blade, multivector_2d, multivector_3d, unitize);

fn blade(crit: &mut Criterion) {
    let b = ega3d::BiVec3d::new(2., 3., 5.);

    crit.bench_function("inv_bivector", |bench| {
        bench.iter(|| black_box(black_box(b).inv()))
    });
}

fn multivector_2d(crit: &mut Criterion) {
    let a = ega2d::MVec2d::new(1., 2., 3., 4.);

    crit.bench_function("inv_multivector_2d", |bench| {
        bench.iter(|| black_box(black_box(a).inv()))
    });
}

fn multivector_3d(crit: &mut Criterion) {
    let a = ega3d::MVec3d::new(1., 2., 3., 5., 7., 11., 13., 17.);

    crit.bench_function("inv_multivector_3d", |bench| {
        bench.iter(|| black_box(black_box(a).inv()))
    });
    crit.bench_function("try_inv_multivector_3d", |bench| {
        bench.iter(|| black_box(black_box(a).try_inv()))
    });
}

fn unitize(crit: &mut Criterion) {
    let l = pga3dp::line(pga3dp::point(1., 2., 3.), pga3dp::point(-2., 0., 4.));

    crit.bench_function("unitize_line", |bench| {
        bench.iter(|| black_box(black_box(l).unitize()))
    });
}
