use criterion::{black_box, criterion_group, criterion_main, Criterion};
use projga::pga3dp::*;
use projga::prelude::*;

criterion_main! { products }
criterion_group! { products, wedge, meet, geometric, regressive_geometric }

fn wedge(crit: &mut Criterion) {
    let a = point(0_f64, 0., 0.);
    let b = point(1_f64, 1., 1.);
    let c = point(2_f64, 3., 5.);

    crit.bench_function("wdg_plane", |bench| {
        bench.iter(|| black_box(black_box(a).wdg(b).wdg(c)))
    });
}

fn meet(crit: &mut Criterion) {
    let l = line(point(0_f64, 0., 0.), point(1., 1., 1.));
    let pl = plane(point(0_f64, 0., 1.), point(1., 0., 1.), point(0., 1., 1.));

    crit.bench_function("rwdg_line_plane", |bench| {
        bench.iter(|| black_box(black_box(l).rwdg(pl)))
    });
}

fn geometric(crit: &mut Criterion) {
    let ab = line(point(0_f64, 0., 0.), point(1., 1., 1.));
    let ac = line(point(0_f64, 0., 0.), point(2., 3., 5.));
    let a = MVec3dp::new(
        1_f64, 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14., 15., 16.,
    );

    crit.bench_function("gpr_bivector", |bench| {
        bench.iter(|| black_box(black_box(ab) * ac))
    });
    crit.bench_function("gpr_multivector", |bench| {
        bench.iter(|| black_box(black_box(a) * a))
    });
}

fn regressive_geometric(crit: &mut Criterion) {
    let m = motor(line(origin(), point(0., 0., 1.)), 0.5_f64);
    let n = translator(direction(1_f64, 2., 3.));

    crit.bench_function("rgpr_motor", |bench| {
        bench.iter(|| black_box(black_box(m).rgpr(n)))
    });
}
