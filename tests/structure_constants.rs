//! Every closed-form product, involution, complement and sandwich checked against the
//! runtime blade table on random operands.

use blade_table::{Algebra, Layout, Product, Unary};
use bytemuck::Pod;
use projga::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 16;
const TOLERANCE: f64 = 1e-12;

/// Storage types viewed as a flat list of blade coefficients.
trait Components: Pod {
    const BLADES: &'static [&'static [u32]];

    fn layout() -> Layout {
        Layout::new(Self::BLADES)
    }

    fn from_coeffs(coeffs: &[f64]) -> Self {
        bytemuck::cast_slice::<f64, Self>(coeffs)[0]
    }

    fn coeffs(&self) -> Vec<f64> {
        bytemuck::cast_slice::<Self, f64>(std::slice::from_ref(self)).to_vec()
    }
}

macro_rules! components {
    ($($ty:ident => [$($blade:tt),* $(,)?]),* $(,)?) => {
        $(
            impl Components for $ty<f64> {
                const BLADES: &'static [&'static [u32]] = &[$(&$blade),*];
            }
        )*
    };
}

macro_rules! binary {
    ($algebra:expr, $op:expr, $method:ident: $($lhs:ident [$($rhs:ident),+ $(,)?]),+ $(,)?) => {
        let algebra = $algebra;
        $($(
            check_binary(
                &algebra,
                $op,
                concat!(stringify!($lhs), ".", stringify!($method), "(", stringify!($rhs), ")"),
                |a: $lhs<f64>, b: $rhs<f64>| a.$method(b),
            );
        )+)+
    };
}

macro_rules! unary {
    ($algebra:expr, $op:expr, $method:ident: $($ty:ident),+ $(,)?) => {
        let algebra = $algebra;
        $(
            check_unary(
                &algebra,
                $op,
                concat!(stringify!($ty), ".", stringify!($method), "()"),
                |a: $ty<f64>| a.$method(),
            );
        )+
    };
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6a_2d_3d)
}

fn check_binary<A, B, C, F>(algebra: &Algebra, op: Product, name: &str, f: F)
where
    A: Components,
    B: Components,
    C: Components,
    F: Fn(A, B) -> C,
{
    let mut rng = rng();
    let (la, lb, lc) = (A::layout(), B::layout(), C::layout());
    for _ in 0..SAMPLES {
        let a = la.random(&mut rng);
        let b = lb.random(&mut rng);
        let expected = algebra.product(op, &la.load(algebra, &a), &lb.load(algebra, &b));
        let actual = lc.load(algebra, &f(A::from_coeffs(&a), B::from_coeffs(&b)).coeffs());
        let err = expected.max_abs_diff(&actual);
        assert!(
            err < TOLERANCE,
            "{name} with {a:?}, {b:?}\nexpected {expected:?}\nactual {actual:?}"
        );
    }
}

fn check_unary<A, C, F>(algebra: &Algebra, op: Unary, name: &str, f: F)
where
    A: Components,
    C: Components,
    F: Fn(A) -> C,
{
    let mut rng = rng();
    let (la, lc) = (A::layout(), C::layout());
    for _ in 0..SAMPLES {
        let a = la.random(&mut rng);
        let expected = algebra.apply(op, &la.load(algebra, &a));
        let actual = lc.load(algebra, &f(A::from_coeffs(&a)).coeffs());
        let err = expected.max_abs_diff(&actual);
        assert!(err < TOLERANCE, "{name} with {a:?}\nexpected {expected:?}\nactual {actual:?}");
    }
}

/// Compares the grade of `x` in the full sandwich with the optimized expansion.
fn check_sandwich<X, M, F>(algebra: &Algebra, inner: Product, outer: Unary, f: F)
where
    X: Components,
    M: Components,
    F: Fn(X, M) -> X,
{
    let mut rng = rng();
    let (lx, lm) = (X::layout(), M::layout());
    for _ in 0..SAMPLES {
        let x = lx.random(&mut rng);
        let m = lm.random(&mut rng);
        let mv = lm.load(algebra, &m);
        let product = algebra.product(inner, &mv, &lx.load(algebra, &x));
        let expected = lx.store(&algebra.product(inner, &product, &algebra.apply(outer, &mv)));
        let actual = f(X::from_coeffs(&x), M::from_coeffs(&m)).coeffs();
        for (e, a) in expected.iter().zip(&actual) {
            assert!(
                (e - a).abs() < TOLERANCE,
                "{x:?} by {m:?}\nexpected {expected:?}\nactual {actual:?}"
            );
        }
    }
}

fn check_rotate<X: Components + Rotate<R>, R: Components>(algebra: &Algebra) {
    check_sandwich(algebra, Product::Geometric, Unary::Reverse, |x: X, r: R| x.rotate(r));
}

fn check_move<X: Components + Move<M>, M: Components>(algebra: &Algebra) {
    check_sandwich(algebra, Product::AntiGeometric, Unary::AntiReverse, |x: X, m: M| x.move_by(m));
}

mod ega2d {
    use super::*;
    use projga::ega2d::*;

    components! {
        Scalar2d => [[]],
        Vec2d => [[1], [2]],
        PScalar2d => [[1, 2]],
        MVec2dE => [[], [1, 2]],
        MVec2d => [[], [1], [2], [1, 2]],
    }

    fn algebra() -> Algebra {
        Algebra::ega2d()
    }

    #[test]
    fn gpr() {
        binary! { algebra(), Product::Geometric, gpr:
            Scalar2d [Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d],
            Vec2d [Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d],
            PScalar2d [Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d],
            MVec2dE [Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d],
            MVec2d [Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d],
        }
    }

    #[test]
    fn wdg() {
        binary! { algebra(), Product::Wedge, wdg:
            Scalar2d [Scalar2d, Vec2d, PScalar2d],
            Vec2d [Scalar2d, Vec2d, PScalar2d],
            PScalar2d [Scalar2d, Vec2d, PScalar2d],
            MVec2d [MVec2d],
        }
    }

    #[test]
    fn dot() {
        binary! { algebra(), Product::Dot, dot:
            Scalar2d [Scalar2d],
            Vec2d [Vec2d],
            PScalar2d [PScalar2d],
            MVec2dE [MVec2dE],
            MVec2d [MVec2d],
        }
    }

    #[test]
    fn lcontr() {
        binary! { algebra(), Product::LeftContraction, lcontr:
            Scalar2d [Scalar2d, Vec2d, PScalar2d],
            Vec2d [Vec2d, PScalar2d],
            PScalar2d [PScalar2d],
            MVec2d [MVec2d],
        }
    }

    #[test]
    fn rcontr() {
        binary! { algebra(), Product::RightContraction, rcontr:
            Scalar2d [Scalar2d],
            Vec2d [Scalar2d, Vec2d],
            PScalar2d [Scalar2d, Vec2d, PScalar2d],
            MVec2d [MVec2d],
        }
    }

    #[test]
    fn cmt() {
        binary! { algebra(), Product::Commutator, cmt:
            Vec2d [Vec2d, PScalar2d],
            PScalar2d [Vec2d],
            MVec2d [MVec2d],
        }
    }

    #[test]
    fn rwdg() {
        binary! { algebra(), Product::AntiWedge, rwdg:
            Scalar2d [Scalar2d, Vec2d, PScalar2d],
            Vec2d [Scalar2d, Vec2d, PScalar2d],
            PScalar2d [Scalar2d, Vec2d, PScalar2d],
            MVec2d [MVec2d],
        }
    }

    #[test]
    fn rev() {
        unary! { algebra(), Unary::Reverse, rev: Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d }
    }

    #[test]
    fn gr_inv() {
        unary! { algebra(), Unary::GradeInvolution, gr_inv:
            Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d
        }
    }

    #[test]
    fn conj() {
        unary! { algebra(), Unary::Conjugate, conj: Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d }
    }

    #[test]
    fn rcmpl() {
        unary! { algebra(), Unary::RightComplement, rcmpl:
            Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d
        }
    }

    #[test]
    fn lcmpl() {
        unary! { algebra(), Unary::LeftComplement, lcmpl:
            Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d
        }
    }

    #[test]
    fn rotate() {
        check_rotate::<Vec2d<f64>, MVec2dE<f64>>(&algebra());
    }
}

mod ega3d {
    use super::*;
    use projga::ega3d::*;

    components! {
        Scalar3d => [[]],
        Vec3d => [[1], [2], [3]],
        BiVec3d => [[2, 3], [3, 1], [1, 2]],
        PScalar3d => [[1, 2, 3]],
        MVec3dE => [[], [2, 3], [3, 1], [1, 2]],
        MVec3dU => [[1], [2], [3], [1, 2, 3]],
        MVec3d => [[], [1], [2], [3], [2, 3], [3, 1], [1, 2], [1, 2, 3]],
    }

    fn algebra() -> Algebra {
        Algebra::ega3d()
    }

    #[test]
    fn gpr() {
        binary! { algebra(), Product::Geometric, gpr:
            Scalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
            Vec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
            BiVec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
            PScalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
            MVec3dE [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
            MVec3dU [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
            MVec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d],
        }
    }

    #[test]
    fn wdg() {
        binary! { algebra(), Product::Wedge, wdg:
            Scalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            Vec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            BiVec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            PScalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            MVec3d [MVec3d],
        }
    }

    #[test]
    fn dot() {
        binary! { algebra(), Product::Dot, dot:
            Scalar3d [Scalar3d],
            Vec3d [Vec3d],
            BiVec3d [BiVec3d],
            PScalar3d [PScalar3d],
            MVec3dE [MVec3dE],
            MVec3dU [MVec3dU],
            MVec3d [MVec3d],
        }
    }

    #[test]
    fn lcontr() {
        binary! { algebra(), Product::LeftContraction, lcontr:
            Scalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            Vec3d [Vec3d, BiVec3d, PScalar3d],
            BiVec3d [BiVec3d, PScalar3d],
            PScalar3d [PScalar3d],
            MVec3d [MVec3d],
        }
    }

    #[test]
    fn rcontr() {
        binary! { algebra(), Product::RightContraction, rcontr:
            Scalar3d [Scalar3d],
            Vec3d [Scalar3d, Vec3d],
            BiVec3d [Scalar3d, Vec3d, BiVec3d],
            PScalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            MVec3d [MVec3d],
        }
    }

    #[test]
    fn cmt() {
        binary! { algebra(), Product::Commutator, cmt:
            Vec3d [Vec3d, BiVec3d],
            BiVec3d [Vec3d, BiVec3d],
            MVec3dE [MVec3dE],
            MVec3d [MVec3d],
        }
    }

    #[test]
    fn rwdg() {
        binary! { algebra(), Product::AntiWedge, rwdg:
            Scalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            Vec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            BiVec3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            PScalar3d [Scalar3d, Vec3d, BiVec3d, PScalar3d],
            MVec3d [MVec3d],
        }
    }

    #[test]
    fn rev() {
        unary! { algebra(), Unary::Reverse, rev:
            Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d
        }
    }

    #[test]
    fn gr_inv() {
        unary! { algebra(), Unary::GradeInvolution, gr_inv:
            Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d
        }
    }

    #[test]
    fn conj() {
        unary! { algebra(), Unary::Conjugate, conj:
            Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d
        }
    }

    #[test]
    fn cmpl() {
        unary! { algebra(), Unary::RightComplement, cmpl:
            Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d
        }
    }

    #[test]
    fn rotate() {
        check_rotate::<Vec3d<f64>, MVec3dE<f64>>(&algebra());
        check_rotate::<BiVec3d<f64>, MVec3dE<f64>>(&algebra());
    }
}

mod pga2dp {
    use super::*;
    use projga::pga2dp::*;

    components! {
        Scalar2dp => [[]],
        Vec2dp => [[1], [2], [3]],
        BiVec2dp => [[2, 3], [3, 1], [1, 2]],
        PScalar2dp => [[1, 2, 3]],
        MVec2dpE => [[], [2, 3], [3, 1], [1, 2]],
        MVec2dpU => [[1], [2], [3], [1, 2, 3]],
        MVec2dp => [[], [1], [2], [3], [2, 3], [3, 1], [1, 2], [1, 2, 3]],
    }

    fn algebra() -> Algebra {
        Algebra::pga2dp()
    }

    #[test]
    fn gpr() {
        binary! { algebra(), Product::Geometric, gpr:
            Scalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            Vec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            BiVec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            PScalar2dp [Scalar2dp, Vec2dp, BiVec2dp, MVec2dpE, MVec2dpU, MVec2dp],
            MVec2dpE [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            MVec2dpU [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            MVec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
        }
    }

    #[test]
    fn wdg() {
        binary! { algebra(), Product::Wedge, wdg:
            Scalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            Vec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            BiVec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            PScalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn dot() {
        binary! { algebra(), Product::Dot, dot:
            Scalar2dp [Scalar2dp],
            Vec2dp [Vec2dp],
            BiVec2dp [BiVec2dp],
            MVec2dpE [MVec2dpE],
            MVec2dpU [MVec2dpU],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn lcontr() {
        binary! { algebra(), Product::LeftContraction, lcontr:
            Scalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            Vec2dp [Vec2dp, BiVec2dp, PScalar2dp],
            BiVec2dp [BiVec2dp, PScalar2dp],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn rcontr() {
        binary! { algebra(), Product::RightContraction, rcontr:
            Scalar2dp [Scalar2dp],
            Vec2dp [Scalar2dp, Vec2dp],
            BiVec2dp [Scalar2dp, Vec2dp, BiVec2dp],
            PScalar2dp [Scalar2dp, Vec2dp, BiVec2dp],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn cmt() {
        binary! { algebra(), Product::Commutator, cmt:
            Vec2dp [Vec2dp, BiVec2dp],
            BiVec2dp [Vec2dp, BiVec2dp],
            MVec2dpE [MVec2dpE],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn rgpr() {
        binary! { algebra(), Product::AntiGeometric, rgpr:
            Scalar2dp [Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            Vec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            BiVec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            PScalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            MVec2dpE [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            MVec2dpU [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
            MVec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp],
        }
    }

    #[test]
    fn rwdg() {
        binary! { algebra(), Product::AntiWedge, rwdg:
            Scalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            Vec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            BiVec2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            PScalar2dp [Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn rdot() {
        binary! { algebra(), Product::AntiDot, rdot:
            Vec2dp [Vec2dp],
            BiVec2dp [BiVec2dp],
            PScalar2dp [PScalar2dp],
            MVec2dpE [MVec2dpE],
            MVec2dpU [MVec2dpU],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn rcmt() {
        binary! { algebra(), Product::AntiCommutator, rcmt:
            Vec2dp [Vec2dp, BiVec2dp],
            BiVec2dp [Vec2dp, BiVec2dp],
            MVec2dpE [MVec2dpE],
            MVec2dp [MVec2dp],
        }
    }

    #[test]
    fn rev() {
        unary! { algebra(), Unary::Reverse, rev:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn rrev() {
        unary! { algebra(), Unary::AntiReverse, rrev:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn gr_inv() {
        unary! { algebra(), Unary::GradeInvolution, gr_inv:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn conj() {
        unary! { algebra(), Unary::Conjugate, conj:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn cmpl() {
        unary! { algebra(), Unary::RightComplement, cmpl:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn bulk() {
        unary! { algebra(), Unary::Bulk, bulk:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn weight() {
        unary! { algebra(), Unary::Weight, weight:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn bulk_dual() {
        unary! { algebra(), Unary::BulkDual, bulk_dual:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn weight_dual() {
        unary! { algebra(), Unary::WeightDual, weight_dual:
            Scalar2dp, Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp
        }
    }

    #[test]
    fn move_by() {
        check_move::<Vec2dp<f64>, MVec2dpU<f64>>(&algebra());
        check_move::<BiVec2dp<f64>, MVec2dpU<f64>>(&algebra());
    }
}

mod pga3dp {
    use super::*;
    use projga::pga3dp::*;

    components! {
        Scalar3dp => [[]],
        Vec3dp => [[1], [2], [3], [4]],
        BiVec3dp => [[4, 1], [4, 2], [4, 3], [2, 3], [3, 1], [1, 2]],
        TriVec3dp => [[4, 2, 3], [4, 3, 1], [4, 1, 2], [3, 2, 1]],
        PScalar3dp => [[1, 2, 3, 4]],
        MVec3dpE => [[], [4, 1], [4, 2], [4, 3], [2, 3], [3, 1], [1, 2], [1, 2, 3, 4]],
        MVec3dpU => [[1], [2], [3], [4], [4, 2, 3], [4, 3, 1], [4, 1, 2], [3, 2, 1]],
        MVec3dp => [
            [], [1], [2], [3], [4], [4, 1], [4, 2], [4, 3],
            [2, 3], [3, 1], [1, 2], [4, 2, 3], [4, 3, 1], [4, 1, 2], [3, 2, 1], [1, 2, 3, 4],
        ],
    }

    fn algebra() -> Algebra {
        Algebra::pga3dp()
    }

    #[test]
    fn gpr() {
        binary! { algebra(), Product::Geometric, gpr:
            Scalar3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            Vec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            BiVec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            TriVec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            PScalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, MVec3dpE, MVec3dpU, MVec3dp],
            MVec3dpE [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            MVec3dpU [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            MVec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
        }
    }

    #[test]
    fn wdg() {
        binary! { algebra(), Product::Wedge, wdg:
            Scalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            Vec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            BiVec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            TriVec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            PScalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn dot() {
        binary! { algebra(), Product::Dot, dot:
            Scalar3dp [Scalar3dp],
            Vec3dp [Vec3dp],
            BiVec3dp [BiVec3dp],
            TriVec3dp [TriVec3dp],
            MVec3dpE [MVec3dpE],
            MVec3dpU [MVec3dpU],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn lcontr() {
        binary! { algebra(), Product::LeftContraction, lcontr:
            Scalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            Vec3dp [Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            BiVec3dp [BiVec3dp, TriVec3dp, PScalar3dp],
            TriVec3dp [TriVec3dp, PScalar3dp],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn rcontr() {
        binary! { algebra(), Product::RightContraction, rcontr:
            Scalar3dp [Scalar3dp],
            Vec3dp [Scalar3dp, Vec3dp],
            BiVec3dp [Scalar3dp, Vec3dp, BiVec3dp],
            TriVec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp],
            PScalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn cmt() {
        binary! { algebra(), Product::Commutator, cmt:
            Vec3dp [Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            BiVec3dp [Vec3dp, BiVec3dp, TriVec3dp],
            TriVec3dp [Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            PScalar3dp [Vec3dp, TriVec3dp],
            MVec3dpE [MVec3dpE],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn rgpr() {
        binary! { algebra(), Product::AntiGeometric, rgpr:
            Scalar3dp [Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp],
            Vec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            BiVec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            TriVec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            PScalar3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            MVec3dpE [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            MVec3dpU [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
            MVec3dp [
                Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp,
            ],
        }
    }

    #[test]
    fn rwdg() {
        binary! { algebra(), Product::AntiWedge, rwdg:
            Scalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            Vec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            BiVec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            TriVec3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            PScalar3dp [Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn rdot() {
        binary! { algebra(), Product::AntiDot, rdot:
            Vec3dp [Vec3dp],
            BiVec3dp [BiVec3dp],
            TriVec3dp [TriVec3dp],
            PScalar3dp [PScalar3dp],
            MVec3dpE [MVec3dpE],
            MVec3dpU [MVec3dpU],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn rcmt() {
        binary! { algebra(), Product::AntiCommutator, rcmt:
            Vec3dp [Vec3dp, BiVec3dp, TriVec3dp],
            BiVec3dp [Vec3dp, BiVec3dp, TriVec3dp],
            TriVec3dp [Vec3dp, BiVec3dp, TriVec3dp],
            MVec3dpE [MVec3dpE],
            MVec3dp [MVec3dp],
        }
    }

    #[test]
    fn rev() {
        unary! { algebra(), Unary::Reverse, rev:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn rrev() {
        unary! { algebra(), Unary::AntiReverse, rrev:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn gr_inv() {
        unary! { algebra(), Unary::GradeInvolution, gr_inv:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn conj() {
        unary! { algebra(), Unary::Conjugate, conj:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn rcmpl() {
        unary! { algebra(), Unary::RightComplement, rcmpl:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn lcmpl() {
        unary! { algebra(), Unary::LeftComplement, lcmpl:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn bulk() {
        unary! { algebra(), Unary::Bulk, bulk:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn weight() {
        unary! { algebra(), Unary::Weight, weight:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn bulk_dual() {
        unary! { algebra(), Unary::BulkDual, bulk_dual:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn weight_dual() {
        unary! { algebra(), Unary::WeightDual, weight_dual:
            Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp
        }
    }

    #[test]
    fn move_by() {
        check_move::<Vec3dp<f64>, MVec3dpE<f64>>(&algebra());
        check_move::<BiVec3dp<f64>, MVec3dpE<f64>>(&algebra());
        check_move::<TriVec3dp<f64>, MVec3dpE<f64>>(&algebra());
    }
}
