//! Basis-blade multiplication tables evaluated at runtime.
//!
//! Every product is computed term by term from the signature of the algebra, so the
//! results are independent of the closed-form expansions in `projga` and can be used to
//! check them.

pub mod blade;

use itertools::Itertools;
use rand::Rng;
use strum::EnumIter;

pub use crate::blade::Blade;
use crate::blade::reorder_sign;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Square {
    #[default]
    Pos,
    Neg,
    Zero,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Algebra {
    squares: Vec<Square>,
}

impl Algebra {
    pub fn new<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        Algebra {
            squares: squares.into_iter().collect(),
        }
    }

    pub fn ega2d() -> Self {
        Self::new([Square::Pos, Square::Pos])
    }

    pub fn ega3d() -> Self {
        Self::new([Square::Pos, Square::Pos, Square::Pos])
    }

    pub fn pga2dp() -> Self {
        Self::new([Square::Pos, Square::Pos, Square::Zero])
    }

    pub fn pga3dp() -> Self {
        Self::new([Square::Pos, Square::Pos, Square::Pos, Square::Zero])
    }

    pub fn dim(&self) -> u32 {
        self.squares.len() as u32
    }

    fn pseudoscalar_bits(&self) -> u32 {
        !(u32::MAX << self.dim())
    }

    fn degenerate_bits(&self) -> u32 {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Zero)
            .fold(0, |bits, (i, _)| bits | 1 << i)
    }

    pub fn geo(&self, lhs: Blade, rhs: Blade) -> Blade {
        if lhs.is_zero() || rhs.is_zero() {
            return Blade::zero();
        }

        let mut sign = lhs.sign() * rhs.sign() * reorder_sign(lhs.bits(), rhs.bits());
        let overlap = lhs.bits() & rhs.bits();
        for (i, square) in self.squares.iter().enumerate() {
            if overlap & (1 << i) != 0 {
                match square {
                    Square::Pos => {}
                    Square::Neg => sign = -sign,
                    Square::Zero => return Blade::zero(),
                }
            }
        }
        Blade::new(sign, lhs.bits() ^ rhs.bits())
    }

    pub fn wedge(&self, lhs: Blade, rhs: Blade) -> Blade {
        if lhs.bits() & rhs.bits() != 0 {
            Blade::zero()
        } else {
            self.geo(lhs, rhs)
        }
    }

    /// Scalar product of equal blades.
    pub fn dot(&self, lhs: Blade, rhs: Blade) -> Blade {
        if lhs.bits() != rhs.bits() {
            Blade::zero()
        } else {
            self.geo(lhs, rhs)
        }
    }

    pub fn left_con(&self, lhs: Blade, rhs: Blade) -> Blade {
        if lhs.bits() & !rhs.bits() != 0 {
            Blade::zero()
        } else {
            self.geo(lhs, rhs)
        }
    }

    pub fn right_con(&self, lhs: Blade, rhs: Blade) -> Blade {
        if rhs.bits() & !lhs.bits() != 0 {
            Blade::zero()
        } else {
            self.geo(lhs, rhs)
        }
    }

    /// `PQ` when the blades anticommute, zero when they commute.
    pub fn commutator(&self, lhs: Blade, rhs: Blade) -> Blade {
        let lr = self.geo(lhs, rhs);
        let rl = self.geo(rhs, lhs);
        if !lr.is_zero() && lr == -rl {
            lr
        } else {
            Blade::zero()
        }
    }

    /// `a ∧ rcmpl(a) = |a|² I`
    pub fn right_comp(&self, blade: Blade) -> Blade {
        let comp = self.pseudoscalar_bits() ^ blade.bits();
        Blade::new(blade.sign() * reorder_sign(blade.bits(), comp), comp)
    }

    /// `lcmpl(a) ∧ a = |a|² I`
    pub fn left_comp(&self, blade: Blade) -> Blade {
        let comp = self.pseudoscalar_bits() ^ blade.bits();
        Blade::new(blade.sign() * reorder_sign(comp, blade.bits()), comp)
    }

    fn anti<F: FnOnce(&Self, Blade, Blade) -> Blade>(&self, lhs: Blade, rhs: Blade, f: F) -> Blade {
        if lhs.is_zero() || rhs.is_zero() {
            return Blade::zero();
        }
        let output = f(self, self.right_comp(lhs), self.right_comp(rhs));
        if output.is_zero() {
            output
        } else {
            self.left_comp(output)
        }
    }

    pub fn bulk(&self, blade: Blade) -> Blade {
        if blade.bits() & self.degenerate_bits() == 0 {
            blade
        } else {
            Blade::zero()
        }
    }

    pub fn weight(&self, blade: Blade) -> Blade {
        if blade.bits() & self.degenerate_bits() != 0 {
            blade
        } else {
            Blade::zero()
        }
    }

    pub fn binary(&self, op: Product, lhs: Blade, rhs: Blade) -> Blade {
        match op {
            Product::Geometric => self.geo(lhs, rhs),
            Product::Wedge => self.wedge(lhs, rhs),
            Product::Dot => self.dot(lhs, rhs),
            Product::LeftContraction => self.left_con(lhs, rhs),
            Product::RightContraction => self.right_con(lhs, rhs),
            Product::Commutator => self.commutator(lhs, rhs),
            Product::AntiGeometric => self.anti(lhs, rhs, Self::geo),
            Product::AntiWedge => self.anti(lhs, rhs, Self::wedge),
            Product::AntiDot => self.anti(lhs, rhs, Self::dot),
            Product::AntiCommutator => self.anti(lhs, rhs, Self::commutator),
        }
    }

    pub fn unary(&self, op: Unary, blade: Blade) -> Blade {
        match op {
            Unary::Reverse => blade.rev(),
            Unary::AntiReverse => blade.anti_rev(self.dim()),
            Unary::GradeInvolution => blade.grade_involution(),
            Unary::Conjugate => blade.clifford_conjugate(),
            Unary::RightComplement => self.right_comp(blade),
            Unary::LeftComplement => self.left_comp(blade),
            Unary::Bulk => self.bulk(blade),
            Unary::Weight => self.weight(blade),
            Unary::BulkDual => self.right_comp(self.bulk(blade)),
            Unary::WeightDual => self.right_comp(self.weight(blade)),
        }
    }

    pub fn product(&self, op: Product, lhs: &Multivector, rhs: &Multivector) -> Multivector {
        let mut out = Multivector::zero(self);
        for ((a, x), (b, y)) in lhs.terms().cartesian_product(rhs.terms()) {
            let blade = self.binary(op, a, b);
            if !blade.is_zero() {
                out.coeffs[blade.bits() as usize] += f64::from(blade.sign()) * x * y;
            }
        }
        out
    }

    pub fn apply(&self, op: Unary, mv: &Multivector) -> Multivector {
        let mut out = Multivector::zero(self);
        for (a, x) in mv.terms() {
            let blade = self.unary(op, a);
            if !blade.is_zero() {
                out.coeffs[blade.bits() as usize] += f64::from(blade.sign()) * x;
            }
        }
        out
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter)]
pub enum Product {
    Geometric,
    Wedge,
    Dot,
    LeftContraction,
    RightContraction,
    Commutator,
    AntiGeometric,
    AntiWedge,
    AntiDot,
    AntiCommutator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter)]
pub enum Unary {
    Reverse,
    AntiReverse,
    GradeInvolution,
    Conjugate,
    RightComplement,
    LeftComplement,
    Bulk,
    Weight,
    BulkDual,
    WeightDual,
}

/// Coefficients of every basis blade, indexed by blade bits.
#[derive(Debug, Clone, PartialEq)]
pub struct Multivector {
    coeffs: Vec<f64>,
}

impl Multivector {
    pub fn zero(algebra: &Algebra) -> Self {
        Multivector {
            coeffs: vec![0.0; 1 << algebra.dim()],
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = (Blade, f64)> + Clone + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(bits, c)| (Blade::basis(bits as u32), *c))
    }

    pub fn get(&self, blade: Blade) -> f64 {
        f64::from(blade.sign()) * self.coeffs[blade.bits() as usize]
    }

    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.coeffs
            .iter()
            .zip_eq(&other.coeffs)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

/// The components of a storage type, as signed blades in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    blades: Vec<Blade>,
}

impl Layout {
    /// Each entry lists the 1-based basis indices of one component; `&[]` is the scalar.
    pub fn new(components: &[&[u32]]) -> Self {
        Layout {
            blades: components.iter().map(|c| Blade::from_indices(c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.blades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }

    pub fn load(&self, algebra: &Algebra, coeffs: &[f64]) -> Multivector {
        let mut mv = Multivector::zero(algebra);
        for (blade, c) in self.blades.iter().zip_eq(coeffs) {
            mv.coeffs[blade.bits() as usize] += f64::from(blade.sign()) * c;
        }
        mv
    }

    pub fn store(&self, mv: &Multivector) -> Vec<f64> {
        self.blades.iter().map(|b| mv.get(*b)).collect()
    }

    pub fn random<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.len()).map(|_| rng.gen_range(-2.0..2.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn e(indices: &[u32]) -> Blade {
        Blade::from_indices(indices)
    }

    #[test]
    fn geo() {
        let algebra = Algebra::ega2d();
        let s = Blade::scalar();
        let z = Blade::zero();

        assert_eq!(s, algebra.geo(s, s));
        assert_eq!(z, algebra.geo(z, s));
        assert_eq!(s, algebra.geo(e(&[1]), e(&[1])));
        assert_eq!(e(&[1, 2]), algebra.geo(e(&[1]), e(&[2])));
        assert_eq!(-e(&[1, 2]), algebra.geo(e(&[2]), e(&[1])));
        assert_eq!(-s, algebra.geo(e(&[1, 2]), e(&[1, 2])));
    }

    #[test]
    fn degenerate_square() {
        let algebra = Algebra::pga2dp();
        assert_eq!(Blade::zero(), algebra.geo(e(&[3]), e(&[3])));
        assert_eq!(Blade::zero(), algebra.geo(e(&[2, 3]), e(&[3, 1])));
        assert_eq!(e(&[1, 3]), algebra.geo(e(&[1, 2]), e(&[2, 3])));
    }

    #[test]
    fn complements() {
        let algebra = Algebra::pga3dp();
        for bits in 0..16 {
            let a = Blade::basis(bits);
            let i = Blade::basis(0b1111);
            assert_eq!(i, algebra.wedge(a, algebra.right_comp(a)));
            assert_eq!(i, algebra.wedge(algebra.left_comp(a), a));
            assert_eq!(a, algebra.left_comp(algebra.right_comp(a)));
        }
    }

    #[test]
    fn anti_products_of_pseudoscalar() {
        let algebra = Algebra::pga3dp();
        let i = Blade::basis(0b1111);
        for op in Product::iter().filter(|op| {
            matches!(op, Product::AntiGeometric | Product::AntiWedge | Product::AntiDot)
        }) {
            assert_eq!(i, algebra.binary(op, i, i), "{op:?}");
        }
    }

    #[test]
    fn every_product_is_bilinear_over_zero() {
        let algebra = Algebra::ega3d();
        let z = Blade::zero();
        for op in Product::iter() {
            assert_eq!(z, algebra.binary(op, z, Blade::scalar()), "{op:?}");
            assert_eq!(z, algebra.binary(op, Blade::scalar(), z), "{op:?}");
        }
    }

    #[test]
    fn layout_round_trip() {
        let algebra = Algebra::ega3d();
        let layout = Layout::new(&[&[2, 3], &[3, 1], &[1, 2]]);
        let mv = layout.load(&algebra, &[1.0, 2.0, 3.0]);
        assert_eq!(-2.0, mv.get(Blade::basis(0b101)));
        assert_eq!(vec![1.0, 2.0, 3.0], layout.store(&mv));
    }
}
