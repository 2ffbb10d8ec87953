/// A basis blade with a sign. The bits select basis vectors, lowest bit first, and the
/// sign is `-1`, `0` or `1`; a zero sign is the zero blade regardless of its bits.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blade {
    bits: u32,
    sign: i8,
}

impl std::fmt::Debug for Blade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.sign {
            0 => write!(f, "Blade(0)"),
            s => {
                let sign = if s > 0 { '+' } else { '-' };
                write!(f, "Blade({sign}{:04b})", self.bits)
            }
        }
    }
}

impl Blade {
    pub const fn new(sign: i8, bits: u32) -> Self {
        if sign == 0 {
            Self::zero()
        } else {
            Self { bits, sign }
        }
    }

    pub const fn basis(bits: u32) -> Self {
        Self { bits, sign: 1 }
    }

    pub const fn scalar() -> Self {
        Self::basis(0)
    }

    pub const fn zero() -> Self {
        Self { bits: 0, sign: 0 }
    }

    /// The blade `e_i e_j ...` for 1-based basis indices, so `[3, 1]` is `e31 = -e13`.
    pub fn from_indices(indices: &[u32]) -> Self {
        indices.iter().fold(Self::scalar(), |blade, &i| {
            let bit = 1 << (i - 1);
            assert_eq!(0, blade.bits & bit, "repeated basis index {i}");
            Blade::new(blade.sign * reorder_sign(blade.bits, bit), blade.bits | bit)
        })
    }

    pub const fn bits(self) -> u32 {
        self.bits
    }

    pub const fn sign(self) -> i8 {
        self.sign
    }

    pub const fn is_zero(self) -> bool {
        self.sign == 0
    }

    pub const fn grade(self) -> u32 {
        self.bits.count_ones()
    }

    pub const fn contains(self, i: u32) -> bool {
        self.bits & (1 << i) != 0
    }

    pub fn rev(self) -> Self {
        let r = self.grade();
        self.flip_if((r * r.saturating_sub(1) / 2) & 1 == 1)
    }

    /// Reverse taken on antigrades in a `dim`-dimensional algebra.
    pub fn anti_rev(self, dim: u32) -> Self {
        let a = dim - self.grade();
        self.flip_if((a * a.saturating_sub(1) / 2) & 1 == 1)
    }

    pub fn grade_involution(self) -> Self {
        self.flip_if(self.grade() & 1 == 1)
    }

    pub fn clifford_conjugate(self) -> Self {
        let r = self.grade();
        self.flip_if((r * (r + 1) / 2) & 1 == 1)
    }

    fn flip_if(self, flip: bool) -> Self {
        if flip {
            -self
        } else {
            self
        }
    }
}

/// Sign of reordering the concatenation `lhs rhs` of two ascending basis sequences into
/// ascending order, ignoring repeated vectors.
pub fn reorder_sign(lhs: u32, rhs: u32) -> i8 {
    let mut swaps = 0;
    let mut l = lhs >> 1;
    while l != 0 {
        swaps += (l & rhs).count_ones();
        l >>= 1;
    }
    if swaps & 1 == 1 {
        -1
    } else {
        1
    }
}

impl std::ops::Neg for Blade {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            bits: self.bits,
            sign: -self.sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_and_neg_scalar() {
        let s = Blade::scalar();
        assert_eq!(s, s);
        assert_eq!(-s, -s);
        assert_ne!(-s, s);
        assert_eq!(Blade::zero(), -Blade::zero());
    }

    #[test]
    fn from_indices() {
        assert_eq!(Blade::basis(0b11), Blade::from_indices(&[1, 2]));
        assert_eq!(-Blade::basis(0b11), Blade::from_indices(&[2, 1]));
        assert_eq!(-Blade::basis(0b101), Blade::from_indices(&[3, 1]));
        assert_eq!(-Blade::basis(0b111), Blade::from_indices(&[3, 2, 1]));
        assert_eq!(Blade::basis(0b1110), Blade::from_indices(&[4, 2, 3]));
    }

    #[test]
    fn reorder() {
        assert_eq!(1, reorder_sign(0b1, 0b10));
        assert_eq!(-1, reorder_sign(0b10, 0b1));
        assert_eq!(1, reorder_sign(0b11, 0b100));
        assert_eq!(1, reorder_sign(0b110, 0b1));
    }

    #[test]
    fn rev() {
        let s = Blade::scalar();
        let e1 = Blade::basis(1);
        let e12 = Blade::basis(0b11);
        let e123 = Blade::basis(0b111);
        let e1234 = Blade::basis(0b1111);

        assert_eq!(s, s.rev());
        assert_eq!(e1, e1.rev());
        assert_eq!(-e12, e12.rev());
        assert_eq!(-e123, e123.rev());
        assert_eq!(e1234, e1234.rev());
    }

    #[test]
    fn anti_rev() {
        assert_eq!(-Blade::scalar(), Blade::scalar().anti_rev(3));
        assert_eq!(-Blade::basis(1), Blade::basis(1).anti_rev(3));
        assert_eq!(Blade::basis(0b11), Blade::basis(0b11).anti_rev(3));
        assert_eq!(-Blade::basis(1), Blade::basis(1).anti_rev(4));
    }

    #[test]
    fn grade_involution() {
        assert_eq!(Blade::scalar(), Blade::scalar().grade_involution());
        assert_eq!(-Blade::basis(0b1), Blade::basis(0b1).grade_involution());
        assert_eq!(Blade::basis(0b11), Blade::basis(0b11).grade_involution());
        assert_eq!(-Blade::basis(0b111), Blade::basis(0b111).grade_involution());
    }

    #[test]
    fn clifford_conjugate() {
        assert_eq!(Blade::scalar(), Blade::scalar().clifford_conjugate());
        assert_eq!(-Blade::basis(0b1), Blade::basis(0b1).clifford_conjugate());
        assert_eq!(-Blade::basis(0b11), Blade::basis(0b11).clifford_conjugate());
        assert_eq!(Blade::basis(0b111), Blade::basis(0b111).clifford_conjugate());
        assert_eq!(Blade::basis(0b1111), Blade::basis(0b1111).clifford_conjugate());
    }
}
