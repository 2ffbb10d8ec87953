/// `*` on algebra types is the geometric product.
macro_rules! impl_geometric_mul {
    ($($lhs:ident * $rhs:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> std::ops::Mul<$rhs<T>> for $lhs<T> {
                type Output = <$lhs<T> as $crate::traits::Geometric<$rhs<T>>>::Output;

                #[inline]
                fn mul(self, rhs: $rhs<T>) -> Self::Output {
                    $crate::traits::Geometric::gpr(self, rhs)
                }
            }
        )+
    };
}

/// `<<` and `>>` are the left and right contractions.
macro_rules! impl_contraction_ops {
    ($($lhs:ident << $rhs:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> std::ops::Shl<$rhs<T>> for $lhs<T> {
                type Output = <$lhs<T> as $crate::traits::LeftContraction<$rhs<T>>>::Output;

                #[inline]
                fn shl(self, rhs: $rhs<T>) -> Self::Output {
                    $crate::traits::LeftContraction::lcontr(self, rhs)
                }
            }
        )+
    };
    ($($lhs:ident >> $rhs:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> std::ops::Shr<$rhs<T>> for $lhs<T> {
                type Output = <$lhs<T> as $crate::traits::RightContraction<$rhs<T>>>::Output;

                #[inline]
                fn shr(self, rhs: $rhs<T>) -> Self::Output {
                    $crate::traits::RightContraction::rcontr(self, rhs)
                }
            }
        )+
    };
}

/// `+` and `-` between different grades widen both operands to the smallest
/// multivector holding them.
macro_rules! impl_mixed_sum {
    ($($lhs:ident + $rhs:ident = $out:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> std::ops::Add<$rhs<T>> for $lhs<T> {
                type Output = $out<T>;

                #[inline]
                fn add(self, rhs: $rhs<T>) -> $out<T> {
                    $out::from(self) + $out::from(rhs)
                }
            }

            impl<T: num_traits::Float> std::ops::Sub<$rhs<T>> for $lhs<T> {
                type Output = $out<T>;

                #[inline]
                fn sub(self, rhs: $rhs<T>) -> $out<T> {
                    $out::from(self) - $out::from(rhs)
                }
            }
        )+
    };
}

/// Norm, normalization and inversion for Euclidean types, all derived from
/// `dot(a, rev(a))`.
macro_rules! impl_euclidean_norm {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> $crate::traits::Norm for $ty<T> {
                type Output = T;

                #[inline]
                fn nrm_sq(self) -> T {
                    $crate::traits::Dot::dot(self, $crate::traits::Reverse::rev(self)).value
                }

                #[inline]
                fn nrm(self) -> T {
                    $crate::traits::Norm::nrm_sq(self).sqrt()
                }
            }

            impl<T: num_traits::Float> $crate::traits::Normalize for $ty<T> {
                #[inline]
                fn normalize(self) -> Self {
                    let n = $crate::error::guarded("normalize", $crate::traits::Norm::nrm(self));
                    self * n.recip()
                }

                fn try_normalize(self) -> Result<Self, $crate::error::DivisionError> {
                    let n = $crate::error::checked("normalize", $crate::traits::Norm::nrm(self))?;
                    Ok(self * n.recip())
                }
            }
        )+
    };
}

/// `inv(a) = rev(a) / nrm_sq(a)`, valid whenever `a * rev(a)` is a scalar.
macro_rules! impl_reverse_inverse {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> $crate::traits::Inverse for $ty<T> {
                #[inline]
                fn inv(self) -> Self {
                    let n = $crate::error::guarded("inv", $crate::traits::Norm::nrm_sq(self));
                    $crate::traits::Reverse::rev(self) * n.recip()
                }

                fn try_inv(self) -> Result<Self, $crate::error::DivisionError> {
                    let n = $crate::error::checked("inv", $crate::traits::Norm::nrm_sq(self))?;
                    Ok($crate::traits::Reverse::rev(self) * n.recip())
                }
            }
        )+
    };
}

/// `inv(a) = rev(a) / bulk_nrm_sq(a)`, valid whenever `a * rev(a)` is a scalar. Only
/// the bulk contributes to that scalar, so objects without a bulk have no inverse.
macro_rules! impl_bulk_inverse {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> $crate::traits::Inverse for $ty<T> {
                #[inline]
                fn inv(self) -> Self {
                    let n = $crate::traits::BulkNorm::bulk_nrm_sq(self).value;
                    $crate::traits::Reverse::rev(self) * $crate::error::guarded("inv", n).recip()
                }

                fn try_inv(self) -> Result<Self, $crate::error::DivisionError> {
                    let n = $crate::traits::BulkNorm::bulk_nrm_sq(self).value;
                    let n = $crate::error::checked("inv", n)?;
                    Ok($crate::traits::Reverse::rev(self) * n.recip())
                }
            }
        )+
    };
}

/// Bulk, weight and geometric norms of projective types.
macro_rules! impl_projective_norm {
    (
        $scalar:ident, $pscalar:ident, $dual_num:ident;
        bulk: $($bulk:ident),+;
        weight: $($weight:ident),+;
        geometric: $($geom:ident),+ $(;)?
    ) => {
        $(
            impl<T: num_traits::Float> $crate::traits::BulkNorm for $bulk<T> {
                type Output = $scalar<T>;

                #[inline]
                fn bulk_nrm_sq(self) -> $scalar<T> {
                    $crate::traits::Dot::dot(self, $crate::traits::Reverse::rev(self))
                }

                #[inline]
                fn bulk_nrm(self) -> $scalar<T> {
                    $scalar::new($crate::traits::BulkNorm::bulk_nrm_sq(self).value.sqrt())
                }
            }
        )+
        $(
            impl<T: num_traits::Float> $crate::traits::WeightNorm for $weight<T> {
                type Output = $pscalar<T>;

                #[inline]
                fn weight_nrm_sq(self) -> $pscalar<T> {
                    $crate::traits::RegressiveDot::rdot(
                        self,
                        $crate::traits::RegressiveReverse::rrev(self),
                    )
                }

                #[inline]
                fn weight_nrm(self) -> $pscalar<T> {
                    $pscalar::new($crate::traits::WeightNorm::weight_nrm_sq(self).value.sqrt())
                }
            }
        )+
        $(
            impl<T: num_traits::Float> $crate::traits::GeometricNorm for $geom<T> {
                type Output = $dual_num<T>;

                #[inline]
                fn geom_nrm(self) -> $dual_num<T> {
                    $dual_num::new(
                        $crate::traits::BulkNorm::bulk_nrm(self).value,
                        $crate::traits::WeightNorm::weight_nrm(self).value,
                    )
                }
            }
        )+
    };
}

/// Unitization by the weight norm.
macro_rules! impl_weight_unitize {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: num_traits::Float> $crate::traits::Unitize for $ty<T> {
                #[inline]
                fn unitize(self) -> Self {
                    let w = $crate::traits::WeightNorm::weight_nrm(self).value;
                    self * $crate::error::guarded("unitize", w).recip()
                }

                fn try_unitize(self) -> Result<Self, $crate::error::DivisionError> {
                    let w = $crate::traits::WeightNorm::weight_nrm(self).value;
                    Ok(self * $crate::error::checked("unitize", w)?.recip())
                }
            }
        )+
    };
}

/// Dual numbers `a + b ε` with `ε² = 0`, stored as the scalar and pseudoscalar part of
/// a projective multivector.
macro_rules! impl_dual_num {
    ($ty:ident, $scalar:ident, $pscalar:ident) => {
        impl<T: num_traits::Float> $ty<T> {
            /// Scalar (bulk) part.
            #[inline]
            pub fn real(self) -> $scalar<T> {
                $scalar::new(self.c0)
            }

            /// Pseudoscalar (weight) part.
            #[inline]
            pub fn dual_part(self) -> $pscalar<T> {
                $pscalar::new(self.c1)
            }

            /// Principal square root. Requires a positive real part.
            pub fn sqrt(self) -> Self {
                let r = self.c0.sqrt();
                let two = T::one() + T::one();
                $ty::new(r, self.c1 * $crate::error::guarded("sqrt", two * r).recip())
            }
        }

        impl<T: num_traits::Float> $crate::traits::Geometric<$ty<T>> for $ty<T> {
            type Output = $ty<T>;

            #[inline]
            fn gpr(self, rhs: $ty<T>) -> $ty<T> {
                $ty::new(self.c0 * rhs.c0, self.c0 * rhs.c1 + self.c1 * rhs.c0)
            }
        }

        impl_geometric_mul! { $ty * $ty }

        impl<T: num_traits::Float> $crate::traits::Inverse for $ty<T> {
            #[inline]
            fn inv(self) -> Self {
                let r = $crate::error::guarded("inv", self.c0).recip();
                $ty::new(r, -self.c1 * r * r)
            }

            fn try_inv(self) -> Result<Self, $crate::error::DivisionError> {
                let r = $crate::error::checked("inv", self.c0)?.recip();
                Ok($ty::new(r, -self.c1 * r * r))
            }
        }

        /// Divides by the dual part, so that the real part of a unitized geometric norm is
        /// a distance.
        impl<T: num_traits::Float> $crate::traits::Unitize for $ty<T> {
            #[inline]
            fn unitize(self) -> Self {
                let w = $crate::error::guarded("unitize", self.c1).recip();
                $ty::new(self.c0 * w, T::one())
            }

            fn try_unitize(self) -> Result<Self, $crate::error::DivisionError> {
                let w = $crate::error::checked("unitize", self.c1)?.recip();
                Ok($ty::new(self.c0 * w, T::one()))
            }
        }
    };
}
