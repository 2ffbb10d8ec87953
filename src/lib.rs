//! Compile-time typed geometric algebra for 2D and 3D Euclidean space (EGA) and for
//! their projective extensions (PGA) with one degenerate basis vector.
//!
//! Every value is a small `Copy` struct of floats tagged with its algebra and grade.
//! Products are traits implemented once per grade pair, so the result type of
//! `a.wdg(b)` or `a * b` is known at compile time and unsupported combinations do not
//! compile.
//!
//! Algebras:
//! - [`ega2d`]: e1² = e2² = 1
//! - [`ega3d`]: e1² = e2² = e3² = 1
//! - [`pga2dp`]: e1² = e2² = 1, e3² = 0
//! - [`pga3dp`]: e1² = e2² = e3² = 1, e4² = 0
//!
//! Operators:
//! - `*` geometric product, `<<` / `>>` left and right contraction
//! - `+`, `-` componentwise, or widening to a multivector between different grades
//! - scalar `*` and `/` componentwise
//! - an `f32` operand combined with an `f64` operand is widened first and the result is
//!   `f64`
//! - everything else through the traits in [`traits`] or the free functions in [`ops`]
//!
//! Division by a computed magnitude goes through [`error::guarded`], which panics on a
//! near-zero divisor only when the `checked-division` feature is enabled. The `try_`
//! variants always check and return a [`DivisionError`].

#[macro_use]
mod macros;

pub mod error;
pub mod ops;
mod precision;
pub mod storage;
pub mod traits;

pub mod ega2d;
pub mod ega3d;
pub mod pga2dp;
pub mod pga3dp;

pub use error::{DivisionError, CHECKED_DIVISION};

pub mod prelude {
    pub use crate::error::{DivisionError, CHECKED_DIVISION};
    pub use crate::ops::*;
    pub use crate::traits::*;
}
