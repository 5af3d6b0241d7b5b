//! Euclidean space, with bivectors in cyclic order `xy`, `yz`, `zx`.

use crate::{Dim, KVector, Result, Wedge};

macros::algebra! {
    bases { x ^ 2 == 1, y ^ 2 == 1, z ^ 2 == 1 },
    blades { xy, yz, zx, xyz }
}

/// Unit pseudoscalar
pub const I: KVector = PSEUDOSCALAR;

/// The vector cross product `-I(a∧b)`, for vectors of up to three dimensions. Vectors of
/// dimension 4 are truncated first.
pub fn cross(lhs: KVector, rhs: KVector) -> Result<KVector> {
    lhs.expect_grade(1)?;
    rhs.expect_grade(1)?;
    let lhs = lhs.to_dim(Dim::Three)?;
    let rhs = rhs.to_dim(Dim::Three)?;
    Ok((-I * lhs.wedge(rhs)).grade(1))
}
