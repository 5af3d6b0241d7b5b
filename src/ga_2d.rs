//! The Euclidean plane. The pseudoscalar `I = xy` squares to -1, so even multivectors
//! `a + b·I` behave like complex numbers.

use crate::{KVector, MultiVector, Result};

macros::algebra! {
    bases { x ^ 2 == 1, y ^ 2 == 1 },
    blades { xy }
}

/// Unit pseudoscalar
pub const I: KVector = PSEUDOSCALAR;

/// `cos(X) = (exp(I·X) + exp(-I·X)) / 2`
pub fn cos(value: MultiVector) -> MultiVector {
    let turned = I * value;
    (turned.exp() + (-turned).exp()).scale(0.5)
}

/// `sin(X) = (exp(I·X) - exp(-I·X)) / 2I`
pub fn sin(value: MultiVector) -> MultiVector {
    let turned = I * value;
    // 1 / 2I = -I / 2
    (turned.exp() - (-turned).exp()) * I.scale(-0.5)
}

/// `sin(X) / cos(X)`, failing where the cosine is not invertible.
pub fn tan(value: MultiVector) -> Result<MultiVector> {
    let cos = cos(value);
    Ok(sin(value) * cos.inverse()?)
}
