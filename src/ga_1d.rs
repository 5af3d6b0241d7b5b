//! The real line: scalars and multiples of `x`.

macros::algebra! {
    bases { x ^ 2 == 1 }
}
