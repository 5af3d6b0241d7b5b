extern crate proc_macro;

use syn::parse_macro_input;

/// Generates the layout, basis constants and constructors of one Euclidean dimension
///
/// ```ignore
/// algebra! {
///     bases { x ^ 2 == 1, y ^ 2 == 1, z ^ 2 == 1 },
///     blades { xy, yz, zx, xyz }
/// }
/// ```
#[proc_macro]
pub fn algebra(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let algebra = parse_macro_input!(input as algebra::Algebra);
    algebra.define().into()
}
