use itertools::Itertools;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::blade::Blade;
use crate::Algebra;

/// Largest number of blades in a single grade (grade 2 of dimension 4)
const MAX_GRADE_LEN: usize = 6;
/// Number of blades in dimension 4
const MAX_LEN: usize = 16;

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum GradeName {
    Vector = 1,
    Bivector,
    Trivector,
    Quadvector,
}

impl GradeName {
    fn grade(self) -> u32 {
        self as u32
    }

    fn ident(self) -> Ident {
        let name: &'static str = self.into();
        format_ident!("{name}")
    }
}

impl Algebra {
    /// Module contents for one dimension: the blade layout with its Cayley table, named basis
    /// constants, and const constructors per grade.
    pub fn define(&self) -> TokenStream {
        let dim = self.dim_variant();
        let n_bases = self.bases.len();
        let n_blades = self.len();

        let bases = self.bases.iter().map(|b| b.char);
        let fields = self.layout.iter().map(|b| self.field(*b).to_string());
        let masks = self.layout.iter().map(|b| Literal::u8_unsuffixed(b.mask() as u8));
        let flipped = self.layout.iter().map(|b| self.is_flipped(*b));
        let cayley = self.cayley();

        let constants = self.constants();
        let constructors = self.constructors();
        let multivector = self.multivector_constructor();

        let pseudoscalar = self
            .layout
            .last()
            .map(|b| self.const_ident(*b))
            .into_iter();

        quote! {
            pub const DIM: crate::Dim = crate::Dim::#dim;

            pub const BASES: [char; #n_bases] = [#(#bases),*];

            /// Blade names in storage order
            pub const FIELDS: [&str; #n_blades] = [#(#fields),*];

            pub(crate) static LAYOUT: crate::Layout = crate::Layout {
                dim: DIM,
                fields: &FIELDS,
                masks: &[#(#masks),*],
                flipped: &[#(#flipped),*],
                cayley: &[#(#cayley),*],
            };

            #constants

            #(pub const PSEUDOSCALAR: crate::KVector = #pseudoscalar;)*

            #constructors

            #multivector
        }
    }

    fn dim_variant(&self) -> Ident {
        let name = ["Zero", "One", "Two", "Three", "Four"]
            .get(self.bases.len())
            .copied()
            .unwrap_or("Four");
        format_ident!("{name}")
    }

    /// Row-major table of `(slot, sign)` for the product of every pair of stored blades
    fn cayley(&self) -> Vec<TokenStream> {
        self.layout
            .iter()
            .cartesian_product(self.layout.iter())
            .map(|(lhs, rhs)| {
                let product = self.geo(*lhs, *rhs);
                let slot = Literal::u8_unsuffixed(self.slot(product).unwrap_or(0) as u8);
                let sign = Literal::i8_unsuffixed(product.factor() as i8);
                quote! { (#slot, #sign) }
            })
            .collect()
    }

    fn const_ident(&self, blade: Blade) -> Ident {
        format_ident!("{}", self.field(blade).to_string().to_uppercase())
    }

    fn constants(&self) -> TokenStream {
        let constants = self.layout.iter().filter(|b| !b.is_scalar()).map(|blade| {
            let ident = self.const_ident(*blade);
            let grade = blade.grade();
            let offset = self.grade_blades(grade).position(|b| b == *blade).unwrap_or(0);
            let values = (0..MAX_GRADE_LEN).map(|i| unit(i == offset));
            let doc = format!("Unit `{}` blade", self.field(*blade));
            quote! {
                #[doc = #doc]
                pub const #ident: crate::KVector = crate::KVector::from_raw(DIM, #grade, [#(#values),*]);
            }
        });
        quote! { #(#constants)* }
    }

    fn constructors(&self) -> TokenStream {
        let constructors = GradeName::iter()
            .filter(|name| name.grade() <= self.dim())
            .map(|name| {
                let fn_ident = name.ident();
                let grade = name.grade();
                let params = self
                    .grade_blades(grade)
                    .map(|b| self.field(b).clone())
                    .collect::<Vec<_>>();
                let padding = (params.len()..MAX_GRADE_LEN).map(|_| unit(false));
                let doc = format!(
                    "{} from coefficients in storage order",
                    <&'static str>::from(name)
                );
                quote! {
                    #[doc = #doc]
                    pub const fn #fn_ident(#(#params: f64),*) -> crate::KVector {
                        crate::KVector::from_raw(DIM, #grade, [#(#params,)* #(#padding),*])
                    }
                }
            });
        quote! { #(#constructors)* }
    }

    fn multivector_constructor(&self) -> TokenStream {
        let params = self
            .layout
            .iter()
            .map(|b| self.field(*b).clone())
            .collect::<Vec<_>>();
        let padding = (params.len()..MAX_LEN).map(|_| unit(false));
        quote! {
            /// Multivector from every coefficient in storage order, scalar first
            pub const fn multivector(#(#params: f64),*) -> crate::MultiVector {
                crate::MultiVector::from_raw(DIM, [#(#params,)* #(#padding),*])
            }
        }
    }
}

fn unit(one: bool) -> Literal {
    Literal::f64_unsuffixed(if one { 1.0 } else { 0.0 })
}
