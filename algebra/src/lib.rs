//! Compile-time description of a Euclidean geometric algebra: its bases, the storage order and
//! orientation of every blade, and the code generated from them.

pub mod blade;

mod define;
mod parse;


use std::collections::HashMap;

use itertools::Itertools;
use proc_macro2::{Ident, Span};
use syn::Error;

use crate::blade::Blade;

pub trait IsEven {
    fn is_even(&self) -> bool;
}

impl IsEven for u32 {
    fn is_even(&self) -> bool {
        self & 1 != 1
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Algebra {
    pub bases: Vec<Basis>,
    pub ordering: BladeOrdering,
    /// Field name per blade, indexed by blade mask
    pub fields: Vec<Ident>,
    /// Unsigned blades in storage order: grade-major, declared blades first within a grade
    pub layout: Vec<Blade>,
}

impl<B> FromIterator<B> for Algebra
where
    Basis: From<B>,
{
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Algebra {
        Algebra::new(iter)
    }
}

mod algebra_new {
    use super::*;

    impl Algebra {
        pub fn new<B, I: IntoIterator<Item = B>>(bases: I) -> Self
        where
            Basis: From<B>,
        {
            let bases = bases.into_iter().map(Basis::from).collect::<Vec<_>>();
            let dim = bases.len();
            let mut algebra = Algebra {
                bases,
                ordering: BladeOrdering::new(dim),
                fields: vec![],
                layout: vec![],
            };
            algebra.fields = Blades::from(&algebra)
                .map(|blade| blade.field(&algebra))
                .collect();
            algebra.layout = Blades::from(&algebra).sorted().collect();
            algebra
        }

        /// Names each blade after its factors. A name whose factors multiply out to a negative
        /// blade stores that blade with the opposite orientation, so `zx` is stored as `e3e1`.
        pub fn new_with_fields<B, I, F>(bases: I, field_idents: F) -> syn::Result<Self>
        where
            Basis: From<B>,
            I: IntoIterator<Item = B>,
            F: IntoIterator<Item = Ident>,
        {
            let mut algebra = Self::new(bases);

            let mut declared = Vec::<Blade>::new();
            let mut named = HashMap::<Blade, Ident>::new();

            for ident in field_idents {
                let blade = algebra.parse_field(&ident)?;
                if named.contains_key(&blade.unsigned()) {
                    return Err(Error::new(
                        ident.span(),
                        format!("blade declared twice: {ident}"),
                    ));
                }
                if blade.is_negative() {
                    algebra.ordering.flip(blade);
                }
                declared.push(blade.unsigned());
                named.insert(blade.unsigned(), ident);
            }

            for (blade, ident) in named {
                algebra.fields[blade] = ident;
            }

            algebra.layout = Blades::from(&algebra)
                .sorted_by_key(|blade| {
                    let position = declared.iter().position(|b| b == blade);
                    (blade.grade(), position.is_none(), position, blade.mask())
                })
                .collect();

            Ok(algebra)
        }

        fn parse_field(&self, ident: &Ident) -> syn::Result<Blade> {
            let string = ident.to_string();
            let mut product = Blade::scalar();
            for char in string.chars() {
                let i = self
                    .bases
                    .iter()
                    .position(|b| b.char == char)
                    .ok_or_else(|| {
                        Error::new(
                            ident.span(),
                            format!("{char} in {string} does not correspond to a basis"),
                        )
                    })?;
                let basis = Blade::basis(i as u32);
                if product.contains(i as u32) {
                    return Err(Error::new(
                        ident.span(),
                        format!("basis {char} repeated in {string}"),
                    ));
                }
                product = product.product(basis);
            }
            if product.is_scalar() {
                return Err(Error::new(ident.span(), "the scalar is not declared as a blade"));
            }
            Ok(product)
        }
    }

    impl Blade {
        fn field(self, algebra: &Algebra) -> Ident {
            let mut output = algebra.iter_bases(self).map(|b| b.char).collect::<String>();
            if output.is_empty() {
                output.push('s');
            }
            Ident::new(&output, Span::call_site())
        }
    }
}

impl Algebra {
    pub fn dim(&self) -> u32 {
        self.bases.len() as u32
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub(crate) fn iter_bases(&self, set: Blade) -> impl Iterator<Item = Basis> + '_ {
        self.bases
            .iter()
            .enumerate()
            .filter_map(move |(i, b)| set.contains(i as u32).then_some(*b))
    }

    /// Geometric product of two stored blades, relative to the stored orientation of the result.
    pub fn geo(&self, lhs: Blade, rhs: Blade) -> Blade {
        let mut product = lhs.product(rhs);
        if self.ordering.is_flipped(lhs)
            ^ self.ordering.is_flipped(rhs)
            ^ self.ordering.is_flipped(product)
        {
            product = -product;
        }
        product
    }

    pub fn grade_blades(&self, grade: u32) -> impl Iterator<Item = Blade> + '_ {
        self.layout.iter().copied().filter(move |b| b.grade() == grade)
    }

    /// Position of the blade in storage order.
    pub fn slot(&self, blade: Blade) -> Option<usize> {
        self.layout.iter().position(|b| *b == blade.unsigned())
    }

    pub fn grade_offset(&self, grade: u32) -> usize {
        self.layout.iter().take_while(|b| b.grade() < grade).count()
    }

    pub fn field(&self, blade: Blade) -> &Ident {
        &self.fields[blade]
    }

    pub fn is_flipped(&self, blade: Blade) -> bool {
        self.ordering.is_flipped(blade)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Basis {
    pub char: char,
}

impl Basis {
    pub fn new(char: char) -> Self {
        Self { char }
    }
}

impl From<char> for Basis {
    fn from(char: char) -> Self {
        Basis::new(char)
    }
}

#[derive(Clone)]
pub struct Blades {
    range: std::ops::RangeInclusive<u32>,
}

impl From<u32> for Blades {
    fn from(dim: u32) -> Self {
        let pseudoscalar = Blade::pseudoscalar(dim);
        Blades {
            range: 0..=pseudoscalar.0,
        }
    }
}

impl<'a> From<&'a Algebra> for Blades {
    fn from(algebra: &'a Algebra) -> Self {
        Blades::from(algebra.dim())
    }
}

impl Iterator for Blades {
    type Item = Blade;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(Blade)
    }
}

/// Which blades are stored with the opposite orientation to their sorted factors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BladeOrdering(Vec<bool>);

impl BladeOrdering {
    fn new(dim: usize) -> Self {
        Self(vec![false; 1 << dim])
    }

    fn flip(&mut self, blade: Blade) {
        if blade.is_zero() {
            return;
        }
        let bool = &mut self.0[blade.unsigned()];
        *bool = !*bool;
    }

    pub fn is_flipped(&self, blade: Blade) -> bool {
        if blade.is_zero() {
            return false;
        }
        self.0.get(blade.mask() as usize).copied().unwrap_or(false)
    }
}
