use proc_macro2::Span;
use syn::{
    braced,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Brace,
    Error, Ident, LitInt, Token,
};

/// `bases { x ^ 2 == 1, .. }` optionally followed by `, blades { xy, .. }`
pub struct Algebra {
    bases: Bases,
    blades: Option<Blades>,
}

impl TryFrom<Algebra> for crate::Algebra {
    type Error = Error;

    fn try_from(value: Algebra) -> syn::Result<Self> {
        let bases = value.bases.bases.into_iter().map(|b| b.char.char);
        match value.blades {
            Some(blades) => crate::Algebra::new_with_fields(bases, blades.blades),
            None => Ok(crate::Algebra::new(bases)),
        }
    }
}

impl Parse for Algebra {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let bases = input.parse::<Bases>()?;
        if input.is_empty() {
            return Ok(Algebra {
                bases,
                blades: None,
            });
        }
        let _: Token![,] = input.parse()?;
        if input.is_empty() {
            return Ok(Algebra {
                bases,
                blades: None,
            });
        }
        let blades = input.parse()?;
        let _: Option<Token![,]> = input.parse()?;
        Ok(Algebra {
            bases,
            blades: Some(blades),
        })
    }
}

impl Parse for crate::Algebra {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let algebra = crate::Algebra::try_from(input.parse::<Algebra>()?)?;
        if algebra.bases.is_empty() || algebra.dim() > 4 {
            return Err(Error::new(span, "expected between 1 and 4 bases"));
        }
        Ok(algebra)
    }
}

pub struct Bases {
    bases: Punctuated<Basis, Token![,]>,
}

impl Parse for Bases {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Keyword::parse(input, "bases")?;
        let content;
        let _: Brace = braced!(content in input);
        let bases: Punctuated<Basis, Token![,]> = content.parse_terminated(Basis::parse, Token![,])?;

        for (i, basis) in bases.iter().enumerate() {
            if bases.iter().skip(i + 1).any(|b| b.char.char == basis.char.char) {
                return Err(Error::new(
                    basis.char.span,
                    format!("basis declared twice: {}", basis.char.char),
                ));
            }
        }

        Ok(Self { bases })
    }
}

pub struct Basis {
    char: Char,
}

impl Parse for Basis {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let char = input.parse()?;
        let _: Token![^] = input.parse()?;
        let _: Two = input.parse()?;
        let _: Token![==] = input.parse()?;
        let _: Euclidean = input.parse()?;
        Ok(Basis { char })
    }
}

pub struct Char {
    span: Span,
    char: char,
}

impl Parse for Char {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident = input.parse::<Ident>()?;
        let string = ident.to_string();
        let mut chars = string.chars();
        match (chars.next(), chars.next()) {
            (Some(char), None) => Ok(Char {
                span: ident.span(),
                char,
            }),
            _ => Err(Error::new(
                ident.span(),
                format!("basis ident must be a single character: {string}"),
            )),
        }
    }
}

struct Two;

impl Parse for Two {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit_int = input.parse::<LitInt>()?;
        if lit_int.base10_parse::<i32>()? == 2 {
            Ok(Two)
        } else {
            Err(Error::new(lit_int.span(), "expected 2"))
        }
    }
}

/// The square of a basis vector. Only positive signatures are supported.
struct Euclidean;

impl Parse for Euclidean {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let negative = input.parse::<Option<Token![-]>>()?.is_some();
        let lit_int = input.parse::<LitInt>()?;
        match (negative, lit_int.base10_parse::<i32>()?) {
            (false, 1) => Ok(Euclidean),
            (false, 0) | (true, 1) => Err(Error::new(
                lit_int.span(),
                "only Euclidean bases are supported: expected 1",
            )),
            _ => Err(Error::new(lit_int.span(), "expected 1")),
        }
    }
}

pub struct Blades {
    blades: Punctuated<Ident, Token![,]>,
}

impl Parse for Blades {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Keyword::parse(input, "blades")?;
        let content;
        let _: Brace = braced!(content in input);
        Ok(Self {
            blades: content.parse_terminated(Ident::parse, Token![,])?,
        })
    }
}

struct Keyword;

impl Keyword {
    fn parse(input: ParseStream, keyword: &str) -> syn::Result<Span> {
        let ident = input.parse::<Ident>()?;
        if ident == keyword {
            Ok(ident.span())
        } else {
            Err(Error::new(
                ident.span(),
                format!("expected '{keyword}', found {ident}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bases() {
        let g2: crate::Algebra = syn::parse_str("bases { x ^ 2 == 1, y ^ 2 == 1 }").unwrap();
        assert_eq!(g2.bases, vec![crate::Basis::new('x'), crate::Basis::new('y')]);
        assert_eq!(4, g2.len());
    }

    #[test]
    fn parse_trailing_commas() {
        let g2: crate::Algebra = syn::parse_str(
            "bases {
                x ^ 2 == 1,
                y ^ 2 == 1,
            },
            blades {
                yx,
            },",
        )
        .unwrap();
        assert!(g2.is_flipped(crate::blade::Blade(0b11)));
        assert_eq!("yx", g2.fields[3].to_string());
    }

    #[test]
    fn parse_basis() {
        let basis: Basis = syn::parse_str("x ^ 2 == 1").unwrap();
        assert_eq!(basis.char.char, 'x');

        assert!(syn::parse_str::<Basis>("xy ^ 2 == 1").is_err());
        assert!(syn::parse_str::<Basis>("x * 2 == 1").is_err());
        assert!(syn::parse_str::<Basis>("x ^ 3 == 1").is_err());
        assert!(syn::parse_str::<Basis>("x ^ 2 != 1").is_err());
        assert!(syn::parse_str::<Basis>("x ^ 2 == 2").is_err());
    }

    #[test]
    fn reject_non_euclidean_squares() {
        assert!(syn::parse_str::<Basis>("x ^ 2 == -1").is_err());
        assert!(syn::parse_str::<Basis>("x ^ 2 == 0").is_err());
    }

    #[test]
    fn reject_bad_declarations() {
        assert!(syn::parse_str::<crate::Algebra>("bases { x ^ 2 == 1, x ^ 2 == 1 }").is_err());
        assert!(syn::parse_str::<crate::Algebra>("bases { }").is_err());
        assert!(syn::parse_str::<crate::Algebra>(
            "bases { a ^ 2 == 1, b ^ 2 == 1, c ^ 2 == 1, d ^ 2 == 1, e ^ 2 == 1 }"
        )
        .is_err());
        assert!(syn::parse_str::<crate::Algebra>(
            "bases { x ^ 2 == 1, y ^ 2 == 1 }, blades { xz }"
        )
        .is_err());
        assert!(syn::parse_str::<crate::Algebra>(
            "bases { x ^ 2 == 1, y ^ 2 == 1 }, blades { xx }"
        )
        .is_err());
        assert!(syn::parse_str::<crate::Algebra>(
            "bases { x ^ 2 == 1, y ^ 2 == 1 }, blades { xy, yx }"
        )
        .is_err());
    }
}
