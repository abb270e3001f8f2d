//! Procedural macros used by `vecalg`.
//!
//! Do not use this crate directly, use `vecalg` instead. The generated code refers to items via
//! `crate::` paths and only resolves inside `vecalg` itself.

use proc_macro::{Span, TokenStream};
use proc_macro2::{Ident, Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse::Error, LitInt};

/// Component names, in storage order.
const COMPONENTS: [char; 4] = ['x', 'y', 'z', 'w'];

/// Scalar types taking part in numeric promotion.
const SCALARS: &[ScalarType] = &[
    ScalarType::int("i8", 8, true),
    ScalarType::int("i16", 16, true),
    ScalarType::int("i32", 32, true),
    ScalarType::int("i64", 64, true),
    ScalarType::int("u8", 8, false),
    ScalarType::int("u16", 16, false),
    ScalarType::int("u32", 32, false),
    ScalarType::int("u64", 64, false),
    ScalarType::float("f32", 32),
    ScalarType::float("f64", 64),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Signed,
    Unsigned,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScalarType {
    name: &'static str,
    bits: u32,
    kind: Kind,
}

impl ScalarType {
    const fn int(name: &'static str, bits: u32, signed: bool) -> Self {
        Self {
            name,
            bits,
            kind: if signed { Kind::Signed } else { Kind::Unsigned },
        }
    }

    const fn float(name: &'static str, bits: u32) -> Self {
        Self {
            name,
            bits,
            kind: Kind::Float,
        }
    }

    fn lookup(kind: Kind, bits: u32) -> Self {
        *SCALARS
            .iter()
            .find(|ty| ty.kind == kind && ty.bits == bits)
            .unwrap_or_else(|| panic!("no {:?} scalar with {} bits", kind, bits))
    }

    fn ident(&self) -> Ident {
        format_ident!("{}", self.name)
    }
}

/// Computes the common type of `a` and `b` under the usual widening rules.
fn promoted(a: ScalarType, b: ScalarType) -> ScalarType {
    use Kind::*;

    match (a.kind, b.kind) {
        _ if a == b => a,
        (Float, Float) => {
            if a.bits >= b.bits {
                a
            } else {
                b
            }
        }
        (Float, _) => a,
        (_, Float) => b,
        (Signed, Signed) | (Unsigned, Unsigned) => {
            if a.bits >= b.bits {
                a
            } else {
                b
            }
        }
        (Signed, Unsigned) | (Unsigned, Signed) => {
            let (signed, unsigned) = if a.kind == Signed { (a, b) } else { (b, a) };
            if signed.bits < 32 && unsigned.bits < 32 {
                ScalarType::lookup(Signed, 32)
            } else if signed.bits > unsigned.bits {
                signed
            } else {
                ScalarType::lookup(Unsigned, unsigned.bits.max(signed.bits))
            }
        }
    }
}

/// Enumerates every index list of length 2 to 4 over the 4 named components.
fn patterns() -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for len in 2..=4 {
        let mut indices = vec![0; len];
        'odometer: loop {
            out.push(indices.clone());
            for digit in (0..len).rev() {
                indices[digit] += 1;
                if indices[digit] < COMPONENTS.len() {
                    continue 'odometer;
                }
                indices[digit] = 0;
            }
            break;
        }
    }
    out
}

fn is_unique(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .all(|(i, idx)| !indices[i + 1..].contains(idx))
}

fn pattern_name(indices: &[usize]) -> String {
    indices.iter().map(|&i| COMPONENTS[i]).collect()
}

fn no_args(args: TokenStream, name: &str) -> syn::Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(Error::new(
            Span::call_site().into(),
            format!("`{}!` does not accept arguments", name),
        ))
    }
}

fn expand(result: syn::Result<TokenStream2>) -> TokenStream {
    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Emits `impl Promote<Rhs> for Lhs` for every pair of primitive scalar types.
#[proc_macro]
pub fn promotion_table(args: TokenStream) -> TokenStream {
    expand(expand_promotion_table(args))
}

fn expand_promotion_table(args: TokenStream) -> syn::Result<TokenStream2> {
    no_args(args, "promotion_table")?;

    let mut impls = TokenStream2::new();
    for &lhs in SCALARS {
        for &rhs in SCALARS {
            let out = promoted(lhs, rhs).ident();
            let (lhs, rhs) = (lhs.ident(), rhs.ident());
            impls.extend(quote! {
                #[allow(clippy::unnecessary_cast)]
                impl crate::Promote<#rhs> for #lhs {
                    type Output = #out;

                    #[inline]
                    fn widen(self) -> #out {
                        self as #out
                    }

                    #[inline]
                    fn widen_rhs(rhs: #rhs) -> #out {
                        rhs as #out
                    }

                    #[inline]
                    fn narrow(value: #out) -> #lhs {
                        value as #lhs
                    }
                }
            });
        }
    }
    Ok(impls)
}

/// Emits `impl DimAdd<Const<B>> for Const<A>` for all `A, B >= 1` with `A + B <= max`.
#[proc_macro]
pub fn dimension_table(args: TokenStream) -> TokenStream {
    expand(expand_dimension_table(args))
}

fn expand_dimension_table(args: TokenStream) -> syn::Result<TokenStream2> {
    let max = syn::parse::<LitInt>(args)?.base10_parse::<usize>()?;

    let mut impls = TokenStream2::new();
    for a in 1..max {
        for b in 1..=max - a {
            let sum = Literal::usize_unsuffixed(a + b);
            let (a, b) = (Literal::usize_unsuffixed(a), Literal::usize_unsuffixed(b));
            impls.extend(quote! {
                impl crate::DimAdd<crate::Const<#b>> for crate::Const<#a> {
                    type Output = crate::Const<#sum>;
                }
            });
        }
    }
    Ok(impls)
}

/// Emits one zero-sized pattern type per swizzle (`XX` through `WWWW`).
///
/// Patterns without repeated components additionally implement `Permutation`.
#[proc_macro]
pub fn swizzle_patterns(args: TokenStream) -> TokenStream {
    expand(expand_swizzle_patterns(args))
}

fn expand_swizzle_patterns(args: TokenStream) -> syn::Result<TokenStream2> {
    no_args(args, "swizzle_patterns")?;

    let mut items = TokenStream2::new();
    for indices in patterns() {
        let name = pattern_name(&indices);
        let ty = format_ident!("{}", name.to_uppercase());
        let len = Literal::usize_unsuffixed(indices.len());
        let doc = format!("The `{}` swizzle pattern.", name);
        let list = indices.iter().map(|&i| Literal::usize_unsuffixed(i));

        items.extend(quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct #ty;

            impl crate::Pattern<#len> for #ty {
                const INDICES: [usize; #len] = [#(#list),*];
            }
        });
        if is_unique(&indices) {
            items.extend(quote! {
                impl crate::Permutation<#len> for #ty {}
            });
        }
    }
    Ok(items)
}

/// Emits the named swizzle accessors (`xy()`, `zyx()`, `xy_mut()`, ...) for a vector with the
/// given number of components.
///
/// Must be invoked inside an `impl<T> Vector<T, N>` block.
#[proc_macro]
pub fn swizzle_accessors(args: TokenStream) -> TokenStream {
    expand(expand_swizzle_accessors(args))
}

fn expand_swizzle_accessors(args: TokenStream) -> syn::Result<TokenStream2> {
    let lit = syn::parse::<LitInt>(args)?;
    let arity = lit.base10_parse::<usize>()?;
    if !(1..=COMPONENTS.len()).contains(&arity) {
        return Err(Error::new(
            lit.span(),
            "swizzle accessors exist for vectors with 1 to 4 components",
        ));
    }

    let source = Literal::usize_unsuffixed(arity);
    let mut methods = TokenStream2::new();
    for indices in patterns() {
        if indices.iter().any(|&i| i >= arity) {
            continue;
        }

        let name = pattern_name(&indices);
        let ty = format_ident!("{}", name.to_uppercase());
        let len = Literal::usize_unsuffixed(indices.len());
        let getter = format_ident!("{}", name);
        let doc = format!("Returns a read-only `{}` view of this vector.", name);

        methods.extend(quote! {
            #[doc = #doc]
            #[inline]
            pub fn #getter(&self) -> crate::Swizzle<'_, T, #source, #len, crate::pattern::#ty> {
                self.swizzle::<crate::pattern::#ty, #len>()
            }
        });

        if is_unique(&indices) {
            let setter = format_ident!("{}_mut", name);
            let doc = format!("Returns a writable `{}` view of this vector.", name);
            methods.extend(quote! {
                #[doc = #doc]
                #[inline]
                pub fn #setter(&mut self) -> crate::SwizzleMut<'_, T, #source, #len, crate::pattern::#ty> {
                    self.swizzle_mut::<crate::pattern::#ty, #len>()
                }
            });
        }
    }
    Ok(methods)
}
