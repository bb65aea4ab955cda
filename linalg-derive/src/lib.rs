extern crate proc_macro;
extern crate syn;
#[macro_use]
extern crate quote;
use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::{DeriveInput, GenericParam, Generics, Ident, Lifetime, LifetimeParam};

/// Scalar types that get `scalar <op> container` impls. Orphan rules force
/// these to be spelled out one primitive at a time.
const PRIMITIVES: &[&str] = &[
    "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
    "usize",
];

struct ArithOp {
    trait_name: Ident,
    method: Ident,
    variant: Ident,
    checked: Ident,
}

impl ArithOp {
    fn new(name: &str) -> Self {
        let (trait_name, variant) = match name {
            "add" => ("Add", "Add"),
            "sub" => ("Sub", "Sub"),
            "mul" => ("Mul", "Mul"),
            "div" => ("Div", "Div"),
            other => panic!("unknown arithmetic operation `{}`", other),
        };

        Self {
            trait_name: Ident::new(trait_name, Span::call_site()),
            method: Ident::new(name, Span::call_site()),
            variant: Ident::new(variant, Span::call_site()),
            checked: Ident::new(&format!("try_{}", name), Span::call_site()),
        }
    }

    fn all() -> Vec<Self> {
        ["add", "sub", "mul", "div"].into_iter().map(Self::new).collect()
    }
}

/// Derives the arithmetic operator surface for a container that implements
/// `crate::transform::Transform`.
///
/// Every generated operator is a single call to one of the three transform
/// primitives, optionally through a `crate::ops::Bound` scalar adapter. The
/// `#[elementwise = "add, sub"]` attribute picks which container-container
/// operators are elementwise; scalar broadcasts are always generated.
#[proc_macro_derive(Arithmetic, attributes(elementwise))]
pub fn arithmetic_macro_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    impl_arithmetic_macro(&ast)
}

fn impl_arithmetic_macro(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let elem = elem_param(ast);
    let elementwise = parse_elementwise(ast);

    let mut generics = ast.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(#elem: crate::element::Element));

    let mut generics_with_lifetime = generics.clone();
    push_lifetime_param(&mut generics_with_lifetime);

    let (_, type_generics, _) = ast.generics.split_for_impl();
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (impl_generics_with_lifetime, _, _) = generics_with_lifetime.split_for_impl();

    let self_ty = quote!(#name #type_generics);
    let ref_ty = quote!(&'a #name #type_generics);
    let error_ty = quote!(<#self_ty as crate::transform::Transform>::Error);

    let mut gen = proc_macro2::TokenStream::new();

    // container <op> container
    let mut checked = Vec::new();
    for op in elementwise.iter() {
        let ArithOp {
            trait_name,
            method,
            variant,
            checked: checked_name,
        } = op;

        checked.push(quote! {
            pub fn #checked_name(&self, rhs: &Self) -> std::result::Result<Self, #error_ty> {
                crate::transform::Transform::zip_map(self, rhs, |lhs, rhs| {
                    crate::ops::BinaryOp::#variant.apply(lhs, rhs)
                })
            }
        });

        let operands = [
            (false, &self_ty, &self_ty, quote!(&self), quote!(&rhs)),
            (true, &self_ty, &ref_ty, quote!(&self), quote!(rhs)),
            (true, &ref_ty, &self_ty, quote!(self), quote!(&rhs)),
            (true, &ref_ty, &ref_ty, quote!(self), quote!(rhs)),
        ];
        for (borrowed, lhs_ty, rhs_ty, lhs, rhs) in operands {
            let generics = if borrowed {
                quote!(#impl_generics_with_lifetime)
            } else {
                quote!(#impl_generics)
            };
            gen.extend(quote! {
                impl #generics std::ops::#trait_name<#rhs_ty> for #lhs_ty #where_clause {
                    type Output = #self_ty;

                    fn #method(self, rhs: #rhs_ty) -> Self::Output {
                        match <#self_ty>::#checked_name(#lhs, #rhs) {
                            Ok(out) => out,
                            Err(e) => panic!("{}", e),
                        }
                    }
                }
            });
        }
    }

    let has_sub = elementwise.iter().any(|op| op.method == "sub");
    if has_sub {
        checked.push(quote! {
            pub fn try_sub_assign(&mut self, rhs: &Self) -> std::result::Result<&mut Self, #error_ty> {
                crate::transform::Transform::zip_map_in_place(self, rhs, |lhs, rhs| {
                    crate::ops::BinaryOp::Sub.apply(lhs, rhs)
                })
            }
        });

        gen.extend(quote! {
            impl #impl_generics std::ops::SubAssign<#self_ty> for #self_ty #where_clause {
                fn sub_assign(&mut self, rhs: #self_ty) {
                    *self -= &rhs;
                }
            }

            impl #impl_generics_with_lifetime std::ops::SubAssign<#ref_ty> for #self_ty #where_clause {
                fn sub_assign(&mut self, rhs: #ref_ty) {
                    if let Err(e) = self.try_sub_assign(rhs) {
                        panic!("{}", e);
                    }
                }
            }
        });
    }

    gen.extend(quote! {
        impl #impl_generics #self_ty #where_clause {
            #(#checked)*
        }
    });

    // container <op> scalar
    for ArithOp {
        trait_name,
        method,
        variant,
        ..
    } in ArithOp::all()
    {
        gen.extend(quote! {
            impl #impl_generics std::ops::#trait_name<#elem> for #self_ty #where_clause {
                type Output = #self_ty;

                fn #method(self, rhs: #elem) -> Self::Output {
                    let bound = crate::ops::Bound::right(crate::ops::BinaryOp::#variant, rhs);
                    crate::transform::Transform::map(&self, |x| bound.apply(x))
                }
            }

            impl #impl_generics_with_lifetime std::ops::#trait_name<#elem> for #ref_ty #where_clause {
                type Output = #self_ty;

                fn #method(self, rhs: #elem) -> Self::Output {
                    let bound = crate::ops::Bound::right(crate::ops::BinaryOp::#variant, rhs);
                    crate::transform::Transform::map(self, |x| bound.apply(x))
                }
            }
        });
    }

    // scalar <op> container
    let mut scalar_generics = ast.generics.clone();
    remove_param(&mut scalar_generics, elem);
    let mut scalar_generics_with_lifetime = scalar_generics.clone();
    push_lifetime_param(&mut scalar_generics_with_lifetime);
    let (scalar_impl_generics, _, _) = scalar_generics.split_for_impl();
    let (scalar_impl_generics_with_lifetime, _, _) = scalar_generics_with_lifetime.split_for_impl();

    for prim in PRIMITIVES {
        let prim = Ident::new(prim, Span::call_site());
        let concrete = concrete_type(ast, elem, &prim);

        for ArithOp {
            trait_name,
            method,
            variant,
            ..
        } in ArithOp::all()
        {
            gen.extend(quote! {
                impl #scalar_impl_generics std::ops::#trait_name<#concrete> for #prim {
                    type Output = #concrete;

                    fn #method(self, rhs: #concrete) -> Self::Output {
                        let bound = crate::ops::Bound::left(self, crate::ops::BinaryOp::#variant);
                        crate::transform::Transform::map(&rhs, |x| bound.apply(x))
                    }
                }

                impl #scalar_impl_generics_with_lifetime std::ops::#trait_name<&'a #concrete> for #prim {
                    type Output = #concrete;

                    fn #method(self, rhs: &'a #concrete) -> Self::Output {
                        let bound = crate::ops::Bound::left(self, crate::ops::BinaryOp::#variant);
                        crate::transform::Transform::map(rhs, |x| bound.apply(x))
                    }
                }
            });
        }
    }

    // -container
    let mut neg_generics = generics.clone();
    neg_generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(#elem: std::ops::Neg<Output = #elem>));
    let mut neg_generics_with_lifetime = neg_generics.clone();
    push_lifetime_param(&mut neg_generics_with_lifetime);
    let (neg_impl_generics, _, neg_where_clause) = neg_generics.split_for_impl();
    let (neg_impl_generics_with_lifetime, _, _) = neg_generics_with_lifetime.split_for_impl();

    gen.extend(quote! {
        impl #neg_impl_generics std::ops::Neg for #self_ty #neg_where_clause {
            type Output = #self_ty;

            fn neg(self) -> Self::Output {
                crate::transform::Transform::map(&self, |x| -x)
            }
        }

        impl #neg_impl_generics_with_lifetime std::ops::Neg for #ref_ty #neg_where_clause {
            type Output = #self_ty;

            fn neg(self) -> Self::Output {
                crate::transform::Transform::map(self, |x| -x)
            }
        }
    });

    gen.into()
}

// The element type is the first type parameter, e.g. `T` in `Matrix<T, R, C>`.
fn elem_param(ast: &DeriveInput) -> &Ident {
    ast.generics
        .type_params()
        .next()
        .map(|param| &param.ident)
        .expect("Arithmetic can only be derived for types generic over their element type")
}

fn parse_elementwise(ast: &DeriveInput) -> Vec<ArithOp> {
    let attr = match ast
        .attrs
        .iter()
        .find(|&attr| attr.path().is_ident("elementwise"))
    {
        Some(attr) => attr,
        None => return Vec::new(),
    };

    if let syn::Meta::NameValue(ref val) = attr.meta {
        if let syn::Expr::Lit(ref lit) = val.value {
            if let syn::Lit::Str(ref s) = lit.lit {
                return s
                    .value()
                    .split(',')
                    .map(str::trim)
                    .filter(|op| !op.is_empty())
                    .map(ArithOp::new)
                    .collect();
            }
        }
    };

    panic!("elementwise attribute is the wrong format (should be #[elementwise = \"add, sub\"])");
}

// This adds the 'a lifetime to a list of params
fn push_lifetime_param(generics: &mut Generics) {
    let param = LifetimeParam::new(Lifetime::new("'a", Span::call_site()));
    generics.params.insert(0, param.into());
}

fn remove_param(generics: &mut Generics, elem: &Ident) {
    generics.params = generics
        .params
        .iter()
        .filter(|param| !matches!(param, GenericParam::Type(t) if t.ident == *elem))
        .cloned()
        .collect();
    generics.where_clause = None;
}

// Spells out `Name<prim, ...>` with the element parameter replaced and every
// other parameter passed through.
fn concrete_type(ast: &DeriveInput, elem: &Ident, prim: &Ident) -> proc_macro2::TokenStream {
    let name = &ast.ident;
    let args = ast.generics.params.iter().map(|param| match param {
        GenericParam::Type(t) if t.ident == *elem => quote!(#prim),
        GenericParam::Type(t) => {
            let ident = &t.ident;
            quote!(#ident)
        }
        GenericParam::Const(c) => {
            let ident = &c.ident;
            quote!(#ident)
        }
        GenericParam::Lifetime(l) => {
            let lifetime = &l.lifetime;
            quote!(#lifetime)
        }
    });

    quote!(#name<#(#args),*>)
}
