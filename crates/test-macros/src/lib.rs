//! Test attribute that hands each test a fresh fixture context.
//!
//! Apply `#[fixture_test]` to a function taking a single
//! `&mut grc_fixtures::Fixtures` argument. It expands to a plain `#[test]`
//! that builds a new context and passes it in, so sequences always start at 1.
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn, Meta, Type};

/// Marks a function as a test that receives a fresh `Fixtures` context.
#[proc_macro_attribute]
pub fn fixture_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    parse_macro_input!(attr as syn::parse::Nothing);

    let input_fn = parse_macro_input!(item as ItemFn);

    if input_fn.sig.asyncness.is_some() {
        return syn::Error::new(
            input_fn.sig.span(),
            "fixture_test cannot be applied to async functions",
        )
        .to_compile_error()
        .into();
    }

    if !input_fn.sig.generics.params.is_empty() {
        return syn::Error::new(
            input_fn.sig.generics.span(),
            "fixture_test does not support generic parameters",
        )
        .to_compile_error()
        .into();
    }

    if input_fn.sig.inputs.len() != 1 || !takes_mut_reference(&input_fn.sig.inputs[0]) {
        return syn::Error::new(
            input_fn.sig.inputs.span(),
            "fixture_test functions must take exactly one `&mut Fixtures` argument",
        )
        .to_compile_error()
        .into();
    }

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input_fn;

    let name = &sig.ident;
    let output = &sig.output;

    let filtered_attrs = attrs.into_iter().filter(
        |attr| !matches!(attr.meta, Meta::Path(ref path) if path.is_ident("fixture_test")),
    );

    TokenStream::from(quote! {
        #(#filtered_attrs)*
        #[test]
        #vis fn #name() #output {
            #sig #block

            let mut fixtures = ::grc_fixtures::Fixtures::new();
            #name(&mut fixtures)
        }
    })
}

fn takes_mut_reference(arg: &FnArg) -> bool {
    match arg {
        FnArg::Typed(pat_type) => matches!(
            &*pat_type.ty,
            Type::Reference(reference) if reference.mutability.is_some()
        ),
        FnArg::Receiver(_) => false,
    }
}
