use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model with exactly 3 components. Each field can carry a
/// `#[range(min, max)]` attribute which is used by the generated `clamped`
/// method.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let mut ranges = Vec::with_capacity(3);
    for field in input.fields.iter_mut() {
        // Make sure the component is public.
        field.vis = syn::Visibility::Public(Default::default());

        let mut range = None;
        let mut error = None;
        field.attrs.retain(|attr| {
            if !attr.path().is_ident("range") {
                return true;
            }
            match attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated,
            ) {
                Ok(args) if args.len() == 2 => {
                    range = Some((args[0].clone(), args[1].clone()));
                }
                Ok(_) => {
                    error = Some(syn::Error::new_spanned(attr, "expected #[range(min, max)]"));
                }
                Err(err) => error = Some(err),
            }
            false
        });

        if let Some(error) = error {
            return error.to_compile_error().into();
        }
        ranges.push(range);
    }

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let clamp_exprs = field_names.iter().zip(ranges.iter()).map(|(name, range)| {
        match range {
            Some((min, max)) => quote! { #name: crate::math::clamp(self.#name, #min, #max) },
            None => quote! { #name: self.#name },
        }
    });

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Return a copy with every component clamped into its valid range.
            pub fn clamped(&self) -> Self {
                Self {
                    #(#clamp_exprs,)*
                }
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
