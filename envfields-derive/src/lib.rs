//! Derive macro implementation for envfields

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type, Visibility};

mod attrs;

use attrs::{pascal_case, FieldAttrs};

/// `Option` and `Box` wrappers around a field's type, outermost first.
///
/// Both are traversed transparently: an empty `Option` is allocated to its
/// default during the walk, a `Box` is dereferenced.
enum Wrapper {
    Opt,
    Boxed,
}

fn peel_wrappers(mut ty: &Type) -> Vec<Wrapper> {
    let mut layers = Vec::new();

    while let Type::Path(type_path) = ty {
        let Some(seg) = type_path.path.segments.last() else {
            break;
        };
        let wrapper = match seg.ident.to_string().as_str() {
            "Option" => Wrapper::Opt,
            "Box" => Wrapper::Boxed,
            _ => break,
        };
        let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
            break;
        };
        let Some(syn::GenericArgument::Type(inner)) = args.args.first() else {
            break;
        };
        layers.push(wrapper);
        ty = inner;
    }

    layers
}

/// Expression evaluating to `&mut` the innermost value of the field,
/// allocating empty `Option` layers along the way.
fn target_expr(ident: &syn::Ident, ty: &Type) -> TokenStream2 {
    let mut expr = quote! { &mut self.#ident };
    for wrapper in peel_wrappers(ty) {
        expr = match wrapper {
            Wrapper::Opt => {
                quote! { (#expr).get_or_insert_with(::core::default::Default::default) }
            }
            Wrapper::Boxed => quote! { &mut **(#expr) },
        };
    }
    expr
}

fn opt_str(value: &Option<String>) -> TokenStream2 {
    match value {
        Some(s) => quote! { ::core::option::Option::Some(#s) },
        None => quote! { ::core::option::Option::None },
    }
}

/// `EnvFields` derive macro
///
/// Generates two implementations for a struct with named fields:
///
/// - `envfields::EnvFields`: walks the fields in declaration order,
///   registering one descriptor per leaf and recursing into fields tagged
///   `nested`.
/// - `envfields::Unmarshal`: parses the struct from a parenthesized
///   comma-joined token such as `(localhost,80)`, so the struct can be an
///   element of a `Vec` field.
///
/// Field behavior is controlled by the `#[env("...")]` annotation; see the
/// `envfields` crate documentation for the directive reference.
#[proc_macro_derive(EnvFields, attributes(env))]
pub fn derive_envfields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvFields only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvFields only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let mut visit_stmts = Vec::new();
    let mut unmarshal_inits = Vec::new();
    let mut part_count = 0usize;

    for field in fields {
        let ident = field.ident.as_ref().expect("named field");
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };

        // token parsing fills skipped fields with their default
        if attrs.skip {
            unmarshal_inits.push(quote! {
                #ident: ::core::default::Default::default()
            });
        } else {
            let idx = part_count;
            part_count += 1;
            unmarshal_inits.push(quote! {
                #ident: ::envfields::Unmarshal::unmarshal(parts[#idx])?
            });
        }

        // Exported means plain `pub`. Anything narrower fails the walk
        // unless allow_unexported is set, in which case it is omitted.
        // The check fires even for skip-tagged fields.
        if !matches!(field.vis, Visibility::Public(_)) {
            let ident_str = ident.to_string();
            visit_stmts.push(quote! {
                if !ctx.allow_unexported() {
                    return ::core::result::Result::Err(
                        ::envfields::Error::UnexportedField { field: #ident_str },
                    );
                }
            });
            continue;
        }

        if attrs.skip {
            continue;
        }

        let structural_name = pascal_case(&ident.to_string());
        let target = target_expr(ident, &field.ty);
        let optional = attrs.optional;

        if attrs.nested {
            visit_stmts.push(quote! {
                ::envfields::EnvFields::visit_fields(
                    #target,
                    &ctx.nested(#structural_name, #optional),
                    info,
                )?;
            });
        } else {
            let custom_name = opt_str(&attrs.custom_name);
            let default_value = opt_str(&attrs.default_value);
            let note = opt_str(&attrs.note);
            visit_stmts.push(quote! {
                info.register(
                    #target,
                    ctx.path().append(#structural_name),
                    ::envfields::FieldSpec {
                        custom_name: #custom_name,
                        default_value: #default_value,
                        note: #note,
                        optional: ctx.optional() || #optional,
                    },
                );
            });
        }
    }

    let expanded = quote! {
        impl ::envfields::EnvFields for #struct_name {
            #[allow(unused_variables)]
            fn visit_fields<'a>(
                &'a mut self,
                ctx: &::envfields::Context,
                info: &mut ::envfields::ConfInfo<'a>,
            ) -> ::core::result::Result<(), ::envfields::Error> {
                #(#visit_stmts)*
                ::core::result::Result::Ok(())
            }
        }

        impl ::envfields::Unmarshal for #struct_name {
            fn unmarshal(s: &str) -> ::core::result::Result<Self, ::envfields::Error> {
                let inner = s
                    .strip_prefix('(')
                    .and_then(|t| t.strip_suffix(')'))
                    .unwrap_or(s);
                let parts: ::std::vec::Vec<&str> = inner.split(',').collect();
                if parts.len() != #part_count {
                    return ::core::result::Result::Err(
                        ::envfields::Error::StructTokenMismatch {
                            got: parts.len(),
                            want: #part_count,
                        },
                    );
                }
                ::core::result::Result::Ok(Self {
                    #(#unmarshal_inits),*
                })
            }
        }
    };

    TokenStream::from(expanded)
}
