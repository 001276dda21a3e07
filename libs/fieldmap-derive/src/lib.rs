use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, Visibility};

/// Derive macro for record introspection.
///
/// Generates three impls on the annotated struct:
///
/// - `fieldmap::Record` — the static field table plus indexed read/write access.
/// - `fieldmap::Reflect` — reports `Kind::Record` and exposes the record.
/// - `fieldmap::Typed` — lets the record appear as a field of another record,
///   where it is classified as an unsupported kind.
///
/// Every field type must implement `fieldmap::Typed`. Fields declared with any
/// `pub` visibility are exported; private fields are listed but never read or
/// written by `flatten`/`populate`.
///
/// # Example
///
/// ```ignore
/// #[derive(Record, Default)]
/// pub struct Student {
///     pub name: String,
///     pub age: isize,
///     comment: String,
/// }
/// ```
///
/// Only non-generic structs with named fields are supported.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;
    let name_str = name.to_string();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record does not support generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record only supports structs",
            ))
        }
    };

    let mut field_info_tokens = Vec::new();
    let mut read_arms = Vec::new();
    let mut write_arms = Vec::new();

    for (position, field) in fields.iter().enumerate() {
        let field_name = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;
        let field_name_str = field_name.unraw().to_string();
        let field_ty = &field.ty;
        let exported = !matches!(field.vis, Visibility::Inherited);
        let index = Index::from(position);

        field_info_tokens.push(quote! {
            fieldmap::FieldInfo {
                name: #field_name_str,
                kind: <#field_ty as fieldmap::Typed>::KIND,
                exported: #exported,
            }
        });

        read_arms.push(quote! {
            #index => fieldmap::Typed::to_value(&self.#field_name),
        });

        write_arms.push(quote! {
            #index => {
                self.#field_name = <#field_ty as fieldmap::Typed>::from_value(value)?;
                Ok(())
            }
        });
    }

    let expanded = quote! {
        impl fieldmap::Record for #name {
            fn type_name(&self) -> &'static str {
                #name_str
            }

            fn fields(&self) -> &'static [fieldmap::FieldInfo] {
                const FIELDS: &[fieldmap::FieldInfo] = &[
                    #(#field_info_tokens),*
                ];
                FIELDS
            }

            fn field(&self, index: usize) -> Option<fieldmap::Value> {
                match index {
                    #(#read_arms)*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                index: usize,
                value: fieldmap::Value,
            ) -> Result<(), fieldmap::Value> {
                match index {
                    #(#write_arms)*
                    _ => Err(value),
                }
            }
        }

        impl fieldmap::Reflect for #name {
            fn kind(&self) -> fieldmap::Kind {
                fieldmap::Kind::Record
            }

            fn as_record(&self) -> Option<&dyn fieldmap::Record> {
                Some(self)
            }

            fn as_record_mut(&mut self) -> Option<&mut dyn fieldmap::Record> {
                Some(self)
            }
        }

        impl fieldmap::Typed for #name {
            const KIND: fieldmap::Kind = fieldmap::Kind::Record;
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn rejection(input: DeriveInput) -> String {
        derive_impl(&input).unwrap_err().to_string()
    }

    #[test]
    fn expands_named_struct() {
        let tokens = derive_impl(&parse_quote! {
            struct Student {
                pub name: String,
                r#type: u8,
            }
        })
        .unwrap()
        .to_string();

        assert!(tokens.contains("impl fieldmap :: Record for Student"));
        assert!(tokens.contains("\"name\""));
        assert!(tokens.contains("\"type\""));
        assert!(tokens.contains("exported : true"));
        assert!(tokens.contains("exported : false"));
    }

    #[test]
    fn rejects_generic_struct() {
        let msg = rejection(parse_quote! {
            struct Wrapper<T> { pub inner: T }
        });
        assert_eq!(msg, "Record does not support generic structs");
    }

    #[test]
    fn rejects_tuple_struct_and_enum() {
        assert_eq!(
            rejection(parse_quote! { struct Pair(pub u8, pub u8); }),
            "Record only supports structs with named fields"
        );
        assert_eq!(
            rejection(parse_quote! { enum Mode { A, B } }),
            "Record only supports structs"
        );
    }
}
