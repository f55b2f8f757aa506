use crate::schema::{Field, FieldKind, Model};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.model.ident;
        let schema = self.expand_schema();

        wrap_in_const(quote! {
            impl #rowmap::Model for #ident {
                fn schema() -> #rowmap::ModelSchema<Self> {
                    #schema
                }
            }
        })
    }

    fn expand_schema(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = self.model.ident.to_string();
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));
        let constructor = match &self.model.attr.constructor {
            Some(path) => quote!(#path),
            None => quote!(<Self as #rowmap::Default>::default),
        };

        quote! {
            #rowmap::ModelSchema::builder(#name)
                #( #fields )*
                .constructor(#constructor)
                .build()
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &field.ident;
        let name = ident.to_string();
        let ty = &field.ty;
        let get = quote!(|model: &Self| &model.#ident);
        let get_mut = quote!(|model: &mut Self| &mut model.#ident);

        match &field.kind {
            FieldKind::Column(column) => {
                let column_name = &column.name;
                let readonly = column.readonly.then(|| quote!(.readonly()));
                let treat_null_as_default = column
                    .treat_null_as_default
                    .then(|| quote!(.treat_null_as_default()));

                quote! {
                    .field(#rowmap::Field::column::<#ty>(
                        #name,
                        #rowmap::ColumnAttr::new(#column_name) #readonly #treat_null_as_default,
                        #get,
                        #get_mut,
                    ))
                }
            }
            FieldKind::Embedded {
                ty: embedded,
                optional: false,
            } => quote! {
                .field(#rowmap::Field::embedded::<#embedded>(#name, #get, #get_mut))
            },
            FieldKind::Embedded {
                ty: embedded,
                optional: true,
            } => quote! {
                .field(#rowmap::Field::embedded_optional::<#embedded>(#name, #get, #get_mut))
            },
            FieldKind::Base => quote! {
                .base::<#ty>(#name, #get, #get_mut)
            },
            FieldKind::Unmapped => quote! {
                .field(#rowmap::Field::unmapped::<#ty>(#name))
            },
        }
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
