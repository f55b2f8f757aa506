use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Declared field type
    pub(crate) ty: syn::Type,

    /// How the field is mapped
    pub(crate) kind: FieldKind,
}

#[derive(Debug)]
pub(crate) enum FieldKind {
    /// `#[column(...)]`
    Column(Column),

    /// `#[embedded]` on an `E` field, or on an `Option<E>` field when
    /// `optional` is set. `ty` is `E` in both cases.
    Embedded { ty: syn::Type, optional: bool },

    /// `#[base]`
    Base,

    /// No mapping attribute
    Unmapped,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;
        let mut embedded = None;
        let mut base = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(attr) => column = Some(attr),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("embedded") {
                if embedded.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[embedded] attribute",
                    ));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    embedded = Some(attr);
                }
            } else if attr.path().is_ident("base") {
                if base.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[base] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    base = Some(attr);
                }
            }
        }

        let markers = [column.is_some(), embedded.is_some(), base.is_some()];
        if markers.iter().filter(|marked| **marked).count() > 1 {
            errs.push(syn::Error::new_spanned(
                field,
                "a field can carry only one of #[column], #[embedded] and #[base]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let kind = if let Some(column) = column {
            FieldKind::Column(column)
        } else if embedded.is_some() {
            match option_inner(&field.ty) {
                Some(inner) => FieldKind::Embedded {
                    ty: inner.clone(),
                    optional: true,
                },
                None => FieldKind::Embedded {
                    ty: field.ty.clone(),
                    optional: false,
                },
            }
        } else if base.is_some() {
            FieldKind::Base
        } else {
            FieldKind::Unmapped
        };

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            kind,
        })
    }

    pub(crate) fn is_base(&self) -> bool {
        matches!(self.kind, FieldKind::Base)
    }
}

/// Returns `T` if `ty` is spelled `Option<T>`.
fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
