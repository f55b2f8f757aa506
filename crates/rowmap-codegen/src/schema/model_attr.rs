#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Zero-argument function creating empty instances:
    /// `#[model(constructor = path)]`
    pub(crate) constructor: Option<syn::Path>,
}

mod kw {
    syn::custom_keyword!(constructor);
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        for attr in attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            attr.parse_args_with(|input: syn::parse::ParseStream| {
                loop {
                    let lookahead = input.lookahead1();

                    if lookahead.peek(kw::constructor) {
                        let kw: kw::constructor = input.parse()?;
                        if self.constructor.is_some() {
                            return Err(syn::Error::new(kw.span, "duplicate model constructor"));
                        }
                        let _eq_token: syn::Token![=] = input.parse()?;
                        self.constructor = Some(input.parse()?);
                    } else {
                        return Err(lookahead.error());
                    }

                    if input.is_empty() {
                        break;
                    }
                    let _comma_token: syn::Token![,] = input.parse()?;
                    if input.is_empty() {
                        break;
                    }
                }

                Ok(())
            })?;
        }

        Ok(())
    }
}
