#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
    pub(crate) readonly: bool,
    pub(crate) treat_null_as_default: bool,
}

mod kw {
    syn::custom_keyword!(readonly);
    syn::custom_keyword!(treat_null_as_default);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        // Allowed syntax:
        //
        // #[column("name")]
        // #[column("name", readonly)]
        // #[column("name", treat_null_as_default)]
        //
        // Combining both flags parses; the mapper rejects it when the model
        // is first used.
        let name: syn::LitStr = input.parse()?;
        let mut readonly = false;
        let mut treat_null_as_default = false;

        while !input.is_empty() {
            let _comma_token: syn::Token![,] = input.parse()?;
            if input.is_empty() {
                break;
            }

            let lookahead = input.lookahead1();

            if lookahead.peek(kw::readonly) {
                let kw: kw::readonly = input.parse()?;
                if readonly {
                    return Err(syn::Error::new(kw.span, "duplicate `readonly` flag"));
                }
                readonly = true;
            } else if lookahead.peek(kw::treat_null_as_default) {
                let kw: kw::treat_null_as_default = input.parse()?;
                if treat_null_as_default {
                    return Err(syn::Error::new(
                        kw.span,
                        "duplicate `treat_null_as_default` flag",
                    ));
                }
                treat_null_as_default = true;
            } else {
                return Err(lookahead.error());
            }
        }

        Ok(Column {
            name,
            readonly,
            treat_null_as_default,
        })
    }
}
