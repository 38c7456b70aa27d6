use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let collection = match collection_attr(input)? {
        Some(collection) => collection,
        None => default_collection(&name.to_string()),
    };
    let id_field = extract_id_field(input)?;

    Ok(quote! {
        impl movie_catalog::Record for #name {
            const COLLECTION: &'static str = #collection;

            fn id(&self) -> u64 {
                self.#id_field
            }
        }
    })
}

/// Reads `#[record(collection = "...")]` off the struct. Unknown keys and a
/// repeated `collection` are compile errors.
fn collection_attr(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut collection: Option<LitStr> = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("collection") {
                return Err(meta.error("expected `collection = \"...\"`"));
            }
            let value: LitStr = meta.value()?.parse()?;
            if collection.is_some() {
                return Err(syn::Error::new_spanned(&value, "duplicate `collection`"));
            }
            collection = Some(value);
            Ok(())
        })?;
    }

    match collection {
        Some(lit) if lit.value().is_empty() => {
            Err(syn::Error::new_spanned(lit, "collection name must not be empty"))
        }
        other => Ok(other.map(|lit| lit.value())),
    }
}

fn extract_id_field(input: &DeriveInput) -> syn::Result<syn::Ident> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive: only structs are supported",
        ));
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive: struct must have named fields",
        ));
    };

    let marked = fields.named.iter().find(|field| {
        field.attrs.iter().any(|attr| {
            if !attr.path().is_ident("record") {
                return false;
            }
            let mut is_id = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    is_id = true;
                }
                Ok(())
            });
            is_id
        })
    });

    marked
        .or_else(|| {
            fields
                .named
                .iter()
                .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "id"))
        })
        .and_then(|field| field.ident.clone())
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Record derive: no field marked with #[record(id)] and no field named `id`",
            )
        })
}

/// `MovieRecord` -> `movie_records`, `IMDBEntry` -> `imdb_entries`.
fn default_collection(type_name: &str) -> String {
    let words = split_words(type_name);
    let mut name = words.join("_");
    if name.ends_with('y') && !name.ends_with("ay") && !name.ends_with("ey") {
        name.pop();
        name.push_str("ies");
    } else if !name.ends_with('s') {
        name.push('s');
    }
    name
}

// Splits on case boundaries, keeping acronym runs together.
fn split_words(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().filter(|c| *c != '_').collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let boundary = ch.is_uppercase()
            && prev.is_some_and(|p| {
                p.is_lowercase()
                    || p.is_ascii_digit()
                    || (p.is_uppercase() && next.is_some_and(char::is_lowercase))
            });
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
