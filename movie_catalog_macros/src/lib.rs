mod record;

use proc_macro::TokenStream;

/// Derive macro for the `Record` trait.
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "movies")]
/// pub struct MovieRecord {
///     #[record(id)]
///     pub id: u64,
///     pub title: String,
/// }
/// ```
///
/// - `#[record(collection = "...")]` sets the collection name.
///   If omitted, the struct name is split into lowercase words (acronyms kept
///   whole) and pluralised: `IMDBEntry` becomes `imdb_entries`.
/// - `#[record(id)]` marks the `u64` field holding the store-assigned id.
///   If omitted, defaults to a field named `id`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
