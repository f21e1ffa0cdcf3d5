mod hash_function;

extern crate proc_macro;

use darling::{
    export::{syn::Ident, NestedMeta},
    Error, FromMeta,
};
use fair_hash_core::{FairHashTable, DEFAULT_SEED};
use proc_macro::TokenStream;
use quote::quote;

use crate::hash_function::HashFunction;

#[derive(FromMeta)]
struct FairHashParams {
    fn_name: Ident,
    k: u32,
    seed: Option<u64>,
}

/// Generate a fair hash function as a `const fn` at compile time.
///
/// ```
/// use fair_hash_macros::make_fair_hash;
///
/// make_fair_hash!(fn_name = "fair_hash", k = 4, seed = 42);
/// assert!(fair_hash(3) < 16);
/// assert_eq!(FAIR_HASH_KEY_WIDTH, 4);
/// ```
///
/// Keys and values are `u8` for `k <= 8`, `u16` otherwise. The table is identical to
/// `FairHashTable::generate(k, seed)`.
///
/// Key widths outside `1..=16` do not compile:
///
/// ```compile_fail
/// use fair_hash_macros::make_fair_hash;
///
/// make_fair_hash!(fn_name = "too_narrow", k = 0);
/// ```
///
/// ```compile_fail
/// use fair_hash_macros::make_fair_hash;
///
/// make_fair_hash!(fn_name = "too_wide", k = 17, seed = 1);
/// ```
#[proc_macro]
pub fn make_fair_hash(item: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(item.into()) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(Error::from(e).write_errors());
        }
    };
    let params = match FairHashParams::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(e.write_errors());
        }
    };

    let seed = params.seed.unwrap_or(DEFAULT_SEED);
    let table = match FairHashTable::generate(params.k, seed) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(Error::custom(e).with_span(&params.fn_name).write_errors());
        }
    };

    let function = HashFunction::new(&table, &params.fn_name);

    quote! {
        #function
    }
    .into()
}
