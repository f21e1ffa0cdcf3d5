use proc_macro2::Literal;
use quote::{format_ident, quote, ToTokens};
use syn::Ident;

use fair_hash_core::FairHashTable;

pub struct HashFunction<'a> {
    table: &'a FairHashTable,
    fn_name: &'a Ident,
    key_type_name: Ident,
}

impl<'a> HashFunction<'a> {
    pub fn new(table: &'a FairHashTable, fn_name: &'a Ident) -> Self {
        let key_bits = if table.width().bits() <= 8 { 8u32 } else { 16 };
        Self {
            table,
            fn_name,
            key_type_name: format_ident!("u{}", key_bits),
        }
    }
}

impl ToTokens for HashFunction<'_> {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let fn_name = self.fn_name;
        let key_type_name = &self.key_type_name;
        let upper = fn_name.to_string().to_uppercase();
        let width_const = format_ident!("{}_KEY_WIDTH", upper);
        let seed_const = format_ident!("{}_SEED", upper);

        let key_width = self.table.width().bits();
        let seed = self.table.seed();
        let n_entries = self.table.len();
        let keys = self.table.entries().map(|(k, _)| Literal::u32_unsuffixed(k));
        let values = self.table.entries().map(|(_, v)| Literal::u32_unsuffixed(v));

        let doc = format!(
            "Fair hash over {} entries, key width = {}, random seed = {}.",
            n_entries, key_width, seed
        );

        let code = quote! {
            pub const #width_const: u32 = #key_width;
            pub const #seed_const: u64 = #seed;

            #[doc = #doc]
            #[allow(unreachable_patterns)]
            pub const fn #fn_name(key: #key_type_name) -> #key_type_name {
                match key {
                    #( #keys => #values, )*
                    _ => 0,
                }
            }
        };
        tokens.extend(code)
    }
}
