// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/      → Attribute parsing (ModelDef, ColumnField)
//! ├── columns.rs  → Typed `Column<T>` constants on the struct
//! └── table.rs    → `impl Model` (table name, column definitions)
//! ```

mod columns;
pub mod parse;
mod table;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Main entry point for the Model derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => generate(&model).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(model: &ModelDef) -> TokenStream2 {
    let columns = columns::generate(model);
    let table = table::generate(model);

    quote! {
        #columns
        #table
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    #[test]
    fn generates_constants_and_impl() {
        let input: DeriveInput = syn::parse_quote! {
            #[model(tableName = "samples")]
            pub struct Sample {
                #[column(name = "integerColumn")]
                pub integer_column: i32,
            }
        };
        let model = ModelDef::from_derive_input(&input).unwrap();
        let output = generate(&model).to_string();

        assert!(output.contains("pub const INTEGER_COLUMN"));
        assert!(output.contains(":: datahub_orm :: Column < i32 >"));
        assert!(output.contains("\"integerColumn\""));
        assert!(output.contains(":: datahub_orm :: Model for Sample"));
        assert!(output.contains("\"samples\""));
    }
}
