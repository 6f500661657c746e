// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment extraction.
//!
//! Field doc comments (`///`) arrive as `#[doc = "..."]` attributes. They are
//! carried over to the `Column<T>` constant generated for the field, so
//! `Sample::INTEGER_COLUMN` documents itself the same way the field does.

use syn::Attribute;

/// Combine all `#[doc = "..."]` attributes into one string.
///
/// Each line is trimmed; `None` when there is no non-blank doc text.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value().trim().to_string());
            }
            None
        })
        .collect();

    let combined = lines.join("\n");
    let trimmed = combined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use syn::ItemStruct;

    use super::*;

    fn field_attrs(item: ItemStruct) -> Vec<Attribute> {
        item.fields
            .into_iter()
            .next()
            .map(|field| field.attrs)
            .unwrap_or_default()
    }

    #[test]
    fn single_line() {
        let item: ItemStruct = syn::parse_quote! {
            struct Sample {
                /// Sample value.
                pub value: i32,
            }
        };
        assert_eq!(
            extract_doc_comments(&field_attrs(item)),
            Some("Sample value.".to_string())
        );
    }

    #[test]
    fn paragraphs_are_kept() {
        let item: ItemStruct = syn::parse_quote! {
            struct Sample {
                /// Score.
                ///
                /// Higher is better.
                pub score: i64,
            }
        };
        assert_eq!(
            extract_doc_comments(&field_attrs(item)),
            Some("Score.\n\nHigher is better.".to_string())
        );
    }

    #[test]
    fn other_attributes_ignored() {
        let item: ItemStruct = syn::parse_quote! {
            struct Sample {
                #[column(name = "integerColumn")]
                pub value: i32,
            }
        };
        assert_eq!(extract_doc_comments(&field_attrs(item)), None);
    }

    #[test]
    fn blank_doc_is_none() {
        let item: ItemStruct = syn::parse_quote! {
            struct Sample {
                ///
                pub value: i32,
            }
        };
        assert_eq!(extract_doc_comments(&field_attrs(item)), None);
    }
}
