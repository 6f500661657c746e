// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table description for model structs.
//!
//! [`Model`] is implemented by `#[derive(Model)]`; it can also be written by
//! hand:
//!
//! ```rust
//! use datahub_orm_core::{Column, ColumnDef, Model};
//!
//! struct Sample;
//!
//! impl Sample {
//!     const INTEGER_COLUMN: Column<i32> = Column::new("integerColumn");
//! }
//!
//! impl Model for Sample {
//!     const TABLE_NAME: &'static str = "sample";
//!     const COLUMNS: &'static [ColumnDef] = &[Sample::INTEGER_COLUMN.definition()];
//! }
//!
//! assert_eq!(
//!     Sample::create_table_sql(),
//!     "CREATE TABLE IF NOT EXISTS \"sample\" (\"integerColumn\" INTEGER NOT NULL)"
//! );
//! ```

use crate::column::{SqlType, quote_ident};

/// Name and type of one column, as used in table DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    /// Column name.
    pub name: &'static str,

    /// Column type.
    pub sql_type: SqlType
}

impl ColumnDef {
    /// Create a column definition.
    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type
        }
    }

    /// Render as a `CREATE TABLE` column clause.
    pub fn to_sql(&self) -> String {
        format!("{} {}", quote_ident(self.name), self.sql_type.to_sql())
    }
}

/// A Rust type mapped to one DataHub table.
pub trait Model {
    /// Backing table name.
    ///
    /// Set with `#[model(tableName = "...")]` when derived.
    const TABLE_NAME: &'static str;

    /// Columns in declaration order.
    const COLUMNS: &'static [ColumnDef];

    /// Look up a column by its database name.
    fn column(name: &str) -> Option<&'static ColumnDef> {
        Self::COLUMNS.iter().find(|c| c.name == name)
    }

    /// Column names in declaration order.
    fn column_names() -> Vec<&'static str> {
        Self::COLUMNS.iter().map(|c| c.name).collect()
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this model.
    fn create_table_sql() -> String {
        let columns = Self::COLUMNS
            .iter()
            .map(ColumnDef::to_sql)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_ident(Self::TABLE_NAME),
            columns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, ColumnType};

    struct Account;

    impl Account {
        const ID: Column<i64> = Column::new("id");
        const NICKNAME: Column<Option<String>> = Column::new("nickName");
    }

    impl Model for Account {
        const TABLE_NAME: &'static str = "accounts";
        const COLUMNS: &'static [ColumnDef] =
            &[Account::ID.definition(), Account::NICKNAME.definition()];
    }

    #[test]
    fn column_def_sql() {
        let def = ColumnDef::new("integerColumn", <i32 as ColumnType>::SQL_TYPE);
        assert_eq!(def.to_sql(), "\"integerColumn\" INTEGER NOT NULL");
    }

    #[test]
    fn column_lookup() {
        let col = Account::column("nickName").unwrap();
        assert_eq!(col.sql_type, SqlType::new("TEXT").nullable());
        assert!(Account::column("nickname").is_none());
    }

    #[test]
    fn column_names_keep_order() {
        assert_eq!(Account::column_names(), vec!["id", "nickName"]);
    }

    #[test]
    fn create_table() {
        assert_eq!(
            Account::create_table_sql(),
            "CREATE TABLE IF NOT EXISTS \"accounts\" (\"id\" BIGINT NOT NULL, \"nickName\" TEXT)"
        );
    }
}
