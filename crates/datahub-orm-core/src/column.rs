// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed table columns.
//!
//! A [`Column<T>`] is a name plus a value type. It never holds a value; the
//! type parameter only ties the column to the Rust type stored in it, and
//! through [`ColumnType`] to the PostgreSQL type of the column.
//!
//! # Type Mapping Table
//!
//! | Rust Type | PostgreSQL Type | Notes |
//! |-----------|-----------------|-------|
//! | `bool` | `BOOLEAN` | |
//! | `i16` | `SMALLINT` | |
//! | `i32` | `INTEGER` | |
//! | `i64` | `BIGINT` | |
//! | `f32` | `REAL` | |
//! | `f64` | `DOUBLE PRECISION` | |
//! | `String` | `TEXT` | |
//! | `Vec<u8>` | `BYTEA` | |
//! | `Uuid` | `UUID` | feature `uuid` |
//! | `DateTime<Utc>` | `TIMESTAMPTZ` | feature `chrono` |
//! | `NaiveDate` | `DATE` | feature `chrono` |
//! | `NaiveDateTime` | `TIMESTAMP` | feature `chrono` |
//! | `Option<T>` | `T` | Nullable |

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData
};

use crate::model::ColumnDef;

/// PostgreSQL type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlType {
    /// Type name as written in DDL (e.g. `INTEGER`, `TEXT`).
    pub name: &'static str,

    /// Whether the column accepts NULL.
    pub nullable: bool
}

impl SqlType {
    /// Create a NOT NULL type.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            nullable: false
        }
    }

    /// Same type, accepting NULL.
    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            name:     self.name,
            nullable: true
        }
    }

    /// Render the type for a column definition.
    ///
    /// ```rust
    /// use datahub_orm_core::SqlType;
    ///
    /// assert_eq!(SqlType::new("INTEGER").to_sql(), "INTEGER NOT NULL");
    /// assert_eq!(SqlType::new("INTEGER").nullable().to_sql(), "INTEGER");
    /// ```
    pub fn to_sql(&self) -> String {
        if self.nullable {
            self.name.to_string()
        } else {
            format!("{} NOT NULL", self.name)
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Rust types that can be stored in a column.
///
/// Implement this for custom types to use them in `Column<T>` and
/// `#[derive(Model)]` structs.
///
/// ```rust
/// use datahub_orm_core::{ColumnType, SqlType};
///
/// struct Email(String);
///
/// impl ColumnType for Email {
///     const SQL_TYPE: SqlType = SqlType::new("VARCHAR(320)");
/// }
/// ```
pub trait ColumnType {
    /// PostgreSQL type for values of this Rust type.
    const SQL_TYPE: SqlType;
}

macro_rules! column_types {
    ($($ty:ty => $sql:literal),* $(,)?) => {
        $(
            impl ColumnType for $ty {
                const SQL_TYPE: SqlType = SqlType::new($sql);
            }
        )*
    };
}

column_types! {
    bool => "BOOLEAN",
    i16 => "SMALLINT",
    i32 => "INTEGER",
    i64 => "BIGINT",
    f32 => "REAL",
    f64 => "DOUBLE PRECISION",
    String => "TEXT",
    Vec<u8> => "BYTEA",
}

#[cfg(feature = "uuid")]
column_types! {
    uuid::Uuid => "UUID",
}

#[cfg(feature = "chrono")]
column_types! {
    chrono::DateTime<chrono::Utc> => "TIMESTAMPTZ",
    chrono::NaiveDate => "DATE",
    chrono::NaiveDateTime => "TIMESTAMP",
}

impl<T: ColumnType> ColumnType for Option<T> {
    const SQL_TYPE: SqlType = T::SQL_TYPE.nullable();
}

/// Named, typed reference to one column of a table.
///
/// # Example
///
/// ```rust
/// use datahub_orm_core::Column;
///
/// const SCORE: Column<i64> = Column::new("score");
///
/// assert_eq!(SCORE.name(), "score");
/// assert_eq!(SCORE.definition().to_sql(), "\"score\" BIGINT NOT NULL");
/// ```
pub struct Column<T> {
    name: &'static str,
    _ty:  PhantomData<fn() -> T>
}

impl<T> Column<T> {
    /// Declare a column.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _ty: PhantomData
        }
    }

    /// Column name as stored in the database.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Column name as a quoted PostgreSQL identifier.
    ///
    /// Mixed-case names such as `integerColumn` only survive unquoted in
    /// lowercase, so generated SQL always quotes.
    pub fn quoted(&self) -> String {
        quote_ident(self.name)
    }
}

impl<T: ColumnType> Column<T> {
    /// PostgreSQL type of this column.
    pub const fn sql_type(&self) -> SqlType {
        T::SQL_TYPE
    }

    /// Column definition for table DDL.
    pub const fn definition(&self) -> ColumnDef {
        ColumnDef::new(self.name, T::SQL_TYPE)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Column<T> {}

impl<T> Hash for Column<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Quote a PostgreSQL identifier, doubling embedded quotes.
pub(crate) fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
