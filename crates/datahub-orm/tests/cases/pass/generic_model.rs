// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::{Column, ColumnType, Model};

#[derive(Model)]
#[model(tableName = "measurements")]
pub struct Measurement<T: ColumnType> {
    pub id: i32,
    pub value: T,
}

fn main() {
    let value: Column<i64> = Measurement::<i64>::VALUE;
    assert_eq!(value.name(), "value");
    assert_eq!(Measurement::<i64>::COLUMNS[1].sql_type.name, "BIGINT");
    assert_eq!(Measurement::<bool>::COLUMNS[1].sql_type.name, "BOOLEAN");
}
