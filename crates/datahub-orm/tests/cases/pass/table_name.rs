// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::{Column, Model, constants};

#[derive(Model)]
#[model(tableName = "samples")]
pub struct Sample {
    #[column(name = "integerColumn")]
    pub integer_column: i32,
}

fn main() {
    assert_eq!(Sample::TABLE_NAME, "samples");

    let column: Column<i32> = Sample::INTEGER_COLUMN;
    assert_eq!(column.name(), constants::INTEGER_COLUMN_NAME);
    assert_eq!(column, constants::INTEGER_COLUMN);
}
