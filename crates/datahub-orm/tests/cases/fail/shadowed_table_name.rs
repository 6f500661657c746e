// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::Model;

#[derive(Model)]
#[model(tableName = "reports")]
pub struct Report {
    pub id: i32,
    pub table_name: String,
}

fn main() {}
