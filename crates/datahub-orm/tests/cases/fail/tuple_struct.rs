// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::Model;

#[derive(Model)]
#[model(tableName = "pairs")]
pub struct Pair(i32, String);

fn main() {}
