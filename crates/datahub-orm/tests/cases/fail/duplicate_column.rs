// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::Model;

#[derive(Model)]
pub struct Sample {
    pub value: i32,
    #[column(name = "value")]
    pub other: i32,
}

fn main() {}
