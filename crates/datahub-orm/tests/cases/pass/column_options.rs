// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::{Model, SqlType};

#[derive(Model)]
#[model(tableName = "events")]
pub struct Event {
    pub id: i64,
    pub label: Option<String>,
    #[column(nullable)]
    pub weight: f64,
    #[column(sql_type = "JSONB")]
    pub payload: String,
    #[column(sql_type = "JSONB")]
    pub extra: Option<String>,
    #[column(skip)]
    pub cached: Vec<u8>,
}

fn main() {
    assert_eq!(Event::COLUMNS.len(), 5);
    assert_eq!(Event::column("label").unwrap().sql_type, SqlType::new("TEXT").nullable());
    assert_eq!(Event::column("weight").unwrap().sql_type, SqlType::new("DOUBLE PRECISION").nullable());
    assert_eq!(Event::column("payload").unwrap().sql_type, SqlType::new("JSONB"));
    assert_eq!(Event::column("extra").unwrap().sql_type, SqlType::new("JSONB").nullable());
    assert!(Event::column("cached").is_none());

    let event = Event {
        id: 1,
        label: None,
        weight: 0.5,
        payload: String::new(),
        extra: None,
        cached: Vec::new(),
    };
    let _ = event.cached;
}
