// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::Model;

#[derive(Model)]
#[model(tableName = "queries", rename_all = "camelCase")]
pub struct SavedQuery {
    pub query_id: i64,
    pub sql_text: String,
    #[column(name = "owner")]
    pub owner_name: String,
}

fn main() {
    assert_eq!(SavedQuery::QUERY_ID.name(), "queryId");
    assert_eq!(SavedQuery::SQL_TEXT.name(), "sqlText");
    assert_eq!(SavedQuery::OWNER_NAME.name(), "owner");
    assert_eq!(
        SavedQuery::create_table_sql(),
        "CREATE TABLE IF NOT EXISTS \"queries\" (\"queryId\" BIGINT NOT NULL, \"sqlText\" TEXT NOT NULL, \"owner\" TEXT NOT NULL)"
    );
}
