use sqlx::{Pool, Sqlite};

use crate::userdb::{errors::UserError, types::UserRecord};

use super::DB_TABLE_USERS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {DB_TABLE_USERS} (
            username TEXT PRIMARY KEY NOT NULL,
            password TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn get_user_sqlite(
    pool: &Pool<Sqlite>,
    username: &str,
) -> Result<Option<UserRecord>, UserError> {
    sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT username, password FROM {DB_TABLE_USERS} WHERE username = ?
        "#
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(UserError::from)
}

pub(super) async fn upsert_user_sqlite(
    pool: &Pool<Sqlite>,
    user: &UserRecord,
) -> Result<(), UserError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {DB_TABLE_USERS} (username, password) VALUES (?, ?)
        ON CONFLICT(username) DO UPDATE SET password = excluded.password
        "#
    ))
    .bind(&user.username)
    .bind(&user.password)
    .execute(pool)
    .await?;

    Ok(())
}
