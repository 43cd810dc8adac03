use sqlx::{Pool, Postgres};

use crate::userdb::{errors::UserError, types::UserRecord};

use super::DB_TABLE_USERS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
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

pub(super) async fn get_user_postgres(
    pool: &Pool<Postgres>,
    username: &str,
) -> Result<Option<UserRecord>, UserError> {
    sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT username, password FROM {DB_TABLE_USERS} WHERE username = $1
        "#
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(UserError::from)
}

pub(super) async fn upsert_user_postgres(
    pool: &Pool<Postgres>,
    user: &UserRecord,
) -> Result<(), UserError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {DB_TABLE_USERS} (username, password) VALUES ($1, $2)
        ON CONFLICT (username) DO UPDATE SET password = EXCLUDED.password
        "#
    ))
    .bind(&user.username)
    .bind(&user.password)
    .execute(pool)
    .await?;

    Ok(())
}
