use sqlx::{Pool, Sqlite};

use crate::catalog::{
    errors::CatalogError,
    types::{ListQuery, Product},
};

use super::DB_TABLE_PRODUCTS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), CatalogError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {DB_TABLE_PRODUCTS} (
            name TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price INTEGER NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn list_products_sqlite(
    pool: &Pool<Sqlite>,
    query: &ListQuery,
) -> Result<Vec<Product>, CatalogError> {
    let pattern = query.like_pattern();

    sqlx::query_as::<_, Product>(&format!(
        r#"
        SELECT name, title, description, price FROM {DB_TABLE_PRODUCTS}
        WHERE name LIKE ? OR title LIKE ?
        ORDER BY name ASC
        LIMIT ? OFFSET ?
        "#
    ))
    .bind(&pattern)
    .bind(&pattern)
    .bind(query.limit)
    .bind(query.offset)
    .fetch_all(pool)
    .await
    .map_err(CatalogError::from)
}

pub(super) async fn count_products_sqlite(pool: &Pool<Sqlite>) -> Result<i64, CatalogError> {
    let (count,): (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {DB_TABLE_PRODUCTS}"))
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub(super) async fn upsert_product_sqlite(
    pool: &Pool<Sqlite>,
    product: &Product,
) -> Result<(), CatalogError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {DB_TABLE_PRODUCTS} (name, title, description, price) VALUES (?, ?, ?, ?)
        ON CONFLICT(name) DO UPDATE SET
            title = excluded.title,
            description = excluded.description,
            price = excluded.price
        "#
    ))
    .bind(&product.name)
    .bind(&product.title)
    .bind(&product.description)
    .bind(product.price)
    .execute(pool)
    .await?;

    Ok(())
}
