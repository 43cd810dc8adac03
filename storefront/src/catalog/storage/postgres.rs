use sqlx::{Pool, Postgres};

use crate::catalog::{
    errors::CatalogError,
    types::{ListQuery, Product},
};

use super::DB_TABLE_PRODUCTS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), CatalogError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {DB_TABLE_PRODUCTS} (
            name TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price BIGINT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn list_products_postgres(
    pool: &Pool<Postgres>,
    query: &ListQuery,
) -> Result<Vec<Product>, CatalogError> {
    sqlx::query_as::<_, Product>(&format!(
        r#"
        SELECT name, title, description, price FROM {DB_TABLE_PRODUCTS}
        WHERE name LIKE $1 OR title LIKE $1
        ORDER BY name ASC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(query.like_pattern())
    .bind(query.limit)
    .bind(query.offset)
    .fetch_all(pool)
    .await
    .map_err(CatalogError::from)
}

pub(super) async fn count_products_postgres(pool: &Pool<Postgres>) -> Result<i64, CatalogError> {
    let (count,): (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {DB_TABLE_PRODUCTS}"))
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub(super) async fn upsert_product_postgres(
    pool: &Pool<Postgres>,
    product: &Product,
) -> Result<(), CatalogError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {DB_TABLE_PRODUCTS} (name, title, description, price) VALUES ($1, $2, $3, $4)
        ON CONFLICT (name) DO UPDATE SET
            title = EXCLUDED.title,
            description = EXCLUDED.description,
            price = EXCLUDED.price
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
