use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::Result,
    models::{CreateProductRequest, Product, UpdateProductRequest},
};

pub const DEFAULT_CATEGORY: &str = "General";

/// Find product by ID
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Get all products, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Create a new product
pub async fn create_product(pool: &SqlitePool, req: CreateProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, category, quantity, price, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(req.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
    .bind(req.quantity.unwrap_or(0))
    .bind(req.price.unwrap_or(0.0))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Update an existing product, writing only the supplied fields
pub async fn update_product(
    pool: &SqlitePool,
    id: i64,
    req: UpdateProductRequest,
) -> Result<Option<Product>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE products SET ");
    let mut has_fields = false;

    if let Some(name) = req.name {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("name = ");
        query_builder.push_bind(name);
        has_fields = true;
    }

    if let Some(category) = req.category {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("category = ");
        query_builder.push_bind(category);
        has_fields = true;
    }

    if let Some(quantity) = req.quantity {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("quantity = ");
        query_builder.push_bind(quantity);
        has_fields = true;
    }

    if let Some(price) = req.price {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("price = ");
        query_builder.push_bind(price);
        has_fields = true;
    }

    if !has_fields {
        // No fields to update, return existing product
        return find_by_id(pool, id).await;
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let product = query_builder
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Delete a product
pub async fn delete_product(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
