use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::{CreateProductRequest, Product, UpdateProductRequest},
    queries::product_queries,
    AppState,
};

const NAME_MAX_CHARS: usize = 100;
const CATEGORY_MAX_CHARS: usize = 50;

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::get_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    validate_create(&payload)?;

    let product = product_queries::create_product(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    validate_update(&payload)?;

    let product = product_queries::update_product(&state.db, id, payload)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let deleted = product_queries::delete_product(&state.db, id).await?;

    if !deleted {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(Json(json!({ "message": "Product deleted" })))
}

fn validate_create(payload: &CreateProductRequest) -> Result<()> {
    validate_name(&payload.name)?;

    if let Some(ref category) = payload.category {
        validate_category(category)?;
    }

    if let Some(quantity) = payload.quantity {
        validate_quantity(quantity)?;
    }

    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    Ok(())
}

fn validate_update(payload: &UpdateProductRequest) -> Result<()> {
    if let Some(ref name) = payload.name {
        validate_name(name)?;
    }

    if let Some(ref category) = payload.category {
        validate_category(category)?;
    }

    if let Some(quantity) = payload.quantity {
        validate_quantity(quantity)?;
    }

    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AppError::BadRequest("Name cannot be empty".to_string()));
    }

    if name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "Name cannot exceed {} characters",
            NAME_MAX_CHARS
        )));
    }

    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.chars().count() > CATEGORY_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "Category cannot exceed {} characters",
            CATEGORY_MAX_CHARS
        )));
    }

    Ok(())
}

fn validate_quantity(quantity: i64) -> Result<()> {
    if quantity < 0 {
        return Err(AppError::BadRequest(
            "Quantity cannot be negative".to_string(),
        ));
    }

    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if price < 0.0 {
        return Err(AppError::BadRequest("Price cannot be negative".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            category: None,
            quantity: None,
            price: None,
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_create(&create_request("")).is_err());
    }

    #[test]
    fn name_at_limit_is_accepted() {
        assert!(validate_create(&create_request(&"x".repeat(100))).is_ok());
    }

    #[test]
    fn name_over_limit_is_rejected() {
        assert!(validate_create(&create_request(&"x".repeat(101))).is_err());
    }

    #[test]
    fn long_category_is_rejected() {
        let mut payload = create_request("Widget");
        payload.category = Some("c".repeat(51));
        assert!(validate_create(&payload).is_err());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut payload = create_request("Widget");
        payload.quantity = Some(-1);
        assert!(validate_create(&payload).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut payload = create_request("Widget");
        payload.price = Some(-0.01);
        assert!(validate_create(&payload).is_err());
    }

    #[test]
    fn update_with_no_fields_is_accepted() {
        let payload = UpdateProductRequest {
            name: None,
            category: None,
            quantity: None,
            price: None,
        };
        assert!(validate_update(&payload).is_ok());
    }

    #[test]
    fn update_with_empty_name_is_rejected() {
        let payload = UpdateProductRequest {
            name: Some(String::new()),
            category: None,
            quantity: None,
            price: None,
        };
        assert!(validate_update(&payload).is_err());
    }
}
