use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::Product,
    utils::extractors::ProductPayload,
    validation,
};

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.products.read().await;

    Json(products.list().to_vec())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let products = state.products.read().await;
    let product = products.get(&id).ok_or_else(AppError::product_not_found)?;

    Ok(Json(product.clone()))
}

pub async fn create_product(
    State(state): State<AppState>,
    ProductPayload(fields): ProductPayload,
) -> Result<Json<Product>> {
    let (changes, product_image) = validation::validate_create(&fields)?;

    let product = state.products.write().await.create(changes, product_image);
    tracing::info!("Created product {}", product.id);

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ProductPayload(fields): ProductPayload,
) -> Result<Json<Product>> {
    if !state.products.read().await.contains(&id) {
        return Err(AppError::product_not_found());
    }

    let changes = validation::validate_update(&fields)?;

    let product = state
        .products
        .write()
        .await
        .update(&id, changes, fields.product_image)
        .ok_or_else(AppError::product_not_found)?;
    tracing::info!("Updated product {}", product.id);

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let mut products = state.products.write().await;
    let remaining = products
        .delete(&id)
        .ok_or_else(AppError::product_not_found)?
        .to_vec();
    tracing::info!("Deleted product {}", id);

    Ok(Json(remaining))
}
