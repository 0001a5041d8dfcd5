use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Product},
    response::ApiResponse,
    routes::params::ProductListQuery,
    services::{require, require_text},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductListQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let mut list = query
        .list
        .to_query::<Product>(10, SortOrder::Desc)
        .filter_eq("brandId", query.brand_id)
        .filter_eq("categoryId", query.category_id)
        .filter_bool("isActive", query.is_active);

    if let Some(min_price) = query.min_price {
        list = list.filter(move |product: &Product| product.price >= min_price);
    }
    if let Some(max_price) = query.max_price {
        list = list.filter(move |product: &Product| product.price <= max_price);
    }

    let page = state.store.products.select(&list);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = state.store.products.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure(user, Capability::ManageCatalog)?;
    let name = require_text(payload.name, "Name is required")?;
    let brand_id = require(payload.brand_id, "Brand is required")?;
    let category_id = require(payload.category_id, "Category is required")?;
    let price = require(payload.price, "Price is required")?;

    if state.store.brands.get(brand_id).is_none() {
        return Err(AppError::BadRequest("Unknown brand".into()));
    }
    if state.store.categories.get(category_id).is_none() {
        return Err(AppError::BadRequest("Unknown category".into()));
    }
    if price < 0 {
        return Err(AppError::BadRequest("Price must not be negative".into()));
    }

    let product = state.store.products.insert(Product {
        id: Uuid::new_v4(),
        name,
        description: payload.description,
        brand_id,
        category_id,
        price,
        stock: payload.stock.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );
    Ok(ApiResponse::success("Product created", product, None))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure(user, Capability::ManageCatalog)?;

    if let Some(brand_id) = payload.brand_id {
        if state.store.brands.get(brand_id).is_none() {
            return Err(AppError::BadRequest("Unknown brand".into()));
        }
    }
    if let Some(category_id) = payload.category_id {
        if state.store.categories.get(category_id).is_none() {
            return Err(AppError::BadRequest("Unknown category".into()));
        }
    }

    let product = state
        .store
        .products
        .update(id, |product| {
            if let Some(name) = payload.name {
                product.name = name;
            }
            if let Some(description) = payload.description {
                product.description = Some(description);
            }
            if let Some(brand_id) = payload.brand_id {
                product.brand_id = brand_id;
            }
            if let Some(category_id) = payload.category_id {
                product.category_id = category_id;
            }
            if let Some(price) = payload.price {
                product.price = price;
            }
            if let Some(stock) = payload.stock {
                product.stock = stock;
            }
            if let Some(is_active) = payload.is_active {
                product.is_active = is_active;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );
    Ok(ApiResponse::success("Product updated", product, None))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageCatalog)?;

    if !state.store.products.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );
    Ok(ApiResponse::success(
        "Product deleted",
        serde_json::json!({}),
        None,
    ))
}
