use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::{OrderList, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Order, OrderStatus},
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::require_text,
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    ensure(user, Capability::ManageOrders)?;

    let list = query
        .list
        .to_query::<Order>(20, SortOrder::Desc)
        .filter_eq("status", query.status);
    let page = state.store.orders.select(&list);
    Ok(ApiResponse::success(
        "Orders",
        OrderList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    ensure(user, Capability::ManageOrders)?;
    let order = state.store.orders.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Order", order, None))
}

pub async fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    ensure(user, Capability::ManageOrders)?;
    let raw = require_text(payload.status, "Status is required")?;
    let status = OrderStatus::parse(&raw)
        .ok_or_else(|| AppError::BadRequest("Invalid order status".into()))?;

    let order = state
        .store
        .orders
        .update(id, |order| {
            order.status = status;
            order.updated_at = Utc::now();
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "order_status_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "status": order.status.as_str() })),
    );
    Ok(ApiResponse::success("Order updated", order, None))
}
