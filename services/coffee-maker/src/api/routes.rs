//! API 路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use coffee_errors::{AppError, AppResult};
use tracing::debug;

use super::dto::{InventoryPayload, InventoryResponse, OrderResponse};
use crate::application::CoffeeMakerHandler;

/// 所有 API 路由的公共前缀
pub const BASE_PATH: &str = "/api/v1/";

/// 库存路由（与前缀拼接后带双斜杠）
pub fn inventory_path() -> String {
    format!("{}/inventory", BASE_PATH)
}

/// 单个订单路由
pub fn order_path() -> String {
    format!("{}/orders/{{id}}", BASE_PATH)
}

pub fn routes(handler: Arc<CoffeeMakerHandler>) -> Router {
    Router::new()
        .route(&inventory_path(), get(get_inventory).put(update_inventory))
        .route(&order_path(), get(get_order))
        .with_state(handler)
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(e) => AppError::unsupported_media_type(e.body_text()),
        other => AppError::validation(other.body_text()),
    }
}

async fn get_inventory(
    State(handler): State<Arc<CoffeeMakerHandler>>,
) -> AppResult<Json<InventoryResponse>> {
    let inventory = handler.get_inventory().await?;
    Ok(Json(inventory.into()))
}

async fn update_inventory(
    State(handler): State<Arc<CoffeeMakerHandler>>,
    payload: Result<Json<InventoryPayload>, JsonRejection>,
) -> AppResult<Json<InventoryResponse>> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let delta = payload.validate()?;

    let inventory = handler.update_inventory(delta).await?;
    Ok(Json(inventory.into()))
}

async fn get_order(
    State(handler): State<Arc<CoffeeMakerHandler>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<OrderResponse>> {
    let Path(id) = id.map_err(|e| AppError::validation(e.body_text()))?;
    debug!(id, "Fetching order");

    let order = handler.get_order(id).await?;
    Ok(Json(order.into()))
}
