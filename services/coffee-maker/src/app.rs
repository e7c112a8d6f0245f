//! 服务装配

use std::sync::Arc;

use axum::Router;
use coffee_errors::{AppError, AppResult};
use tracing::{error, info};

use crate::api;
use crate::application::CoffeeMakerHandler;
use crate::config::CoffeeMakerConfig;
use crate::infrastructure::InMemoryInventoryService;

/// 加载服务配置并构建 API 路由
///
/// 应在运行时初始化之后调用，配置错误会以结构化日志输出
pub fn build_router(config_dir: &str) -> AppResult<Router> {
    let service_config = CoffeeMakerConfig::load(config_dir).map_err(|e| {
        error!(config_dir, error = %e, "Failed to load coffee-maker config");
        AppError::internal(e.to_string())
    })?;

    let inventory_service = Arc::new(InMemoryInventoryService::with_orders(
        service_config.initial_inventory(),
        service_config.initial_orders(),
    ));
    info!(
        inventory = ?service_config.initial_inventory(),
        orders = service_config.orders.len(),
        "Inventory service initialized"
    );

    let handler = Arc::new(CoffeeMakerHandler::new(inventory_service));
    Ok(api::routes(handler))
}
