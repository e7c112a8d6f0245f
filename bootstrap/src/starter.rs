//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use coffee_config::AppConfig;
use coffee_errors::AppResult;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::http_metrics::{MetricsRecorder, track_http_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 健康检查端口相对 API 端口的偏移
pub const HEALTH_PORT_OFFSET: u16 = 1000;

/// 为 API 路由挂载通用中间件（metrics + 请求追踪）
pub fn with_http_layers(router: Router) -> Router {
    router
        .route_layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
}

/// 运行 HTTP 服务
///
/// 这是所有服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 安装 metrics recorder
/// 4. 启动健康检查 HTTP 服务器
/// 5. 调用用户提供的闭包构建 API 路由
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use coffee_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run("config", |config| async move {
///         Ok(my_routes(&config))
///     }).await
/// }
/// ```
pub async fn run<F, Fut>(config_dir: &str, router_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::install()?);

    // 4. 启动健康检查 HTTP 服务器
    let health_checker = Arc::new(HealthChecker::new());
    let health_port = config
        .server
        .port
        .checked_add(HEALTH_PORT_OFFSET)
        .ok_or("server.port too large to derive the health check port")?;
    let health_addr: SocketAddr = format!("{}:{}", config.server.host, health_port).parse()?;
    let health_server = HealthServer::new(health_checker.clone(), metrics, health_addr);

    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    // 5. 构建 API 路由
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = with_http_layers(router_builder(config).await?);

    // 6. 启动服务器
    let listener = tokio::net::TcpListener::bind(addr).await?;
    health_checker.mark_ready();

    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 7. 清理
    health_handle.abort();

    info!("Service stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_http_layers_label_requests_by_route() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let _guard = metrics::set_default_local_recorder(&recorder);

        let app = with_http_layers(Router::new().route("/orders/{id}", get(|| async { "OK" })));

        let response = app
            .oneshot(Request::builder().uri("/orders/3").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rendered = handle.render();
        assert!(
            rendered.contains(
                r#"http_requests_total{method="GET",path="/orders/{id}",status="200"} 1"#
            ),
            "{rendered}"
        );
    }
}
