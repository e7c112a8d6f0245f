//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

use crate::http_metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查器
pub struct HealthChecker {
    ready: AtomicBool,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// API 监听端口绑定成功后调用
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 执行就绪检查（readiness）
    pub fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();
        if self.ready.load(Ordering::SeqCst) {
            status.add_check(ComponentHealth::healthy("http"));
        } else {
            status.add_check(ComponentHealth::unhealthy("http", "Listener not bound"));
        }
        status
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HTTP 健康检查服务器
// ============================================================================

/// HTTP 健康检查服务器状态
#[derive(Clone)]
struct HealthServerState {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
}

/// 构建健康检查路由
pub fn health_routes(checker: Arc<HealthChecker>, metrics: Arc<MetricsRecorder>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(HealthServerState { checker, metrics })
}

/// HTTP 健康检查服务器
pub struct HealthServer {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
    addr: SocketAddr,
}

impl HealthServer {
    /// 创建新的健康检查服务器
    pub fn new(checker: Arc<HealthChecker>, metrics: Arc<MetricsRecorder>, addr: SocketAddr) -> Self {
        Self {
            checker,
            metrics,
            addr,
        }
    }

    /// 启动 HTTP 服务器
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let app = health_routes(self.checker, self.metrics);

        info!(addr = %self.addr, "Health check HTTP server starting");

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await
    }
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.checker.liveness()))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.readiness();
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}
