//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出和 HTTP 请求埋点

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder
    ///
    /// 每个进程只能安装一次
    pub fn install() -> Result<Self, BuildError> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        Ok(Self { handle })
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, path: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// HTTP metrics 中间件
///
/// 需通过 `Router::route_layer` 挂载，以便拿到路由模板作为 `path` 标签
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn handler() -> &'static str {
        "OK"
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // current_thread 运行时下，线程局部 recorder 对整个请求生效
    #[tokio::test]
    async fn test_records_request_with_route_template() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let _guard = metrics::set_default_local_recorder(&recorder);

        let app = Router::new()
            .route("/items/{id}", get(handler))
            .route_layer(middleware::from_fn(track_http_metrics));

        let response = app.oneshot(request("/items/7")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rendered = handle.render();
        assert!(
            rendered.contains(
                r#"http_requests_total{method="GET",path="/items/{id}",status="200"} 1"#
            ),
            "{rendered}"
        );
        assert!(rendered.contains("http_request_duration_ms"), "{rendered}");
        assert!(!rendered.contains("/items/7"), "{rendered}");
    }

    #[tokio::test]
    async fn test_status_label_follows_response() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let _guard = metrics::set_default_local_recorder(&recorder);

        let app = Router::new()
            .route("/items/{id}", get(|| async { StatusCode::NOT_FOUND }))
            .route_layer(middleware::from_fn(track_http_metrics));

        app.clone().oneshot(request("/items/1")).await.unwrap();
        app.oneshot(request("/items/2")).await.unwrap();

        assert!(handle.render().contains(
            r#"http_requests_total{method="GET",path="/items/{id}",status="404"} 2"#
        ));
    }
}
