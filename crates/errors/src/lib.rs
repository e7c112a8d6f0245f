//! coffee-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// 字段校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid fields: {}", join_fields(.0))]
    InvalidFields(Vec<FieldError>),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_fields(errors: Vec<FieldError>) -> Self {
        Self::InvalidFields(errors)
    }

    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        Self::UnsupportedMediaType(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidFields(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 面向调用方的错误描述（不带变体前缀）
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::UnsupportedMediaType(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::InvalidFields(errors) => join_fields(errors),
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        let errors = match self {
            Self::InvalidFields(errors) => errors.clone(),
            _ => Vec::new(),
        };

        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code().as_u16(),
            detail: self.detail(),
            instance: None,
            errors,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::NotFound(_) => "https://coffee-maker.local/problems/not-found".to_string(),
            Self::Validation(_) | Self::InvalidFields(_) => {
                "https://coffee-maker.local/problems/validation".to_string()
            }
            Self::UnsupportedMediaType(_) => {
                "https://coffee-maker.local/problems/unsupported-media-type".to_string()
            }
            Self::Internal(_) => "https://coffee-maker.local/problems/internal".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource Not Found".to_string(),
            Self::Validation(_) | Self::InvalidFields(_) => "Validation Error".to_string(),
            Self::UnsupportedMediaType(_) => "Unsupported Media Type".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        } else {
            error!(status = status.as_u16(), error = %self, "Request failed");
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self.to_problem_details()),
        )
            .into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
