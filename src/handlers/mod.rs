//! HTTP handlers for the todo API
//!
//! Successful responses use the `{success, message, data}` envelope;
//! failures go through `AppError`'s `ResponseError` impl.

pub mod todos;
pub mod users;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use crate::error::{AppError, ErrorBody};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success with `data: null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Todo API is up and running")
}

/// Health check endpoint handler
/// Reports whether the database answers a trivial query
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.store.ping().await {
        Ok(()) => "up",
        Err(e) => {
            error!("Health check could not reach the database: {}", e);
            "down"
        }
    };

    let body = json!({
        "status": if database == "up" { "healthy" } else { "unhealthy" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": database,
    });

    if database == "up" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

/// Fallback for any method/path pair with no registered route.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    warn!("No route for {} {}", req.method(), req.path());

    let mut body = ErrorBody::new("Route Not Found");
    body.path = Some(req.path().to_string());
    HttpResponse::NotFound().json(body)
}

/// Presence check for a required text field: absent or blank is rejected.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::ValidationError(format!("{} is required", field))),
    }
}
