use thiserror::Error;
use actix_web::{ResponseError, HttpResponse, http::StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::error::ErrorKind;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("{0} Not Found")]
    NotFound(&'static str),

    #[error("{0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Store failures, classified by what the database reported rather than by message text.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("{message}")]
    UniqueViolation { message: String, constraint: Option<String> },

    #[error("{message}")]
    ForeignKeyViolation { message: String, constraint: Option<String> },

    #[error("{message}")]
    NotNullViolation { message: String, constraint: Option<String> },

    #[error("{message}")]
    CheckViolation { message: String, constraint: Option<String> },

    #[error("{0}")]
    ConnectionError(String),

    #[error("{0}")]
    QueryError(String),
}

impl DatabaseError {
    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseError::UniqueViolation { .. } => "unique_violation",
            DatabaseError::ForeignKeyViolation { .. } => "foreign_key_violation",
            DatabaseError::NotNullViolation { .. } => "not_null_violation",
            DatabaseError::CheckViolation { .. } => "check_violation",
            DatabaseError::ConnectionError(_) => "connection",
            DatabaseError::QueryError(_) => "query",
        }
    }

    pub fn constraint(&self) -> Option<&str> {
        match self {
            DatabaseError::UniqueViolation { constraint, .. }
            | DatabaseError::ForeignKeyViolation { constraint, .. }
            | DatabaseError::NotNullViolation { constraint, .. }
            | DatabaseError::CheckViolation { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => {
                let message = db.message().to_string();
                let constraint = db.constraint().map(str::to_string);
                match db.kind() {
                    ErrorKind::UniqueViolation => DatabaseError::UniqueViolation { message, constraint },
                    ErrorKind::ForeignKeyViolation => DatabaseError::ForeignKeyViolation { message, constraint },
                    ErrorKind::NotNullViolation => DatabaseError::NotNullViolation { message, constraint },
                    ErrorKind::CheckViolation => DatabaseError::CheckViolation { message, constraint },
                    _ => DatabaseError::QueryError(message),
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => DatabaseError::ConnectionError(err.to_string()),
            _ => DatabaseError::QueryError(err.to_string()),
        }
    }
}

// Implement conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record"),
            _ => AppError::DatabaseError(err.into()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Body of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            details: None,
            path: None,
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut body = ErrorBody::new(self.to_string());
        if let AppError::DatabaseError(e) = self {
            body.details = Some(json!({
                "kind": e.kind(),
                "constraint": e.constraint(),
            }));
        }
        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
