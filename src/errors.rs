//! # Errors for query endpoints
//!
//! Search and ordering never fail: unknown relations fall back to literal
//! columns and missing parameters skip their step. What can fail is the
//! request itself (a query string that does not deserialize) and the database
//! executing the augmented query, for instance when a configured join names a
//! table that does not exist.
//!
//! Database details are logged with `tracing` and never sent to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - query string could not be read
    BadRequest {
        /// User-facing error message
        message: String,
    },

    /// 500 Internal Server Error - database error (details logged, not exposed)
    Database {
        /// User-facing generic message
        message: String,
        /// Internal error (logged, not sent to user)
        internal: DbErr,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> &str {
        match self {
            Self::BadRequest { message } | Self::Database { message, .. } => message,
        }
    }

    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::BadRequest { message } => {
                tracing::debug!(error = %message, status = %self.status_code(), "API error");
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let body = Json(ErrorResponse {
            error: self.user_message(),
        });
        (self.status_code(), body).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database { internal, .. } => Some(internal),
            Self::BadRequest { .. } => None,
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::database(err)
    }
}
