use std::fmt::{Display, Formatter};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::RegistryError;
use thiserror::Error;
use tracing::{error, warn};

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RegistryError> for ServerError {
    fn from(error: RegistryError) -> Self {
        ServerError::ApiError(error.into())
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    BadRequest(String, String),
    NotFound(String, String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>, meta: Option<String>) -> Self {
        Self::BadRequest(message.into(), meta.unwrap_or_default())
    }

    pub fn not_found(message: impl Into<String>, meta: Option<String>) -> Self {
        Self::NotFound(message.into(), meta.unwrap_or_default())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        let meta = Some(error.to_string());
        match error {
            RegistryError::ActivityNotFound(_) | RegistryError::ParticipantNotFound { .. } => {
                ApiError::not_found(error.detail(), meta)
            }
            RegistryError::AlreadySignedUp { .. } => ApiError::bad_request(error.detail(), meta),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(message, meta) => {
                write!(f, "Status=400, BadRequest: {}. {}", message, meta)
            }
            ApiError::NotFound(message, meta) => {
                write!(f, "Status=404, NotFound: {}. {}", message, meta)
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let (status, detail) = match self {
            ServerError::ApiError(e) => {
                warn!("{}", e);
                let status = e.status();
                match e {
                    ApiError::BadRequest(message, _)
                    | ApiError::NotFound(message, _) => (status, message),
                }
            }
            ServerError::Io(e) => {
                error!(%e, "Unexpected IO error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected Error".to_string())
            }
        };

        (status, axum::Json(ErrorResponse { detail })).into_response()
    }
}
