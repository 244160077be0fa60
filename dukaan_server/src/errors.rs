use actix_web::{
    error::ResponseError,
    http::StatusCode,
    HttpResponse,
};
use dukaan_engine::{db_types::MalformedIdError, MarketplaceError};
use log::{debug, error};
use thiserror::Error;

use crate::data_objects::JsonResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    /// A store failure. The message is the route's generic description; the cause is only logged.
    #[error("{0}")]
    BackendError(String),
    #[error("Payload deserialization error")]
    CouldNotDeserializePayload,
    #[error("{0}")]
    InvalidRequestBody(String),
    #[error("Invalid user type")]
    InvalidUserType,
    #[error("{0}")]
    NoRecordFound(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::CouldNotDeserializePayload => StatusCode::BAD_REQUEST,
            Self::InvalidUserType => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonResponse::failure(self))
    }
}

/// Returns a mapper from engine errors to server errors for a route.
///
/// `context` is the message clients see when the store fails (e.g. "Error fetching orders"). The underlying cause is
/// logged, never returned.
pub fn api_error(context: &'static str) -> impl Fn(MarketplaceError) -> ServerError {
    move |e| match e {
        MarketplaceError::MissingField(_) | MarketplaceError::InvalidField(_) => {
            debug!("💻️ {context}. {e}");
            ServerError::InvalidRequestBody(e.to_string())
        },
        MarketplaceError::NotFound(_) => ServerError::NoRecordFound(e.to_string()),
        MarketplaceError::InvalidRole(_) => {
            debug!("💻️ {e}");
            ServerError::InvalidUserType
        },
        MarketplaceError::StoreFailure(cause) => {
            error!("💻️ {context}. {cause}");
            ServerError::BackendError(context.to_string())
        },
    }
}

/// Ids that do not parse are treated as store failures, so they surface as a 500 with the route's message.
pub fn malformed_id(context: &'static str) -> impl Fn(MalformedIdError) -> ServerError {
    move |e| {
        error!("💻️ {context}. {e}");
        ServerError::BackendError(context.to_string())
    }
}
