use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use thiserror::Error;
use vechnost_engine::{CatalogError, DepositError, OrderFlowError, RatingError, ReportError, UserError};

/// Top-level error type for the REST layer.
///
/// The 4xx variants carry the exact message that goes out to the client, so
/// conversions from engine errors pick the client-facing wording here rather
/// than in the handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<UserError> for ServerError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::EmailAlreadyRegistered(_) => Self::Conflict(e.to_string()),
            UserError::InvalidCredentials => Self::Unauthorized(e.to_string()),
            UserError::UserNotFound(_) => Self::NotFound("Not found".to_string()),
            UserError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<CatalogError> for ServerError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::CategoryNotFound(_) | CatalogError::ProductNotFound(_) | CatalogError::PaymentMethodNotFound(_) => {
                Self::NotFound("Not found".to_string())
            },
            CatalogError::DuplicateMethodCode(_) => Self::Conflict(e.to_string()),
            CatalogError::NoItemsProvided | CatalogError::NegativeValue(_) => Self::BadRequest(e.to_string()),
            CatalogError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<OrderFlowError> for ServerError {
    fn from(e: OrderFlowError) -> Self {
        match e {
            OrderFlowError::ProductNotFound(_) => Self::NotFound("Product not found".to_string()),
            OrderFlowError::OrderNotFound(_) => Self::NotFound("Order not found".to_string()),
            OrderFlowError::InvalidAmount(_) | OrderFlowError::PriceError(_) => Self::BadRequest(e.to_string()),
            OrderFlowError::CatalogError(e) => e.into(),
            OrderFlowError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<DepositError> for ServerError {
    fn from(e: DepositError) -> Self {
        match e {
            DepositError::InvalidAmount(_) => Self::BadRequest(e.to_string()),
            DepositError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<RatingError> for ServerError {
    fn from(e: RatingError) -> Self {
        match e {
            RatingError::ProductNotFound(_) => Self::NotFound("Product not found".to_string()),
            RatingError::InvalidStars(_) => Self::BadRequest(e.to_string()),
            RatingError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<ReportError> for ServerError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::CatalogError(e) => e.into(),
            ReportError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}
