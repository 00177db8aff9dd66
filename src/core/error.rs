use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json};

use crate::types::response::Errors;

pub(crate) const ACCESS_FORBIDDEN_MSG: &str = "unauthorized";
pub(crate) const INCORRECT_LOGIN_MSG: &str = "phone number or password is incorrect";
pub(crate) const PHONE_TAKEN_MSG: &str = "phone number already registered";
pub(crate) const INTERNAL_ERROR_MSG: &str = "internal server error";
pub(crate) const REQUEST_CANCELED_MSG: &str = "request canceled";
pub(crate) const DEADLINE_EXCEEDED_MSG: &str = "deadline exceeded";
pub(crate) const UNSUPPORTED_MEDIA_TYPE_MSG: &str = "Unsupported Media Type";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("RSA key error: {0}")]
    RsaKey(#[from] jsonwebtoken::errors::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Header decode error: {0}")]
    HeaderDecode(#[from] axum::http::header::ToStrError),
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Unsupported media type")]
    UnsupportedMediaType,
    #[error("No credentials provided")]
    NoCredentials,
    #[error("Invalid authorization header")]
    InvalidAuthHeader,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Invalid token signature")]
    TokenSignature,
    #[error("Invalid token claims")]
    TokenClaims,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Incorrect phone number or password")]
    IncorrectCredentials,
    #[error("Phone number already registered")]
    PhoneNumberTaken,
    #[error("User not found")]
    UserNotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Sql(_) | Error::Jwt(_) | Error::UnknownRule(_) | Error::UserNotFound => {
                tracing::error!("{:?}", self);
            }
            Error::HeaderDecode(_)
            | Error::NoCredentials
            | Error::InvalidAuthHeader
            | Error::MalformedToken
            | Error::TokenSignature
            | Error::TokenClaims
            | Error::ExpiredToken => {
                tracing::info!("{:?}", self);
            }
            _ => {
                tracing::debug!("{:?}", self);
            }
        }

        let (status, messages) = match self {
            Error::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            Error::MalformedBody(detail) => (StatusCode::BAD_REQUEST, vec![detail]),
            Error::UnsupportedMediaType => (
                StatusCode::BAD_REQUEST,
                vec![UNSUPPORTED_MEDIA_TYPE_MSG.to_string()],
            ),
            Error::IncorrectCredentials => (
                StatusCode::BAD_REQUEST,
                vec![INCORRECT_LOGIN_MSG.to_string()],
            ),
            Error::PhoneNumberTaken => {
                (StatusCode::CONFLICT, vec![PHONE_TAKEN_MSG.to_string()])
            }
            Error::HeaderDecode(_)
            | Error::NoCredentials
            | Error::InvalidAuthHeader
            | Error::MalformedToken
            | Error::TokenSignature
            | Error::TokenClaims
            | Error::ExpiredToken => (
                StatusCode::FORBIDDEN,
                vec![ACCESS_FORBIDDEN_MSG.to_string()],
            ),
            Error::Sql(_) | Error::Jwt(_) | Error::UnknownRule(_) | Error::UserNotFound => (
                StatusCode::INTERNAL_SERVER_ERROR,
                vec![INTERNAL_ERROR_MSG.to_string()],
            ),
        };

        (status, Json(Errors::new(messages))).into_response()
    }
}

pub(crate) async fn handle_middleware_errors(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::info!("request timed out: {:?}", err);
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(Errors::new(vec![DEADLINE_EXCEEDED_MSG.to_string()])),
        )
            .into_response();
    }

    if err.is::<tower::buffer::error::Closed>() {
        tracing::info!("request dropped before completion: {:?}", err);
        return (
            StatusCode::GONE,
            Json(Errors::new(vec![REQUEST_CANCELED_MSG.to_string()])),
        )
            .into_response();
    }

    tracing::error!("Unhandled middleware error: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Errors::new(vec![INTERNAL_ERROR_MSG.to_string()])),
    )
        .into_response()
}
