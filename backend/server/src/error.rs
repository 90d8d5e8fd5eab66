use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use board::{config::ConfigError, location::ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Misconfigured: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bad location: {0}")]
    Location(#[from] ParseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownFilter { .. } => StatusCode::NOT_FOUND,
            AppError::Location { .. } => StatusCode::BAD_REQUEST,
            AppError::Config { .. } | AppError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::UnknownFilter("Nope".to_string()), StatusCode::NOT_FOUND),
            (AppError::Location(ParseError::EmptyHost), StatusCode::BAD_REQUEST),
            (
                AppError::Config(ConfigError::Missing("SPREADSHEET_ID")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Io(std::io::Error::other("disk")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
