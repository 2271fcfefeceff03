//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to the remote recipe API failed, either because the request
    /// could not be sent or because the API responded with a non-2xx status.
    ///
    /// Callers should pass in the original error as a string.
    #[error("the recipe service request failed: {0}")]
    Network(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A budget item kind other than income or expense was submitted.
    #[error("\"{0}\" is not a valid budget item type, expected \"inc\" or \"exp\"")]
    InvalidItemKind(String),

    /// An empty string was used as a budget item description.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// A budget item value or shopping list amount was zero, negative or not
    /// a number.
    #[error("{0} is not a valid amount, amounts must be greater than zero")]
    InvalidAmount(f64),

    /// Tried to decrease a recipe's servings below one.
    #[error("a recipe must have at least one serving")]
    InvalidServings,

    /// An action needed the current recipe but no recipe has been loaded.
    #[error("no recipe has been loaded")]
    MissingRecipe,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while serializing or deserializing JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// Could not acquire a lock on shared state.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

// The request URL carries the API key in its query string, so it is left out.
impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(value.without_url().to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::Network(error) => {
                tracing::error!("recipe service request failed: {error}");
                InternalServerError::recipe_service_unavailable().into_response()
            }
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Network(error) => {
                tracing::error!("recipe service request failed: {error}");
                (
                    StatusCode::BAD_GATEWAY,
                    Alert::Error {
                        message: "Could not reach the recipe service".to_owned(),
                        details: "Check your connection and try again.".to_owned(),
                    },
                )
            }
            Error::InvalidItemKind(kind) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid item type".to_owned(),
                    details: format!("\"{kind}\" is neither an income nor an expense."),
                },
            ),
            Error::EmptyDescription => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: "Description cannot be empty".to_owned(),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!("{amount} is not valid, enter a number greater than zero."),
                },
            ),
            Error::InvalidServings => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: "A recipe must have at least one serving".to_owned(),
                },
            ),
            Error::MissingRecipe => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "No recipe selected".to_owned(),
                    details: "Open a recipe from the search results first.".to_owned(),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::ErrorSimple {
                    message: "The item could not be found".to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
