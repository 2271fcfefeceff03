//! Homebook is a web app for tracking a simple monthly budget and for finding
//! recipes, saving favourites and building a shopping list from them.
//!
//! This library provides the models, controllers (route handlers) and views
//! (server-rendered HTML) for both halves of the app.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod budget;
mod config;
mod db;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod kv;
mod likes;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod recipe;
mod recipe_api;
mod request_sequence;
mod routing;
mod search;
mod shopping_list;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{DEFAULT_RECIPE_API_URL, RecipeApiConfig};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
