//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    budget::Budget,
    config::RecipeApiConfig,
    db::initialize,
    likes::Likes,
    pagination::PaginationConfig,
    recipe::Recipe,
    recipe_api::RecipeClient,
    request_sequence::RequestSequence,
    search::Search,
    shopping_list::ShoppingList,
};

/// The state of the server.
///
/// Each feature's handlers take a smaller state struct that is built from this
/// one with [axum::extract::FromRef].
#[derive(Debug, Clone)]
pub struct AppState {
    /// The current month's income and expenses.
    pub budget: Arc<Mutex<Budget>>,

    /// The most recent recipe search, if any.
    pub search: Arc<Mutex<Option<Search>>>,

    /// The recipe currently being viewed, if any.
    pub recipe: Arc<Mutex<Option<Recipe>>>,

    /// The ingredients added to the shopping list.
    pub shopping_list: Arc<Mutex<ShoppingList>>,

    /// The liked recipes, mirrored to the database on every change.
    pub likes: Arc<Mutex<Likes>>,

    /// The config that controls how to display pages of search results.
    pub pagination_config: PaginationConfig,

    /// The database connection backing the key-value store.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The client for the remote recipe API.
    pub recipe_client: RecipeClient,

    /// Orders recipe searches so that only the newest one is kept.
    pub search_requests: Arc<RequestSequence>,

    /// Orders recipe loads so that only the newest one is kept.
    pub recipe_requests: Arc<RequestSequence>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database and load the persisted likes.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or read.
    pub fn new(
        db_connection: Connection,
        recipe_api_config: RecipeApiConfig,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;
        let likes = Likes::load(&db_connection)?;

        Ok(Self {
            budget: Arc::new(Mutex::new(Budget::new())),
            search: Arc::new(Mutex::new(None)),
            recipe: Arc::new(Mutex::new(None)),
            shopping_list: Arc::new(Mutex::new(ShoppingList::new())),
            likes: Arc::new(Mutex::new(likes)),
            pagination_config,
            db_connection: Arc::new(Mutex::new(db_connection)),
            recipe_client: RecipeClient::new(recipe_api_config),
            search_requests: Arc::new(RequestSequence::new()),
            recipe_requests: Arc::new(RequestSequence::new()),
        })
    }
}

/// Lock `mutex`, logging and converting a poisoned lock into
/// [Error::DatabaseLockError].
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, Error> {
    mutex.lock().map_err(|error| {
        tracing::error!("could not acquire lock: {error}");
        Error::DatabaseLockError
    })
}
