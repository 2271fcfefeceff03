//! Endpoints for running a recipe search and paging through its results.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState, Error, PaginationConfig,
    app_state::lock,
    recipe::Recipe,
    recipe_api::RecipeClient,
    request_sequence::{RequestSequence, RequestTicket},
    search::{Search, page::search_results_view},
};

/// The state needed for the search endpoints.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub search: Arc<Mutex<Option<Search>>>,
    pub recipe: Arc<Mutex<Option<Recipe>>>,
    pub recipe_client: RecipeClient,
    pub search_requests: Arc<RequestSequence>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for SearchState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            search: state.search.clone(),
            recipe: state.recipe.clone(),
            recipe_client: state.recipe_client.clone(),
            search_requests: state.search_requests.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

/// Run a new search and respond with the first page of results.
///
/// An empty query does nothing. If another search was started while this
/// one was waiting on the recipe API, its results are discarded and the
/// newer search is shown instead.
pub async fn search_endpoint(
    State(state): State<SearchState>,
    Form(form): Form<SearchForm>,
) -> Response {
    if form.query.trim().is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let ticket = state.search_requests.issue();
    let mut search = Search::new(&form.query);

    if let Err(error) = search.fetch_results(&state.recipe_client).await {
        return error.into_alert_response();
    }

    store_latest_search(&state, ticket, search).unwrap_or_else(Error::into_alert_response)
}

fn store_latest_search(
    state: &SearchState,
    ticket: RequestTicket,
    search: Search,
) -> Result<Response, Error> {
    let mut current = lock(&state.search)?;

    if state.search_requests.is_latest(ticket) {
        *current = Some(search);
    } else {
        tracing::debug!("discarding stale results for {:?}", search.query());
    }

    render_page(state, current.as_ref(), state.pagination_config.default_page)
}

/// Respond with another page of the current search's results.
pub async fn search_page_endpoint(
    State(state): State<SearchState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let page = query.page.unwrap_or(state.pagination_config.default_page);

    let result = lock(&state.search)
        .and_then(|search| render_page(&state, search.as_ref(), page));

    result.unwrap_or_else(Error::into_alert_response)
}

fn render_page(state: &SearchState, search: Option<&Search>, page: u64) -> Result<Response, Error> {
    let active_recipe = lock(&state.recipe)?.as_ref().map(Recipe::id);

    Ok(search_results_view(
        search,
        page,
        state.pagination_config.results_per_page,
        active_recipe,
    )
    .into_response())
}
