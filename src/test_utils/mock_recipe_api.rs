//! A stand-in for the remote recipe API that runs on a random local port.
//!
//! Only requests with the key "test-key" are accepted. Searching for "fail"
//! and fetching recipe 404 produce errors. Searches starting with "slow" and
//! the recipe [SLOW_RECIPE_ID] respond after a short delay.

use std::{collections::HashMap, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::recipe_api::{
    ApiIngredient, RecipeId, RecipeInformation, RecipeSummary, SearchResponse,
};

/// A recipe that takes longer to load than any other.
pub(crate) const SLOW_RECIPE_ID: RecipeId = 1;

const API_KEY: &str = "test-key";
const SLOW_RESPONSE_DELAY: Duration = Duration::from_millis(200);

/// Start the mock API and return its base URL, e.g. "http://127.0.0.1:45678".
pub(crate) async fn spawn_mock_recipe_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind mock recipe API");
    let address = listener
        .local_addr()
        .expect("could not get mock recipe API address");

    let app = Router::new()
        .route("/recipes/search", get(search))
        .route("/recipes/{id}/information", get(information));

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock recipe API stopped");
    });

    format!("http://{address}")
}

fn has_valid_key(params: &HashMap<String, String>) -> bool {
    params.get("apiKey").map(String::as_str) == Some(API_KEY)
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    if !has_valid_key(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let query = params.get("query").cloned().unwrap_or_default();

    if query == "fail" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    if query.starts_with("slow") {
        tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    }

    let number = params
        .get("number")
        .and_then(|number| number.parse().ok())
        .unwrap_or(10);

    let results = (1..=number)
        .map(|id| RecipeSummary {
            id,
            title: format!("{query} {id}"),
            ready_in_minutes: 30,
        })
        .collect();

    Json(SearchResponse { results }).into_response()
}

async fn information(
    Path(id): Path<RecipeId>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !has_valid_key(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if id == 404 {
        return StatusCode::NOT_FOUND.into_response();
    }

    if id == SLOW_RECIPE_ID {
        tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    }

    Json(RecipeInformation {
        id,
        title: format!("Recipe {id}"),
        source_name: "Test Kitchen".to_owned(),
        image: format!("https://img.example.com/recipes/{id}.jpg"),
        source_url: format!("https://example.com/recipes/{id}"),
        extended_ingredients: vec![
            ApiIngredient {
                amount: Some(1.5),
                unit: "cup".to_owned(),
                name: "flour".to_owned(),
                original: Some("1 1/2 cups flour".to_owned()),
            },
            ApiIngredient {
                amount: None,
                unit: String::new(),
                name: String::new(),
                original: Some("2 tablespoons butter".to_owned()),
            },
            ApiIngredient {
                amount: Some(3.0),
                unit: String::new(),
                name: "eggs".to_owned(),
                original: None,
            },
        ],
        ready_in_minutes: 45,
        servings: 4,
    })
    .into_response()
}
