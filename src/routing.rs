//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{create_budget_item_endpoint, delete_budget_item_endpoint, get_budget_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    likes::{get_likes_page, toggle_like_endpoint},
    not_found::get_404_not_found,
    recipe::{get_recipe_page, update_servings_endpoint},
    search::{get_recipes_page, search_endpoint, search_page_endpoint},
    shopping_list::{
        add_recipe_to_shopping_list_endpoint, delete_shopping_list_item_endpoint,
        get_shopping_list_page, update_shopping_list_item_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BUDGET_VIEW, get(get_budget_page))
        .route(endpoints::RECIPES_VIEW, get(get_recipes_page))
        .route(endpoints::RECIPE_VIEW, get(get_recipe_page))
        .route(endpoints::SHOPPING_LIST_VIEW, get(get_shopping_list_page))
        .route(endpoints::LIKES_VIEW, get(get_likes_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::POST_BUDGET_ITEM, post(create_budget_item_endpoint))
        .route(
            endpoints::DELETE_BUDGET_ITEM,
            delete(delete_budget_item_endpoint),
        )
        .route(
            endpoints::SEARCH_API,
            post(search_endpoint).get(search_page_endpoint),
        )
        .route(endpoints::RECIPE_SERVINGS, post(update_servings_endpoint))
        .route(endpoints::LIKE_RECIPE, post(toggle_like_endpoint))
        .route(
            endpoints::POST_SHOPPING_LIST,
            post(add_recipe_to_shopping_list_endpoint),
        )
        .route(
            endpoints::SHOPPING_LIST_ITEM,
            put(update_shopping_list_item_endpoint).delete(delete_shopping_list_item_endpoint),
        );

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the budget page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BUDGET_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_budget() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::BUDGET_VIEW);
    }
}
