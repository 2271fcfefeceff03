//! The recipe page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState, Error, PaginationConfig,
    app_state::lock,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, LINK_STYLE},
    likes::{Likes, like_button_view},
    recipe::{Recipe, ServingsChange, format_count},
    recipe_api::{RecipeClient, RecipeId},
    request_sequence::RequestSequence,
    search::{Search, recipes_page_view, search_results_view},
};

/// The state needed for the recipe page.
#[derive(Debug, Clone)]
pub struct RecipePageState {
    pub search: Arc<Mutex<Option<Search>>>,
    pub recipe: Arc<Mutex<Option<Recipe>>>,
    pub likes: Arc<Mutex<Likes>>,
    pub recipe_client: RecipeClient,
    pub recipe_requests: Arc<RequestSequence>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for RecipePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            search: state.search.clone(),
            recipe: state.recipe.clone(),
            likes: state.likes.clone(),
            recipe_client: state.recipe_client.clone(),
            recipe_requests: state.recipe_requests.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Load a recipe from the recipe API, make it the current recipe and render it
/// next to the search results.
///
/// HTMX requests get just the recipe panel, with the search results swapped
/// out of band so the new recipe is highlighted. If another recipe was
/// requested while this one was loading, this recipe does not replace the
/// current recipe and HTMX requests get an empty response so the newer recipe
/// stays on screen.
pub async fn get_recipe_page(
    Path(recipe_id): Path<RecipeId>,
    HxRequest(is_htmx_request): HxRequest,
    State(state): State<RecipePageState>,
) -> Result<Response, Error> {
    let ticket = state.recipe_requests.issue();

    let recipe = match Recipe::fetch(recipe_id, &state.recipe_client).await {
        Ok(recipe) => recipe,
        Err(error) => {
            tracing::error!("could not load recipe {recipe_id}: {error}");

            if is_htmx_request {
                return Ok(error.into_alert_response());
            }

            return Err(error);
        }
    };

    let search = lock(&state.search)?;
    let mut current = lock(&state.recipe)?;
    let likes = lock(&state.likes)?;
    let is_latest = state.recipe_requests.is_latest(ticket);

    if is_htmx_request && !is_latest {
        tracing::debug!("discarding stale recipe {recipe_id}");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let results = search_results_view(
        search.as_ref(),
        state.pagination_config.default_page,
        state.pagination_config.results_per_page,
        Some(recipe.id()),
    );
    let recipe_panel = recipe_view(&recipe, likes.is_liked(recipe.id()));

    let page = if is_htmx_request {
        html! {
            (recipe_panel)
            div id="search-results" hx-swap-oob="true" { (results) }
        }
    } else {
        recipes_page_view(
            search.as_ref().map(Search::query),
            results,
            recipe_panel,
            likes.count() > 0,
        )
    };

    if is_latest {
        *current = Some(recipe);
    } else {
        tracing::debug!("discarding stale recipe {recipe_id}");
    }

    Ok(page.into_response())
}

fn recipe_view(recipe: &Recipe, is_liked: bool) -> Markup {
    html! {
        article id="recipe-view" data-recipe-id=(recipe.id())
        {
            figure class="relative mb-6"
            {
                img
                    src=(recipe.image_url())
                    alt=(recipe.title())
                    class="w-full h-64 object-cover rounded";
                h1 id="recipe-title" class="text-3xl font-bold mt-4 uppercase" { (recipe.title()) }
            }

            div class="flex flex-row items-center justify-between mb-6"
            {
                p { span id="recipe-cooking-time" { (recipe.cooking_time()) } " minutes" }
                (like_button_view(is_liked))
            }

            div id="recipe-details" { (recipe_details_view(recipe)) }

            button
                hx-post=(endpoints::POST_SHOPPING_LIST)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                class=(BUTTON_PRIMARY_STYLE)
            {
                "Add to shopping list"
            }

            section class="mt-8"
            {
                h2 class="text-xl font-semibold mb-2" { "How to cook it" }
                p
                {
                    "This recipe was carefully designed and tested by "
                    span class="font-semibold" { (recipe.author()) }
                    ". Please check out directions at their website."
                }
                a href=(recipe.source_url()) target="_blank" class=(LINK_STYLE) { "Directions" }
            }
        }
    }
}

/// The servings controls and the scaled ingredient list.
pub(super) fn recipe_details_view(recipe: &Recipe) -> Markup {
    html! {
        div class="flex flex-row items-center gap-2 mb-4"
        {
            span id="recipe-servings" class="font-semibold" { (recipe.servings()) }
            " servings"

            (servings_button_view(ServingsChange::Decrease, recipe.servings() <= 1))
            (servings_button_view(ServingsChange::Increase, false))
        }

        ul id="recipe-ingredients" class="grid grid-cols-2 gap-2 mb-6"
        {
            @for ingredient in recipe.ingredients() {
                li
                {
                    span class="font-semibold" { (format_count(ingredient.amount)) }
                    " "
                    @if !ingredient.unit.is_empty() {
                        (ingredient.unit) " "
                    }
                    (ingredient.name)
                }
            }
        }
    }
}

fn servings_button_view(change: ServingsChange, disabled: bool) -> Markup {
    let (direction, label) = match change {
        ServingsChange::Increase => ("increase", "+"),
        ServingsChange::Decrease => ("decrease", "-"),
    };

    html! {
        button
            id={ "servings-" (direction) }
            hx-post=(endpoints::RECIPE_SERVINGS)
            hx-vals={ r#"{"direction": ""# (direction) r#""}"# }
            hx-target="#recipe-details"
            hx-target-error="#alert-container"
            disabled[disabled]
            aria-label={ (direction) " servings" }
            class=(BUTTON_SECONDARY_STYLE)
        {
            (label)
        }
    }
}

#[cfg(test)]
mod recipe_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use axum_htmx::HxRequest;
    use scraper::Selector;

    use crate::{
        PaginationConfig, RecipeApiConfig,
        likes::Likes,
        recipe_api::RecipeClient,
        request_sequence::RequestSequence,
        test_utils::{
            SLOW_RECIPE_ID, assert_status_ok, assert_valid_html, parse_html_document,
            parse_html_fragment, spawn_mock_recipe_api, text_of,
        },
    };

    use super::{RecipePageState, get_recipe_page};

    async fn get_state() -> RecipePageState {
        let base_url = spawn_mock_recipe_api().await;

        RecipePageState {
            search: Arc::new(Mutex::new(None)),
            recipe: Arc::new(Mutex::new(None)),
            likes: Arc::new(Mutex::new(Likes::default())),
            recipe_client: RecipeClient::new(RecipeApiConfig::new(&base_url, "test-key")),
            recipe_requests: Arc::new(RequestSequence::new()),
            pagination_config: PaginationConfig::default(),
        }
    }

    #[tokio::test]
    async fn render_recipe() {
        let state = get_state().await;

        let response = get_recipe_page(Path(7), HxRequest(false), State(state.clone()))
            .await
            .expect("could not get recipe page");

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(text_of(&html, "#recipe-title"), "Recipe 7");
        assert_eq!(text_of(&html, "#recipe-servings"), "4");
        assert_eq!(
            html.select(&Selector::parse("#recipe-ingredients li").unwrap())
                .count(),
            3
        );
        assert!(text_of(&html, "#recipe-ingredients").contains("1 1/2 cup flour"));
        assert_eq!(
            state.recipe.lock().unwrap().as_ref().map(|r| r.id()),
            Some(7)
        );
    }

    #[tokio::test]
    async fn unreachable_recipe_shows_error_page() {
        let state = get_state().await;

        let result = get_recipe_page(Path(404), HxRequest(false), State(state.clone())).await;

        let response = result.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.recipe.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn slow_older_request_does_not_replace_newer_recipe() {
        let state = get_state().await;

        let (slow, fast) = tokio::join!(
            get_recipe_page(Path(SLOW_RECIPE_ID), HxRequest(false), State(state.clone())),
            get_recipe_page(Path(2), HxRequest(false), State(state.clone())),
        );

        assert!(slow.is_ok());
        assert!(fast.is_ok());
        assert_eq!(
            state.recipe.lock().unwrap().as_ref().map(|r| r.id()),
            Some(2)
        );
    }

    #[tokio::test]
    async fn htmx_request_gets_recipe_panel_and_results() {
        let state = get_state().await;

        let response = get_recipe_page(Path(7), HxRequest(true), State(state))
            .await
            .expect("could not get recipe panel");

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert!(html.select(&Selector::parse("nav").unwrap()).next().is_none());
        assert_eq!(text_of(&html, "#recipe-title"), "Recipe 7");
        let results = html
            .select(&Selector::parse("#search-results").unwrap())
            .next()
            .expect("No search results found");
        assert_eq!(results.value().attr("hx-swap-oob"), Some("true"));
    }

    #[tokio::test]
    async fn stale_htmx_request_is_not_swapped_in() {
        let state = get_state().await;

        let (slow, fast) = tokio::join!(
            get_recipe_page(Path(SLOW_RECIPE_ID), HxRequest(true), State(state.clone())),
            get_recipe_page(Path(2), HxRequest(true), State(state.clone())),
        );

        assert_eq!(slow.unwrap().status(), StatusCode::NO_CONTENT);
        assert_eq!(fast.unwrap().status(), StatusCode::OK);
        assert_eq!(
            state.recipe.lock().unwrap().as_ref().map(|r| r.id()),
            Some(2)
        );
    }

    #[tokio::test]
    async fn unreachable_recipe_htmx_request_gets_alert() {
        let state = get_state().await;

        let response = get_recipe_page(Path(404), HxRequest(true), State(state))
            .await
            .expect("htmx errors should be alerts");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
