//! Endpoint for liking and unliking the current recipe.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    app_state::lock,
    endpoints,
    likes::{LikedRecipe, Likes},
    navigation::NavBar,
    recipe::Recipe,
};

/// The state needed for toggling a like.
#[derive(Debug, Clone)]
pub struct LikeToggleState {
    pub recipe: Arc<Mutex<Option<Recipe>>>,
    pub likes: Arc<Mutex<Likes>>,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LikeToggleState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            recipe: state.recipe.clone(),
            likes: state.likes.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Like the current recipe, or unlike it if it is already liked.
///
/// Responds with the updated like button and the navigation links, which
/// gain or lose the likes link as the number of likes changes.
pub async fn toggle_like_endpoint(State(state): State<LikeToggleState>) -> Response {
    match toggle_like(&state) {
        Ok(response) => response,
        Err(error) => error.into_alert_response(),
    }
}

fn toggle_like(state: &LikeToggleState) -> Result<Response, Error> {
    let recipe = lock(&state.recipe)?;
    let recipe = recipe.as_ref().ok_or(Error::MissingRecipe)?;
    let mut likes = lock(&state.likes)?;
    let connection = lock(&state.db_connection)?;

    if likes.is_liked(recipe.id()) {
        likes.delete_like(recipe.id(), &connection)?;
        tracing::debug!("unliked recipe {}", recipe.id());
    } else {
        likes.add_like(
            LikedRecipe {
                id: recipe.id(),
                title: recipe.title().to_owned(),
                author: recipe.author().to_owned(),
                image: recipe.image_url().to_owned(),
            },
            &connection,
        )?;
        tracing::debug!("liked recipe {}", recipe.id());
    }

    let is_liked = likes.is_liked(recipe.id());
    let nav_links = NavBar::new(endpoints::RECIPES_VIEW, likes.count() > 0).into_oob_html();

    Ok(html! {
        (like_button_view(is_liked))
        (nav_links)
    }
    .into_response())
}

/// The button that toggles whether the current recipe is liked.
pub fn like_button_view(is_liked: bool) -> Markup {
    let (label, icon) = if is_liked {
        ("Unlike", "♥")
    } else {
        ("Like", "♡")
    };

    html! {
        button
            id="like-button"
            hx-post=(endpoints::LIKE_RECIPE)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            aria-label=(label)
            aria-pressed=(is_liked)
            class="text-3xl text-red-500 hover:scale-110 transition-transform"
        {
            (icon)
        }
    }
}

#[cfg(test)]
mod toggle_like_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        db::initialize,
        likes::Likes,
        recipe::Recipe,
        recipe_api::RecipeInformation,
        test_utils::{assert_status_ok, parse_html_fragment},
    };

    use super::{LikeToggleState, toggle_like_endpoint};

    fn get_state(recipe: Option<Recipe>) -> LikeToggleState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        LikeToggleState {
            recipe: Arc::new(Mutex::new(recipe)),
            likes: Arc::new(Mutex::new(Likes::default())),
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn recipe() -> Recipe {
        Recipe::from_information(RecipeInformation {
            id: 9,
            title: "Pea Soup".to_owned(),
            source_name: "Anna".to_owned(),
            image: "pea.jpg".to_owned(),
            source_url: "https://example.com/pea".to_owned(),
            extended_ingredients: Vec::new(),
            ready_in_minutes: 30,
            servings: 2,
        })
    }

    #[tokio::test]
    async fn like_then_unlike() {
        let state = get_state(Some(recipe()));

        let response = toggle_like_endpoint(State(state.clone())).await;
        assert_status_ok(&response);
        assert!(state.likes.lock().unwrap().is_liked(9));

        let html = parse_html_fragment(response).await;
        let button = html
            .select(&Selector::parse("#like-button").unwrap())
            .next()
            .expect("No like button found");
        assert_eq!(button.value().attr("aria-pressed"), Some("true"));
        let nav_links = html
            .select(&Selector::parse("#nav-links a").unwrap())
            .count();
        assert_eq!(nav_links, 4);

        toggle_like_endpoint(State(state.clone())).await;
        assert!(!state.likes.lock().unwrap().is_liked(9));
        assert_eq!(state.likes.lock().unwrap().count(), 0);
    }

    #[tokio::test]
    async fn like_is_persisted() {
        let state = get_state(Some(recipe()));

        toggle_like_endpoint(State(state.clone())).await;

        let connection = state.db_connection.lock().unwrap();
        assert!(Likes::load(&connection).unwrap().is_liked(9));
    }

    #[tokio::test]
    async fn without_recipe_is_not_found() {
        let state = get_state(None);

        let response = toggle_like_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
