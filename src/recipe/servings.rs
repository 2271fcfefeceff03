//! Endpoint for changing the current recipe's servings.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    app_state::lock,
    recipe::{Recipe, ServingsChange, page::recipe_details_view},
};

/// The state needed for changing servings.
#[derive(Debug, Clone)]
pub struct ServingsState {
    pub recipe: Arc<Mutex<Option<Recipe>>>,
}

impl FromRef<AppState> for ServingsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            recipe: state.recipe.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServingsForm {
    pub direction: ServingsChange,
}

/// Add or remove a serving and respond with the rescaled ingredients.
///
/// Decreasing a one-serving recipe leaves it unchanged.
pub async fn update_servings_endpoint(
    State(state): State<ServingsState>,
    Form(form): Form<ServingsForm>,
) -> Response {
    match update_servings(&state, form.direction) {
        Ok(response) => response,
        Err(error) => error.into_alert_response(),
    }
}

fn update_servings(state: &ServingsState, change: ServingsChange) -> Result<Response, Error> {
    let mut recipe = lock(&state.recipe)?;
    let recipe = recipe.as_mut().ok_or(Error::MissingRecipe)?;

    match recipe.update_servings(change) {
        Ok(servings) => tracing::debug!("recipe {} now serves {servings}", recipe.id()),
        Err(Error::InvalidServings) => {
            tracing::debug!("ignoring decrease of one-serving recipe {}", recipe.id())
        }
        Err(error) => return Err(error),
    }

    Ok(recipe_details_view(recipe).into_response())
}
