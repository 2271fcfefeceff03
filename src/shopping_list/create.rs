//! Endpoint for adding the current recipe's ingredients to the shopping list.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{Error, alert::Alert, app_state::lock, shopping_list::page::ShoppingListState};

/// Add every ingredient of the current recipe to the shopping list.
pub async fn add_recipe_to_shopping_list_endpoint(
    State(state): State<ShoppingListState>,
) -> Response {
    match add_recipe_to_shopping_list(&state) {
        Ok(alert) => alert.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn add_recipe_to_shopping_list(state: &ShoppingListState) -> Result<Alert, Error> {
    let recipe = lock(&state.recipe)?;
    let recipe = recipe.as_ref().ok_or(Error::MissingRecipe)?;
    let mut shopping_list = lock(&state.shopping_list)?;

    let added = shopping_list.add_ingredients(recipe.ingredients());

    tracing::debug!(
        "added {} ingredients from recipe {} to the shopping list",
        added.len(),
        recipe.id()
    );

    Ok(Alert::Success {
        message: "Added to shopping list".to_owned(),
        details: format!("{} ingredients from {}.", added.len(), recipe.title()),
    })
}
