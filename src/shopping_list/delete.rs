//! Endpoint for removing a shopping list item.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::lock, shopping_list::page::ShoppingListState};

/// Remove an item. Responds with an empty body so the row is swapped out.
///
/// Deleting an item that does not exist is not an error.
pub async fn delete_shopping_list_item_endpoint(
    Path(item_id): Path<String>,
    State(state): State<ShoppingListState>,
) -> Response {
    let mut shopping_list = match lock(&state.shopping_list) {
        Ok(shopping_list) => shopping_list,
        Err(error) => return error.into_alert_response(),
    };

    if !shopping_list.delete_item(&item_id) {
        tracing::warn!("tried to delete missing shopping list item {item_id}");
    }

    StatusCode::OK.into_response()
}
