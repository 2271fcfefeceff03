//! Endpoint for changing the amount of a shopping list item.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    app_state::lock,
    shopping_list::page::{ShoppingListState, shopping_list_row_view},
};

#[derive(Debug, Deserialize)]
pub struct AmountForm {
    pub amount: f64,
}

/// Set an item's amount and respond with the updated row.
pub async fn update_shopping_list_item_endpoint(
    Path(item_id): Path<String>,
    State(state): State<ShoppingListState>,
    Form(form): Form<AmountForm>,
) -> Response {
    match update_amount(&state, &item_id, form.amount) {
        Ok(response) => response,
        Err(error) => error.into_alert_response(),
    }
}

fn update_amount(state: &ShoppingListState, item_id: &str, amount: f64) -> Result<Response, Error> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount(amount));
    }

    let mut shopping_list = lock(&state.shopping_list)?;
    let item = shopping_list
        .update_amount(item_id, amount)
        .ok_or(Error::NotFound)?;

    Ok(shopping_list_row_view(item).into_response())
}
