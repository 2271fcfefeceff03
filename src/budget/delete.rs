//! Budget item deletion endpoint.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::lock,
    budget::{
        BudgetItemId, ItemKind,
        page::{BudgetState, budget_content_view},
    },
};

/// Delete a budget item and respond with the refreshed budget content.
///
/// Deleting an item that does not exist leaves the budget unchanged.
pub async fn delete_budget_item_endpoint(
    Path((kind, item_id)): Path<(String, BudgetItemId)>,
    State(state): State<BudgetState>,
) -> Response {
    match delete_budget_item(&state, &kind, item_id) {
        Ok(response) => response,
        Err(error) => error.into_alert_response(),
    }
}

fn delete_budget_item(
    state: &BudgetState,
    kind: &str,
    item_id: BudgetItemId,
) -> Result<Response, Error> {
    let kind = ItemKind::from_str(kind)?;

    let mut budget = lock(&state.budget)?;
    if !budget.delete_item(kind, item_id) {
        tracing::warn!("tried to delete missing {kind} item {item_id}");
    }
    budget.recalculate();
    budget.recalculate_percentages();

    Ok(budget_content_view(&budget).into_response())
}
