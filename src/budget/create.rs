//! Budget item creation endpoint.

use std::str::FromStr;

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::lock,
    budget::{
        BudgetItemFormData, ItemDescription, ItemKind, ItemValue,
        page::{BudgetState, budget_content_view},
    },
};

/// Handle the add item form.
///
/// Responds with the refreshed budget content, or an alert if the form is invalid.
pub async fn create_budget_item_endpoint(
    State(state): State<BudgetState>,
    Form(form): Form<BudgetItemFormData>,
) -> Response {
    match create_budget_item(&state, &form) {
        Ok(response) => response,
        Err(error) => error.into_alert_response(),
    }
}

fn create_budget_item(state: &BudgetState, form: &BudgetItemFormData) -> Result<Response, Error> {
    let kind = ItemKind::from_str(&form.kind)?;
    let description = ItemDescription::new(&form.description)?;
    let value = ItemValue::new(form.value)?;

    let mut budget = lock(&state.budget)?;
    let item = budget.add_item(kind, description, value);
    budget.recalculate();
    budget.recalculate_percentages();

    tracing::debug!("added {} item {}: {}", item.kind, item.id, item.description);

    Ok(budget_content_view(&budget).into_response())
}
