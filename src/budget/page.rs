//! The budget page and the budget content fragment shared with the endpoints.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    app_state::lock,
    budget::{Budget, BudgetItem, ItemKind},
    endpoints::{self, format_endpoint},
    html::{
        AmountSign, BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, format_percentage,
        format_signed_currency,
    },
    likes::Likes,
    navigation::NavBar,
};

/// The state needed for the budget page and its endpoints.
#[derive(Debug, Clone)]
pub struct BudgetState {
    pub budget: Arc<Mutex<Budget>>,
    pub likes: Arc<Mutex<Likes>>,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budget: state.budget.clone(),
            likes: state.likes.clone(),
        }
    }
}

/// Render the budget page for the current month.
pub async fn get_budget_page(State(state): State<BudgetState>) -> Result<Response, Error> {
    let show_likes = lock(&state.likes)?.count() > 0;
    let budget = lock(&state.budget)?;
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    Ok(budget_view(&budget, today, show_likes).into_response())
}

/// The month and year the budget is for, e.g. "October 2026".
fn budget_month_label(date: Date) -> String {
    format!("{} {}", date.month(), date.year())
}

fn budget_view(budget: &Budget, today: Date, show_likes: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGET_VIEW, show_likes).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4"
            {
                "Available Budget in "
                span id="budget-month" { (budget_month_label(today)) }
            }

            (budget_item_form())

            div id="budget-content" class="w-full max-w-4xl"
            {
                (budget_content_view(budget))
            }
        }
    };

    base("Budget", &content)
}

fn budget_item_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_BUDGET_ITEM)
            hx-target="#budget-content"
            hx-target-error="#alert-container"
            hx-on::after-request="if (event.detail.successful) this.reset()"
            class="w-full max-w-4xl flex flex-row gap-2 items-end mb-6"
        {
            div
            {
                label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(ItemKind::Income.code()) { "+" }
                    option value=(ItemKind::Expense.code()) { "-" }
                }
            }

            div class="grow"
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Add description"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="value" class=(FORM_LABEL_STYLE) { "Value" }
                input
                    id="value"
                    type="number"
                    name="value"
                    placeholder="Value"
                    min="0.01"
                    step="0.01"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
            }
        }
    }
}

/// The summary and both item lists, swapped in after every change.
pub(super) fn budget_content_view(budget: &Budget) -> Markup {
    let summary = budget.summary();
    let budget_sign = if summary.budget >= 0.0 {
        AmountSign::Plus
    } else {
        AmountSign::Minus
    };

    html! {
        section id="budget-summary" class="mb-6 text-center"
        {
            p id="budget-value" class="text-4xl font-semibold mb-4"
            {
                (format_signed_currency(summary.budget, budget_sign))
            }

            div class="flex flex-row justify-center gap-4"
            {
                div class="px-4 py-2 rounded bg-teal-100 dark:bg-teal-900"
                {
                    span { "Income " }
                    span id="budget-income-value"
                    {
                        (format_signed_currency(summary.total_income, AmountSign::Plus))
                    }
                }

                div class="px-4 py-2 rounded bg-red-100 dark:bg-red-900"
                {
                    span { "Expenses " }
                    span id="budget-expenses-value"
                    {
                        (format_signed_currency(summary.total_expense, AmountSign::Minus))
                    }
                    " "
                    span id="budget-expenses-percentage" class="text-sm"
                    {
                        (format_percentage(summary.percentage))
                    }
                }
            }
        }

        div class="grid grid-cols-1 md:grid-cols-2 gap-8"
        {
            (item_list_view(budget, ItemKind::Income))
            (item_list_view(budget, ItemKind::Expense))
        }
    }
}

fn item_list_view(budget: &Budget, kind: ItemKind) -> Markup {
    let (title, list_id) = match kind {
        ItemKind::Income => ("Income", "income-list"),
        ItemKind::Expense => ("Expenses", "expenses-list"),
    };
    let items = budget.items(kind);

    html! {
        div
        {
            h2 class="text-lg font-semibold uppercase mb-2" { (title) }

            ul id=(list_id) class="divide-y divide-gray-200 dark:divide-gray-700"
            {
                @for item in items {
                    (item_row_view(item))
                }

                @if items.is_empty() {
                    li class="py-2 text-gray-500" { "Nothing here yet" }
                }
            }
        }
    }
}

fn item_row_view(item: &BudgetItem) -> Markup {
    let delete_url = format_endpoint(
        &format_endpoint(endpoints::DELETE_BUDGET_ITEM, item.kind),
        item.id,
    );
    let sign = match item.kind {
        ItemKind::Income => AmountSign::Plus,
        ItemKind::Expense => AmountSign::Minus,
    };

    html! {
        li id={ (item.kind.code()) "-" (item.id) } class="flex flex-row justify-between py-2 gap-4"
        {
            span class="grow" { (item.description) }
            span { (format_signed_currency(item.value, sign)) }

            @if item.kind == ItemKind::Expense {
                span class="text-sm w-12 text-right" { (format_percentage(item.percentage)) }
            }

            button
                hx-delete=(delete_url)
                hx-target="#budget-content"
                hx-target-error="#alert-container"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    }
}

#[cfg(test)]
mod budget_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::{Date, Month};

    use crate::{
        budget::{Budget, ItemDescription, ItemKind, ItemValue},
        endpoints,
        likes::Likes,
        test_utils::{
            assert_content_type, assert_form_input, assert_hx_endpoint, assert_status_ok,
            assert_valid_html, must_get_form, parse_html_document, text_of,
        },
    };

    use super::{BudgetState, budget_content_view, budget_month_label, get_budget_page};

    #[tokio::test]
    async fn render_page() {
        let state = BudgetState {
            budget: Arc::new(Mutex::new(Budget::new())),
            likes: Arc::new(Mutex::new(Likes::default())),
        };

        let response = get_budget_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_BUDGET_ITEM, "hx-post");
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "value", "number");
        assert_eq!(text_of(&html, "#budget-value"), "+ $0.00");
        assert_eq!(text_of(&html, "#budget-expenses-percentage"), "---");
    }

    #[test]
    fn month_label_has_month_name_and_year() {
        let date = Date::from_calendar_date(2026, Month::October, 17).unwrap();

        assert_eq!(budget_month_label(date), "October 2026");
    }

    #[test]
    fn content_shows_totals_and_items() {
        let mut budget = Budget::new();
        budget.add_item(
            ItemKind::Income,
            ItemDescription::new("Salary").unwrap(),
            ItemValue::new(2000.0).unwrap(),
        );
        budget.add_item(
            ItemKind::Expense,
            ItemDescription::new("Rent").unwrap(),
            ItemValue::new(500.0).unwrap(),
        );
        budget.recalculate();
        budget.recalculate_percentages();

        let html = Html::parse_fragment(&budget_content_view(&budget).into_string());

        assert_eq!(text_of(&html, "#budget-value"), "+ $1,500.00");
        assert_eq!(text_of(&html, "#budget-income-value"), "+ $2,000.00");
        assert_eq!(text_of(&html, "#budget-expenses-value"), "- $500.00");
        assert_eq!(text_of(&html, "#budget-expenses-percentage"), "25%");
        assert!(text_of(&html, "#inc-0").contains("Salary"));
        assert!(text_of(&html, "#exp-0").contains("25%"));
    }

    #[test]
    fn delete_button_targets_item_endpoint() {
        let mut budget = Budget::new();
        budget.add_item(
            ItemKind::Expense,
            ItemDescription::new("Rent").unwrap(),
            ItemValue::new(500.0).unwrap(),
        );

        let html = Html::parse_fragment(&budget_content_view(&budget).into_string());
        let button = html
            .select(&Selector::parse("#exp-0 button").unwrap())
            .next()
            .expect("No delete button found");

        assert_eq!(
            button.value().attr("hx-delete"),
            Some("/api/budget/items/exp/0")
        );
    }

    #[test]
    fn negative_budget_has_minus_sign() {
        let mut budget = Budget::new();
        budget.add_item(
            ItemKind::Expense,
            ItemDescription::new("Rent").unwrap(),
            ItemValue::new(80.0).unwrap(),
        );
        budget.recalculate();

        let html = Html::parse_fragment(&budget_content_view(&budget).into_string());

        assert_eq!(text_of(&html, "#budget-value"), "- $80.00");
    }
}
