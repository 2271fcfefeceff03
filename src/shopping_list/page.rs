//! The shopping list page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    likes::Likes,
    navigation::NavBar,
    recipe::Recipe,
    shopping_list::{ShoppingList, ShoppingListItem},
};

/// The state needed for the shopping list page and its endpoints.
#[derive(Debug, Clone)]
pub struct ShoppingListState {
    pub recipe: Arc<Mutex<Option<Recipe>>>,
    pub likes: Arc<Mutex<Likes>>,
    pub shopping_list: Arc<Mutex<ShoppingList>>,
}

impl FromRef<AppState> for ShoppingListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            recipe: state.recipe.clone(),
            likes: state.likes.clone(),
            shopping_list: state.shopping_list.clone(),
        }
    }
}

/// Render the shopping list.
pub async fn get_shopping_list_page(
    State(state): State<ShoppingListState>,
) -> Result<Response, Error> {
    let show_likes = lock(&state.likes)?.count() > 0;
    let shopping_list = lock(&state.shopping_list)?;

    Ok(shopping_list_view(&shopping_list, show_likes).into_response())
}

fn shopping_list_view(shopping_list: &ShoppingList, show_likes: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::SHOPPING_LIST_VIEW, show_likes).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Shopping List" }

            @if shopping_list.items().is_empty() {
                p class="text-gray-500 mb-4"
                {
                    "Your shopping list is empty. Add ingredients from a "
                    a href=(endpoints::RECIPES_VIEW) class=(LINK_STYLE) { "recipe" }
                    "."
                }
            }

            table class="w-full max-w-2xl text-sm text-left"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Unit" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Ingredient" }
                        th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Delete" } }
                    }
                }

                tbody id="shopping-list"
                {
                    @for item in shopping_list.items() {
                        (shopping_list_row_view(item))
                    }
                }
            }
        }
    };

    base("Shopping List", &content)
}

/// A table row with an editable amount and a delete button.
pub(super) fn shopping_list_row_view(item: &ShoppingListItem) -> Markup {
    let item_url = format_endpoint(endpoints::SHOPPING_LIST_ITEM, &item.id);

    html! {
        tr id={ "item-" (item.id) } class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="amount"
                    value=(item.amount)
                    min="0"
                    step="any"
                    aria-label={ "Amount of " (item.name) }
                    hx-put=(item_url)
                    hx-trigger="change"
                    hx-target="closest tr"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class=(FORM_TEXT_INPUT_STYLE);
            }
            td class=(TABLE_CELL_STYLE) { (item.unit) }
            td class=(TABLE_CELL_STYLE) { (item.name) }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    hx-delete=(item_url)
                    hx-target="closest tr"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
