//! The recipes page layout and the search results fragment.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, PaginationConfig,
    app_state::lock,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_TEXT_INPUT_STYLE, base, loading_spinner},
    likes::Likes,
    navigation::NavBar,
    pagination::{PageButton, create_page_buttons},
    recipe_api::{RecipeId, RecipeSummary},
    search::{Search, limit_recipe_title},
};

/// The state needed for the recipes page.
#[derive(Debug, Clone)]
pub struct RecipesPageState {
    pub search: Arc<Mutex<Option<Search>>>,
    pub likes: Arc<Mutex<Likes>>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for RecipesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            search: state.search.clone(),
            likes: state.likes.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the recipes page with the last search's results and no recipe open.
pub async fn get_recipes_page(State(state): State<RecipesPageState>) -> Result<Response, Error> {
    let search = lock(&state.search)?;
    let show_likes = lock(&state.likes)?.count() > 0;

    let results = search_results_view(
        search.as_ref(),
        state.pagination_config.default_page,
        state.pagination_config.results_per_page,
        None,
    );
    let recipe_panel = html! {
        p class="text-gray-500 text-center mt-8" { "Search for a recipe to get started." }
    };

    Ok(recipes_page_view(
        search.as_ref().map(Search::query),
        results,
        recipe_panel,
        show_likes,
    )
    .into_response())
}

/// The search bar, the results column and the recipe panel.
pub(crate) fn recipes_page_view(
    query: Option<&str>,
    results: Markup,
    recipe_panel: Markup,
    show_likes: bool,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECIPES_VIEW, show_likes).into_html();

    let content = html! {
        (nav_bar)

        div class="px-6 py-4 text-gray-900 dark:text-white"
        {
            form
                hx-post=(endpoints::SEARCH_API)
                hx-target="#search-results"
                hx-target-error="#alert-container"
                hx-indicator="#search-spinner"
                hx-sync="this:replace"
                class="flex flex-row gap-2 max-w-xl mx-auto mb-6"
            {
                input
                    id="query"
                    type="text"
                    name="query"
                    placeholder="Search over 1,000,000 recipes..."
                    value=[query]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                div class="w-32"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Search" }
                }

                span id="search-spinner" class="htmx-indicator" { (loading_spinner()) }
            }

            div class="grid grid-cols-1 lg:grid-cols-3 gap-6"
            {
                div id="search-results" { (results) }

                div class="lg:col-span-2"
                {
                    span id="recipe-spinner" class="htmx-indicator" { (loading_spinner()) }
                    div id="recipe" { (recipe_panel) }
                }
            }
        }
    };

    base("Recipes", &content)
}

/// One page of search results followed by the back/next buttons.
///
/// `active_recipe` is highlighted if it is on the page.
pub(crate) fn search_results_view(
    search: Option<&Search>,
    page: u64,
    per_page: u64,
    active_recipe: Option<RecipeId>,
) -> Markup {
    let Some(search) = search else {
        return html! {};
    };

    let results = search.results_page(page, per_page);
    let page_buttons = create_page_buttons(page, search.page_count(per_page));

    html! {
        @if search.results().is_empty() {
            p class="text-gray-500" { "No recipes found for \"" (search.query()) "\"." }
        }

        ul id="results-list" class="divide-y divide-gray-200 dark:divide-gray-700"
        {
            @for result in results {
                (search_result_view(result, active_recipe == Some(result.id)))
            }
        }

        div class="flex flex-row justify-between mt-4"
        {
            @for button in page_buttons {
                (page_button_view(button))
            }
        }
    }
}

fn search_result_view(result: &RecipeSummary, is_active: bool) -> Markup {
    let style = if is_active {
        "block px-4 py-2 bg-blue-100 dark:bg-gray-700"
    } else {
        "block px-4 py-2 hover:bg-gray-100 dark:hover:bg-gray-800"
    };
    let recipe_url = format_endpoint(endpoints::RECIPE_VIEW, result.id);

    html! {
        li
        {
            a
                href=(recipe_url)
                hx-get=(recipe_url)
                hx-target="#recipe"
                hx-push-url="true"
                hx-indicator="#recipe-spinner"
                hx-target-error="#alert-container"
                class=(style)
                aria-current=[is_active.then_some("page")]
            {
                h4 class="font-semibold uppercase text-blue-600 dark:text-blue-500"
                {
                    (limit_recipe_title(&result.title))
                }
                p class="text-sm text-gray-500" { (result.ready_in_minutes) " minutes" }
            }
        }
    }
}

fn page_button_view(button: PageButton) -> Markup {
    let (page, label, id) = match button {
        PageButton::Back(page) => (page, format!("◀ Page {page}"), "page-back"),
        PageButton::Next(page) => (page, format!("Page {page} ▶"), "page-next"),
    };

    html! {
        button
            id=(id)
            hx-get={ (endpoints::SEARCH_API) "?page=" (page) }
            hx-target="#search-results"
            class=(BUTTON_SECONDARY_STYLE)
        {
            (label)
        }
    }
}
