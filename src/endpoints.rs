//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/recipes/{recipe_id}', use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the budget page.
pub const ROOT: &str = "/";
/// The page for the monthly budget.
pub const BUDGET_VIEW: &str = "/budget";
/// The page for searching recipes.
pub const RECIPES_VIEW: &str = "/recipes";
/// The page for a single recipe.
pub const RECIPE_VIEW: &str = "/recipes/{recipe_id}";
/// The page for the shopping list.
pub const SHOPPING_LIST_VIEW: &str = "/shopping-list";
/// The page for liked recipes.
pub const LIKES_VIEW: &str = "/likes";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to add an income or expense.
pub const POST_BUDGET_ITEM: &str = "/api/budget/items";
/// The route to delete an income or expense.
pub const DELETE_BUDGET_ITEM: &str = "/api/budget/items/{kind}/{item_id}";
/// The route to run a search (POST) or page through its results (GET).
pub const SEARCH_API: &str = "/api/search";
/// The route to change the servings of the current recipe.
pub const RECIPE_SERVINGS: &str = "/api/recipe/servings";
/// The route to like or unlike the current recipe.
pub const LIKE_RECIPE: &str = "/api/recipe/like";
/// The route to add the current recipe's ingredients to the shopping list.
pub const POST_SHOPPING_LIST: &str = "/api/shopping-list";
/// The route to update or delete a shopping list item.
pub const SHOPPING_LIST_ITEM: &str = "/api/shopping-list/{item_id}";

/// Replace the first parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/recipes/{recipe_id}', '{recipe_id}' is the parameter.
/// Endpoints with several parameters are filled in by calling this function
/// once per parameter, left to right.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let Some(param_end) = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
    else {
        return endpoint_path.to_owned();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
