//! Recipe search: the recipes page, the search endpoint and result paging.

mod endpoint;
mod model;
mod page;

pub use endpoint::{search_endpoint, search_page_endpoint};
pub use model::{RECIPE_TITLE_LIMIT, Search, limit_recipe_title};
pub use page::get_recipes_page;
pub(crate) use page::{recipes_page_view, search_results_view};
