//! Viewing a recipe: loading it, scaling its servings and showing its ingredients.

mod ingredient;
mod model;
mod page;
mod servings;

pub use ingredient::{Ingredient, format_count, parse_ingredient};
pub use model::{Recipe, ServingsChange};
pub use page::get_recipe_page;
pub use servings::update_servings_endpoint;
