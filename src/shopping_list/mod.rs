//! The shopping list: ingredients added from recipes, with editable amounts.

mod create;
mod delete;
mod edit;
mod model;
mod page;

pub use create::add_recipe_to_shopping_list_endpoint;
pub use delete::delete_shopping_list_item_endpoint;
pub use edit::update_shopping_list_item_endpoint;
pub use model::{ShoppingList, ShoppingListItem};
pub use page::get_shopping_list_page;
