//! Liked recipes, kept across restarts in the key-value store.

mod model;
mod page;
mod toggle;

pub use model::{LIKES_KEY, LikedRecipe, Likes};
pub use page::get_likes_page;
pub use toggle::{like_button_view, toggle_like_endpoint};
