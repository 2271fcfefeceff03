//! The liked recipes page.

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
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    likes::{LikedRecipe, Likes},
    navigation::NavBar,
    search::limit_recipe_title,
};

/// The state needed for the likes page.
#[derive(Debug, Clone)]
pub struct LikesPageState {
    pub likes: Arc<Mutex<Likes>>,
}

impl FromRef<AppState> for LikesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            likes: state.likes.clone(),
        }
    }
}

/// Render the list of liked recipes.
pub async fn get_likes_page(State(state): State<LikesPageState>) -> Result<Response, Error> {
    let likes = lock(&state.likes)?;

    Ok(likes_view(&likes).into_response())
}

fn likes_view(likes: &Likes) -> Markup {
    let nav_bar = NavBar::new(endpoints::LIKES_VIEW, likes.count() > 0).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Liked Recipes" }

            ul id="likes-list" class="w-full max-w-md divide-y divide-gray-200 dark:divide-gray-700"
            {
                @for like in likes.iter() {
                    (liked_recipe_view(like))
                }
            }

            @if likes.count() == 0 {
                p class="text-gray-500"
                {
                    "You have not liked any recipes yet. Find one on the "
                    a href=(endpoints::RECIPES_VIEW) class=(LINK_STYLE) { "recipes page" }
                    "."
                }
            }
        }
    };

    base("Likes", &content)
}

fn liked_recipe_view(like: &LikedRecipe) -> Markup {
    let recipe_url = format_endpoint(endpoints::RECIPE_VIEW, like.id);

    html! {
        li class="py-2"
        {
            a href=(recipe_url) class="flex flex-row items-center gap-4"
            {
                img src=(like.image) alt=(like.title) class="w-14 h-14 rounded-full object-cover";

                div
                {
                    h4 class="font-semibold uppercase text-blue-600 dark:text-blue-500"
                    {
                        (limit_recipe_title(&like.title))
                    }
                    p class="text-sm text-gray-500" { (like.author) }
                }
            }
        }
    }
}
