//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    ///
    /// The likes link is only shown when `show_likes` is true, i.e., when
    /// at least one recipe has been liked.
    pub fn new(active_endpoint: &str, show_likes: bool) -> NavBar<'_> {
        let mut links = vec![
            Link {
                url: endpoints::BUDGET_VIEW,
                title: "Budget",
                is_current: active_endpoint == endpoints::BUDGET_VIEW,
            },
            Link {
                url: endpoints::RECIPES_VIEW,
                title: "Recipes",
                is_current: active_endpoint == endpoints::RECIPES_VIEW,
            },
            Link {
                url: endpoints::SHOPPING_LIST_VIEW,
                title: "Shopping List",
                is_current: active_endpoint == endpoints::SHOPPING_LIST_VIEW,
            },
        ];

        if show_likes {
            links.push(Link {
                url: endpoints::LIKES_VIEW,
                title: "Likes",
                is_current: active_endpoint == endpoints::LIKES_VIEW,
            });
        }

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            nav class="bg-white border-gray-200 dark:bg-gray-900 mb-4"
            {
                div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    span class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Homebook"
                    }

                    (links_html(self.links, false))
                }
            }
        }
    }

    /// Render only the links, marked for an HTMX out-of-band swap.
    ///
    /// Lets a fragment response refresh the links, e.g. when the first recipe
    /// is liked and the likes link should appear.
    pub fn into_oob_html(self) -> Markup {
        links_html(self.links, true)
    }
}

fn links_html(links: Vec<Link<'_>>, out_of_band: bool) -> Markup {
    html! {
        ul
            id="nav-links"
            hx-swap-oob=[out_of_band.then_some("true")]
            class="font-medium flex flex-row p-0 space-x-8 rtl:space-x-reverse"
        {
            @for link in links {
                li { (link.into_html()) }
            }
        }
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::NavBar;

    fn link_urls(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#nav-links a").unwrap())
            .map(|link| link.value().attr("href").unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn hides_likes_link_without_likes() {
        let html = Html::parse_fragment(
            &NavBar::new(endpoints::BUDGET_VIEW, false)
                .into_html()
                .into_string(),
        );

        assert!(!link_urls(&html).contains(&endpoints::LIKES_VIEW.to_owned()));
    }

    #[test]
    fn shows_likes_link_with_likes() {
        let html = Html::parse_fragment(
            &NavBar::new(endpoints::BUDGET_VIEW, true)
                .into_html()
                .into_string(),
        );

        assert!(link_urls(&html).contains(&endpoints::LIKES_VIEW.to_owned()));
    }

    #[test]
    fn out_of_band_links_are_marked_for_swap() {
        let html = Html::parse_fragment(
            &NavBar::new(endpoints::RECIPES_VIEW, true)
                .into_oob_html()
                .into_string(),
        );

        let list = html
            .select(&Selector::parse("ul#nav-links").unwrap())
            .next()
            .expect("No nav links found");
        assert_eq!(list.value().attr("hx-swap-oob"), Some("true"));
        assert_eq!(link_urls(&html).len(), 4);
    }
}
