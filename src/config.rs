//! Settings for talking to the remote recipe API.

/// The default address of the recipe API.
pub const DEFAULT_RECIPE_API_URL: &str = "https://api.spoonacular.com";

/// The number of results to request from the recipe search endpoint.
pub const SEARCH_RESULT_COUNT: u32 = 15;

/// Where the recipe API lives and the key used to access it.
#[derive(Clone)]
pub struct RecipeApiConfig {
    /// The scheme, host and optional port of the API, without a trailing slash,
    /// e.g. "https://api.spoonacular.com".
    pub base_url: String,
    /// The static API key sent in the query string of every request.
    pub api_key: String,
}

impl RecipeApiConfig {
    /// Create a config, trimming any trailing slashes from `base_url`.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPE_API_URL, "")
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for RecipeApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"********")
            .finish()
    }
}
