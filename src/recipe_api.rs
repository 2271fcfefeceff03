//! Client for the remote recipe API.
//!
//! Only two read-only endpoints are used: recipe search and recipe
//! information. The API key is sent in the query string. There are no
//! retries, a failed request is reported to the caller as [Error::Network].

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    config::{RecipeApiConfig, SEARCH_RESULT_COUNT},
};

/// The recipe API's identifier for a recipe.
pub type RecipeId = u64;

/// A recipe as it appears in a list of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<RecipeSummary>,
}

/// One ingredient line as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiIngredient {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub name: String,
    /// The ingredient line as originally written, e.g. "4 1/2 cups mushrooms".
    #[serde(default)]
    pub original: Option<String>,
}

/// The full details of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub extended_ingredients: Vec<ApiIngredient>,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
}

/// A handle for making requests to the recipe API.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    config: RecipeApiConfig,
}

impl RecipeClient {
    pub fn new(config: RecipeApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Search for recipes matching `query`.
    ///
    /// # Errors
    /// Returns [Error::Network] if the request fails or the API responds with
    /// a non-2xx status.
    pub async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, Error> {
        let url = format!("{}/recipes/search", self.config.base_url);
        let number = SEARCH_RESULT_COUNT.to_string();

        tracing::debug!("searching for recipes matching {query:?}");

        let response: SearchResponse = self
            .http
            .get(url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("query", query),
                ("number", number.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results)
    }

    /// Get the full details of the recipe with `id`.
    ///
    /// # Errors
    /// Returns [Error::Network] if the request fails or the API responds with
    /// a non-2xx status.
    pub async fn recipe(&self, id: RecipeId) -> Result<RecipeInformation, Error> {
        let url = format!("{}/recipes/{id}/information", self.config.base_url);

        tracing::debug!("fetching recipe {id}");

        let information = self
            .http
            .get(url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(information)
    }
}
