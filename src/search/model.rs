//! A recipe search and its results.

use crate::{
    Error,
    pagination::{page_count, page_slice},
    recipe_api::{RecipeClient, RecipeSummary},
};

/// The number of characters of a recipe title shown in lists.
pub const RECIPE_TITLE_LIMIT: usize = 17;

/// A search query and the results returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    query: String,
    results: Vec<RecipeSummary>,
}

impl Search {
    /// Create a search for `query` with no results yet.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_owned(),
            results: Vec::new(),
        }
    }

    /// Replace the results with those returned by the recipe API.
    ///
    /// # Errors
    /// Returns [Error::Network] if the API could not be reached. The existing
    /// results are left untouched.
    pub async fn fetch_results(&mut self, client: &RecipeClient) -> Result<(), Error> {
        self.results = client.search(&self.query).await?;

        tracing::debug!(
            "got {} results for {:?}",
            self.results.len(),
            self.query
        );

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_results(query: &str, results: Vec<RecipeSummary>) -> Self {
        Self {
            query: query.to_owned(),
            results,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// The results on `page` (1-based).
    pub fn results_page(&self, page: u64, per_page: u64) -> &[RecipeSummary] {
        page_slice(&self.results, page, per_page)
    }

    pub fn page_count(&self, per_page: u64) -> u64 {
        page_count(self.results.len(), per_page)
    }
}

/// Shorten `title` to whole words that fit in [RECIPE_TITLE_LIMIT] characters,
/// followed by " ...". Titles that already fit are returned unchanged.
pub fn limit_recipe_title(title: &str) -> String {
    if title.chars().count() <= RECIPE_TITLE_LIMIT {
        return title.to_owned();
    }

    let mut length = 0;
    let mut words = Vec::new();

    for word in title.split(' ') {
        length += word.chars().count();

        if length > RECIPE_TITLE_LIMIT {
            break;
        }

        words.push(word);
    }

    format!("{} ...", words.join(" "))
}
