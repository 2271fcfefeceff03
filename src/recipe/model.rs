//! The recipe being viewed and servings scaling.

use serde::Deserialize;

use crate::{
    Error,
    recipe::Ingredient,
    recipe_api::{RecipeClient, RecipeId, RecipeInformation},
};

/// Which way to change a recipe's servings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingsChange {
    #[serde(alias = "inc")]
    Increase,
    #[serde(alias = "dec")]
    Decrease,
}

/// A recipe with its ingredients scaled to the chosen number of servings.
///
/// The ingredient amounts as published are kept so that scaling is always
/// done from the original amounts and rounding errors do not build up.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: RecipeId,
    title: String,
    author: String,
    image_url: String,
    source_url: String,
    cooking_time: u32,
    servings: u32,
    base_servings: u32,
    base_ingredients: Vec<Ingredient>,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Build a recipe from the API's details. A missing serving count is
    /// treated as one serving.
    pub fn from_information(information: RecipeInformation) -> Self {
        let servings = information.servings.max(1);
        let ingredients: Vec<_> = information
            .extended_ingredients
            .iter()
            .map(Ingredient::from_api)
            .collect();

        Self {
            id: information.id,
            title: information.title,
            author: information.source_name,
            image_url: information.image,
            source_url: information.source_url,
            cooking_time: information.ready_in_minutes,
            servings,
            base_servings: servings,
            base_ingredients: ingredients.clone(),
            ingredients,
        }
    }

    /// Get the recipe with `id` from the recipe API.
    ///
    /// # Errors
    /// Returns [Error::Network] if the API could not be reached or does not
    /// have the recipe.
    pub async fn fetch(id: RecipeId, client: &RecipeClient) -> Result<Self, Error> {
        let information = client.recipe(id).await?;

        Ok(Self::from_information(information))
    }

    /// Add or remove one serving and rescale every ingredient amount.
    ///
    /// Returns the new number of servings.
    ///
    /// # Errors
    /// Returns [Error::InvalidServings] when decreasing from one serving. The
    /// recipe is left unchanged.
    pub fn update_servings(&mut self, change: ServingsChange) -> Result<u32, Error> {
        let servings = match change {
            ServingsChange::Increase => self.servings + 1,
            ServingsChange::Decrease if self.servings > 1 => self.servings - 1,
            ServingsChange::Decrease => return Err(Error::InvalidServings),
        };

        let scale = f64::from(servings) / f64::from(self.base_servings);
        for (ingredient, base) in self.ingredients.iter_mut().zip(&self.base_ingredients) {
            ingredient.amount = base.amount * scale;
        }
        self.servings = servings;

        Ok(servings)
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Minutes needed to make the recipe.
    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// The ingredients scaled to the current servings.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}
