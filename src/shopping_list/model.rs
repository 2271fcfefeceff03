//! The shopping list.

use uuid::Uuid;

use crate::recipe::Ingredient;

/// A line on the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    /// A random identifier, unique among all items ever added.
    pub id: String,
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

/// The items to buy, in the order they were added.
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item with a fresh ID and return it.
    pub fn add_item(&mut self, amount: f64, unit: &str, name: &str) -> ShoppingListItem {
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            amount,
            unit: unit.to_owned(),
            name: name.to_owned(),
        };
        self.items.push(item.clone());

        item
    }

    /// Add every ingredient of a recipe as a separate item.
    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> Vec<ShoppingListItem> {
        ingredients
            .iter()
            .map(|ingredient| self.add_item(ingredient.amount, &ingredient.unit, &ingredient.name))
            .collect()
    }

    /// Remove the item with `id`. Returns `false` if there is no such item.
    pub fn delete_item(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Set the amount of the item with `id` and return the updated item, or
    /// `None` if there is no such item.
    ///
    /// The caller is responsible for checking that `amount` is positive.
    pub fn update_amount(&mut self, id: &str, amount: f64) -> Option<&ShoppingListItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.amount = amount;

        Some(item)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }
}

#[cfg(test)]
mod shopping_list_tests {
    use std::collections::HashSet;

    use crate::recipe::Ingredient;

    use super::ShoppingList;

    #[test]
    fn add_item_appends_in_order() {
        let mut list = ShoppingList::new();

        list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "lemon");

        let names: Vec<_> = list.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "lemon"]);
    }

    #[test]
    fn ids_are_unique() {
        let mut list = ShoppingList::new();

        for i in 0..1000 {
            list.add_item(1.0, "", &format!("item {i}"));
        }

        let ids: HashSet<_> = list.items().iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn add_ingredients_adds_one_item_each() {
        let mut list = ShoppingList::new();
        let ingredients = vec![
            Ingredient {
                amount: 2.0,
                unit: "cup".to_owned(),
                name: "flour".to_owned(),
            },
            Ingredient {
                amount: 3.0,
                unit: String::new(),
                name: "eggs".to_owned(),
            },
        ];

        let added = list.add_ingredients(&ingredients);

        assert_eq!(added.len(), 2);
        assert_eq!(list.items(), added.as_slice());
        assert_eq!(list.items()[1].amount, 3.0);
    }

    #[test]
    fn delete_item_removes_only_that_item() {
        let mut list = ShoppingList::new();
        let flour = list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "lemon");

        assert!(list.delete_item(&flour.id));

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].name, "lemon");
    }

    #[test]
    fn delete_missing_item_returns_false() {
        let mut list = ShoppingList::new();
        list.add_item(2.0, "cup", "flour");

        assert!(!list.delete_item("not-an-id"));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn update_amount_changes_only_that_item() {
        let mut list = ShoppingList::new();
        let flour = list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "lemon");

        let updated = list.update_amount(&flour.id, 3.5).cloned();

        assert_eq!(updated.map(|item| item.amount), Some(3.5));
        assert_eq!(list.items()[1].amount, 1.0);
    }

    #[test]
    fn update_missing_item_returns_none() {
        let mut list = ShoppingList::new();

        assert!(list.update_amount("missing", 2.0).is_none());
    }
}
