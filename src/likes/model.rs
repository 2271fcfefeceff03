//! The set of liked recipes and its persistence.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    kv::{get_value, set_value},
    recipe_api::RecipeId,
};

/// The key-value store key the likes are saved under.
pub const LIKES_KEY: &str = "likes";

/// A liked recipe, with just enough detail to show it in the likes list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: RecipeId,
    pub title: String,
    pub author: String,
    pub image: String,
}

/// The liked recipes in the order they were liked.
///
/// Every change is applied in memory and then written to the key-value store
/// as a JSON array. If the write fails the change is rolled back, so the
/// likes in memory always match what was last saved.
#[derive(Debug, Default)]
pub struct Likes {
    likes: Vec<LikedRecipe>,
}

impl Likes {
    /// Load the likes saved in the key-value store.
    ///
    /// A missing or unreadable value is treated as no likes.
    ///
    /// # Errors
    /// Returns an error if the database could not be queried.
    pub fn load(connection: &Connection) -> Result<Self, Error> {
        let likes = match get_value(LIKES_KEY, connection)? {
            None => Vec::new(),
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|error| {
                tracing::warn!("ignoring malformed likes {json:?}: {error}");
                Vec::new()
            }),
        };

        Ok(Self { likes })
    }

    /// Like a recipe. Liking an already liked recipe does nothing.
    ///
    /// # Errors
    /// Returns an error if the likes could not be saved.
    pub fn add_like(&mut self, like: LikedRecipe, connection: &Connection) -> Result<(), Error> {
        if self.is_liked(like.id) {
            return Ok(());
        }

        self.likes.push(like);

        if let Err(error) = self.persist(connection) {
            self.likes.pop();
            return Err(error);
        }

        Ok(())
    }

    /// Remove the like for the recipe with `id`. Does nothing if it is not liked.
    ///
    /// # Errors
    /// Returns an error if the likes could not be saved.
    pub fn delete_like(&mut self, id: RecipeId, connection: &Connection) -> Result<(), Error> {
        let Some(index) = self.likes.iter().position(|like| like.id == id) else {
            return Ok(());
        };

        let like = self.likes.remove(index);

        if let Err(error) = self.persist(connection) {
            self.likes.insert(index, like);
            return Err(error);
        }

        Ok(())
    }

    pub fn is_liked(&self, id: RecipeId) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn count(&self) -> usize {
        self.likes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LikedRecipe> {
        self.likes.iter()
    }

    fn persist(&self, connection: &Connection) -> Result<(), Error> {
        let json = serde_json::to_string(&self.likes)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        set_value(LIKES_KEY, &json, connection)
    }
}

#[cfg(test)]
mod likes_tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        kv::{get_value, set_value},
    };

    use super::{LIKES_KEY, LikedRecipe, Likes};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn like(id: u64) -> LikedRecipe {
        LikedRecipe {
            id,
            title: format!("Recipe {id}"),
            author: "Anna".to_owned(),
            image: format!("https://img.example/{id}.jpg"),
        }
    }

    #[test]
    fn load_without_saved_likes_is_empty() {
        let connection = get_test_db_connection();

        let likes = Likes::load(&connection).unwrap();

        assert_eq!(likes.count(), 0);
    }

    #[test]
    fn load_with_malformed_json_is_empty() {
        let connection = get_test_db_connection();
        set_value(LIKES_KEY, "{not json", &connection).unwrap();

        let likes = Likes::load(&connection).unwrap();

        assert_eq!(likes.count(), 0);
    }

    #[test]
    fn likes_survive_reload() {
        let connection = get_test_db_connection();
        let mut likes = Likes::load(&connection).unwrap();

        likes.add_like(like(1), &connection).unwrap();
        likes.add_like(like(2), &connection).unwrap();

        let reloaded = Likes::load(&connection).unwrap();
        assert_eq!(reloaded.iter().cloned().collect::<Vec<_>>(), vec![like(1), like(2)]);
    }

    #[test]
    fn delete_like_is_persisted() {
        let connection = get_test_db_connection();
        let mut likes = Likes::load(&connection).unwrap();
        likes.add_like(like(1), &connection).unwrap();
        likes.add_like(like(2), &connection).unwrap();

        likes.delete_like(1, &connection).unwrap();

        assert!(!likes.is_liked(1));
        assert!(likes.is_liked(2));
        let reloaded = Likes::load(&connection).unwrap();
        assert!(!reloaded.is_liked(1));
        assert_eq!(reloaded.count(), 1);
    }

    #[test]
    fn liking_twice_keeps_one_entry() {
        let connection = get_test_db_connection();
        let mut likes = Likes::default();

        likes.add_like(like(3), &connection).unwrap();
        likes.add_like(like(3), &connection).unwrap();

        assert_eq!(likes.count(), 1);
    }

    #[test]
    fn deleting_unknown_like_does_nothing() {
        let connection = get_test_db_connection();
        let mut likes = Likes::default();
        likes.add_like(like(3), &connection).unwrap();

        likes.delete_like(99, &connection).unwrap();

        assert_eq!(likes.count(), 1);
    }

    #[test]
    fn saved_value_is_json_array() {
        let connection = get_test_db_connection();
        let mut likes = Likes::default();

        likes.add_like(like(5), &connection).unwrap();

        let json = get_value(LIKES_KEY, &connection).unwrap().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"id\":5"));
    }

    #[test]
    fn failed_save_leaves_likes_unchanged() {
        // No key-value table, so every write fails.
        let connection = Connection::open_in_memory().unwrap();
        let mut likes = Likes::default();

        let result = likes.add_like(like(1), &connection);

        assert!(result.is_err());
        assert_eq!(likes.count(), 0);
    }

    #[test]
    fn failed_save_restores_deleted_like() {
        let connection = get_test_db_connection();
        let mut likes = Likes::default();
        likes.add_like(like(1), &connection).unwrap();
        likes.add_like(like(2), &connection).unwrap();
        connection.execute_batch("DROP TABLE key_value;").unwrap();

        let result = likes.delete_like(1, &connection);

        assert!(result.is_err());
        let ids: Vec<_> = likes.iter().map(|like| like.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
