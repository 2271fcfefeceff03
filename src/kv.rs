//! A small durable key-value store on top of SQLite.
//!
//! Values are opaque strings. Writes replace the whole value stored under a
//! key, there is no partial update.

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// Get the value stored under `key`, or `None` if the key has never been set.
pub fn get_value(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM key_value WHERE key = :key;")?
        .query_row(&[(":key", key)], |row| row.get(0))
        .optional()
        .map_err(|error| error.into())
}

/// Store `value` under `key`, replacing any existing value.
pub fn set_value(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO key_value (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        (key, value),
    )?;

    Ok(())
}

/// Initialize the key-value table.
pub fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS key_value (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;

    Ok(())
}
