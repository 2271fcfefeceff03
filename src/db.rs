//! Database setup.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, kv::create_key_value_table};

/// Create the tables needed by the app if they do not already exist.
///
/// # Errors
/// Returns an error if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_key_value_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
