use crate::common::{KEY_PREFIX, KEY_SEPARATOR};

/// Key prefix shared by every collection of a database: `db_<database>_`.
pub fn database_prefix(database_name: &str) -> String {
    format!("{}{}{}{}", KEY_PREFIX, KEY_SEPARATOR, database_name, KEY_SEPARATOR)
}

/// Storage key of one collection: `db_<database>_<collection>`.
pub fn collection_key(database_name: &str, collection_name: &str) -> String {
    format!("{}{}", database_prefix(database_name), collection_name)
}

/// Returns the collection name if `key` belongs to the database with this prefix.
pub fn collection_name_from_key<'a>(prefix: &str, key: &'a str) -> Option<&'a str> {
    key.strip_prefix(prefix).filter(|name| !name.is_empty())
}
