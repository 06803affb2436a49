// doc constants
pub const DOC_ID: &str = "_id";
pub const DOC_CREATED_AT: &str = "createdAt";
pub const DOC_UPDATED_AT: &str = "updatedAt";
pub const RESERVED_FIELDS: [&str; 3] = [DOC_ID, DOC_CREATED_AT, DOC_UPDATED_AT];

// store key constants
pub const KEY_PREFIX: &str = "db";
pub const KEY_SEPARATOR: &str = "_";

// id constants
pub const ID_TIMESTAMP_HEX_LEN: usize = 8;
pub const ID_RANDOM_HEX_LEN: usize = 16;
