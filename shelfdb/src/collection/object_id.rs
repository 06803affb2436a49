use crate::common::util::current_unix_seconds;
use crate::common::{ID_RANDOM_HEX_LEN, ID_TIMESTAMP_HEX_LEN};
use rand::Rng;

/// Produces `_id` values for newly inserted documents.
///
/// Implementations must be cheap and thread-safe. Uniqueness is best effort: the
/// engine never checks a generated id against the ids already stored.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Default generator: 8 hex digits of Unix seconds followed by 16 hex digits of
/// randomness, e.g. `65a1f0c2` + `9f3b07d4e1aa5c62`.
///
/// Ids sort roughly by creation second. Within one second, ordering is random and two
/// ids collide with probability about n²/2⁶⁵ for n ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectIdGenerator;

impl ObjectIdGenerator {
    pub fn new() -> Self {
        ObjectIdGenerator
    }

    /// Builds an id for the given Unix second with fresh randomness.
    pub fn id_at(&self, unix_seconds: u64) -> String {
        let random: u64 = rand::thread_rng().gen();
        format!(
            "{:0tw$x}{:0rw$x}",
            unix_seconds,
            random,
            tw = ID_TIMESTAMP_HEX_LEN,
            rw = ID_RANDOM_HEX_LEN
        )
    }

    /// Extracts the creation second from an id built by this generator.
    pub fn timestamp_of(id: &str) -> Option<u64> {
        if !Self::is_valid(id) {
            return None;
        }
        let split = id.len() - ID_RANDOM_HEX_LEN;
        u64::from_str_radix(&id[..split], 16).ok()
    }

    /// Whether `id` has the shape this generator produces.
    pub fn is_valid(id: &str) -> bool {
        id.len() >= ID_TIMESTAMP_HEX_LEN + ID_RANDOM_HEX_LEN
            && id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }
}

impl IdGenerator for ObjectIdGenerator {
    fn next_id(&self) -> String {
        self.id_at(current_unix_seconds())
    }
}
