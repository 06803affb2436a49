mod date_utils;
mod key_utils;

pub use date_utils::*;
pub use key_utils::*;
