mod error;
pub mod openai;
mod util;

pub use crate::connections::error::ConfigError;
pub use crate::connections::util::{env_lookup, lookup_or, lookup_parsed, lookup_required};
