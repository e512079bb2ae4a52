use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Options for a single query against an index.
#[derive(TypedBuilder, Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Use each letter of the rack at most once.
    #[builder(default)]
    #[serde(default)]
    pub consume: bool,
    /// Keep only words that use as many letters as the rack holds.
    #[builder(default)]
    #[serde(default)]
    pub use_all: bool,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }
}
