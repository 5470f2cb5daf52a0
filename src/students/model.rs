use serde::{Deserialize, Serialize};

/// A single roster entry.
///
/// There is no identifier: a student is addressed by its position in the
/// roster, see [`crate::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    // Serialized as `null` when absent, read back as absent when the key is missing
    #[serde(default)]
    pub group: Option<i64>,
    pub mark: i64,
}

impl Student {
    pub fn new(name: impl Into<String>, group: Option<i64>, mark: i64) -> Self {
        Self {
            name: name.into(),
            group,
            mark,
        }
    }
}
