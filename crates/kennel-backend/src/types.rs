//! Wire and storage types for the kennel registry

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A dog record, keyed by its collar
///
/// Decoding is lenient: keys match field names case-insensitively, a missing
/// or `null` field keeps its zero value, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dog {
    /// Unique identifier, the only key into the registry
    pub collar: String,

    pub alive: bool,

    pub toes: i64,
}

impl Dog {
    pub fn new(collar: impl Into<String>, alive: bool, toes: i64) -> Self {
        Self {
            collar: collar.into(),
            alive,
            toes,
        }
    }
}

impl<'de> Deserialize<'de> for Dog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DogVisitor)
    }
}

struct DogVisitor;

impl<'de> Visitor<'de> for DogVisitor {
    type Value = Dog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("struct Dog")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Dog, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dog = Dog::default();

        // A null value leaves whatever the field already holds
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("collar") {
                if let Some(collar) = map.next_value::<Option<String>>()? {
                    dog.collar = collar;
                }
            } else if key.eq_ignore_ascii_case("alive") {
                if let Some(alive) = map.next_value::<Option<bool>>()? {
                    dog.alive = alive;
                }
            } else if key.eq_ignore_ascii_case("toes") {
                if let Some(toes) = map.next_value::<Option<i64>>()? {
                    dog.toes = toes;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(dog)
    }
}

/// Body carrying a human-readable message, optionally with error detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
