use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EmbedError;

/// Kind of embeddable Metabase content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Question,
    Dashboard,
}

impl ResourceKind {
    /// Name used both as the `resource` claim key and as the URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Question => "question",
            ResourceKind::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(ResourceKind::Question),
            "dashboard" => Ok(ResourceKind::Dashboard),
            other => Err(EmbedError::InvalidResource(format!(
                "unknown resource kind '{other}', expected 'question' or 'dashboard'"
            ))),
        }
    }
}

/// A single question or dashboard, identified by its numeric id.
///
/// Serializes as the `resource` claim: a one-entry object such as
/// `{"question": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceReference {
    kind: ResourceKind,
    id: i64,
}

impl ResourceReference {
    /// Create a reference, rejecting ids that are zero or negative.
    pub fn new(kind: ResourceKind, id: i64) -> Result<Self, EmbedError> {
        if id <= 0 {
            return Err(EmbedError::InvalidResource(format!(
                "{kind} id must be a positive integer, got {id}"
            )));
        }
        Ok(Self { kind, id })
    }

    pub fn question(id: i64) -> Result<Self, EmbedError> {
        Self::new(ResourceKind::Question, id)
    }

    pub fn dashboard(id: i64) -> Result<Self, EmbedError> {
        Self::new(ResourceKind::Dashboard, id)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

impl Serialize for ResourceReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind.as_str(), &self.id)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResourceReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResourceVisitor;

        impl<'de> Visitor<'de> for ResourceVisitor {
            type Value = ResourceReference;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with exactly one 'question' or 'dashboard' entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let (key, id): (String, i64) = map
                    .next_entry()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                let kind = key.parse::<ResourceKind>().map_err(de::Error::custom)?;
                ResourceReference::new(kind, id).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(ResourceVisitor)
    }
}
