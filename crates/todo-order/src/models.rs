//! Todo Models
//!
//! Data structures matching the backend `todos` resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned todo identifier.
///
/// Opaque: only equality and hashing matter. Accepts JSON numbers and
/// strings and writes back the form it was read in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(u64),
    Text(String),
}

impl ItemId {
    pub fn number(n: u64) -> Self {
        Self(Repr::Number(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self(Repr::Text(s.into()))
    }

    /// Numeric value, including numeric strings such as `"12"`
    pub fn as_number(&self) -> Option<u64> {
        match &self.0 {
            Repr::Number(n) => Some(*n),
            Repr::Text(s) => s.parse().ok(),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self::number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Number(n) => write!(f, "{}", n),
            Repr::Text(s) => f.write_str(s),
        }
    }
}

/// A todo entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub completed: bool,
    /// Owner, passed through untouched
    #[serde(rename = "userId", default)]
    pub user_id: u32,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
            user_id: 0,
        }
    }

    /// Copy of this item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Body for `POST /todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub name: String,
    pub completed: bool,
}

impl NewItem {
    pub fn new(user_id: u32, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            completed: false,
        }
    }
}
