// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Identity records as seen by the hook.
//!
//! These are trimmed views of the wire messages in [`super::proto`]: only the
//! fields the authorization gate reads survive the conversion.

use std::collections::HashMap;

use super::proto;

/// An account record returned by an entity lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity ID (the login name).
    pub id: String,

    /// Numeric identifier, used as the session uid.
    pub number: i32,

    /// Whether the account is locked.
    pub locked: bool,
}

impl Entity {
    /// Create an unlocked entity.
    pub fn new(id: impl Into<String>, number: i32) -> Self {
        Self {
            id: id.into(),
            number,
            locked: false,
        }
    }

    /// Set the locked flag.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

impl From<proto::Entity> for Entity {
    fn from(entity: proto::Entity) -> Self {
        let locked = entity
            .meta
            .as_ref()
            .and_then(|meta| meta.locked)
            .unwrap_or(false);

        Self {
            id: entity.id.unwrap_or_default(),
            number: entity.number.unwrap_or_default(),
            locked,
        }
    }
}

/// A group the entity is a member of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub display_name: Option<String>,
    pub number: i32,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            number: 0,
        }
    }
}

impl From<proto::Group> for Group {
    fn from(group: proto::Group) -> Self {
        Self {
            name: group.name.unwrap_or_default(),
            display_name: group.display_name,
            number: group.number.unwrap_or_default(),
        }
    }
}

/// Intent of a key lookup.
///
/// The hook only ever reads keys; the other modes exist because the server
/// multiplexes key management over the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    #[default]
    Read,
    Add,
    Drop,
}

impl KeyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyMode::Read => "READ",
            KeyMode::Add => "ADD",
            KeyMode::Drop => "DROP",
        }
    }
}

impl From<KeyMode> for proto::Action {
    fn from(mode: KeyMode) -> Self {
        match mode {
            KeyMode::Read => proto::Action::Read,
            KeyMode::Add => proto::Action::Add,
            KeyMode::Drop => proto::Action::Drop,
        }
    }
}

/// Key category used for SSH public keys.
pub const SSH_KEY_CATEGORY: &str = "SSH";

/// Keys of an entity grouped by category, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: HashMap<String, Vec<String>>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a key set from the server's flat `TYPE:value` strings.
    ///
    /// The type is upper-cased and split off at the first `:`, so key
    /// material containing colons is kept intact. Entries without a type
    /// are skipped.
    pub fn from_typed_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in entries {
            match entry.as_ref().split_once(':') {
                Some((category, key)) => set.insert(category, key),
                None => {
                    tracing::debug!("Skipping key entry without a type prefix");
                }
            }
        }
        set
    }

    /// Append a key to a category.
    pub fn insert(&mut self, category: &str, key: impl Into<String>) {
        self.keys
            .entry(category.to_ascii_uppercase())
            .or_default()
            .push(key.into());
    }

    /// Keys in a category, empty when the category is absent.
    pub fn get(&self, category: &str) -> &[String] {
        self.keys
            .get(&category.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `key` is listed under `category`.
    pub fn contains(&self, category: &str, key: &str) -> bool {
        self.get(category).iter().any(|candidate| candidate == key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.values().all(Vec::is_empty)
    }
}
