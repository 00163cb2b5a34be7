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


//! In-memory identity service.
//!
//! Serves canned directory data and records which lookups were made. Used to
//! exercise the authorization gate without a NetAuth server.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use tonic::Code;
use zeroize::Zeroizing;

use super::error::IdentityError;
use super::service::IdentityService;
use super::types::{Entity, Group, KeyMode, KeySet};

/// The four identity-service lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    EntityInfo,
    EntityGroups,
    EntityKeys,
    AuthEntity,
}

/// Identity service backed by in-process maps.
///
/// # Example
///
/// ```
/// use sftpgo_netauth::identity::{Entity, InMemoryIdentityService};
///
/// let service = InMemoryIdentityService::new()
///     .with_entity(Entity::new("alice", 1001))
///     .with_groups("alice", ["users", "ops"])
///     .with_secret("alice", "hunter2");
/// ```
#[derive(Default)]
pub struct InMemoryIdentityService {
    entities: HashMap<String, Entity>,
    groups: HashMap<String, Vec<Group>>,
    keys: HashMap<String, KeySet>,
    secrets: HashMap<String, Zeroizing<String>>,
    failures: HashMap<Lookup, Code>,
    calls: Mutex<Vec<Lookup>>,
}

impl InMemoryIdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.insert(entity.id.clone(), entity);
        self
    }

    pub fn with_groups<I, S>(mut self, name: &str, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .entry(name.to_string())
            .or_default()
            .extend(groups.into_iter().map(Group::new));
        self
    }

    pub fn with_key(mut self, name: &str, category: &str, key: impl Into<String>) -> Self {
        self.keys
            .entry(name.to_string())
            .or_default()
            .insert(category, key);
        self
    }

    pub fn with_secret(mut self, name: &str, secret: &str) -> Self {
        self.secrets
            .insert(name.to_string(), Zeroizing::new(secret.to_string()));
        self
    }

    /// Make every call of `lookup` fail with `code`.
    pub fn failing(mut self, lookup: Lookup, code: Code) -> Self {
        self.failures.insert(lookup, code);
        self
    }

    /// Lookups made so far, in order.
    pub fn calls(&self) -> Vec<Lookup> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn was_called(&self, lookup: Lookup) -> bool {
        self.calls().contains(&lookup)
    }

    fn record(&self, lookup: Lookup) -> Result<(), IdentityError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(lookup);
        }

        match self.failures.get(&lookup) {
            Some(code) => Err(IdentityError::status(*code, "injected failure")),
            None => Ok(()),
        }
    }

    fn require_entity(&self, name: &str) -> Result<&Entity, IdentityError> {
        self.entities
            .get(name)
            .ok_or_else(|| IdentityError::not_found(format!("no entity named {name}")))
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn entity_info(&self, name: &str) -> Result<Entity, IdentityError> {
        self.record(Lookup::EntityInfo)?;
        self.require_entity(name).cloned()
    }

    async fn entity_groups(&self, name: &str) -> Result<Vec<Group>, IdentityError> {
        self.record(Lookup::EntityGroups)?;
        self.require_entity(name)?;

        // The server reports each membership once.
        let mut seen = HashSet::new();
        Ok(self
            .groups
            .get(name)
            .into_iter()
            .flatten()
            .filter(|g| seen.insert(g.name.clone()))
            .cloned()
            .collect())
    }

    async fn entity_keys(
        &self,
        name: &str,
        mode: KeyMode,
        category: &str,
    ) -> Result<KeySet, IdentityError> {
        self.record(Lookup::EntityKeys)?;
        self.require_entity(name)?;

        if mode != KeyMode::Read {
            return Err(IdentityError::status(
                Code::PermissionDenied,
                format!("{} requires a token", mode.as_str()),
            ));
        }

        let mut filtered = KeySet::new();
        if let Some(keys) = self.keys.get(name) {
            for key in keys.get(category) {
                filtered.insert(category, key.clone());
            }
        }
        Ok(filtered)
    }

    async fn auth_entity(&self, name: &str, secret: &str) -> Result<(), IdentityError> {
        self.record(Lookup::AuthEntity)?;
        self.require_entity(name)?;

        match self.secrets.get(name) {
            Some(expected) if expected.as_str() == secret => Ok(()),
            _ => Err(IdentityError::status(
                Code::Unauthenticated,
                "entity authentication failed",
            )),
        }
    }
}
