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


//! The identity-service interface consumed by the authorization gate.
//!
//! # Implementing IdentityService
//!
//! ```ignore
//! use async_trait::async_trait;
//! use sftpgo_netauth::identity::{Entity, Group, IdentityError, IdentityService, KeyMode, KeySet};
//!
//! struct Directory;
//!
//! #[async_trait]
//! impl IdentityService for Directory {
//!     async fn entity_info(&self, name: &str) -> Result<Entity, IdentityError> {
//!         Err(IdentityError::not_found(name))
//!     }
//!
//!     async fn entity_groups(&self, name: &str) -> Result<Vec<Group>, IdentityError> {
//!         Ok(Vec::new())
//!     }
//!
//!     async fn entity_keys(
//!         &self,
//!         name: &str,
//!         mode: KeyMode,
//!         category: &str,
//!     ) -> Result<KeySet, IdentityError> {
//!         Ok(KeySet::new())
//!     }
//!
//!     async fn auth_entity(&self, name: &str, secret: &str) -> Result<(), IdentityError> {
//!         Err(IdentityError::status(tonic::Code::Unauthenticated, "no"))
//!     }
//! }
//! ```

use async_trait::async_trait;

use super::error::IdentityError;
use super::types::{Entity, Group, KeyMode, KeySet};

/// Lookups the authorization gate performs against the identity server.
///
/// Each method is one request/response round trip. Only `Ok` counts as
/// success; callers fold every error into a denial.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Look up an entity by name.
    async fn entity_info(&self, name: &str) -> Result<Entity, IdentityError>;

    /// List the groups an entity belongs to.
    async fn entity_groups(&self, name: &str) -> Result<Vec<Group>, IdentityError>;

    /// Fetch an entity's keys, filtered to `category`.
    async fn entity_keys(
        &self,
        name: &str,
        mode: KeyMode,
        category: &str,
    ) -> Result<KeySet, IdentityError>;

    /// Verify an entity's secret.
    ///
    /// # Security
    ///
    /// Implementations must never log `secret`.
    async fn auth_entity(&self, name: &str, secret: &str) -> Result<(), IdentityError>;
}
