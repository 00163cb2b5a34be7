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


//! The authorization gate.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the entity exists and is not locked
//! 2. the entity belongs to the required group, if one was given
//! 3. exactly one credential matches: the public key when one was
//!    presented, the password otherwise
//!
//! Only one credential is checked per run. SFTPGo calls the hook again for
//! each authentication method a client tries, so a client that offers a key
//! first and a password second gets two independent decisions.
//!
//! Every identity-service failure denies the login. A wrong password and an
//! unreachable server look the same to SFTPGo.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::input::{Credential, Credentials};
use crate::identity::{IdentityError, IdentityService, KeyMode, SSH_KEY_CATEGORY};
use crate::shared::validation::validate_username;

/// Why a login was denied.
///
/// Only logged; the hook response never tells the client which check failed.
#[derive(Debug, Error)]
pub enum DenyReason {
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    #[error("entity lookup failed: {0}")]
    EntityLookup(#[source] IdentityError),

    #[error("entity is locked")]
    EntityLocked,

    #[error("group lookup failed: {0}")]
    GroupLookup(#[source] IdentityError),

    #[error("entity is not a member of required group '{0}'")]
    NotInGroup(String),

    #[error("key lookup failed: {0}")]
    KeyLookup(#[source] IdentityError),

    #[error("public key is not registered for the entity")]
    KeyNotRegistered,

    #[error("password rejected: {0}")]
    PasswordRejected(#[source] IdentityError),
}

/// What an allowed user gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub uid: i64,
    pub home_dir: PathBuf,
    pub permissions: BTreeMap<String, Vec<String>>,
}

impl UserProfile {
    /// Profile with full access rooted at `/` and the home directory
    /// `home_base/username`.
    pub fn new(username: &str, uid: i32, home_base: &Path) -> Self {
        let mut permissions = BTreeMap::new();
        permissions.insert("/".to_string(), vec!["*".to_string()]);

        Self {
            username: username.to_string(),
            uid: i64::from(uid),
            home_dir: home_base.join(username),
            permissions,
        }
    }
}

/// Outcome of one authorization run.
#[derive(Debug)]
pub enum Decision {
    Allow(UserProfile),
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    pub fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Decision::Deny(reason) => Some(reason),
            Decision::Allow(_) => None,
        }
    }
}

/// Decide whether a login attempt is allowed.
///
/// # Example
///
/// ```
/// use sftpgo_netauth::hook::{authorize, Credentials};
/// use sftpgo_netauth::identity::{Entity, InMemoryIdentityService};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let service = InMemoryIdentityService::new()
///     .with_entity(Entity::new("alice", 1001))
///     .with_secret("alice", "hunter2");
///
/// let credentials = Credentials::new("alice")
///     .with_password("hunter2")
///     .with_home_base("/srv/sftp");
///
/// let decision = authorize(&service, credentials).await;
/// assert!(decision.is_allowed());
/// # }
/// ```
pub async fn authorize<S>(service: &S, credentials: Credentials) -> Decision
where
    S: IdentityService + ?Sized,
{
    let method = credentials.credential().method();

    match run_checks(service, &credentials).await {
        Ok(profile) => {
            tracing::info!(
                user = %profile.username,
                uid = profile.uid,
                method,
                "Login allowed"
            );
            Decision::Allow(profile)
        }
        Err(reason) => {
            tracing::info!(
                user = %credentials.username.escape_debug(),
                method,
                reason = %reason,
                "Login denied"
            );
            Decision::Deny(reason)
        }
    }
}

async fn run_checks<S>(service: &S, credentials: &Credentials) -> Result<UserProfile, DenyReason>
where
    S: IdentityService + ?Sized,
{
    let username = validate_username(&credentials.username)
        .map_err(|e| DenyReason::InvalidUsername(e.to_string()))?;

    let entity = service
        .entity_info(username)
        .await
        .map_err(DenyReason::EntityLookup)?;

    if entity.locked {
        return Err(DenyReason::EntityLocked);
    }

    if let Some(required) = credentials.required_group() {
        let groups = service
            .entity_groups(username)
            .await
            .map_err(DenyReason::GroupLookup)?;

        let names: HashSet<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        if !names.contains(required) {
            return Err(DenyReason::NotInGroup(required.to_string()));
        }
        tracing::debug!(user = %username, group = %required, "Group requirement met");
    }

    match credentials.credential() {
        Credential::PublicKey(key) => {
            let keys = service
                .entity_keys(username, KeyMode::Read, SSH_KEY_CATEGORY)
                .await
                .map_err(DenyReason::KeyLookup)?;

            let registered = keys.get(SSH_KEY_CATEGORY);
            if !registered.iter().any(|candidate| candidate == key) {
                tracing::debug!(
                    user = %username,
                    registered_keys = registered.len(),
                    "No matching SSH key found"
                );
                return Err(DenyReason::KeyNotRegistered);
            }
        }
        Credential::Password(password) => {
            service
                .auth_entity(username, password)
                .await
                .map_err(DenyReason::PasswordRejected)?;
        }
    }

    Ok(UserProfile::new(
        username,
        entity.number,
        credentials.home_base(),
    ))
}
