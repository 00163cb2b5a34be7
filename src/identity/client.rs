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


//! gRPC client for a NetAuth v2 server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

use super::error::IdentityError;
use super::proto::{self, NetAuth2Client};
use super::service::IdentityService;
use super::types::{Entity, Group, KeyMode, KeySet};
use crate::config::ClientConfig;

/// [`IdentityService`] backed by a NetAuth server.
///
/// The channel connects lazily: construction only fails on configuration
/// problems, and an unreachable server shows up as an `Unavailable` error
/// on the first call.
///
/// # Example
///
/// ```no_run
/// use sftpgo_netauth::config::load_config;
/// use sftpgo_netauth::identity::{IdentityService, NetAuthClient};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = load_config(None)?;
/// let client = NetAuthClient::new(&config)?;
/// let entity = client.entity_info("alice").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NetAuthClient {
    rpc: NetAuth2Client<Channel>,
    info: proto::ClientInfo,
}

impl NetAuthClient {
    /// Build a client from configuration.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the server address is not a valid URI or the CA
    /// certificate cannot be read.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = build_endpoint(config)?;
        let channel = endpoint.connect_lazy();

        let info = proto::ClientInfo {
            id: local_hostname(),
            service: config.core.service_name.clone(),
        };

        tracing::debug!(
            server = %config.core.server,
            port = config.core.port,
            service = %info.service,
            client_id = %info.id,
            "NetAuth client initialized"
        );

        Ok(Self {
            rpc: NetAuth2Client::new(channel),
            info,
        })
    }

    /// Service name reported to the server.
    pub fn service_name(&self) -> &str {
        &self.info.service
    }

    fn target(&self, name: &str) -> proto::Entity {
        proto::Entity {
            id: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// Build the transport endpoint for the configured server.
fn build_endpoint(config: &ClientConfig) -> Result<Endpoint> {
    let scheme = if config.tls.insecure { "http" } else { "https" };
    let uri = format!("{scheme}://{}:{}", config.core.server, config.core.port);

    let mut endpoint = Endpoint::from_shared(uri.clone())
        .with_context(|| format!("Invalid NetAuth server address: {uri}"))?
        .connect_timeout(config.timeouts.connect())
        .timeout(config.timeouts.request());

    if config.tls.insecure {
        tracing::warn!("TLS is disabled; credentials are sent in the clear");
        return Ok(endpoint);
    }

    let mut tls = ClientTlsConfig::new().domain_name(config.core.server.clone());
    tls = match &config.tls.certificate {
        Some(path) => {
            let pem = std::fs::read(path).with_context(|| {
                format!("Failed to read CA certificate {}", path.display())
            })?;
            tls.ca_certificate(Certificate::from_pem(pem))
        }
        None => tls.with_native_roots(),
    };

    endpoint = endpoint
        .tls_config(tls)
        .context("Failed to configure TLS for NetAuth client")?;

    Ok(endpoint)
}

fn local_hostname() -> String {
    nix::unistd::gethostname()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_default()
}

#[async_trait]
impl IdentityService for NetAuthClient {
    async fn entity_info(&self, name: &str) -> Result<Entity, IdentityError> {
        let request = proto::EntityRequest {
            auth: None,
            entity: Some(self.target(name)),
            info: Some(self.info.clone()),
        };

        let reply = self.rpc.clone().entity_info(request).await?.into_inner();

        reply
            .entities
            .into_iter()
            .next()
            .map(Entity::from)
            .ok_or_else(|| IdentityError::EmptyResponse(name.to_string()))
    }

    async fn entity_groups(&self, name: &str) -> Result<Vec<Group>, IdentityError> {
        let request = proto::EntityRequest {
            auth: None,
            entity: Some(self.target(name)),
            info: Some(self.info.clone()),
        };

        let reply = self.rpc.clone().entity_groups(request).await?.into_inner();

        Ok(reply.groups.into_iter().map(Group::from).collect())
    }

    async fn entity_keys(
        &self,
        name: &str,
        mode: KeyMode,
        category: &str,
    ) -> Result<KeySet, IdentityError> {
        let request = proto::KvRequest {
            auth: None,
            target: Some(self.target(name)),
            action: proto::Action::from(mode) as i32,
            key: category.to_string(),
            value: String::new(),
            info: Some(self.info.clone()),
        };

        let reply = self.rpc.clone().entity_keys(request).await?.into_inner();

        Ok(KeySet::from_typed_entries(reply.strings))
    }

    async fn auth_entity(&self, name: &str, secret: &str) -> Result<(), IdentityError> {
        let request = proto::AuthRequest {
            auth: Some(proto::AuthData {
                entity: Some(self.target(name)),
                secret: secret.to_string(),
                token: String::new(),
            }),
            info: Some(self.info.clone()),
        };

        self.rpc.clone().auth_entity(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(server: &str) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.core.server = server.to_string();
        config.tls.insecure = true;
        config
    }

    #[test]
    fn test_build_endpoint_insecure() {
        let endpoint = build_endpoint(&config("netauth.example.com")).unwrap();
        assert!(endpoint
            .uri()
            .to_string()
            .starts_with("http://netauth.example.com:1729"));
    }

    #[test]
    fn test_build_endpoint_rejects_bad_address() {
        assert!(build_endpoint(&config("bad host name")).is_err());
    }

    #[test]
    fn test_build_endpoint_missing_certificate() {
        let mut config = config("netauth.example.com");
        config.tls.insecure = false;
        config.tls.certificate = Some("/nonexistent/ca.pem".into());

        let err = build_endpoint(&config).unwrap_err();
        assert!(err.to_string().contains("CA certificate"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        let mut config = config("127.0.0.1");
        config.core.port = 1;
        config.timeouts.connect_secs = 1;
        config.timeouts.request_secs = 1;

        let client = NetAuthClient::new(&config).unwrap();
        assert_eq!(client.service_name(), "sftpgo");
        assert!(client.entity_info("alice").await.is_err());
    }
}
