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


//! Configuration types for the NetAuth client.
//!
//! All types support serde serialization/deserialization and can be read
//! from TOML or YAML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root of the client configuration file.
///
/// # Example TOML
///
/// ```toml
/// [core]
/// server = "netauth.example.com"
/// port = 1729
/// service_name = "sftpgo"
///
/// [tls]
/// certificate = "/etc/netauth/ca.pem"
///
/// [timeouts]
/// connect_secs = 5
/// request_secs = 10
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Server location and client identity.
    pub core: CoreConfig,

    /// Transport security.
    pub tls: TlsConfig,

    /// Connection and request deadlines.
    pub timeouts: TimeoutConfig,
}

/// Server location and client identity.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CoreConfig {
    /// Hostname of the NetAuth server.
    ///
    /// Required; there is no sensible default.
    pub server: String,

    /// Port of the NetAuth server.
    ///
    /// Default: 1729
    #[serde(default = "default_port")]
    pub port: u16,

    /// Service name reported to the server with every request.
    ///
    /// Default: "sftpgo"
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: default_port(),
            service_name: default_service_name(),
        }
    }
}

/// Transport security settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TlsConfig {
    /// PEM file with the CA certificate that signed the server certificate.
    ///
    /// When unset, the system trust store is used.
    pub certificate: Option<PathBuf>,

    /// Talk plaintext HTTP/2 to the server.
    ///
    /// Only for test deployments: the password travels in the clear.
    pub insecure: bool,
}

/// Connection and request deadlines, in seconds.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Default: 5
    #[serde(default = "default_connect_secs")]
    pub connect_secs: u64,

    /// Default: 10
    #[serde(default = "default_request_secs")]
    pub request_secs: u64,
}

impl TimeoutConfig {
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: default_connect_secs(),
            request_secs: default_request_secs(),
        }
    }
}

fn default_port() -> u16 {
    1729
}

fn default_service_name() -> String {
    "sftpgo".to_string()
}

fn default_connect_secs() -> u64 {
    5
}

fn default_request_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.core.server.is_empty());
        assert_eq!(config.core.port, 1729);
        assert_eq!(config.core.service_name, "sftpgo");
        assert!(config.tls.certificate.is_none());
        assert!(!config.tls.insecure);
        assert_eq!(config.timeouts.connect(), Duration::from_secs(5));
        assert_eq!(config.timeouts.request(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
[core]
server = "netauth.example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.core.server, "netauth.example.com");
        assert_eq!(config.core.port, 1729);
        assert_eq!(config.timeouts.request_secs, 10);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = ClientConfig::default();
        config.core.server = "auth.internal".to_string();
        config.tls.certificate = Some(PathBuf::from("/etc/netauth/ca.pem"));

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
