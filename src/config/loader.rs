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


//! Configuration loader for the NetAuth client.
//!
//! This module handles loading configuration from multiple sources with
//! the following precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file (TOML or YAML)
//! 3. Default values

use super::types::ClientConfig;
use super::utils::expand_tilde;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File names tried in each search directory, in order.
const CONFIG_FILE_NAMES: &[&str] = &["config.toml", "config.yaml", "config.yml"];

/// Load configuration from file and environment.
///
/// # Arguments
///
/// * `config_path` - Optional path to configuration file. If None, searches default locations.
///
/// # Default Locations
///
/// If no config path is specified, searches in order, trying `config.toml`,
/// `config.yaml` and `config.yml` in each directory:
/// 1. `.` (current directory)
/// 2. `~/.netauth`
/// 3. `/etc/netauth`
///
/// # Environment Variables
///
/// - `NETAUTH_SERVER` - Server hostname
/// - `NETAUTH_PORT` - Server port (e.g., "1729")
/// - `NETAUTH_SERVICE_NAME` - Service name reported to the server
/// - `NETAUTH_TLS_CERTIFICATE` - CA certificate path
/// - `NETAUTH_TLS_INSECURE` - "true" to disable TLS
///
/// # Errors
///
/// Returns an error if:
/// - No configuration file exists in any search location
/// - Configuration file cannot be read or parsed
/// - Environment variables have invalid values
/// - Configuration validation fails
pub fn load_config(config_path: Option<&Path>) -> Result<ClientConfig> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file(&default_config_dirs()).ok_or_else(|| {
            anyhow::anyhow!(
                "No configuration file found (searched ./, ~/.netauth/, /etc/netauth/ for config.toml, config.yaml, config.yml)"
            )
        })?,
    };

    let config = load_config_file(&path).context("Failed to load configuration file")?;
    tracing::info!(path = %path.display(), "Loaded configuration from file");

    let config = apply_env_overrides(config)?;

    validate_config(&config)?;

    Ok(config)
}

/// Generate a configuration template as a TOML string.
///
/// # Example
///
/// ```
/// use sftpgo_netauth::config::generate_config_template;
///
/// let template = generate_config_template();
/// assert!(template.contains("[core]"));
/// ```
pub fn generate_config_template() -> String {
    let mut config = ClientConfig::default();
    config.core.server = "netauth.example.com".to_string();

    let mut out = String::new();
    out.push_str("# sftpgo-netauth configuration file\n");
    out.push_str("#\n");
    out.push_str("# Searched as config.toml / config.yaml / config.yml in ./, ~/.netauth/\n");
    out.push_str("# and /etc/netauth/, unless --config is given.\n");
    out.push_str("#\n");
    out.push_str("# Environment variables override this file:\n");
    out.push_str("#   NETAUTH_SERVER, NETAUTH_PORT, NETAUTH_SERVICE_NAME,\n");
    out.push_str("#   NETAUTH_TLS_CERTIFICATE, NETAUTH_TLS_INSECURE\n");
    out.push_str("#\n");
    out.push_str("# [tls]\n");
    out.push_str("# certificate = \"/etc/netauth/ca.pem\"   # default: system trust store\n\n");

    out.push_str(&toml::to_string_pretty(&config).unwrap_or_default());

    out
}

/// Load configuration from a TOML or YAML file, chosen by extension.
///
/// Files without a recognised extension are parsed as TOML.
fn load_config_file(path: &Path) -> Result<ClientConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display())),
        _ => toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display())),
    }
}

/// Directories searched for a configuration file, in order.
fn default_config_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];

    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join(".netauth"));
    }

    dirs.push(PathBuf::from("/etc/netauth"));
    dirs
}

/// First existing configuration file in `dirs`.
fn find_config_file(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply environment variable overrides to configuration.
fn apply_env_overrides(mut config: ClientConfig) -> Result<ClientConfig> {
    // NETAUTH_SERVER
    if let Ok(server) = std::env::var("NETAUTH_SERVER") {
        config.core.server = server.clone();
        tracing::debug!(server = %server, "Applied NETAUTH_SERVER override");
    }

    // NETAUTH_PORT
    if let Ok(port_str) = std::env::var("NETAUTH_PORT") {
        config.core.port = port_str
            .parse()
            .context(format!("Invalid NETAUTH_PORT value: {port_str}"))?;
        tracing::debug!(port = config.core.port, "Applied NETAUTH_PORT override");
    }

    // NETAUTH_SERVICE_NAME
    if let Ok(service) = std::env::var("NETAUTH_SERVICE_NAME") {
        config.core.service_name = service.clone();
        tracing::debug!(service = %service, "Applied NETAUTH_SERVICE_NAME override");
    }

    // NETAUTH_TLS_CERTIFICATE
    if let Ok(cert) = std::env::var("NETAUTH_TLS_CERTIFICATE") {
        config.tls.certificate = Some(PathBuf::from(&cert));
        tracing::debug!(certificate = %cert, "Applied NETAUTH_TLS_CERTIFICATE override");
    }

    // NETAUTH_TLS_INSECURE
    if let Ok(insecure_str) = std::env::var("NETAUTH_TLS_INSECURE") {
        config.tls.insecure = match insecure_str.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" | "" => false,
            other => anyhow::bail!("Invalid NETAUTH_TLS_INSECURE value: {other}"),
        };
        tracing::debug!(
            insecure = config.tls.insecure,
            "Applied NETAUTH_TLS_INSECURE override"
        );
    }

    config.tls.certificate = config.tls.certificate.as_deref().map(expand_tilde);

    Ok(config)
}

/// Validate configuration for correctness.
fn validate_config(config: &ClientConfig) -> Result<()> {
    if config.core.server.trim().is_empty() {
        anyhow::bail!("No NetAuth server configured (core.server or NETAUTH_SERVER)");
    }

    if config.core.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.core.service_name.trim().is_empty() {
        anyhow::bail!("core.service_name cannot be empty");
    }

    if config.timeouts.connect_secs == 0 || config.timeouts.request_secs == 0 {
        anyhow::bail!("Timeouts must be greater than 0");
    }

    if config.tls.insecure && config.tls.certificate.is_some() {
        tracing::warn!("tls.certificate is ignored because tls.insecure is set");
    }

    tracing::debug!("Configuration validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const ENV_VARS: &[&str] = &[
        "NETAUTH_SERVER",
        "NETAUTH_PORT",
        "NETAUTH_SERVICE_NAME",
        "NETAUTH_TLS_CERTIFICATE",
        "NETAUTH_TLS_INSECURE",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_generate_config_template() {
        let template = generate_config_template();
        assert!(template.contains("sftpgo-netauth configuration"));
        assert!(template.contains("[core]"));
        assert!(template.contains("[timeouts]"));

        // Template should be valid TOML
        let parsed: ClientConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed.core.server, "netauth.example.com");
        assert!(validate_config(&parsed).is_ok());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_file = write_temp(
            ".toml",
            r#"
[core]
server = "netauth.example.com"
port = 8443

[tls]
certificate = "/etc/netauth/ca.pem"
"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.core.server, "netauth.example.com");
        assert_eq!(config.core.port, 8443);
        assert_eq!(
            config.tls.certificate,
            Some(PathBuf::from("/etc/netauth/ca.pem"))
        );
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_file = write_temp(
            ".yaml",
            r#"
core:
  server: auth.internal
  service_name: sftp-prod
timeouts:
  request_secs: 3
"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.core.server, "auth.internal");
        assert_eq!(config.core.service_name, "sftp-prod");
        assert_eq!(config.timeouts.request_secs, 3);
        assert_eq!(config.timeouts.connect_secs, 5);
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_file = write_temp(".toml", "[core\nserver = ");
        let result = load_config_file(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_find_config_file_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(second.path().join("config.yaml"), "core: {}").unwrap();
        std::fs::write(second.path().join("config.toml"), "").unwrap();

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            find_config_file(&dirs),
            Some(second.path().join("config.toml"))
        );
    }

    #[test]
    fn test_find_config_file_none() {
        let empty = TempDir::new().unwrap();
        assert!(find_config_file(&[empty.path().to_path_buf()]).is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_explicit_path() {
        clear_env();
        let temp_file = write_temp(".toml", "[core]\nserver = \"netauth.example.com\"\n");

        let config = load_config(Some(temp_file.path())).unwrap();
        assert_eq!(config.core.server, "netauth.example.com");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_missing_file() {
        clear_env();
        let result = load_config(Some(Path::new("/nonexistent/netauth/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_env_override_server_and_port() {
        clear_env();

        std::env::set_var("NETAUTH_SERVER", "override.example.com");
        std::env::set_var("NETAUTH_PORT", "2000");
        let config = apply_env_overrides(ClientConfig::default()).unwrap();
        assert_eq!(config.core.server, "override.example.com");
        assert_eq!(config.core.port, 2000);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_env_override_invalid_port() {
        clear_env();

        std::env::set_var("NETAUTH_PORT", "invalid");
        let result = apply_env_overrides(ClientConfig::default());
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_env_override_tls() {
        clear_env();

        std::env::set_var("NETAUTH_TLS_INSECURE", "true");
        std::env::set_var("NETAUTH_TLS_CERTIFICATE", "/tmp/ca.pem");
        let config = apply_env_overrides(ClientConfig::default()).unwrap();
        assert!(config.tls.insecure);
        assert_eq!(config.tls.certificate, Some(PathBuf::from("/tmp/ca.pem")));

        std::env::set_var("NETAUTH_TLS_INSECURE", "maybe");
        assert!(apply_env_overrides(ClientConfig::default()).is_err());

        clear_env();
    }

    #[test]
    fn test_validate_config_no_server() {
        let result = validate_config(&ClientConfig::default());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No NetAuth server configured"));
    }

    #[test]
    fn test_validate_config_zero_port() {
        let mut config = ClientConfig::default();
        config.core.server = "netauth.example.com".to_string();
        config.core.port = 0;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("port cannot be 0"));
    }

    #[test]
    fn test_validate_config_zero_timeout() {
        let mut config = ClientConfig::default();
        config.core.server = "netauth.example.com".to_string();
        config.timeouts.request_secs = 0;

        assert!(validate_config(&config).is_err());
    }
}
