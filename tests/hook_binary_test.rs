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


//! Tests for the hook binary's process contract: JSON on stdout, exit code
//! 1 only for configuration and client setup failures.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const BINARY: &str = env!("CARGO_BIN_EXE_sftpgo-netauth");

fn hook_command() -> Command {
    let mut command = Command::new(BINARY);
    for var in [
        "NETAUTH_CONFIG",
        "NETAUTH_SERVER",
        "NETAUTH_PORT",
        "NETAUTH_SERVICE_NAME",
        "NETAUTH_TLS_CERTIFICATE",
        "NETAUTH_TLS_INSECURE",
        "RUST_LOG",
    ] {
        command.env_remove(var);
    }
    command
        .env("SFTPGO_AUTHD_USERNAME", "alice")
        .env("SFTPGO_AUTHD_PASSWORD", "hunter2")
        .env("SFTPGO_NETAUTH_HOMEDIR", "/srv/sftp");
    command
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    serde_json::from_str(stdout.trim()).unwrap()
}

#[test]
fn test_missing_config_denies_with_exit_1() {
    let output = hook_command()
        .args(["--config", "/nonexistent/netauth/config.toml"])
        .output()
        .expect("Failed to execute sftpgo-netauth");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_json(&output).get("status").is_none());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading config"));
}

#[test]
fn test_unreachable_server_denies_with_exit_0() {
    let config = write_config(
        r#"
[core]
server = "127.0.0.1"
port = 1

[tls]
insecure = true

[timeouts]
connect_secs = 1
request_secs = 2
"#,
    );

    let output = hook_command()
        .arg("--config")
        .arg(config.path())
        .output()
        .expect("Failed to execute sftpgo-netauth");

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert!(json.get("status").is_none());
    assert_eq!(json["username"], "");
}

#[test]
fn test_logs_never_reach_stdout() {
    let config = write_config("[core]\nserver = \"127.0.0.1\"\nport = 1\n[tls]\ninsecure = true\n");

    let output = hook_command()
        .arg("-vvv")
        .arg("--config")
        .arg(config.path())
        .output()
        .expect("Failed to execute sftpgo-netauth");

    // Exactly one JSON line on stdout even with trace logging enabled.
    stdout_json(&output);
}

#[test]
fn test_gen_config_then_check_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let generated = hook_command()
        .args(["gen-config", "--output"])
        .arg(&path)
        .output()
        .expect("Failed to execute sftpgo-netauth");
    assert!(generated.status.success());

    let checked = hook_command()
        .arg("check-config")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute sftpgo-netauth");
    assert!(checked.status.success());
    assert!(String::from_utf8_lossy(&checked.stderr).contains("netauth.example.com:1729"));
}
