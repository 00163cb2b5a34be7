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


use tracing_subscriber::EnvFilter;

/// Create an environment filter based on verbosity level
pub fn create_env_filter(verbosity: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        // Use RUST_LOG if set (allows debugging tonic and other dependencies)
        EnvFilter::from_default_env()
    } else {
        match verbosity {
            0 => EnvFilter::new("off"),
            1 => EnvFilter::new("sftpgo_netauth=info"),
            2 => EnvFilter::new("sftpgo_netauth=debug"),
            // -vvv: Include transport logs for connection troubleshooting
            _ => EnvFilter::new("sftpgo_netauth=trace,tonic=debug,h2=info"),
        }
    }
}

/// Whether anything would be logged at this verbosity.
///
/// The hook is silent by default: SFTPGo captures the process output.
pub fn logging_enabled(verbosity: u8) -> bool {
    verbosity > 0 || std::env::var("RUST_LOG").is_ok()
}

/// Initialize logging to stderr.
///
/// Stdout carries the hook response, so log lines must never go there.
pub fn init_logging(verbosity: u8) {
    if !logging_enabled(verbosity) {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
