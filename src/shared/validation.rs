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


//! Input validation shared by the hook and the configuration layer.
//!
//! # Security
//!
//! These checks keep attacker-controlled strings from escaping the directory
//! they are joined onto and from smuggling control characters into logs.

use anyhow::Result;

/// Maximum accepted username length in bytes.
///
/// Matches the longest single path component most filesystems allow.
pub const MAX_USERNAME_LENGTH: usize = 255;

/// Validate that a username is usable as a single path component.
///
/// The hook builds the home directory by joining the username onto a base
/// directory, so the name must not be able to climb out of that base. Any
/// other character is allowed: the identity server is the authority on which
/// names exist.
///
/// # Errors
///
/// Returns an error if the username:
/// - is empty or longer than [`MAX_USERNAME_LENGTH`] bytes
/// - is `.` or `..`
/// - contains `/`, `\`, NUL or another control character
///
/// # Examples
///
/// ```
/// use sftpgo_netauth::shared::validation::validate_username;
///
/// assert!(validate_username("alice").is_ok());
/// assert!(validate_username("first.last+ops@corp").is_ok());
/// assert!(validate_username("../root").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<&str> {
    if username.is_empty() {
        anyhow::bail!("Username cannot be empty");
    }

    if username.len() > MAX_USERNAME_LENGTH {
        anyhow::bail!("Username too long (max {MAX_USERNAME_LENGTH} bytes)");
    }

    if username == "." || username == ".." {
        anyhow::bail!("Username cannot be a relative path component");
    }

    if username
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_control())
    {
        anyhow::bail!("Username contains invalid characters");
    }

    Ok(username)
}
