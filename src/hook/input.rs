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


//! Login parameters passed to the hook by SFTPGo.
//!
//! SFTPGo runs the hook once per authentication attempt and hands over the
//! attempt through environment variables. They are read once, at startup,
//! into an immutable [`Credentials`] value.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use zeroize::Zeroizing;

/// Login name.
pub const ENV_USERNAME: &str = "SFTPGO_AUTHD_USERNAME";
/// Password, set for password logins.
pub const ENV_PASSWORD: &str = "SFTPGO_AUTHD_PASSWORD";
/// Public key in authorized_keys format, set for public key logins.
pub const ENV_PUBLIC_KEY: &str = "SFTPGO_AUTHD_PUBLIC_KEY";
/// Group the entity must belong to.
pub const ENV_REQUIRE_GROUP: &str = "SFTPGO_NETAUTH_REQUIREGROUP";
/// Base directory under which home directories are created.
pub const ENV_HOME_BASE: &str = "SFTPGO_NETAUTH_HOMEDIR";

/// Error reading the login parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("environment variable {name} is not valid UTF-8")]
    NotUnicode { name: &'static str },
}

/// The single credential checked in one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential<'a> {
    PublicKey(&'a str),
    Password(&'a str),
}

impl Credential<'_> {
    pub fn method(&self) -> &'static str {
        match self {
            Credential::PublicKey(_) => "publickey",
            Credential::Password(_) => "password",
        }
    }
}

/// Parameters of one login attempt.
///
/// Empty values are treated as absent.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    password: Option<Zeroizing<String>>,
    public_key: Option<String>,
    required_group: Option<String>,
    home_base: PathBuf,
}

impl Credentials {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = non_empty(password.into()).map(Zeroizing::new);
        self
    }

    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = non_empty(key.into());
        self
    }

    pub fn with_required_group(mut self, group: impl Into<String>) -> Self {
        self.required_group = non_empty(group.into());
        self
    }

    pub fn with_home_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.home_base = base.into();
        self
    }

    /// Read the login parameters from the process environment.
    pub fn from_env() -> Result<Self, InputError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Read the login parameters through `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InputError>
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        let read = |name: &'static str| -> Result<String, InputError> {
            match lookup(name) {
                Some(value) => value
                    .into_string()
                    .map_err(|_| InputError::NotUnicode { name }),
                None => Ok(String::new()),
            }
        };

        let credentials = Self::new(read(ENV_USERNAME)?)
            .with_password(read(ENV_PASSWORD)?)
            .with_public_key(read(ENV_PUBLIC_KEY)?)
            .with_required_group(read(ENV_REQUIRE_GROUP)?);

        // The home base is only joined onto, so any OS string is acceptable.
        let home_base = lookup(ENV_HOME_BASE).map(PathBuf::from).unwrap_or_default();

        Ok(credentials.with_home_base(home_base))
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.as_str())
    }

    pub fn required_group(&self) -> Option<&str> {
        self.required_group.as_deref()
    }

    pub fn home_base(&self) -> &std::path::Path {
        &self.home_base
    }

    /// The credential to verify: the public key when one was presented,
    /// otherwise the password (possibly empty).
    pub fn credential(&self) -> Credential<'_> {
        match self.public_key() {
            Some(key) => Credential::PublicKey(key),
            None => Credential::Password(self.password().unwrap_or("")),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .field("required_group", &self.required_group)
            .field("home_base", &self.home_base)
            .finish()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let credentials = Credentials::from_lookup(lookup_from(&[
            (ENV_USERNAME, "alice"),
            (ENV_PASSWORD, "hunter2"),
            (ENV_REQUIRE_GROUP, "sftp"),
            (ENV_HOME_BASE, "/srv/sftp"),
        ]))
        .unwrap();

        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password(), Some("hunter2"));
        assert_eq!(credentials.public_key(), None);
        assert_eq!(credentials.required_group(), Some("sftp"));
        assert_eq!(credentials.home_base(), std::path::Path::new("/srv/sftp"));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let credentials = Credentials::from_lookup(lookup_from(&[
            (ENV_USERNAME, "alice"),
            (ENV_PASSWORD, ""),
            (ENV_PUBLIC_KEY, ""),
            (ENV_REQUIRE_GROUP, ""),
        ]))
        .unwrap();

        assert_eq!(credentials.password(), None);
        assert_eq!(credentials.public_key(), None);
        assert_eq!(credentials.required_group(), None);
        assert_eq!(credentials.credential(), Credential::Password(""));
    }

    #[test]
    fn test_public_key_takes_precedence() {
        let credentials = Credentials::new("alice")
            .with_password("hunter2")
            .with_public_key("ssh-ed25519 AAAA");

        assert_eq!(
            credentials.credential(),
            Credential::PublicKey("ssh-ed25519 AAAA")
        );
        assert_eq!(credentials.credential().method(), "publickey");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let result = Credentials::from_lookup(|name| {
            (name == ENV_USERNAME).then(|| OsString::from_vec(vec![0x61, 0xff]))
        });
        assert_eq!(
            result.unwrap_err(),
            InputError::NotUnicode { name: ENV_USERNAME }
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice").with_password("hunter2");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
