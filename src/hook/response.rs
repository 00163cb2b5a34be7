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


//! The JSON document SFTPGo expects from an external authentication hook.
//!
//! A denial is the zero value of the document; SFTPGo treats a missing or
//! zero `status` as "login refused".

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::gate::{Decision, UserProfile};

/// Subset of the SFTPGo user object returned by the hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    /// 1 to allow the login; omitted on denial.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status: i32,

    pub username: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub home_dir: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub uid: i64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub gid: i64,

    /// Virtual path to allowed operations. `null` on denial.
    #[serde(default)]
    pub permissions: Option<BTreeMap<String, Vec<String>>>,

    #[serde(default)]
    pub filters: UserFilters,
}

/// Per-user login restrictions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denied_login_methods: Vec<String>,
}

/// Status value that tells SFTPGo to allow the login.
pub const STATUS_ALLOW: i32 = 1;

impl HookResponse {
    /// The denial document.
    pub fn deny() -> Self {
        Self::default()
    }

    /// The document for an allowed login.
    pub fn allow(profile: &UserProfile) -> Self {
        Self {
            status: STATUS_ALLOW,
            username: profile.username.clone(),
            home_dir: profile.home_dir.to_string_lossy().into_owned(),
            uid: profile.uid,
            gid: 0,
            permissions: Some(profile.permissions.clone()),
            filters: UserFilters::default(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.status == STATUS_ALLOW
    }

    /// Serialize as a single line of JSON.
    pub fn to_json(&self) -> String {
        // Plain strings, integers and maps cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Write the document followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", self.to_json())?;
        writer.flush()
    }
}

impl From<&Decision> for HookResponse {
    fn from(decision: &Decision) -> Self {
        match decision {
            Decision::Allow(profile) => Self::allow(profile),
            Decision::Deny(_) => Self::deny(),
        }
    }
}

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_deny_document() {
        assert_eq!(
            HookResponse::deny().to_json(),
            r#"{"username":"","permissions":null,"filters":{}}"#
        );
    }

    #[test]
    fn test_allow_document() {
        let profile = UserProfile::new("alice", 1001, Path::new("/srv/sftp"));
        let response = HookResponse::allow(&profile);

        assert!(response.is_allowed());
        assert_eq!(
            response.to_json(),
            r#"{"status":1,"username":"alice","home_dir":"/srv/sftp/alice","uid":1001,"permissions":{"/":["*"]},"filters":{}}"#
        );
    }

    #[test]
    fn test_denied_login_methods_serialized_when_set() {
        let mut response = HookResponse::deny();
        response.filters.denied_login_methods = vec!["password".to_string()];
        assert!(response
            .to_json()
            .contains(r#""filters":{"denied_login_methods":["password"]}"#));
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut out = Vec::new();
        HookResponse::deny().write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_deny_parses_without_status() {
        let parsed: HookResponse = serde_json::from_str(&HookResponse::deny().to_json()).unwrap();
        assert!(!parsed.is_allowed());
        assert_eq!(parsed.status, 0);
    }
}
