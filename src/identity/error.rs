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


//! Errors reported by identity-service lookups.

use thiserror::Error;
use tonic::Code;

/// Failure of a single identity-service call.
///
/// Every variant is treated the same way by the authorization gate: the
/// login is denied. The code is kept so that logs can tell a missing entity
/// apart from an unreachable server.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The server answered with a non-OK status.
    #[error("identity server returned {code:?}: {message}")]
    Status { code: Code, message: String },

    /// The server answered OK but the reply carried no entity.
    #[error("identity server returned no entity for '{0}'")]
    EmptyResponse(String),
}

impl IdentityError {
    /// Create a status error with the given code and message.
    pub fn status(code: Code, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a `NOT_FOUND` status.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::status(Code::NotFound, what)
    }

    /// Shorthand for an `UNAVAILABLE` status.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::status(Code::Unavailable, message)
    }

    /// The gRPC status code this error maps to.
    pub fn code(&self) -> Code {
        match self {
            Self::Status { code, .. } => *code,
            Self::EmptyResponse(_) => Code::NotFound,
        }
    }
}

impl From<tonic::Status> for IdentityError {
    fn from(status: tonic::Status) -> Self {
        Self::Status {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}
