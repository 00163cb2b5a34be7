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


//! Identity-service access for the authorization gate.
//!
//! The gate only depends on the [`IdentityService`] trait. Two
//! implementations are provided:
//!
//! - [`NetAuthClient`]: talks to a NetAuth v2 server over gRPC
//! - [`InMemoryIdentityService`]: canned data, for tests and local trials
//!
//! Every call is a single request/response round trip. Nothing is cached
//! and nothing is retried.

pub mod client;
pub mod error;
pub mod memory;
pub mod proto;
pub mod service;
pub mod types;

pub use client::NetAuthClient;
pub use error::IdentityError;
pub use memory::{InMemoryIdentityService, Lookup};
pub use service::IdentityService;
pub use types::{Entity, Group, KeyMode, KeySet, SSH_KEY_CATEGORY};
