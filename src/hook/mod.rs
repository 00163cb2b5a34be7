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


//! SFTPGo external authentication hook.
//!
//! # Flow
//!
//! 1. [`Credentials::from_env`] reads the login attempt
//! 2. [`authorize`] runs the checks against an identity service
//! 3. [`HookResponse`] turns the [`Decision`] into the JSON SFTPGo reads

pub mod gate;
pub mod input;
pub mod response;

pub use gate::{authorize, Decision, DenyReason, UserProfile};
pub use input::{Credential, Credentials, InputError};
pub use response::{HookResponse, UserFilters};
