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


//! Wire types for the NetAuth v2 protocol.
//!
//! The message and client definitions are kept in-tree in the shape
//! `prost-build` and `tonic-build` would emit, so building the crate does not
//! require `protoc`. Only the fields and RPCs the hook uses are declared;
//! prost skips unknown fields when decoding.

pub mod netauth {
    include!("netauth.rs");

    pub mod v2 {
        include!("netauth.v2.rs");

        pub mod grpc {
            include!("netauth.v2.grpc.rs");
        }
    }
}

pub use netauth::v2::grpc::net_auth2_client::NetAuth2Client;
pub use netauth::v2::{
    Action, AuthData, AuthRequest, ClientInfo, Empty, EntityRequest, KvRequest, ListOfEntities,
    ListOfGroups, ListOfStrings,
};
pub use netauth::{Entity, EntityMeta, Group};
