// RPC request and response messages (package `netauth.v2`).

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientInfo {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub service: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthData {
    #[prost(message, optional, tag = "1")]
    pub entity: ::core::option::Option<super::Entity>,
    #[prost(string, tag = "2")]
    pub secret: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthData>,
    #[prost(message, optional, tag = "2")]
    pub info: ::core::option::Option<ClientInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntityRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthData>,
    #[prost(message, optional, tag = "2")]
    pub entity: ::core::option::Option<super::Entity>,
    #[prost(message, optional, tag = "3")]
    pub info: ::core::option::Option<ClientInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KvRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthData>,
    #[prost(message, optional, tag = "2")]
    pub target: ::core::option::Option<super::Entity>,
    #[prost(enumeration = "Action", tag = "3")]
    pub action: i32,
    #[prost(string, tag = "4")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub value: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub info: ::core::option::Option<ClientInfo>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListOfEntities {
    #[prost(message, repeated, tag = "1")]
    pub entities: ::prost::alloc::vec::Vec<super::Entity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListOfGroups {
    #[prost(message, repeated, tag = "1")]
    pub groups: ::prost::alloc::vec::Vec<super::Group>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListOfStrings {
    #[prost(string, repeated, tag = "1")]
    pub strings: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Action {
    Add = 0,
    Drop = 1,
    Read = 2,
}

impl Action {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Drop => "DROP",
            Self::Read => "READ",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ADD" => Some(Self::Add),
            "DROP" => Some(Self::Drop),
            "READ" => Some(Self::Read),
            _ => None,
        }
    }
}
