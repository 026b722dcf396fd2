#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VersionedValue {
    #[prost(bytes = "vec", tag = "1")]
    pub value: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub version: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadRequest {
    #[prost(string, tag = "1")]
    pub table_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub key: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchReadRequest {
    #[prost(message, repeated, tag = "1")]
    pub read_requests: ::prost::alloc::vec::Vec<ReadRequest>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadResult {
    #[prost(string, tag = "1")]
    pub table_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub key: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub table_exists: bool,
    /// Unset when the key has no value.
    #[prost(message, optional, tag = "4")]
    pub value: ::core::option::Option<VersionedValue>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteRequest {
    #[prost(string, tag = "1")]
    pub table_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub key: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "3")]
    pub value: ::prost::alloc::vec::Vec<u8>,
    /// Negative means "any version".
    #[prost(int64, tag = "4")]
    pub expected_version: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchWriteRequest {
    #[prost(message, repeated, tag = "1")]
    pub write_requests: ::prost::alloc::vec::Vec<WriteRequest>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteResult {
    #[prost(bool, tag = "1")]
    pub applied: bool,
    #[prost(message, optional, tag = "2")]
    pub previous_value: ::core::option::Option<VersionedValue>,
}
// ------- Operation results --------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTableResult {
    #[prost(bool, tag = "1")]
    pub created: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TableNames {
    #[prost(string, repeated, tag = "1")]
    pub names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadResults {
    #[prost(message, repeated, tag = "1")]
    pub results: ::prost::alloc::vec::Vec<ReadResult>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteResults {
    #[prost(message, repeated, tag = "1")]
    pub results: ::prost::alloc::vec::Vec<WriteResult>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TableSnapshot {
    #[prost(map = "string, message", tag = "1")]
    pub entries: ::std::collections::HashMap<::prost::alloc::string::String, VersionedValue>,
}
