#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoArgument {
    #[prost(oneof = "proto_argument::Value", tags = "1, 2, 3")]
    pub value: ::core::option::Option<proto_argument::Value>,
}
/// Nested message and enum types in `ProtoArgument`.
pub mod proto_argument {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "1")]
        Text(::prost::alloc::string::String),
        #[prost(int64, tag = "2")]
        Integer(i64),
        #[prost(bytes, tag = "3")]
        Blob(::prost::alloc::vec::Vec<u8>),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSubmitRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub operation: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub arguments: ::prost::alloc::vec::Vec<ProtoArgument>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSubmitResponse {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(oneof = "proto_submit_response::Result", tags = "2, 3")]
    pub result: ::core::option::Option<proto_submit_response::Result>,
}
/// Nested message and enum types in `ProtoSubmitResponse`.
pub mod proto_submit_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        /// Opaque encoded result, decoded by the caller.
        #[prost(bytes, tag = "2")]
        Ok(::prost::alloc::vec::Vec<u8>),
        /// Execution failure reported by the store executor.
        #[prost(string, tag = "3")]
        Error(::prost::alloc::string::String),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoMember {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// "ip:port"
    #[prost(string, tag = "2")]
    pub endpoint: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLeaderElectEvent {
    /// Unset when the election produced no leader.
    #[prost(message, optional, tag = "1")]
    pub leader: ::core::option::Option<ProtoMember>,
    #[prost(uint64, tag = "2")]
    pub term: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLeaderElectAck {
    #[prost(bool, tag = "1")]
    pub accepted: bool,
}
#[doc = r" Generated client implementations."]
pub mod store_protocol_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = " Served by the leader of the store cluster. Executes one named operation."]
    pub struct StoreProtocolClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl StoreProtocolClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> StoreProtocolClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn submit(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoSubmitRequest>,
        ) -> Result<tonic::Response<super::ProtoSubmitResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/gateway.StoreProtocol/Submit");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for StoreProtocolClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for StoreProtocolClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StoreProtocolClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod leader_notifications_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = " Served by the gateway. Cluster messaging pushes leader elections here."]
    pub struct LeaderNotificationsClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl LeaderNotificationsClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> LeaderNotificationsClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn leader_elected(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoLeaderElectEvent>,
        ) -> Result<tonic::Response<super::ProtoLeaderElectAck>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/gateway.LeaderNotifications/LeaderElected");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for LeaderNotificationsClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for LeaderNotificationsClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "LeaderNotificationsClient {{ ... }}")
        }
    }
}
#[doc = r" Generated server implementations."]
pub mod store_protocol_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with StoreProtocolServer."]
    #[async_trait]
    pub trait StoreProtocol: Send + Sync + 'static {
        async fn submit(
            &self,
            request: tonic::Request<super::ProtoSubmitRequest>,
        ) -> Result<tonic::Response<super::ProtoSubmitResponse>, tonic::Status>;
    }
    #[doc = " Served by the leader of the store cluster. Executes one named operation."]
    #[derive(Debug)]
    pub struct StoreProtocolServer<T: StoreProtocol> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: StoreProtocol> StoreProtocolServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for StoreProtocolServer<T>
    where
        T: StoreProtocol,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.StoreProtocol/Submit" => {
                    #[allow(non_camel_case_types)]
                    struct SubmitSvc<T: StoreProtocol>(pub Arc<T>);
                    impl<T: StoreProtocol> tonic::server::UnaryService<super::ProtoSubmitRequest> for SubmitSvc<T> {
                        type Response = super::ProtoSubmitResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoSubmitRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).submit(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = SubmitSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: StoreProtocol> Clone for StoreProtocolServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: StoreProtocol> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: StoreProtocol> tonic::transport::NamedService for StoreProtocolServer<T> {
        const NAME: &'static str = "gateway.StoreProtocol";
    }
}
#[doc = r" Generated server implementations."]
pub mod leader_notifications_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with LeaderNotificationsServer."]
    #[async_trait]
    pub trait LeaderNotifications: Send + Sync + 'static {
        async fn leader_elected(
            &self,
            request: tonic::Request<super::ProtoLeaderElectEvent>,
        ) -> Result<tonic::Response<super::ProtoLeaderElectAck>, tonic::Status>;
    }
    #[doc = " Served by the gateway. Cluster messaging pushes leader elections here."]
    #[derive(Debug)]
    pub struct LeaderNotificationsServer<T: LeaderNotifications> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: LeaderNotifications> LeaderNotificationsServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for LeaderNotificationsServer<T>
    where
        T: LeaderNotifications,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.LeaderNotifications/LeaderElected" => {
                    #[allow(non_camel_case_types)]
                    struct LeaderElectedSvc<T: LeaderNotifications>(pub Arc<T>);
                    impl<T: LeaderNotifications>
                        tonic::server::UnaryService<super::ProtoLeaderElectEvent>
                        for LeaderElectedSvc<T>
                    {
                        type Response = super::ProtoLeaderElectAck;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoLeaderElectEvent>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).leader_elected(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = LeaderElectedSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: LeaderNotifications> Clone for LeaderNotificationsServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: LeaderNotifications> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: LeaderNotifications> tonic::transport::NamedService for LeaderNotificationsServer<T> {
        const NAME: &'static str = "gateway.LeaderNotifications";
    }
}
