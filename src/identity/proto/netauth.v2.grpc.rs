/// Client for the `netauth.v2.NetAuth2` service.
pub mod net_auth2_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct NetAuth2Client<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl<T> NetAuth2Client<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }

        pub async fn auth_entity(
            &mut self,
            request: impl tonic::IntoRequest<super::super::AuthRequest>,
        ) -> std::result::Result<tonic::Response<super::super::Empty>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/netauth.v2.NetAuth2/AuthEntity");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("netauth.v2.NetAuth2", "AuthEntity"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn entity_info(
            &mut self,
            request: impl tonic::IntoRequest<super::super::EntityRequest>,
        ) -> std::result::Result<tonic::Response<super::super::ListOfEntities>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/netauth.v2.NetAuth2/EntityInfo");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("netauth.v2.NetAuth2", "EntityInfo"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn entity_groups(
            &mut self,
            request: impl tonic::IntoRequest<super::super::EntityRequest>,
        ) -> std::result::Result<tonic::Response<super::super::ListOfGroups>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/netauth.v2.NetAuth2/EntityGroups");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("netauth.v2.NetAuth2", "EntityGroups"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn entity_keys(
            &mut self,
            request: impl tonic::IntoRequest<super::super::KvRequest>,
        ) -> std::result::Result<tonic::Response<super::super::ListOfStrings>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/netauth.v2.NetAuth2/EntityKeys");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("netauth.v2.NetAuth2", "EntityKeys"));
            self.inner.unary(req, path, codec).await
        }
    }
}
