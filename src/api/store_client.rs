use crate::api::gateway::Gateway;
use crate::error::GatewayError;
use crate::store::{
    BatchReadRequest, BatchWriteRequest, CreateTableResult, Empty, ReadResult, ReadResults, TableNames, TableSnapshot,
    VersionedValue, WriteResult, WriteResults,
};
use crate::types::Argument;
use bytes::Bytes;
use prost::Message;
use std::collections::{HashMap, HashSet};
use std::convert::TryFrom;
use tokio::time::Duration;

/// StoreClient exposes the store's table operations. Each one is a single submit to the current
/// leader; failures come back exactly as the gateway reports them, and nothing is retried.
#[derive(Clone)]
pub struct StoreClient {
    gateway: Gateway,
}

impl StoreClient {
    pub fn new(gateway: Gateway) -> Self {
        StoreClient { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Returns false if the table already exists.
    pub async fn create_table(&self, table_name: &str) -> Result<bool, GatewayError> {
        let result: CreateTableResult = self
            .gateway
            .submit("createTable", vec![Argument::from(table_name)])
            .await?;
        Ok(result.created)
    }

    /// Like `create_table()`, with entries expiring `ttl` after their last write. A `ttl` beyond
    /// `i64::MAX` milliseconds is sent as `i64::MAX`.
    pub async fn create_table_with_ttl(&self, table_name: &str, ttl: Duration) -> Result<bool, GatewayError> {
        let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let result: CreateTableResult = self
            .gateway
            .submit(
                "createTable",
                vec![Argument::from(table_name), Argument::Integer(ttl_millis)],
            )
            .await?;
        Ok(result.created)
    }

    pub async fn drop_table(&self, table_name: &str) -> Result<(), GatewayError> {
        let _: Empty = self.gateway.submit("dropTable", vec![Argument::from(table_name)]).await?;
        Ok(())
    }

    pub async fn drop_all_tables(&self) -> Result<(), GatewayError> {
        let _: Empty = self.gateway.submit("dropAllTables", Vec::new()).await?;
        Ok(())
    }

    pub async fn list_tables(&self) -> Result<HashSet<String>, GatewayError> {
        let result: TableNames = self.gateway.submit("listTables", Vec::new()).await?;
        Ok(result.names.into_iter().collect())
    }

    /// Results are in the same order as the requests in `batch_request`.
    pub async fn batch_read(&self, batch_request: &BatchReadRequest) -> Result<Vec<ReadResult>, GatewayError> {
        let result: ReadResults = self.gateway.submit("read", vec![encode_argument(batch_request)]).await?;
        Ok(result.results)
    }

    /// Results are in the same order as the requests in `batch_request`.
    pub async fn batch_write(&self, batch_request: &BatchWriteRequest) -> Result<Vec<WriteResult>, GatewayError> {
        let result: WriteResults = self.gateway.submit("write", vec![encode_argument(batch_request)]).await?;
        Ok(result.results)
    }

    pub async fn get_all(&self, table_name: &str) -> Result<HashMap<String, VersionedValue>, GatewayError> {
        let result: TableSnapshot = self.gateway.submit("getAll", vec![Argument::from(table_name)]).await?;
        Ok(result.entries)
    }
}

fn encode_argument<M: Message>(message: &M) -> Argument {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message
        .encode(&mut buf)
        .expect("Vec<u8> grows to fit any message");
    Argument::Blob(Bytes::from(buf))
}
