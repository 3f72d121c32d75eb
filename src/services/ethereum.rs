use crate::{
    error::PayoutError,
    models::{RpcRequest, RpcResponse, RpcTransaction},
};
use async_trait::async_trait;
use ethers::{types::U256, utils::format_ether};
use serde_json::json;

/// Resolves the Wei value of a transaction from a chain node.
#[async_trait]
pub trait TransactionLookup: Send + Sync {
    /// Returns the raw hex `value` of the transaction, or `None` when the node
    /// does not know the transaction or reports no value.
    async fn transaction_value(&self, tx_hash: &str) -> Result<Option<String>, PayoutError>;
}

/// Plain JSON-RPC client; stored hashes are forwarded to the node unparsed.
pub struct EthereumService {
    rpc_url: String,
    client: reqwest::Client,
}

impl EthereumService {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_url: rpc_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_transaction_by_hash(
        &self,
        tx_hash: &str,
    ) -> Result<Option<RpcTransaction>, PayoutError> {
        let request = RpcRequest::new("eth_getTransactionByHash", json!([tx_hash]));

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PayoutError::Rpc(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PayoutError::Rpc(format!("HTTP {}", status)));
        }

        let body: RpcResponse<RpcTransaction> = response
            .json()
            .await
            .map_err(|e| PayoutError::Rpc(format!("Malformed response: {}", e)))?;

        if let Some(err) = body.error {
            return Err(PayoutError::Rpc(format!("{} (code {})", err.message, err.code)));
        }

        Ok(body.result)
    }
}

#[async_trait]
impl TransactionLookup for EthereumService {
    async fn transaction_value(&self, tx_hash: &str) -> Result<Option<String>, PayoutError> {
        let tx = self.get_transaction_by_hash(tx_hash).await?;
        Ok(tx.and_then(|tx| tx.value))
    }
}

/// Decodes a `0x`-prefixed Wei amount into whole units (Wei / 10^18).
pub fn decode_wei_hex(value: &str) -> Result<f64, PayoutError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if digits.is_empty() {
        return Err(PayoutError::InvalidValue(value.to_string()));
    }

    let wei = U256::from_str_radix(digits, 16)
        .map_err(|e| PayoutError::InvalidValue(format!("{}: {:?}", value, e)))?;

    format_ether(wei)
        .parse::<f64>()
        .map_err(|e| PayoutError::InvalidValue(format!("{}: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

    #[test]
    fn decodes_ten_ether() {
        assert_eq!(decode_wei_hex("0x8ac7230489e80000").unwrap(), 10.0);
    }

    #[test]
    fn decodes_zero_and_fractions() {
        assert_eq!(decode_wei_hex("0x0").unwrap(), 0.0);
        // 0.5 ether
        assert_eq!(decode_wei_hex("0x6f05b59d3b20000").unwrap(), 0.5);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(decode_wei_hex("0x").is_err());
        assert!(decode_wei_hex("0xnothex").is_err());
        assert!(decode_wei_hex("").is_err());
    }

    #[tokio::test]
    async fn sends_get_transaction_by_hash_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "jsonrpc": "2.0",
                "method": "eth_getTransactionByHash",
                "params": [TX_HASH],
                "id": 1
            })))
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":{"hash":"0x5c","value":"0x8ac7230489e80000"}}"#)
            .create_async()
            .await;

        let service = EthereumService::new(&server.url());
        let value = service.transaction_value(TX_HASH).await.unwrap();

        assert_eq!(value.as_deref(), Some("0x8ac7230489e80000"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_transaction_has_no_value() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":null}"#)
            .create_async()
            .await;

        let service = EthereumService::new(&server.url());

        assert_eq!(service.transaction_value(TX_HASH).await.unwrap(), None);
    }

    #[tokio::test]
    async fn rpc_error_member_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid argument"}}"#)
            .create_async()
            .await;

        let service = EthereumService::new(&server.url());
        let err = service.transaction_value(TX_HASH).await.unwrap_err();

        assert!(matches!(err, PayoutError::Rpc(msg) if msg.contains("invalid argument")));
    }

    #[tokio::test]
    async fn http_failure_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .create_async()
            .await;

        let service = EthereumService::new(&server.url());

        assert!(service.transaction_value(TX_HASH).await.is_err());
    }
}
