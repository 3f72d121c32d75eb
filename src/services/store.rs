use crate::{config::DatabaseConfig, models::PaymentStatus};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;

const ELIGIBLE_TXHASHES_SQL: &str =
    "SELECT txhash FROM afilliateprogram WHERE paymentstatus = ? AND walletaddress = ?";

/// Read access to the affiliate payout records.
#[async_trait]
pub trait PayoutStore: Send + Sync {
    /// Transaction hashes recorded against `wallet_address` with status `canpay`,
    /// in storage order.
    async fn eligible_tx_hashes(&self, wallet_address: &str) -> Result<Vec<String>, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}

pub struct MySqlPayoutStore {
    pool: MySqlPool,
}

impl MySqlPayoutStore {
    /// Creates the pool without opening a connection; connections are
    /// established on first acquire.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_lazy_with(options);

        tracing::info!(
            "MySQL pool configured for {}:{}/{} (max {} connections)",
            config.host,
            config.port,
            config.name,
            config.max_connections
        );

        Self { pool }
    }
}

#[async_trait]
impl PayoutStore for MySqlPayoutStore {
    async fn eligible_tx_hashes(&self, wallet_address: &str) -> Result<Vec<String>, sqlx::Error> {
        let hashes = sqlx::query_scalar::<_, String>(ELIGIBLE_TXHASHES_SQL)
            .bind(PaymentStatus::CanPay.as_str())
            .bind(wallet_address)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            "Found {} payable transactions for {}",
            hashes.len(),
            wallet_address
        );

        Ok(hashes)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map(|_| ())
    }
}
