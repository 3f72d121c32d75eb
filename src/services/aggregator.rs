use crate::{
    error::PayoutError,
    models::{PayoutSummary, PAYOUT_RATE},
    services::{decode_wei_hex, PayoutStore, TransactionLookup},
};
use std::sync::Arc;

/// Computes affiliate payouts from stored transactions and their on-chain value.
pub struct PayoutAggregator {
    store: Arc<dyn PayoutStore>,
    lookup: Arc<dyn TransactionLookup>,
}

impl PayoutAggregator {
    pub fn new(store: Arc<dyn PayoutStore>, lookup: Arc<dyn TransactionLookup>) -> Self {
        Self { store, lookup }
    }

    /// Sums the value of every `canpay` transaction for the wallet and applies
    /// [`PAYOUT_RATE`].
    ///
    /// A storage failure fails the whole computation. Lookups are made one at
    /// a time in storage order; a lookup that fails or yields no decodable
    /// value is logged and contributes nothing.
    pub async fn payable_amount(&self, wallet_address: &str) -> Result<PayoutSummary, PayoutError> {
        if wallet_address.is_empty() {
            return Err(PayoutError::MissingWalletAddress);
        }

        let tx_hashes = self.store.eligible_tx_hashes(wallet_address).await?;

        let mut total_eth = 0.0;
        let mut resolved = 0;

        for tx_hash in &tx_hashes {
            match self.resolve_value(tx_hash).await {
                Ok(Some(eth)) => {
                    total_eth += eth;
                    resolved += 1;
                }
                Ok(None) => tracing::warn!("Transaction {} has no value, skipping", tx_hash),
                Err(e) => tracing::warn!("Error fetching transaction {}: {}", tx_hash, e),
            }
        }

        let payout = total_eth * PAYOUT_RATE;

        tracing::info!(
            "Total ETH: {}, Payout (40%): {} ({}/{} transactions resolved)",
            total_eth,
            payout,
            resolved,
            tx_hashes.len()
        );

        Ok(PayoutSummary {
            wallet_address: wallet_address.to_string(),
            eligible_transactions: tx_hashes.len(),
            resolved_transactions: resolved,
            total_eth,
            payout,
        })
    }

    async fn resolve_value(&self, tx_hash: &str) -> Result<Option<f64>, PayoutError> {
        match self.lookup.transaction_value(tx_hash).await? {
            Some(hex) => decode_wei_hex(&hex).map(Some),
            None => Ok(None),
        }
    }
}
