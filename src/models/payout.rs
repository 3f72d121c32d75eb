use serde::{Deserialize, Serialize};

/// Value of the `paymentstatus` column in `afilliateprogram`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    CanPay,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::CanPay => "canpay",
        }
    }
}

/// Share of the eligible transaction volume that is paid out.
pub const PAYOUT_RATE: f64 = 0.4;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResponse {
    pub wallet_address: String,
    pub total_payout: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayoutSummary {
    pub wallet_address: String,
    pub eligible_transactions: usize,
    pub resolved_transactions: usize,
    pub total_eth: f64,
    pub payout: f64,
}

impl From<PayoutSummary> for PayoutResponse {
    fn from(summary: PayoutSummary) -> Self {
        Self {
            wallet_address: summary.wallet_address,
            total_payout: summary.payout,
        }
    }
}
