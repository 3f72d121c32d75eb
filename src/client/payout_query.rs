use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let base_url = std::env::var("PAYOUT_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let wallet_address = std::env::args()
        .nth(1)
        .context("usage: payout-query <wallet-address>")?;

    let url = format!("{}/getPayableAmount", base_url.trim_end_matches('/'));
    tracing::debug!("Requesting payout for {} from {}", wallet_address, url);

    let response = Client::new()
        .post(&url)
        .json(&json!({ "walletAddress": wallet_address }))
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    let status = response.status();
    let body: Value = response.json().await.context("Invalid JSON response")?;

    if !status.is_success() {
        bail!("Request failed ({}): {}", status, body);
    }

    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
