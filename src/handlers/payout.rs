use crate::{
    error::PayoutError,
    handlers::AppState,
    models::{PayoutRequest, PayoutResponse},
};
use axum::{extract::State, Json};
use tracing::Instrument;
use uuid::Uuid;

pub async fn get_payable_amount(
    State(state): State<AppState>,
    body: Option<Json<PayoutRequest>>,
) -> Result<Json<PayoutResponse>, PayoutError> {
    let wallet_address = body
        .and_then(|Json(req)| req.wallet_address)
        .filter(|addr| !addr.is_empty())
        .ok_or(PayoutError::MissingWalletAddress)?;

    let span = tracing::info_span!(
        "payable_amount",
        request_id = %Uuid::new_v4(),
        wallet = %wallet_address
    );

    let summary = state
        .aggregator
        .payable_amount(&wallet_address)
        .instrument(span)
        .await?;

    Ok(Json(summary.into()))
}
