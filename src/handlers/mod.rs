pub mod health;
pub mod payout;

pub use health::*;
pub use payout::*;

use crate::services::{PayoutAggregator, PayoutStore};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<PayoutAggregator>,
    pub store: Arc<dyn PayoutStore>,
    pub started_at: Instant,
}
