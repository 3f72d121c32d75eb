pub mod aggregator;
pub mod ethereum;
pub mod store;

pub use aggregator::PayoutAggregator;
pub use ethereum::{decode_wei_hex, EthereumService, TransactionLookup};
pub use store::{MySqlPayoutStore, PayoutStore};
